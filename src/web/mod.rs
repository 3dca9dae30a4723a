use crate::error::Result;
use crate::web::server::build_server;
use rocket::{Build, Rocket};

pub mod error;
mod frontend;
mod server;

pub fn start_servers() -> Result<Rocket<Build>> {
    build_server()
}
