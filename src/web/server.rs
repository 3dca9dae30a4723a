use crate::config::build_form_config;
use crate::error::Result;
use crate::tools::env_args::retrieve_arg_value;
use crate::tools::web::build_client;
use crate::web::frontend::form_sessions::FormSessions;
use crate::web::frontend::server::FrontendServer;
use rocket::data::{Limits, ToByteUnit};
use rocket::{Build, Rocket};

const PORT_ENV_ARG: &str = "--port";
const DEFAULT_PORT: u16 = 8000;

pub fn build_server() -> Result<Rocket<Build>> {
    let form_config = build_form_config()?;
    let client = build_client()?;
    log::info!(
        "Orders will be sent to {} [suppliers: {:?}]",
        form_config.base_url(),
        form_config
            .catalog()
            .suppliers()
            .iter()
            .map(|supplier| supplier.id())
            .collect::<Vec<_>>()
    );

    let rocket_build = rocket::build().configure(
        rocket::Config::figment()
            .merge(("port", get_port()))
            .merge(("limits", build_limits())),
    );
    let frontend_server = FrontendServer::new(FormSessions::new(form_config, client));

    Ok(frontend_server.configure(rocket_build))
}

fn get_port() -> u16 {
    retrieve_arg_value(PORT_ENV_ARG)
        .and_then(|port| port.parse::<u16>().ok())
        .unwrap_or(DEFAULT_PORT)
}

/// Order files may be larger than Rocket's default upload limits.
fn build_limits() -> Limits {
    Limits::default()
        .limit("file", 10.mebibytes())
        .limit("data-form", 11.mebibytes())
}
