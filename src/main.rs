mod config;
#[cfg(feature = "demo")]
mod demo_mock_server;
mod error;
mod form;
mod notification;
mod submission;
mod tools;
mod web;

#[macro_use]
extern crate rocket;

use crate::web::start_servers;

#[launch]
async fn rocket() -> _ {
    // Loaded first, so that `RUST_LOG` can be set from the file.
    let dotenv_result = dotenvy::dotenv();
    env_logger::init();
    match dotenv_result {
        Ok(path) => log::info!("Environment loaded from {}", path.display()),
        Err(error) if error.not_found() => {}
        Err(error) => log::warn!("Can't load .env file: {error}"),
    }

    #[cfg(feature = "demo")]
    demo_mock_server::init_demo().await;

    match start_servers() {
        Ok(rocket) => rocket,
        Err(error) => {
            log::error!("{error:#?}");
            panic!("Initialization failed, aborting.");
        }
    }
}
