mod form_input;
pub mod form_sessions;
pub mod frontend_controller;
pub mod server;
mod session;
