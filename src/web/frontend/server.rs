use crate::web::frontend::form_sessions::FormSessions;
use crate::web::frontend::frontend_controller;
use rocket::{Build, Rocket};
use rocket_dyn_templates::Template;

pub struct FrontendServer {
    form_sessions: FormSessions,
}

impl FrontendServer {
    pub fn new(form_sessions: FormSessions) -> Self {
        Self { form_sessions }
    }

    pub fn configure(self, rocket_build: Rocket<Build>) -> Rocket<Build> {
        rocket_build
            .manage(self.form_sessions)
            .mount(
                "/",
                routes![
                    frontend_controller::index,
                    frontend_controller::handle_form,
                ],
            )
            .register("/", catchers![frontend_controller::not_found])
            .attach(Template::fairing())
    }
}
