use crate::form::controller::FormController;
use crate::web::frontend::form_sessions::FormSessions;
use rocket::State;
use rocket::http::Cookie;
use rocket::outcome::{Outcome, try_outcome};
use rocket::request::{self, FromRequest, Request};

pub const SESSION_COOKIE: &str = "Attain-Session";

/// Every visitor works on their own form, found through the `Attain-Session` private cookie.
/// A visitor without a known session is given a new empty form and the cookie that goes with it.
#[rocket::async_trait]
impl<'r> FromRequest<'r> for FormController {
    type Error = ();

    async fn from_request(req: &'r Request<'_>) -> request::Outcome<Self, Self::Error> {
        let form_sessions = try_outcome!(req.guard::<&State<FormSessions>>().await);
        let cookies = req.cookies();

        let known_controller = cookies
            .get_private(SESSION_COOKIE)
            .and_then(|cookie| form_sessions.find(cookie.value()));
        let controller = match known_controller {
            Some(controller) => controller,
            None => {
                let (session_id, controller) = form_sessions.open();
                cookies.add_private(Cookie::new(SESSION_COOKIE, session_id));
                controller
            }
        };

        Outcome::Success(controller)
    }
}
