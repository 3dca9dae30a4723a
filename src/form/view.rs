use crate::config::FormConfig;
use crate::form::component::FormComponent;
use derive_getters::Getters;
use dto::supplier::Supplier;
use serde::Serialize;

/// What the page template needs to display the form.
#[derive(Serialize, Getters)]
pub struct FormView {
    email: String,
    username: String,
    password: String,
    file_name: String,
    supplier: String,
    supplier_description: String,
    suppliers: Vec<Supplier>,
    notification: Option<NotificationView>,
    submitting: bool,
    /// Time left before the notification hides itself.
    auto_dismiss_ms: u64,
}

#[derive(Debug, PartialEq, Serialize, Getters)]
pub struct NotificationView {
    success: bool,
    message: String,
}

impl FormView {
    pub fn new(component: &FormComponent, config: &FormConfig) -> Self {
        let fields = component.fields();
        let notification = component
            .notification()
            .outcome()
            .map(|outcome| NotificationView {
                success: outcome.is_success(),
                message: outcome.message().to_owned(),
            });

        Self {
            email: fields.email().clone(),
            username: fields.username().clone(),
            password: fields.password().clone(),
            file_name: fields.file_name().clone(),
            supplier: fields.supplier().clone(),
            supplier_description: fields.supplier_description().clone(),
            suppliers: config.catalog().suppliers().clone(),
            notification,
            submitting: component.is_submitting(),
            auto_dismiss_ms: component
                .notification()
                .remaining(*config.notification_delay())
                .map_or(0, |remaining| remaining.as_millis() as u64),
        }
    }
}
