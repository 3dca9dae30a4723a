use crate::config::FormConfig;
use crate::form::component::FormComponent;
use crate::form::csv_file::CsvFile;
use crate::form::view::FormView;
use crate::submission;
use crate::submission::error::SubmissionError;
use dto::submission_outcome::SubmissionOutcome;
use reqwest::Client;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Handle onto the form component of one visitor.
///
/// Every change goes through the component lock, so user actions, responses and timers
/// are applied one after the other. The lock is never held while waiting on the backend.
#[derive(Clone)]
pub struct FormController {
    component: Arc<Mutex<FormComponent>>,
    config: Arc<FormConfig>,
    client: Client,
}

impl FormController {
    pub fn new(config: Arc<FormConfig>, client: Client) -> Self {
        Self {
            component: Arc::new(Mutex::new(FormComponent::default())),
            config,
            client,
        }
    }

    pub fn view(&self) -> FormView {
        FormView::new(&self.lock(), &self.config)
    }

    pub fn set_credentials(&self, email: String, username: String, password: String) {
        let mut component = self.lock();
        let fields = component.fields_mut();
        fields.set_email(email);
        fields.set_username(username);
        fields.set_password(password);
    }

    pub fn select_supplier(&self, supplier: String) {
        self.lock()
            .fields_mut()
            .set_supplier(supplier, self.config.catalog());
    }

    pub fn select_file(&self, file: Option<CsvFile>) {
        self.lock().fields_mut().set_file(file);
    }

    pub fn clear_file(&self) {
        self.lock().fields_mut().clear_file();
    }

    pub fn dismiss_notification(&self) -> bool {
        self.lock().dismiss_notification()
    }

    /// Send the current form to the backend, then display the outcome.
    ///
    /// The request and its handling run in their own task: the form is settled even when
    /// the caller stops waiting. A submission made while another one is in flight is refused.
    pub async fn submit(&self) -> Result<SubmissionOutcome, SubmissionError> {
        let snapshot = self.lock().begin_submission()?;

        let controller = self.clone();
        let task = rocket::tokio::spawn(async move {
            let outcome =
                submission::submit(&controller.client, controller.config.base_url(), snapshot)
                    .await;
            controller.settle(outcome);
            outcome
        });

        match task.await {
            Ok(outcome) => Ok(outcome),
            Err(error) => {
                log::error!("Submission task has been interrupted: {error:#?}");
                let outcome = SubmissionOutcome::NetworkFailure;
                self.settle(outcome);
                Ok(outcome)
            }
        }
    }

    fn settle(&self, outcome: SubmissionOutcome) {
        let mut component = self.lock();
        let generation = component.finish_submission(outcome);

        let weak_component = Arc::downgrade(&self.component);
        component
            .timer_mut()
            .schedule(*self.config.notification_delay(), move || {
                if let Some(component) = weak_component.upgrade() {
                    if lock(&component).expire_notification(generation) {
                        log::debug!("Notification {generation} hidden after delay.");
                    }
                }
            });
    }

    fn lock(&self) -> MutexGuard<'_, FormComponent> {
        lock(&self.component)
    }
}

/// A panic while holding the lock leaves a state that is still consistent field by field,
/// so the form is kept usable rather than poisoned forever.
fn lock(component: &Mutex<FormComponent>) -> MutexGuard<'_, FormComponent> {
    component.lock().unwrap_or_else(PoisonError::into_inner)
}
