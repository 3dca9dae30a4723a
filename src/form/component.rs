use crate::form::field_state::FieldState;
use crate::form::snapshot::FormSnapshot;
use crate::notification::NotificationState;
use crate::notification::timer::AutoDismissTimer;
use crate::submission::error::SubmissionError;
use crate::submission::error::SubmissionError::AlreadyInFlight;
use dto::submission_outcome::SubmissionOutcome;

/// Everything the page displays, and the only owner of it.
#[derive(Debug, Default)]
pub struct FormComponent {
    fields: FieldState,
    notification: NotificationState,
    timer: AutoDismissTimer,
    in_flight: bool,
}

impl FormComponent {
    pub fn fields(&self) -> &FieldState {
        &self.fields
    }

    pub fn fields_mut(&mut self) -> &mut FieldState {
        &mut self.fields
    }

    pub fn notification(&self) -> &NotificationState {
        &self.notification
    }

    pub fn timer_mut(&mut self) -> &mut AutoDismissTimer {
        &mut self.timer
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight
    }

    /// Mark a submission as in flight and return what has to be sent.
    /// Only one submission may be in flight at a time.
    pub fn begin_submission(&mut self) -> Result<FormSnapshot, SubmissionError> {
        if self.in_flight {
            return Err(AlreadyInFlight);
        }
        self.in_flight = true;
        Ok(self.fields.snapshot())
    }

    /// Show the outcome and, if the submission succeeded, empty the form.
    /// Returns the generation of the shown notification.
    pub fn finish_submission(&mut self, outcome: SubmissionOutcome) -> u64 {
        self.in_flight = false;
        if outcome.is_success() {
            self.fields.reset();
        }
        self.notification.show(outcome)
    }

    pub fn dismiss_notification(&mut self) -> bool {
        self.timer.cancel();
        self.notification.dismiss()
    }

    pub fn expire_notification(&mut self, generation: u64) -> bool {
        self.notification.expire(generation)
    }
}
