use serde::Serialize;

pub const SUCCESS_MESSAGE: &str =
    "Your order has been submitted. You will receive an email with the completed cart to review.";
pub const FAILURE_MESSAGE: &str =
    "Your order could not be submitted. Please check your information and try again.";

/// Terminal result of one submission attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SubmissionOutcome {
    Success,
    /// The backend answered with anything but `200 OK`.
    Rejected { status: u16 },
    /// No response was received at all.
    NetworkFailure,
}

impl SubmissionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SubmissionOutcome::Success)
    }

    pub fn message(&self) -> &'static str {
        if self.is_success() {
            SUCCESS_MESSAGE
        } else {
            FAILURE_MESSAGE
        }
    }
}
