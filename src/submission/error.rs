use thiserror::Error;

#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("A submission is already in flight.")]
    AlreadyInFlight,
    #[error("The backend refused the submission [status: {0}]")]
    Rejected(u16),
    #[error("The submission couldn't reach the backend.")]
    Transport(#[from] reqwest::Error),
}
