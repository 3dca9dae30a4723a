pub mod submission_outcome;
pub mod supplier;
