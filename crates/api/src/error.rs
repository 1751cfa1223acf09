use thiserror::Error;

/// Errors surfaced to the caller of the booking and health alert entry points.
/// Scheduling failures never end up here, they are logged instead.
#[derive(Error, Debug, PartialEq)]
pub enum ReminderError {
    #[error("Internal error")]
    InternalError,
    #[error("Invalid data provided: Error message: `{0}`")]
    BadClientData(String),
    #[error("Not found. Error message: `{0}`")]
    NotFound(String),
}
