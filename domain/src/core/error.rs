//! Domain error types

use crate::session::status::SessionStatus;
use thiserror::Error;

/// A required consultation field is missing or malformed.
///
/// Raised before any network activity; the user is simply re-prompted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("Invalid visit date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),
}

impl ValidationError {
    /// Name of the offending form field.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::MissingField(field) => field,
            ValidationError::InvalidDate(_) => "visit date",
        }
    }
}

/// A session state machine was asked to leave a terminal state.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionError {
    #[error("Session already finished ({0})")]
    AlreadyTerminal(SessionStatus),
}
