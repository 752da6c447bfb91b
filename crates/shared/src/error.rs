use thiserror::Error;

use crate::domain::SelectionAction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    Validation,
    Format,
    NoSelection,
}

/// Rejected form or row action. The display text is what the user sees.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    #[error("Please fill all fields.")]
    Validation,
    #[error("Age must be a number.")]
    Format,
    #[error("Select a student to {action}.")]
    NoSelection { action: SelectionAction },
}

impl RosterError {
    pub fn code(&self) -> ErrorCode {
        match self {
            RosterError::Validation => ErrorCode::Validation,
            RosterError::Format => ErrorCode::Format,
            RosterError::NoSelection { .. } => ErrorCode::NoSelection,
        }
    }
}
