use thiserror::Error;

use super::user::UserId;

/// Core registry errors
///
/// Both variants are programming-contract violations surfaced directly to the
/// caller; the registry never retries or recovers internally.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("Duplicate user id: {id}")]
    DuplicateId { id: UserId },
}

impl RegistryError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    pub fn duplicate_id(id: UserId) -> Self {
        Self::DuplicateId { id }
    }
}
