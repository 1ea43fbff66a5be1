//! User domain
//!
//! This module provides the user entity, its identifier newtype, and the
//! trait for the external data-access collaborator that performs deletion.

mod deleter;
mod entity;

pub use deleter::UserDeleter;
pub use entity::{User, UserId};

#[cfg(test)]
pub use deleter::mock::RecordingDeleter;
#[cfg(test)]
pub use deleter::MockUserDeleter;
