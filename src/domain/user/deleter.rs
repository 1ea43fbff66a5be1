//! Data-access collaborator trait for user deletion

use super::entity::UserId;

#[cfg(test)]
use mockall::automock;

/// External collaborator that performs the actual deletion of a user
///
/// The registry has no knowledge of the implementation behind this trait
/// (database, remote call, or stub) and performs no compensating action when
/// deletion fails. One synchronous call, no retry policy.
#[cfg_attr(test, automock)]
pub trait UserDeleter: Send + Sync {
    /// Delete the user with the given id, reporting whether anything was
    /// actually deleted
    fn delete(&self, id: UserId) -> bool;
}
