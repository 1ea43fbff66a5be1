//! In-memory user registry service

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::domain::user::{User, UserDeleter, UserId};
use crate::domain::RegistryError;

/// In-memory, insertion-ordered registry of user records
///
/// The internal sequence grows monotonically through [`add`](Self::add);
/// nothing in this component removes from it. Deletion is delegated to the
/// injected [`UserDeleter`] and deliberately leaves the local sequence
/// untouched, so the visible list and the collaborator's backing store are
/// independent state.
///
/// Not thread-safe: mutation requires `&mut self`, and sharing a registry
/// across threads requires external synchronization by the caller.
#[derive(Debug)]
pub struct UserRegistry<D: UserDeleter> {
    users: Vec<User>,
    deleter: Arc<D>,
}

impl<D: UserDeleter> UserRegistry<D> {
    /// Create an empty registry with the given deleter collaborator
    pub fn new(deleter: Arc<D>) -> Self {
        Self {
            users: Vec::new(),
            deleter,
        }
    }

    /// Append the given users to the end of the sequence, preserving
    /// argument order
    ///
    /// No validation and no uniqueness check: adding the same user (or the
    /// same id) twice is permitted and both entries are kept.
    pub fn add(&mut self, users: impl IntoIterator<Item = User>) {
        let before = self.users.len();
        self.users.extend(users);
        debug!(
            added = self.users.len() - before,
            total = self.users.len(),
            "users added"
        );
    }

    /// Live view of the internal sequence, in insertion order
    ///
    /// This is not a defensive copy; re-borrowing after later `add` calls
    /// observes the new entries.
    pub fn all(&self) -> &[User] {
        &self.users
    }

    /// Number of users in the registry
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Whether the registry holds no users
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Build a fresh mapping from user id to user
    ///
    /// Fails with [`RegistryError::DuplicateId`] if two users share an id,
    /// naming the first colliding id in insertion order.
    pub fn indexed_by_id(&self) -> Result<HashMap<UserId, User>, RegistryError> {
        let mut index = HashMap::with_capacity(self.users.len());

        for user in &self.users {
            if index.insert(user.id(), user.clone()).is_some() {
                return Err(RegistryError::duplicate_id(user.id()));
            }
        }

        Ok(index)
    }

    /// Look up a user by exact credential match
    ///
    /// Either credential being absent is a contract violation and fails with
    /// [`RegistryError::InvalidArgument`]. Otherwise the sequence is scanned
    /// in insertion order and the first user whose username and password both
    /// match exactly (case-sensitive) is returned; `Ok(None)` if none match.
    ///
    /// Comparison is plaintext equality: no hashing, no rate limiting, no
    /// lockout.
    pub fn login(
        &self,
        username: Option<&str>,
        password: Option<&str>,
    ) -> Result<Option<User>, RegistryError> {
        let (Some(username), Some(password)) = (username, password) else {
            return Err(RegistryError::invalid_argument(
                "username or password is missing",
            ));
        };

        let user = self
            .users
            .iter()
            .find(|u| u.matches_credentials(username, password))
            .cloned();

        debug!(username, matched = user.is_some(), "login attempt");

        Ok(user)
    }

    /// Delete a user through the collaborator, returning its answer verbatim
    ///
    /// The local sequence is not modified; [`all`](Self::all) reports the
    /// same users before and after this call regardless of the outcome.
    pub fn delete(&self, id: UserId) -> bool {
        let deleted = self.deleter.delete(id);
        debug!(user_id = %id, deleted, "delete delegated");
        deleted
    }
}
