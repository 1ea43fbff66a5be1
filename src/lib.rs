//! User Registry
//!
//! An in-memory, insertion-ordered registry of user records with support for:
//! - Appending users and enumerating them in insertion order
//! - Credential lookup (plaintext comparison, first match wins)
//! - Indexing users by id
//! - Deletion delegated to an injected data-access collaborator

pub mod domain;
pub mod infrastructure;

pub use domain::user::{User, UserDeleter, UserId};
pub use domain::RegistryError;
pub use infrastructure::user::UserRegistry;
