//! Domain layer - Core entities and traits

pub mod error;
pub mod user;

pub use error::RegistryError;
pub use user::{User, UserDeleter, UserId};
