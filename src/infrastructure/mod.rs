//! Infrastructure layer - Service implementations over the domain

pub mod user;

pub use user::UserRegistry;
