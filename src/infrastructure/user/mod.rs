//! User infrastructure module
//!
//! This module provides the in-memory user registry service built on the
//! domain entities and the deleter collaborator trait.

mod registry;

pub use registry::UserRegistry;
