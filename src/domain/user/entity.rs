//! User entity and related types

use serde::{Deserialize, Serialize};

/// User identifier - an integer, unique within a registry when the registry
/// is converted to an id-keyed map
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    /// Create a new UserId
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the inner integer value
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl From<i64> for UserId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<UserId> for i64 {
    fn from(id: UserId) -> Self {
        id.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Immutable user record
///
/// Equality is by value over all fields, including the plaintext password.
/// The password is plaintext by design (no hashing in this component) and is
/// never exposed through serialization or `Debug` output.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    id: UserId,
    /// Username for login
    username: String,
    /// Plaintext password - never exposed in serialization
    #[serde(skip_serializing)]
    password: String,
}

impl User {
    /// Create a new user
    pub fn new(id: UserId, username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            password: password.into(),
        }
    }

    // Getters

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    /// Check whether the given credentials match this user exactly
    /// (case-sensitive equality on both fields)
    pub fn matches_credentials(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}

impl std::fmt::Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl std::fmt::Display for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "User({}, {})", self.id, self.username)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_user(id: i64, username: &str, password: &str) -> User {
        User::new(UserId::new(id), username, password)
    }

    #[test]
    fn test_user_id_value() {
        let id = UserId::new(42);
        assert_eq!(id.as_i64(), 42);
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn test_user_id_conversions() {
        let id = UserId::from(7);
        assert_eq!(i64::from(id), 7);
    }

    #[test]
    fn test_user_creation() {
        let user = create_test_user(1, "Ivan", "123");

        assert_eq!(user.id(), UserId::new(1));
        assert_eq!(user.username(), "Ivan");
        assert_eq!(user.password(), "123");
    }

    #[test]
    fn test_user_equality_by_value() {
        let a = create_test_user(1, "Ivan", "123");
        let b = create_test_user(1, "Ivan", "123");
        let c = create_test_user(1, "Ivan", "different");

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_matches_credentials_is_case_sensitive() {
        let user = create_test_user(1, "Ivan", "123");

        assert!(user.matches_credentials("Ivan", "123"));
        assert!(!user.matches_credentials("ivan", "123"));
        assert!(!user.matches_credentials("Ivan", "1234"));
    }

    #[test]
    fn test_user_serialization_excludes_password() {
        let user = create_test_user(1, "Ivan", "secret-123");

        let json = serde_json::to_string(&user).unwrap();
        assert!(json.contains("Ivan"));
        assert!(!json.contains("secret-123"));
        assert!(!json.contains("password"));
    }

    #[test]
    fn test_user_debug_redacts_password() {
        let user = create_test_user(1, "Ivan", "secret-123");

        let debug = format!("{:?}", user);
        assert!(debug.contains("Ivan"));
        assert!(debug.contains("<redacted>"));
        assert!(!debug.contains("secret-123"));
    }

    #[test]
    fn test_user_display() {
        let user = create_test_user(2, "Petr", "111");
        assert_eq!(user.to_string(), "User(2, Petr)");
    }
}
