use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An account known to the client.
///
/// Passwords are stored and compared in plaintext. Real credential handling
/// is an explicit non-goal of this system; do not reuse this type where
/// security matters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    pub password: String,
    pub is_admin: bool,
}

impl User {
    /// Build a regular (non-admin) account with a fresh id.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            username: username.into(),
            password: password.into(),
            is_admin: false,
        }
    }
}
