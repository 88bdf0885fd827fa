//! User model

use serde::{Deserialize, Serialize};

/// Current user as returned by the auth endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub username: String,
    pub email: String,
    /// Recorded submissions; only the count is used client-side
    #[serde(default)]
    pub submissions: Vec<serde_json::Value>,
}

/// Identity exposed by the session provider
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionUser {
    pub name: Option<String>,
    pub photo_url: Option<String>,
}

impl SessionUser {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            photo_url: None,
        }
    }
}
