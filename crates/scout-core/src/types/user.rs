//! Logged-in user identity.

use serde::{Deserialize, Serialize};

/// The identity the header needs to render its user menu.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserIdentity {
    /// Display name.
    pub name: String,
    /// Email, when the session came from a login rather than a restore.
    pub email: Option<String>,
}

impl UserIdentity {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: None,
        }
    }

    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }
}
