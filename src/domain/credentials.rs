//! Identifier and bearer token issued at registration.
//!
//! Both halves are independent UUID v4 values in hyphenated form. The
//! `uuid` is public; the `token` is shown to the caller once and then only
//! ever compared for equality.

use std::fmt;

/// Freshly generated identity for a new user.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Public user identifier.
    pub uuid: String,
    /// Secret bearer token.
    pub token: String,
}

impl Credentials {
    /// Generates a new random identifier/token pair.
    #[must_use]
    pub fn generate() -> Self {
        Self {
            uuid: uuid::Uuid::new_v4().hyphenated().to_string(),
            token: uuid::Uuid::new_v4().hyphenated().to_string(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("uuid", &self.uuid)
            .field("token", &"<redacted>")
            .finish()
    }
}
