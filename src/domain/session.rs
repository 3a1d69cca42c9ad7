//! References to browsing sessions (open tabs) owned by the browser.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier of an open tab.
///
/// The browser mints and validates these; the search screen never checks
/// whether a session is still alive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An existing browsing session the search screen was opened from, or one the
/// user picked from the open-tabs suggestions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub id: SessionId,
    /// URL currently loaded in the tab.
    pub url: String,
    /// Whether the tab belongs to private browsing.
    #[serde(default)]
    pub private: bool,
}

impl Session {
    #[must_use]
    pub fn new(id: impl Into<String>, url: impl Into<String>, private: bool) -> Self {
        Self {
            id: SessionId::new(id),
            url: url.into(),
            private,
        }
    }
}
