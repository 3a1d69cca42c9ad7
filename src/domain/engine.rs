//! Search engine model and the source a submitted query is routed through.

use serde::{Deserialize, Serialize};

/// A search engine a query can be submitted to.
///
/// Engines are owned by the host's engine registry; the search screen only
/// carries them around and hands them back to the browser on submit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SearchEngine {
    /// Stable registry identifier, e.g. `"ddg"`.
    pub id: String,
    /// Display name, e.g. `"DuckDuckGo"`.
    pub name: String,
    /// Whether the user added this engine themselves.
    #[serde(default)]
    pub is_custom: bool,
}

impl SearchEngine {
    /// Creates a bundled (non-custom) engine.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            is_custom: false,
        }
    }

    /// Creates a user-added engine.
    #[must_use]
    pub fn custom(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            is_custom: true,
            ..Self::new(id, name)
        }
    }
}

/// Which engine or scope a submitted query is routed through.
///
/// `History` and `Bookmarks` scope the suggestions to local data and carry no
/// engine; the browser falls back to its own default when they are submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "engine", rename_all = "snake_case")]
pub enum SearchEngineSource {
    /// The user's default engine.
    Default(SearchEngine),
    /// An engine picked from the shortcut list for this one query.
    Shortcut(SearchEngine),
    /// Search restricted to browsing history.
    History,
    /// Search restricted to bookmarks.
    Bookmarks,
}

impl SearchEngineSource {
    /// Returns the engine behind this source, if it has one.
    #[must_use]
    pub const fn engine(&self) -> Option<&SearchEngine> {
        match self {
            Self::Default(engine) | Self::Shortcut(engine) => Some(engine),
            Self::History | Self::Bookmarks => None,
        }
    }

    /// Short label used as a tracing field and metric tag.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Default(_) => "default",
            Self::Shortcut(_) => "shortcut",
            Self::History => "history",
            Self::Bookmarks => "bookmarks",
        }
    }
}
