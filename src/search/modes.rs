//! Small enums describing where a search came from and the browsing mode it
//! runs in.
//!
//! Both are seeded once when the search screen opens and never change for the
//! lifetime of a [`SearchState`](super::SearchState).

use serde::{Deserialize, Serialize};

/// UI origin of a search, attached to performed-search metrics.
///
/// Purely a telemetry tag: no controller decision branches on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchAccessPoint {
    /// The host did not say where the search was launched from.
    #[default]
    None,
    /// A suggestion row in the awesome bar.
    Suggestion,
    /// The toolbar's regular commit action.
    Action,
    /// The home screen widget.
    Widget,
    /// A launcher shortcut.
    Shortcut,
}

impl SearchAccessPoint {
    /// Replaces [`SearchAccessPoint::None`] with `fallback`.
    ///
    /// Performed-search metrics always carry a concrete origin; which one stands
    /// in for "unknown" depends on the gesture.
    #[must_use]
    pub const fn or(self, fallback: Self) -> Self {
        match self {
            Self::None => fallback,
            other => other,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Suggestion => "suggestion",
            Self::Action => "action",
            Self::Widget => "widget",
            Self::Shortcut => "shortcut",
        }
    }
}

/// Whether the search screen was opened from normal or private browsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BrowsingMode {
    #[default]
    Normal,
    Private,
}

impl BrowsingMode {
    #[must_use]
    pub const fn is_private(self) -> bool {
        matches!(self, Self::Private)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_access_point_takes_fallback() {
        assert_eq!(
            SearchAccessPoint::None.or(SearchAccessPoint::Action),
            SearchAccessPoint::Action
        );
        assert_eq!(
            SearchAccessPoint::Widget.or(SearchAccessPoint::Action),
            SearchAccessPoint::Widget
        );
    }
}
