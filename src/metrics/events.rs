//! Telemetry events emitted by the search controller.

use crate::domain::{SearchEngine, SearchEngineSource};
use crate::search::SearchAccessPoint;
use serde::{Deserialize, Serialize};

/// A single telemetry event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum MetricEvent {
    /// A query was submitted to a search engine.
    PerformedSearch {
        /// Where the search was launched from. Never [`SearchAccessPoint::None`].
        access_point: SearchAccessPoint,
        engine_source: SearchEngineSource,
    },

    /// The user navigated straight to an address.
    EnteredUrl {
        /// Whether the address was completed by the toolbar's autocomplete.
        autocomplete: bool,
    },

    /// An engine was picked from the shortcut list.
    SearchShortcutSelected { engine: String, is_custom: bool },
}

impl MetricEvent {
    #[must_use]
    pub fn performed_search(access_point: SearchAccessPoint, engine_source: &SearchEngineSource) -> Self {
        Self::PerformedSearch {
            access_point,
            engine_source: engine_source.clone(),
        }
    }

    #[must_use]
    pub fn shortcut_selected(engine: &SearchEngine) -> Self {
        Self::SearchShortcutSelected {
            engine: engine.name.clone(),
            is_custom: engine.is_custom,
        }
    }

    /// Event name as it appears in the serialized form.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::PerformedSearch { .. } => "performed_search",
            Self::EnteredUrl { .. } => "entered_url",
            Self::SearchShortcutSelected { .. } => "search_shortcut_selected",
        }
    }
}
