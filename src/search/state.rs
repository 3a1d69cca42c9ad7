//! Immutable snapshot of the search screen.
//!
//! A [`SearchState`] is created when the screen opens, replaced wholesale by the
//! store on every dispatched action, and dropped when the screen closes. It is
//! never edited in place: the reducer builds the next value from the previous
//! one with struct update syntax.

use super::modes::{BrowsingMode, SearchAccessPoint};
use crate::domain::{SearchEngine, SearchEngineSource, Session};
use crate::settings::SearchSettings;
use serde::{Deserialize, Serialize};

/// Ambient context the host hands over when the search screen opens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchSeed {
    /// Engine or scope queries go to until the user picks a shortcut.
    pub engine_source: SearchEngineSource,
    /// Tab the search was launched from, if any.
    pub session: Option<Session>,
    pub access_point: SearchAccessPoint,
    pub browsing_mode: BrowsingMode,
    /// Whether the host knows more than one engine to offer as a shortcut.
    pub shortcuts_available: bool,
    /// Text pasted into the toolbar before the screen opened.
    pub pasted_text: Option<String>,
}

impl SearchSeed {
    /// Seed for a fresh search with `engine` as the default and no tab context.
    #[must_use]
    pub fn new(engine: SearchEngine) -> Self {
        Self {
            engine_source: SearchEngineSource::Default(engine),
            session: None,
            access_point: SearchAccessPoint::None,
            browsing_mode: BrowsingMode::Normal,
            shortcuts_available: true,
            pasted_text: None,
        }
    }

    #[must_use]
    pub fn with_session(mut self, session: Session) -> Self {
        self.session = Some(session);
        self
    }

    #[must_use]
    pub fn with_access_point(mut self, access_point: SearchAccessPoint) -> Self {
        self.access_point = access_point;
        self
    }

    #[must_use]
    pub fn with_browsing_mode(mut self, browsing_mode: BrowsingMode) -> Self {
        self.browsing_mode = browsing_mode;
        self
    }
}

/// Snapshot of everything the search screen renders and the controller reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchState {
    /// Current toolbar text.
    pub query: String,

    /// Engine or scope a submitted query is routed through.
    pub search_engine_source: SearchEngineSource,

    /// The user's default engine, restored when they pick a new default.
    pub default_engine: Option<SearchEngine>,

    /// Existing tab the search should load into. `None` means a new tab.
    pub session: Option<Session>,

    /// Telemetry tag describing where the search was launched from.
    pub search_access_point: SearchAccessPoint,

    pub browsing_mode: BrowsingMode,

    /// Whether the one-time "allow suggestions in private mode" prompt shows.
    pub show_search_suggestions_hint: bool,

    pub show_search_suggestions: bool,

    /// Whether the shortcut engine picker is open.
    pub show_search_shortcuts: bool,

    pub are_shortcuts_available: bool,
}

impl SearchState {
    /// Builds the initial state from the host's context and the user's
    /// preferences. Settings are read exactly once, here.
    #[must_use]
    pub fn seed(seed: SearchSeed, settings: &dyn SearchSettings) -> Self {
        let show_search_suggestions = if seed.browsing_mode.is_private() {
            settings.should_show_search_suggestions()
                && settings.should_show_search_suggestions_in_private()
        } else {
            settings.should_show_search_suggestions()
        };

        let show_search_shortcuts =
            seed.shortcuts_available && settings.should_show_search_shortcuts();

        let default_engine = match &seed.engine_source {
            SearchEngineSource::Default(engine) => Some(engine.clone()),
            SearchEngineSource::Shortcut(_)
            | SearchEngineSource::History
            | SearchEngineSource::Bookmarks => None,
        };

        tracing::debug!(
            source = seed.engine_source.label(),
            has_session = seed.session.is_some(),
            access_point = seed.access_point.as_str(),
            private = seed.browsing_mode.is_private(),
            "seeding search state"
        );

        Self {
            query: seed.pasted_text.unwrap_or_default(),
            search_engine_source: seed.engine_source,
            default_engine,
            session: seed.session,
            search_access_point: seed.access_point,
            browsing_mode: seed.browsing_mode,
            show_search_suggestions_hint: false,
            show_search_suggestions,
            show_search_shortcuts,
            are_shortcuts_available: seed.shortcuts_available,
        }
    }

    /// Engine a submitted query goes to, if the current source has one.
    #[must_use]
    pub const fn engine(&self) -> Option<&SearchEngine> {
        self.search_engine_source.engine()
    }
}
