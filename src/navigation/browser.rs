//! Browser collaborator: loading text in a tab and switching to the browser.

use crate::domain::{SearchEngine, SessionId};
use serde::{Deserialize, Serialize};

/// Screen the browser is opened from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BrowserDirection {
    FromGlobal,
    FromHome,
    FromSearch,
}

/// Everything the browser needs to load a search term or URL.
///
/// Direct navigation and engine searches used to be two call shapes; they are
/// one request here, and the constructors keep the two apart: [`direct`]
/// carries no engine and never forces a search, [`search`] always does.
///
/// [`direct`]: LoadRequest::direct
/// [`search`]: LoadRequest::search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadRequest {
    pub search_term_or_url: String,
    /// `false` loads into the currently selected tab. Callers select the
    /// target tab through [`BrowserNavigation::select_session`] first.
    pub new_tab: bool,
    pub from: BrowserDirection,
    /// Engine to search with. `None` lets the browser apply its own default.
    pub engine: Option<SearchEngine>,
    /// Treat the text as search terms even if it looks like a URL.
    pub force_search: bool,
}

impl LoadRequest {
    /// A plain navigation: no engine, no forced search.
    #[must_use]
    pub fn direct(search_term_or_url: impl Into<String>, new_tab: bool, from: BrowserDirection) -> Self {
        Self {
            search_term_or_url: search_term_or_url.into(),
            new_tab,
            from,
            engine: None,
            force_search: false,
        }
    }

    /// A query for `engine` that the browser must not reinterpret as a URL.
    #[must_use]
    pub fn search(
        search_term_or_url: impl Into<String>,
        new_tab: bool,
        from: BrowserDirection,
        engine: Option<SearchEngine>,
    ) -> Self {
        Self {
            engine,
            force_search: true,
            ..Self::direct(search_term_or_url, new_tab, from)
        }
    }

    /// Attaches an engine without forcing a search.
    ///
    /// Used for committed toolbar text, which the browser may still load as a
    /// URL if it looks like one.
    #[must_use]
    pub fn with_engine(mut self, engine: Option<SearchEngine>) -> Self {
        self.engine = engine;
        self
    }

    /// `true` when this request carries none of the search metadata.
    #[must_use]
    pub const fn is_direct(&self) -> bool {
        self.engine.is_none() && !self.force_search
    }
}

/// The browser as seen from the search screen.
///
/// Calls are fire-and-forget: nothing is returned and failures are the
/// browser's to handle.
pub trait BrowserNavigation {
    /// Loads a search term or URL, in a new tab or the selected one.
    fn open_to_browser_and_load(&self, request: LoadRequest);

    /// Shows the browser with whatever tab is selected.
    fn open_to_browser(&self, from: BrowserDirection);

    /// Makes `session` the selected tab without otherwise touching it.
    fn select_session(&self, session: &SessionId);
}
