//! Search screen business logic.
//!
//! The controller is the only component allowed to reach collaborators from a
//! search gesture. Each `handle_*` method reads the store's state at call
//! time, dispatches zero or more actions and fires side effects on the
//! browser, the navigation stack, the metrics recorder and the settings.
//!
//! # URL vs search terms
//!
//! | gesture                 | new tab            | engine | force search | metric           |
//! |-------------------------|--------------------|--------|--------------|------------------|
//! | commit, looks like URL  | if no session      | yes    | no           | entered URL      |
//! | commit, search terms    | if no session      | yes    | no           | performed search |
//! | URL suggestion tapped   | always             | no     | no           | entered URL      |
//! | search term tapped      | always             | yes    | yes          | performed search |
//!
//! A commit made from an existing tab selects that tab before loading into it.
//! A missing engine never blocks a gesture; the browser falls back to its own
//! default.

use super::actions::SearchAction;
use super::modes::SearchAccessPoint;
use super::store::SearchStore;
use crate::domain::{is_url, SearchEngine, Session};
use crate::metrics::{MetricEvent, MetricsRecorder};
use crate::navigation::{BrowserDirection, BrowserNavigation, LoadRequest, NavController, NavDestination};
use crate::settings::SearchSettings;
use std::rc::Rc;

/// Reactions to every gesture the search screen supports.
pub trait SearchController {
    /// Text committed from the toolbar.
    fn handle_url_committed(&self, url: &str);

    /// A URL suggestion was tapped.
    fn handle_url_tapped(&self, url: &str);

    /// A search-term suggestion was tapped.
    fn handle_search_terms_tapped(&self, search_terms: &str);

    /// The toolbar text changed.
    fn handle_text_changed(&self, text: &str);

    /// An engine was picked from the shortcut list.
    fn handle_search_shortcut_engine_selected(&self, engine: SearchEngine);

    /// The shortcuts toggle in the toolbar was pressed.
    fn handle_search_shortcuts_button_clicked(&self);

    /// The "search engine settings" entry was pressed.
    fn handle_click_search_engine_settings(&self);

    /// An already open tab was picked from the suggestions.
    fn handle_existing_session_selected(&self, session: &Session);

    /// The user backed out of the search screen.
    fn handle_editing_canceled(&self);
}

/// The production [`SearchController`], wired to injected collaborators.
pub struct DefaultSearchController {
    store: Rc<SearchStore>,
    browser: Rc<dyn BrowserNavigation>,
    nav: Rc<dyn NavController>,
    metrics: Rc<dyn MetricsRecorder>,
    settings: Rc<dyn SearchSettings>,
}

impl DefaultSearchController {
    #[must_use]
    pub fn new(
        store: Rc<SearchStore>,
        browser: Rc<dyn BrowserNavigation>,
        nav: Rc<dyn NavController>,
        metrics: Rc<dyn MetricsRecorder>,
        settings: Rc<dyn SearchSettings>,
    ) -> Self {
        Self {
            store,
            browser,
            nav,
            metrics,
            settings,
        }
    }

    /// Counts the search and records it against the current engine source.
    ///
    /// `fallback` stands in for an unknown access point.
    fn record_performed_search(&self, fallback: SearchAccessPoint) {
        let state = self.store.state();
        let access_point = state.search_access_point.or(fallback);

        self.metrics.track(MetricEvent::performed_search(
            access_point,
            &state.search_engine_source,
        ));
    }
}

impl SearchController for DefaultSearchController {
    fn handle_url_committed(&self, url: &str) {
        let _span = tracing::debug_span!("handle_url_committed").entered();

        if url.trim().is_empty() {
            tracing::debug!("ignoring blank commit");
            return;
        }

        let state = self.store.state();
        let new_tab = state.session.is_none();
        tracing::debug!(
            new_tab,
            source = state.search_engine_source.label(),
            has_engine = state.engine().is_some(),
            "loading committed text"
        );

        if let Some(session) = &state.session {
            self.browser.select_session(&session.id);
        }
        self.browser.open_to_browser_and_load(
            LoadRequest::direct(url, new_tab, BrowserDirection::FromSearch)
                .with_engine(state.engine().cloned()),
        );

        if is_url(url) {
            self.metrics.track(MetricEvent::EnteredUrl { autocomplete: false });
        } else {
            self.settings.increment_active_search_count();
            self.record_performed_search(SearchAccessPoint::Action);
        }
    }

    fn handle_url_tapped(&self, url: &str) {
        let _span = tracing::debug_span!("handle_url_tapped").entered();

        self.browser.open_to_browser_and_load(LoadRequest::direct(
            url,
            true,
            BrowserDirection::FromSearch,
        ));
        self.metrics.track(MetricEvent::EnteredUrl { autocomplete: false });
    }

    fn handle_search_terms_tapped(&self, search_terms: &str) {
        let _span = tracing::debug_span!("handle_search_terms_tapped").entered();

        self.settings.increment_active_search_count();

        let state = self.store.state();
        self.browser.open_to_browser_and_load(LoadRequest::search(
            search_terms,
            true,
            BrowserDirection::FromSearch,
            state.engine().cloned(),
        ));

        self.record_performed_search(SearchAccessPoint::Suggestion);
    }

    fn handle_text_changed(&self, text: &str) {
        let _span = tracing::trace_span!("handle_text_changed", len = text.len()).entered();

        let private = self.store.state().browsing_mode.is_private();
        let show_prompt = !text.is_empty()
            && private
            && !self.settings.should_show_search_suggestions_in_private()
            && !self.settings.search_suggestions_in_private_onboarding_finished();

        self.store.dispatch(SearchAction::UpdateQuery(text.to_string()));
        self.store
            .dispatch(SearchAction::AllowSearchSuggestionsInPrivateModePrompt(show_prompt));
    }

    fn handle_search_shortcut_engine_selected(&self, engine: SearchEngine) {
        let _span = tracing::debug_span!("handle_search_shortcut_engine_selected", engine = %engine.id).entered();

        let event = MetricEvent::shortcut_selected(&engine);
        self.store
            .dispatch(SearchAction::SearchShortcutEngineSelected(engine));
        self.metrics.track(event);
    }

    fn handle_search_shortcuts_button_clicked(&self) {
        let state = self.store.state();
        tracing::debug!(
            showing = state.show_search_shortcuts,
            available = state.are_shortcuts_available,
            "search shortcuts button clicked"
        );
    }

    fn handle_click_search_engine_settings(&self) {
        tracing::debug!("opening search engine settings");
        self.nav.navigate(NavDestination::SearchEngineSettings);
    }

    fn handle_existing_session_selected(&self, session: &Session) {
        let _span = tracing::debug_span!("handle_existing_session_selected", session = %session.id).entered();

        self.browser.select_session(&session.id);
        self.browser.open_to_browser(BrowserDirection::FromSearch);
    }

    fn handle_editing_canceled(&self) {
        tracing::debug!("search editing canceled");
        self.nav.navigate_up();
    }
}

impl std::fmt::Debug for DefaultSearchController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DefaultSearchController")
            .field("store", &self.store)
            .finish_non_exhaustive()
    }
}
