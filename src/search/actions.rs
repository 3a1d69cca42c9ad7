//! State transition requests understood by the search store.
//!
//! Actions are plain data. The controller builds them, hands ownership to
//! [`SearchStore::dispatch`](super::SearchStore::dispatch), and the reducer
//! consumes them. They carry everything needed to compute the next state and
//! have no behaviour of their own.

use crate::domain::SearchEngine;

/// Requests to move the search screen from one [`SearchState`](super::SearchState)
/// to the next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchAction {
    /// Replaces the toolbar text.
    UpdateQuery(String),

    /// Routes the next query through `engine` instead of the default, and
    /// closes the shortcut picker.
    SearchShortcutEngineSelected(SearchEngine),

    /// The user changed their default engine while the screen was open.
    SelectNewDefaultSearchEngine(SearchEngine),

    /// Opens or closes the shortcut engine picker.
    ///
    /// Opening is ignored when the host has no shortcut engines to offer.
    ShowSearchShortcutEnginePicker(bool),

    /// The host's engine list changed size.
    UpdateSearchShortcutsAvailability(bool),

    /// Shows or hides the one-time "allow suggestions in private mode" prompt.
    AllowSearchSuggestionsInPrivateModePrompt(bool),

    /// Turns search suggestions on or off for this screen.
    SetShowSearchSuggestions(bool),
}

impl SearchAction {
    /// Variant name without payload, used as a tracing field.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::UpdateQuery(_) => "update_query",
            Self::SearchShortcutEngineSelected(_) => "search_shortcut_engine_selected",
            Self::SelectNewDefaultSearchEngine(_) => "select_new_default_search_engine",
            Self::ShowSearchShortcutEnginePicker(_) => "show_search_shortcut_engine_picker",
            Self::UpdateSearchShortcutsAvailability(_) => "update_search_shortcuts_availability",
            Self::AllowSearchSuggestionsInPrivateModePrompt(_) => {
                "allow_search_suggestions_in_private_mode_prompt"
            }
            Self::SetShowSearchSuggestions(_) => "set_show_search_suggestions",
        }
    }
}
