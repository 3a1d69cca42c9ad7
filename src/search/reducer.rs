//! The pure state transition function behind [`SearchStore`](super::SearchStore).

use super::actions::SearchAction;
use super::state::SearchState;
use crate::domain::SearchEngineSource;

/// Computes the state that follows `state` once `action` is applied.
///
/// Total and deterministic: every variant is matched exhaustively, and a
/// variant that changes nothing for a given state still yields a (cloned)
/// next state rather than being dropped.
#[must_use]
pub fn reduce(state: &SearchState, action: SearchAction) -> SearchState {
    match action {
        SearchAction::UpdateQuery(query) => SearchState {
            query,
            ..state.clone()
        },
        SearchAction::SearchShortcutEngineSelected(engine) => SearchState {
            search_engine_source: SearchEngineSource::Shortcut(engine),
            show_search_shortcuts: false,
            ..state.clone()
        },
        SearchAction::SelectNewDefaultSearchEngine(engine) => SearchState {
            search_engine_source: SearchEngineSource::Default(engine.clone()),
            default_engine: Some(engine),
            ..state.clone()
        },
        SearchAction::ShowSearchShortcutEnginePicker(show) => SearchState {
            show_search_shortcuts: show && state.are_shortcuts_available,
            ..state.clone()
        },
        SearchAction::UpdateSearchShortcutsAvailability(available) => SearchState {
            are_shortcuts_available: available,
            show_search_shortcuts: state.show_search_shortcuts && available,
            ..state.clone()
        },
        SearchAction::AllowSearchSuggestionsInPrivateModePrompt(show) => SearchState {
            show_search_suggestions_hint: show,
            ..state.clone()
        },
        SearchAction::SetShowSearchSuggestions(show) => SearchState {
            show_search_suggestions: show,
            ..state.clone()
        },
    }
}
