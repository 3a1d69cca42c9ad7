//! The call boundary between search views and the controller.
//!
//! Views speak in gestures (`on_*`), the controller in handlers (`handle_*`).
//! [`SearchInteractor`] maps one onto the other, argument for argument, and
//! does nothing else. The toolbar and the awesome bar each depend only on the
//! slice of the surface they use.

use super::controller::SearchController;
use crate::domain::{SearchEngine, Session};

/// Gestures raised by the search toolbar.
pub trait ToolbarInteractor {
    fn on_url_committed(&self, url: &str);
    fn on_editing_canceled(&self);
    fn on_text_changed(&self, text: &str);
}

/// Gestures raised by the suggestion list ("awesome bar").
pub trait AwesomeBarInteractor {
    fn on_url_tapped(&self, url: &str);
    fn on_search_terms_tapped(&self, search_terms: &str);
    fn on_search_shortcut_engine_selected(&self, engine: SearchEngine);
    fn on_click_search_engine_settings(&self);
    fn on_existing_session_selected(&self, session: &Session);
    fn on_search_shortcuts_button_clicked(&self);
}

/// Forwards every view gesture to the controller chosen at construction.
pub struct SearchInteractor {
    controller: Box<dyn SearchController>,
}

impl SearchInteractor {
    #[must_use]
    pub fn new(controller: Box<dyn SearchController>) -> Self {
        Self { controller }
    }
}

impl ToolbarInteractor for SearchInteractor {
    fn on_url_committed(&self, url: &str) {
        self.controller.handle_url_committed(url);
    }

    fn on_editing_canceled(&self) {
        self.controller.handle_editing_canceled();
    }

    fn on_text_changed(&self, text: &str) {
        self.controller.handle_text_changed(text);
    }
}

impl AwesomeBarInteractor for SearchInteractor {
    fn on_url_tapped(&self, url: &str) {
        self.controller.handle_url_tapped(url);
    }

    fn on_search_terms_tapped(&self, search_terms: &str) {
        self.controller.handle_search_terms_tapped(search_terms);
    }

    fn on_search_shortcut_engine_selected(&self, engine: SearchEngine) {
        self.controller.handle_search_shortcut_engine_selected(engine);
    }

    fn on_click_search_engine_settings(&self) {
        self.controller.handle_click_search_engine_settings();
    }

    fn on_existing_session_selected(&self, session: &Session) {
        self.controller.handle_existing_session_selected(session);
    }

    fn on_search_shortcuts_button_clicked(&self) {
        self.controller.handle_search_shortcuts_button_clicked();
    }
}

impl std::fmt::Debug for SearchInteractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchInteractor").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Call {
        UrlCommitted(String),
        UrlTapped(String),
        SearchTermsTapped(String),
        TextChanged(String),
        ShortcutEngineSelected(SearchEngine),
        ShortcutsButtonClicked,
        EngineSettings,
        ExistingSession(Session),
        EditingCanceled,
    }

    #[derive(Default)]
    struct RecordingController {
        calls: Rc<RefCell<Vec<Call>>>,
    }

    impl RecordingController {
        fn push(&self, call: Call) {
            self.calls.borrow_mut().push(call);
        }
    }

    impl SearchController for RecordingController {
        fn handle_url_committed(&self, url: &str) {
            self.push(Call::UrlCommitted(url.to_string()));
        }
        fn handle_url_tapped(&self, url: &str) {
            self.push(Call::UrlTapped(url.to_string()));
        }
        fn handle_search_terms_tapped(&self, search_terms: &str) {
            self.push(Call::SearchTermsTapped(search_terms.to_string()));
        }
        fn handle_text_changed(&self, text: &str) {
            self.push(Call::TextChanged(text.to_string()));
        }
        fn handle_search_shortcut_engine_selected(&self, engine: SearchEngine) {
            self.push(Call::ShortcutEngineSelected(engine));
        }
        fn handle_search_shortcuts_button_clicked(&self) {
            self.push(Call::ShortcutsButtonClicked);
        }
        fn handle_click_search_engine_settings(&self) {
            self.push(Call::EngineSettings);
        }
        fn handle_existing_session_selected(&self, session: &Session) {
            self.push(Call::ExistingSession(session.clone()));
        }
        fn handle_editing_canceled(&self) {
            self.push(Call::EditingCanceled);
        }
    }

    fn interactor() -> (SearchInteractor, Rc<RefCell<Vec<Call>>>) {
        let controller = RecordingController::default();
        let calls = Rc::clone(&controller.calls);
        (SearchInteractor::new(Box::new(controller)), calls)
    }

    #[test]
    fn every_gesture_forwards_once_with_its_arguments() {
        let (interactor, calls) = interactor();
        let engine = SearchEngine::new("wiki", "Wikipedia");
        let session = Session::new("tab-3", "http://mozilla.org", false);

        interactor.on_url_committed("test");
        interactor.on_url_tapped("https://example.com");
        interactor.on_search_terms_tapped("rust book");
        interactor.on_text_changed("te");
        interactor.on_search_shortcut_engine_selected(engine.clone());
        interactor.on_search_shortcuts_button_clicked();
        interactor.on_click_search_engine_settings();
        interactor.on_existing_session_selected(&session);
        interactor.on_editing_canceled();

        assert_eq!(
            *calls.borrow(),
            vec![
                Call::UrlCommitted("test".to_string()),
                Call::UrlTapped("https://example.com".to_string()),
                Call::SearchTermsTapped("rust book".to_string()),
                Call::TextChanged("te".to_string()),
                Call::ShortcutEngineSelected(engine),
                Call::ShortcutsButtonClicked,
                Call::EngineSettings,
                Call::ExistingSession(session),
                Call::EditingCanceled,
            ]
        );
    }

    #[test]
    fn views_can_hold_narrow_interfaces() {
        let (interactor, calls) = interactor();
        let interactor = Rc::new(interactor);
        let toolbar: Rc<dyn ToolbarInteractor> = interactor.clone();
        let awesome_bar: Rc<dyn AwesomeBarInteractor> = interactor;

        toolbar.on_text_changed("a");
        awesome_bar.on_search_shortcuts_button_clicked();

        assert_eq!(
            *calls.borrow(),
            vec![Call::TextChanged("a".to_string()), Call::ShortcutsButtonClicked]
        );
    }
}
