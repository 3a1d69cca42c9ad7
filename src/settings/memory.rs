//! In-memory search preferences for ephemeral hosts and tests.

use crate::settings::backend::SearchSettings;
use crate::settings::models::SettingsRecord;
use std::cell::RefCell;

/// Preferences that live only as long as the value.
#[derive(Debug, Default)]
pub struct MemorySettings {
    data: RefCell<SettingsRecord>,
}

impl MemorySettings {
    #[must_use]
    pub fn new(record: SettingsRecord) -> Self {
        Self {
            data: RefCell::new(record),
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> SettingsRecord {
        self.data.borrow().clone()
    }
}

impl SearchSettings for MemorySettings {
    fn should_show_search_suggestions(&self) -> bool {
        self.data.borrow().show_search_suggestions
    }

    fn should_show_search_suggestions_in_private(&self) -> bool {
        self.data.borrow().show_search_suggestions_in_private
    }

    fn search_suggestions_in_private_onboarding_finished(&self) -> bool {
        self.data.borrow().search_suggestions_in_private_onboarding_finished
    }

    fn should_show_search_shortcuts(&self) -> bool {
        self.data.borrow().show_search_shortcuts
    }

    fn active_search_count(&self) -> u64 {
        self.data.borrow().active_search_count
    }

    fn increment_active_search_count(&self) {
        let mut data = self.data.borrow_mut();
        data.active_search_count = data.active_search_count.saturating_add(1);
    }

    fn set_show_search_suggestions_in_private(&self, enabled: bool) {
        self.data.borrow_mut().show_search_suggestions_in_private = enabled;
    }

    fn set_search_suggestions_in_private_onboarding_finished(&self, finished: bool) {
        self.data.borrow_mut().search_suggestions_in_private_onboarding_finished = finished;
    }
}
