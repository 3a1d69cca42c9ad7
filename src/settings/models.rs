//! Persisted representation of the search preferences.

use serde::{Deserialize, Serialize};

/// Current version of the settings file format.
pub const SETTINGS_VERSION: u32 = 1;

/// Search preferences as stored on disk.
///
/// Every field has a serde default so files written by older versions, or
/// edited by hand, still load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsRecord {
    /// Version of the storage format for future migrations.
    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default = "enabled")]
    pub show_search_suggestions: bool,

    #[serde(default)]
    pub show_search_suggestions_in_private: bool,

    #[serde(default)]
    pub search_suggestions_in_private_onboarding_finished: bool,

    #[serde(default)]
    pub show_search_shortcuts: bool,

    #[serde(default)]
    pub active_search_count: u64,
}

const fn default_version() -> u32 {
    SETTINGS_VERSION
}

const fn enabled() -> bool {
    true
}

impl Default for SettingsRecord {
    fn default() -> Self {
        Self {
            version: SETTINGS_VERSION,
            show_search_suggestions: true,
            show_search_suggestions_in_private: false,
            search_suggestions_in_private_onboarding_finished: false,
            show_search_shortcuts: false,
            active_search_count: 0,
        }
    }
}
