//! JSON file-backed search preferences.
//!
//! The whole record is held in memory and rewritten on every change using an
//! atomic write (write-to-temp + rename), so a crash never leaves a truncated
//! file behind. A write that fails marks the record dirty; the next change or
//! the final drop retries it.

use crate::domain::error::{Result, SearchScreenError};
use crate::settings::backend::SearchSettings;
use crate::settings::models::SettingsRecord;
use std::cell::{Cell, RefCell};
use std::path::{Path, PathBuf};

/// Search preferences persisted to a JSON file.
///
/// # File Format
///
/// ```json
/// {
///   "version": 1,
///   "show_search_suggestions": true,
///   "show_search_suggestions_in_private": false,
///   "search_suggestions_in_private_onboarding_finished": false,
///   "show_search_shortcuts": false,
///   "active_search_count": 12
/// }
/// ```
#[derive(Debug)]
pub struct JsonSettings {
    file_path: PathBuf,
    data: RefCell<SettingsRecord>,
    dirty: Cell<bool>,
}

impl JsonSettings {
    /// Opens the settings file, creating parent directories as needed.
    ///
    /// A missing file yields default preferences; nothing is written until the
    /// first change.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory cannot be created or the file
    /// exists but does not contain valid settings JSON.
    pub fn new(file_path: PathBuf) -> Result<Self> {
        tracing::debug!(path = ?file_path, "initializing JSON settings");

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let data = if file_path.exists() {
            Self::load_from_file(&file_path)?
        } else {
            tracing::debug!("no settings file yet, using defaults");
            SettingsRecord::default()
        };

        Ok(Self {
            file_path,
            data: RefCell::new(data),
            dirty: Cell::new(false),
        })
    }

    /// Returns a copy of the current preferences.
    #[must_use]
    pub fn snapshot(&self) -> SettingsRecord {
        self.data.borrow().clone()
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn load_from_file(path: &Path) -> Result<SettingsRecord> {
        let contents = std::fs::read_to_string(path)?;
        let record: SettingsRecord = serde_json::from_str(&contents)
            .map_err(|e| SearchScreenError::Settings(format!("failed to parse JSON: {e}")))?;

        tracing::debug!(
            version = record.version,
            active_search_count = record.active_search_count,
            "loaded settings"
        );
        Ok(record)
    }

    fn save_to_file(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&*self.data.borrow())
            .map_err(|e| SearchScreenError::Settings(format!("failed to serialize JSON: {e}")))?;

        let tmp_path = self.file_path.with_extension("tmp");
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, &self.file_path)?;

        self.dirty.set(false);
        tracing::trace!(path = ?self.file_path, "settings saved");
        Ok(())
    }

    /// Applies `change` and persists the result if anything moved.
    fn update(&self, change: impl FnOnce(&mut SettingsRecord)) {
        let changed = {
            let mut data = self.data.borrow_mut();
            let before = data.clone();
            change(&mut *data);
            *data != before
        };

        if changed || self.dirty.get() {
            self.dirty.set(true);
            if let Err(e) = self.save_to_file() {
                tracing::error!(path = ?self.file_path, error = %e, "failed to save settings");
            }
        }
    }
}

impl SearchSettings for JsonSettings {
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
        self.update(|data| data.active_search_count = data.active_search_count.saturating_add(1));
    }

    fn set_show_search_suggestions_in_private(&self, enabled: bool) {
        self.update(|data| data.show_search_suggestions_in_private = enabled);
    }

    fn set_search_suggestions_in_private_onboarding_finished(&self, finished: bool) {
        self.update(|data| data.search_suggestions_in_private_onboarding_finished = finished);
    }
}

impl Drop for JsonSettings {
    fn drop(&mut self) {
        if self.dirty.get() {
            tracing::debug!("saving dirty settings on drop");
            if let Err(e) = self.save_to_file() {
                tracing::error!(error = %e, "failed to save settings on drop");
            }
        }
    }
}
