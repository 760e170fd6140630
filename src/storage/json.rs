//! JSON file-based preference store.
//!
//! The whole file is held in memory and rewritten on change using a
//! write-to-temp + rename sequence so a crash never leaves a half-written
//! file behind.

use crate::domain::error::{CountryBrowserError, Result};
use crate::storage::backend::PreferenceStore;
use crate::storage::expiry::is_live;
use crate::storage::models::{ThemeChoice, ThemeRecord};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top-level structure serialized to disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct PreferenceData {
    /// Format version for future migrations.
    version: u32,

    #[serde(default)]
    theme: Option<ThemeRecord>,
}

impl Default for PreferenceData {
    fn default() -> Self {
        Self {
            version: 1,
            theme: None,
        }
    }
}

/// JSON file preference store.
///
/// # File Format
///
/// ```json
/// {
///   "version": 1,
///   "theme": { "theme": "dark", "expires_at": 1767225600 }
/// }
/// ```
///
/// A file that cannot be parsed is logged and treated as empty; the next
/// save replaces it.
pub struct JsonPreferenceStore {
    file_path: PathBuf,
    data: PreferenceData,
    dirty: bool,
}

impl JsonPreferenceStore {
    /// Opens the store at `file_path`, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory cannot be created or an
    /// existing file cannot be read.
    pub fn new(file_path: PathBuf) -> Result<Self> {
        tracing::debug!(path = ?file_path, "initializing preference store");

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let data = if file_path.exists() {
            Self::load_from_file(&file_path)?
        } else {
            tracing::debug!("no preference file yet");
            PreferenceData::default()
        };

        Ok(Self {
            file_path,
            data,
            dirty: false,
        })
    }

    fn load_from_file(path: &Path) -> Result<PreferenceData> {
        let contents = std::fs::read_to_string(path)?;

        match serde_json::from_str::<PreferenceData>(&contents) {
            Ok(data) => {
                tracing::debug!(version = data.version, has_theme = data.theme.is_some(), "loaded preferences");
                Ok(data)
            }
            Err(e) => {
                tracing::warn!(error = %e, "unparseable preference file, starting empty");
                Ok(PreferenceData::default())
            }
        }
    }

    fn save_to_file(&mut self) -> Result<()> {
        if !self.dirty {
            tracing::trace!("skipping save, no changes");
            return Ok(());
        }

        let json = serde_json::to_string_pretty(&self.data)
            .map_err(|e| CountryBrowserError::Storage(format!("failed to serialize JSON: {e}")))?;

        let tmp_path = self.file_path.with_extension("tmp");
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, &self.file_path)?;

        self.dirty = false;
        tracing::debug!(path = ?self.file_path, "preferences saved");
        Ok(())
    }
}

impl PreferenceStore for JsonPreferenceStore {
    fn load_theme(&self, now: i64) -> Result<Option<ThemeChoice>> {
        let _span = tracing::debug_span!("json_load_theme", now = now).entered();

        let theme = self
            .data
            .theme
            .filter(|record| is_live(record, now))
            .map(|record| record.theme);

        tracing::debug!(theme = ?theme, "theme lookup complete");
        Ok(theme)
    }

    fn save_theme(&mut self, theme: ThemeChoice, now: i64) -> Result<ThemeRecord> {
        let _span = tracing::debug_span!("json_save_theme", theme = ?theme).entered();

        let record = ThemeRecord::written_at(theme, now);
        self.data.theme = Some(record);
        self.dirty = true;
        self.save_to_file()?;

        Ok(record)
    }
}

impl Drop for JsonPreferenceStore {
    fn drop(&mut self) {
        if self.dirty {
            if let Err(e) = self.save_to_file() {
                tracing::error!(error = %e, "failed to save preferences on drop");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> (JsonPreferenceStore, PathBuf) {
        let path = dir.path().join("nested").join("preferences.json");
        (JsonPreferenceStore::new(path.clone()).unwrap(), path)
    }

    #[test]
    fn absent_file_means_no_theme() {
        let dir = tempfile::tempdir().unwrap();
        let (store, _) = store_in(&dir);

        assert_eq!(store.load_theme(0).unwrap(), None);
    }

    #[test]
    fn saved_theme_reads_back_after_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let (mut store, path) = store_in(&dir);
        let now = 1_700_000_000;

        store.save_theme(ThemeChoice::Dark, now).unwrap();
        drop(store);

        let reopened = JsonPreferenceStore::new(path).unwrap();
        assert_eq!(reopened.load_theme(now + 60).unwrap(), Some(ThemeChoice::Dark));
    }

    #[test]
    fn expired_theme_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let (mut store, _) = store_in(&dir);
        let now = 1_700_000_000;

        store.save_theme(ThemeChoice::Dark, now).unwrap();

        assert_eq!(store.load_theme(now + 2 * 60 * 60).unwrap(), None);
    }

    #[test]
    fn file_holds_lowercase_theme_value() {
        let dir = tempfile::tempdir().unwrap();
        let (mut store, path) = store_in(&dir);

        store.save_theme(ThemeChoice::Light, 10).unwrap();

        let contents = std::fs::read_to_string(path).unwrap();
        assert!(contents.contains("\"light\""));
        assert!(contents.contains("\"expires_at\": 7210"));
    }

    #[test]
    fn unparseable_file_is_treated_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        std::fs::write(&path, r#"{"version": 1, "theme": {"theme": "purple", "expires_at": 9}}"#).unwrap();

        let store = JsonPreferenceStore::new(path).unwrap();

        assert_eq!(store.load_theme(0).unwrap(), None);
    }
}
