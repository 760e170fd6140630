//! Preference storage abstraction.
//!
//! The browser persists one value, the theme, so the trait is intentionally
//! narrow. Each method maps to one worker message.

use crate::domain::error::Result;
use crate::storage::models::{ThemeChoice, ThemeRecord};

/// Abstraction over persistent preference backends.
///
/// # Implementations
///
/// - [`JsonPreferenceStore`](crate::storage::JsonPreferenceStore): JSON file
///   with atomic writes
///
/// # Examples
///
/// ```no_run
/// use country_browser::storage::{JsonPreferenceStore, PreferenceStore, ThemeChoice};
/// use std::path::PathBuf;
///
/// let mut store = JsonPreferenceStore::new(PathBuf::from("/tmp/preferences.json"))?;
/// let now = chrono::Utc::now().timestamp();
/// store.save_theme(ThemeChoice::Dark, now)?;
/// assert_eq!(store.load_theme(now)?, Some(ThemeChoice::Dark));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait PreferenceStore: Send {
    /// Returns the stored theme if one exists and has not expired at `now`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn load_theme(&self, now: i64) -> Result<Option<ThemeChoice>>;

    /// Stores `theme` as written at `now`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn save_theme(&mut self, theme: ThemeChoice, now: i64) -> Result<ThemeRecord>;
}
