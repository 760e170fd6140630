//! Storage record models for the preference file.

use serde::{Deserialize, Serialize};

/// Persisted theme value, written as `"dark"` or `"light"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
    Dark,
    Light,
}

impl ThemeChoice {
    #[must_use]
    pub const fn from_dark(dark: bool) -> Self {
        if dark {
            Self::Dark
        } else {
            Self::Light
        }
    }

    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

/// The stored theme with its expiry.
///
/// Mirrors a `theme=dark; expires=...` cookie: the value is only honoured
/// until `expires_at`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeRecord {
    pub theme: ThemeChoice,

    /// Unix timestamp (seconds) after which the record is ignored.
    pub expires_at: i64,
}

impl ThemeRecord {
    /// Creates a record written at `now`, expiring after the fixed TTL.
    ///
    /// # Examples
    ///
    /// ```
    /// use country_browser::storage::{ThemeChoice, ThemeRecord};
    ///
    /// let record = ThemeRecord::written_at(ThemeChoice::Dark, 1_000);
    /// assert_eq!(record.expires_at, 1_000 + 2 * 60 * 60);
    /// ```
    #[must_use]
    pub fn written_at(theme: ThemeChoice, now: i64) -> Self {
        Self {
            theme,
            expires_at: super::expiry::expires_at(now),
        }
    }
}
