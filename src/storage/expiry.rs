//! Cookie-style expiry for the stored theme.
//!
//! A theme written at time `t` is honoured while `now < t + 2h`. Past that
//! the record behaves as if it had never been written.

use super::models::ThemeRecord;

/// Lifetime of a stored theme, in hours.
const THEME_TTL_HOURS: i64 = 2;

/// Returns the lifetime of a stored theme.
#[must_use]
pub fn theme_ttl() -> chrono::Duration {
    chrono::Duration::hours(THEME_TTL_HOURS)
}

/// Returns the expiry timestamp for a record written at `now`.
#[must_use]
pub fn expires_at(now: i64) -> i64 {
    now.saturating_add(theme_ttl().num_seconds())
}

/// Returns `true` while `record` has not expired at `now`.
///
/// # Examples
///
/// ```
/// use country_browser::storage::{is_live, ThemeChoice, ThemeRecord};
///
/// let record = ThemeRecord::written_at(ThemeChoice::Dark, 0);
/// assert!(is_live(&record, 7_199));
/// assert!(!is_live(&record, 7_200));
/// ```
#[must_use]
pub const fn is_live(record: &ThemeRecord, now: i64) -> bool {
    now < record.expires_at
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::models::ThemeChoice;

    #[test]
    fn ttl_is_two_hours() {
        assert_eq!(theme_ttl().num_seconds(), 7200);
    }

    #[test]
    fn record_expires_exactly_at_ttl() {
        let now = chrono::Utc::now().timestamp();
        let record = ThemeRecord::written_at(ThemeChoice::Light, now);

        assert!(is_live(&record, now));
        assert!(is_live(&record, now + 7199));
        assert!(!is_live(&record, now + 7200));
    }
}
