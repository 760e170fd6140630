//! Error types for the country browser.
//!
//! [`CountryBrowserError`] is the crate-wide error and [`Result`] its alias.
//! [`FetchError`] describes why the country dataset could not be obtained; it
//! is kept separate and cloneable because it travels inside
//! [`Event`](crate::app::Event) values.

use thiserror::Error;

/// Why the country dataset request produced no data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The endpoint answered with a non-success HTTP status.
    ///
    /// Zellij also reports transport failures (DNS, TLS, refused connection)
    /// through a non-success status, so this covers network errors as well.
    #[error("countries endpoint returned HTTP {0}")]
    Status(u16),

    /// The body was not the expected JSON array of country objects.
    #[error("malformed countries payload: {0}")]
    Malformed(String),
}

/// The main error type for country browser operations.
///
/// # Examples
///
/// ```
/// use country_browser::domain::{CountryBrowserError, FetchError};
///
/// let err: CountryBrowserError = FetchError::Status(503).into();
/// assert_eq!(err.to_string(), "Fetch error: countries endpoint returned HTTP 503");
/// ```
#[derive(Debug, Error)]
pub enum CountryBrowserError {
    /// The country dataset could not be fetched or decoded.
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// Reading or writing the preference file failed.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A theme could not be loaded or parsed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Communication with the background worker failed.
    #[error("Worker communication error: {0}")]
    Worker(String),
}

/// A specialized `Result` type for country browser operations.
pub type Result<T> = std::result::Result<T, CountryBrowserError>;
