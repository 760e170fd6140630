//! Path utilities for the Zellij plugin sandbox.
//!
//! Inside the sandbox the host filesystem is mounted under `/host`, which
//! normally maps to the directory Zellij was started from (usually `$HOME`).

use std::path::PathBuf;

/// Returns the data directory for the preference file and trace output.
///
/// Resolves to `~/.local/share/zellij/country-browser` on the host when
/// Zellij was started from the home directory.
///
/// # Examples
///
/// ```
/// use country_browser::infrastructure::get_data_dir;
///
/// let data_dir = get_data_dir();
/// assert_eq!(data_dir.to_str().unwrap(), "/host/.local/share/zellij/country-browser");
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("country-browser")
}

/// Maps `~`-prefixed paths onto the `/host` mount.
///
/// # Examples
///
/// ```
/// use country_browser::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/themes/nord.toml"), "/host/themes/nord.toml");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/etc/theme.toml"), "/etc/theme.toml");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path.starts_with("~/") {
        path.replacen('~', "/host", 1)
    } else if path == "~" {
        "/host".to_string()
    } else {
        path.to_string()
    }
}
