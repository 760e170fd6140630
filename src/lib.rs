//! Country Browser: a Zellij plugin for browsing the world's countries.
//!
//! The plugin fetches the REST Countries dataset once, then lets the user
//! narrow it by name and by region, flip between a light and a dark palette,
//! and remembers the palette for two hours.

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  keys, host I/O
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  events → state → actions
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI (ui/)      │   │ Storage       │   │ Worker        │
//! │ table, search │   │ (storage/)    │   │ (worker/)     │
//! │ region panel  │   │ theme cookie  │   │ theme I/O     │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain (domain/) + Infrastructure (infrastructure/)│
//! │  countries, regions, filter, endpoint, paths        │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Event/action state machine
//! - [`domain`]: Country model, region set, filter engine, errors
//! - [`infrastructure`]: Endpoint contract and data paths
//! - [`storage`]: Theme preference file with expiry
//! - [`worker`]: Background worker owning the preference file
//! - [`ui`]: Terminal rendering and palettes
//! - `observability`: OTLP file tracing (internal)
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/country-browser.wasm" {
//!         endpoint "https://restcountries.com/v3.1/all?fields=flags,name,population,region,capital"
//!         light_theme "catppuccin-latte"
//!         dark_theme "~/.config/country-browser/dark.toml"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Startup
//!
//! 1. `load` parses the configuration, installs tracing and asks for
//!    `WebAccess`.
//! 2. On grant the plugin issues the dataset `GET` and asks the worker for
//!    the stored palette.
//! 3. The response fills the table; until then a loading screen is shown.
//!    A failed request or a denied permission is logged and leaves the
//!    browser up with an empty table. The stored palette is requested
//!    either way.
//!
//! # Example
//!
//! ```rust
//! use country_browser::{handle_event, initialize, Config, Country, Event};
//!
//! let mut state = initialize(&Config::default());
//! handle_event(&mut state, &Event::CountriesFetched(Ok(vec![
//!     Country::new("https://flagcdn.com/pe.svg", "Peru", 33_000_000, "Americas", Some("Lima")),
//!     Country::new("https://flagcdn.com/es.svg", "Spain", 47_000_000, "Europe", Some("Madrid")),
//! ])))?;
//!
//! handle_event(&mut state, &Event::StartSearch)?;
//! handle_event(&mut state, &Event::Char('p'))?;
//! handle_event(&mut state, &Event::Char('e'))?;
//!
//! assert_eq!(state.visible_count(), 1);
//! assert_eq!(state.region_label, "Americas");
//! # Ok::<(), country_browser::CountryBrowserError>(())
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod storage;
pub mod worker;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, DataStatus, Event, InputMode, RegionPanel};
pub use domain::{Country, CountryBrowserError, FetchError, Result};
pub use ui::Theme;

use infrastructure::api::DEFAULT_ENDPOINT;
use std::collections::BTreeMap;
use ui::theme::{DEFAULT_DARK_THEME, DEFAULT_LIGHT_THEME};

/// Plugin configuration parsed from the Zellij layout block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Dataset URL fetched once after permissions are granted.
    pub endpoint: String,

    /// Light palette: a built-in theme name or a path ending in `.toml`.
    pub light_theme: String,

    /// Dark palette, same forms as `light_theme`.
    pub dark_theme: String,

    /// `EnvFilter` directive for the trace file. Default: `info`.
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            light_theme: DEFAULT_LIGHT_THEME.to_string(),
            dark_theme: DEFAULT_DARK_THEME.to_string(),
            trace_level: None,
        }
    }
}

impl Config {
    /// Reads the plugin block. Missing or blank values keep their defaults.
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use country_browser::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("dark_theme".to_string(), "~/themes/night.toml".to_string());
    /// map.insert("endpoint".to_string(), "   ".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.dark_theme, "~/themes/night.toml");
    /// assert_eq!(config.endpoint, Config::default().endpoint);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();
        let value = |key: &str| {
            config
                .get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(String::from)
        };

        Self {
            endpoint: value("endpoint").unwrap_or(defaults.endpoint),
            light_theme: value("light_theme").unwrap_or(defaults.light_theme),
            dark_theme: value("dark_theme").unwrap_or(defaults.dark_theme),
            trace_level: value("trace_level"),
        }
    }
}

/// Builds the initial `AppState` for `config`.
///
/// A palette that cannot be loaded falls back to the built-in one of the
/// same kind.
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(endpoint = %config.endpoint, "initializing country browser");

    let light = Theme::resolve(&config.light_theme).unwrap_or_else(|e| {
        tracing::debug!(theme = %config.light_theme, error = %e, "light theme unavailable, using built-in");
        Theme::light()
    });
    let dark = Theme::resolve(&config.dark_theme).unwrap_or_else(|e| {
        tracing::debug!(theme = %config.dark_theme, error = %e, "dark theme unavailable, using built-in");
        Theme::dark()
    });

    AppState::new(light, dark, config.endpoint.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect()
    }

    #[test]
    fn empty_block_uses_defaults() {
        assert_eq!(Config::from_zellij(&BTreeMap::new()), Config::default());
    }

    #[test]
    fn values_are_trimmed() {
        let config = Config::from_zellij(&map(&[
            ("endpoint", " https://example.invalid/all "),
            ("trace_level", "debug"),
        ]));

        assert_eq!(config.endpoint, "https://example.invalid/all");
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
        assert_eq!(config.light_theme, DEFAULT_LIGHT_THEME);
    }

    #[test]
    fn unknown_theme_falls_back_to_builtin() {
        let config = Config {
            light_theme: "no-such-theme".to_string(),
            dark_theme: "/missing/dark.toml".to_string(),
            ..Config::default()
        };

        let state = initialize(&config);

        assert_eq!(state.light_theme.name, DEFAULT_LIGHT_THEME);
        assert_eq!(state.dark_theme.name, DEFAULT_DARK_THEME);
        assert!(!state.dark_mode);
    }
}
