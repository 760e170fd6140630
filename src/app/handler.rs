//! Event handling and state transition logic.
//!
//! [`handle_event`] is the only place `AppState` changes. It takes one
//! [`Event`], applies it, and returns whether the pane needs a redraw plus
//! the side effects to run. Events arrive one at a time in host order, so no
//! two handlers ever interleave.
//!
//! # Event Types
//!
//! - **Navigation**: `KeyDown`, `KeyUp`, `CloseFocus`
//! - **Search**: `StartSearch`, `FocusResults`, `ExitSearch`, `Char`, `Backspace`
//! - **Regions**: `ToggleRegionList`, `SelectRegion`
//! - **Theme**: `ToggleTheme`
//! - **Host**: `PermissionsResult`, `CountriesFetched`
//! - **Worker**: `WorkerResponse`

use crate::app::modes::{InputMode, RegionPanel};
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::domain::{Country, FetchError};
use crate::worker::{WorkerMessage, WorkerResponse};

/// Events produced by key presses, the host and the worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Moves the country selection, or the region cursor while the region
    /// list is open, down by one (wraps).
    KeyDown,
    /// Same as `KeyDown`, upwards.
    KeyUp,
    /// Hides the plugin pane.
    CloseFocus,
    /// Starts editing the search query. An applied query is kept.
    StartSearch,
    /// Stops editing but keeps the query applied.
    FocusResults,
    /// Collapses the region list if open, otherwise clears the query.
    ExitSearch,
    /// Appends a character to the query (search mode only).
    Char(char),
    /// Removes the last query character (search mode only).
    Backspace,
    /// Expands or collapses the region list.
    ToggleRegionList,
    /// Selects the region under the cursor (region list open only).
    SelectRegion,
    /// Flips light/dark and persists the choice.
    ToggleTheme,

    /// Outcome of the permission prompt.
    PermissionsResult {
        granted: bool,
    },

    /// Outcome of the dataset request.
    CountriesFetched(std::result::Result<Vec<Country>, FetchError>),

    /// A response from the preference worker.
    WorkerResponse(WorkerResponse),
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// The boolean is `true` when the pane should re-render.
///
/// # Errors
///
/// Currently every event is total over the state; the `Result` keeps the
/// signature stable for the plugin shim.
///
/// # Example
///
/// ```rust
/// use country_browser::app::{handle_event, Action, AppState, Event};
/// use country_browser::ui::Theme;
///
/// let mut state = AppState::new(Theme::light(), Theme::dark(), "https://example.invalid/all");
/// let (_, actions) = handle_event(&mut state, &Event::PermissionsResult { granted: true })?;
/// assert!(matches!(actions[0], Action::FetchCountries { .. }));
/// # Ok::<(), country_browser::CountryBrowserError>(())
/// ```
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?EventKind(event)).entered();

    match event {
        Event::KeyDown => {
            if steers_region_cursor(state) {
                state.move_region_cursor_down();
            } else {
                state.move_selection_down();
            }
            Ok((true, vec![]))
        }
        Event::KeyUp => {
            if steers_region_cursor(state) {
                state.move_region_cursor_up();
            } else {
                state.move_selection_up();
            }
            Ok((true, vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::StartSearch => {
            tracing::debug!(query = %state.filter.search_text, "entering search mode");
            state.input_mode = InputMode::Search;
            Ok((true, vec![]))
        }
        Event::FocusResults => {
            state.input_mode = InputMode::Normal;
            Ok((true, vec![]))
        }
        Event::ExitSearch => {
            if state.input_mode == InputMode::Normal && state.region_panel.is_expanded() {
                state.region_panel = RegionPanel::Collapsed;
                return Ok((true, vec![]));
            }

            let was_searching = state.input_mode == InputMode::Search;
            state.input_mode = InputMode::Normal;

            if state.filter.search_text.is_empty() {
                return Ok((was_searching, vec![]));
            }

            tracing::debug!(query = %state.filter.search_text, "clearing search");
            state.clear_search();
            Ok((true, vec![]))
        }
        Event::Char(c) => {
            if state.input_mode != InputMode::Search {
                return Ok((false, vec![]));
            }
            state.push_search_char(*c);
            Ok((true, vec![]))
        }
        Event::Backspace => {
            if state.input_mode != InputMode::Search {
                return Ok((false, vec![]));
            }
            state.pop_search_char();
            Ok((true, vec![]))
        }
        Event::ToggleRegionList => {
            state.toggle_region_panel();
            tracing::debug!(panel = ?state.region_panel, "region list toggled");
            Ok((true, vec![]))
        }
        Event::SelectRegion => {
            if !state.region_panel.is_expanded() {
                return Ok((false, vec![]));
            }

            match state.select_region_at_cursor() {
                Some(region) => {
                    tracing::debug!(
                        region = %region,
                        visible = state.visible_count(),
                        "region selected"
                    );
                    Ok((true, vec![]))
                }
                None => {
                    tracing::debug!("no region to select");
                    Ok((false, vec![]))
                }
            }
        }
        Event::ToggleTheme => {
            let dark = state.toggle_theme();
            tracing::debug!(dark = dark, "theme toggled");
            Ok((true, vec![Action::PostToWorker(WorkerMessage::save_theme(dark))]))
        }
        Event::PermissionsResult { granted } => {
            let mut actions = Vec::new();

            if *granted {
                match state.request_fetch() {
                    Some(url) => {
                        tracing::debug!(url = %url, "requesting countries");
                        actions.push(Action::FetchCountries { url });
                    }
                    None => tracing::debug!("countries already requested"),
                }
            } else {
                tracing::warn!("web access denied, countries cannot be fetched");
                state.mark_unavailable();
            }

            // The preference file is local, so the theme loads either way.
            if state.request_stored_theme() {
                actions.push(Action::PostToWorker(WorkerMessage::load_theme()));
            }

            Ok((!granted, actions))
        }
        Event::CountriesFetched(result) => {
            match result {
                Ok(countries) => state.load_countries(countries.clone()),
                Err(e) => {
                    tracing::error!(error = %e, "failed to fetch countries");
                    state.mark_unavailable();
                }
            }
            Ok((true, vec![]))
        }
        Event::WorkerResponse(response) => match response {
            WorkerResponse::ThemeLoaded { dark } => {
                let changed = state.apply_stored_theme(*dark);
                tracing::debug!(dark = dark, changed = changed, "stored theme received");
                Ok((changed, vec![]))
            }
            WorkerResponse::ThemeSaved { dark, expires_at } => {
                tracing::debug!(dark = dark, expires_at = expires_at, "theme persisted");
                Ok((false, vec![]))
            }
            WorkerResponse::Error { message } => {
                tracing::error!("Worker error: {}", message);
                Ok((false, vec![]))
            }
        },
    }
}

/// Up/down steer the region cursor only while browsing with the panel open.
fn steers_region_cursor(state: &AppState) -> bool {
    state.input_mode == InputMode::Normal && state.region_panel.is_expanded()
}

/// Short event name for span fields; avoids dumping whole datasets.
struct EventKind<'a>(&'a Event);

impl std::fmt::Debug for EventKind<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Event::CountriesFetched(Ok(countries)) => write!(f, "CountriesFetched(Ok({} countries))", countries.len()),
            other => write!(f, "{other:?}"),
        }
    }
}
