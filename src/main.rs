//! Zellij plugin entry point.
//!
//! Glue between the host and the library: keys and host events become
//! [`Event`]s, [`Action`]s become host calls. All behaviour lives in the
//! library.
//!
//! ```text
//! ┌──────────────────────────────┐
//! │  State (plugin thread)       │  keys, web request, rendering
//! │         │ post_message_to    │
//! │         ▼                    │
//! │  PreferenceWorker (worker)   │  preferences.json
//! └──────────────────────────────┘
//! ```
//!
//! # Event Mapping
//!
//! - `Key` → navigation, search, region and theme events (see below)
//! - `PermissionRequestResult` → `Event::PermissionsResult`
//! - `WebRequestResult` tagged as the dataset request → `Event::CountriesFetched`
//! - `CustomMessage` from the worker → `Event::WorkerResponse`
//!
//! # Keybindings
//!
//! Always:
//! - `Ctrl+n` / `Ctrl+p`: Move down / up
//!
//! Normal mode:
//! - `j`/`Down`, `k`/`Up`: Move (region cursor while the panel is open)
//! - `/`: Search
//! - `r`: Toggle region panel
//! - `Enter`: Select region under the cursor
//! - `t`: Toggle theme
//! - `Esc`: Collapse panel, else clear search
//! - `q`: Close
//!
//! Search mode:
//! - Printable characters: Type
//! - `Backspace`: Delete
//! - `Enter`: Keep query, back to the list
//! - `Esc`: Clear query
//! - `Down`/`Up`: Move

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;
use zellij_tile::shim::post_message_to;

use country_browser::infrastructure::api::{countries_request_context, interpret_response, is_countries_response};
use country_browser::worker::{PreferenceWorker, WorkerMessage, WorkerResponse};
use country_browser::{handle_event, Action, Config, Event, InputMode};

register_plugin!(State);
register_worker!(PreferenceWorker, country_browser_worker, COUNTRY_BROWSER_WORKER);

/// Name shared by the worker registration and its messages.
const WORKER_NAME: &str = "country_browser";

struct State {
    app: country_browser::AppState,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: country_browser::initialize(&Config::default()),
        }
    }
}

impl ZellijPlugin for State {
    /// Parses configuration, installs tracing, asks for `WebAccess` and
    /// subscribes to the events the browser reacts to.
    ///
    /// Nothing is fetched until the permission prompt is answered.
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        country_browser::observability::init_tracing(&config);

        let _guard = tracing::debug_span!("plugin_load").entered();

        self.app = country_browser::initialize(&config);

        request_permission(&[PermissionType::WebAccess]);
        subscribe(&[
            EventType::Key,
            EventType::CustomMessage,
            EventType::WebRequestResult,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!(endpoint = %config.endpoint, "plugin loaded, waiting for permissions");
    }

    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::event_name(&event);
        let span = tracing::debug_span!("plugin_update", otel.name = %format!("plugin_update::{event_name}"));
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::PermissionRequestResult(status) => Event::PermissionsResult {
                granted: matches!(status, PermissionStatus::Granted),
            },
            zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, context) => {
                if !is_countries_response(&context) {
                    return false;
                }
                tracing::debug!(status, body_len = body.len(), "dataset response");
                Event::CountriesFetched(interpret_response(status, &body))
            }
            zellij_tile::prelude::Event::CustomMessage(message, payload) => {
                match Self::map_worker_message(&message, &payload) {
                    Some(event) => event,
                    None => return false,
                }
            }
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                for action in actions {
                    Self::execute_action(action);
                }
                should_render
            }
            Err(e) => {
                tracing::debug!(error = %e, "error handling event");
                false
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        country_browser::ui::render(&self.app, rows, cols);
    }
}

impl State {
    fn event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::CustomMessage(name, _) => format!("CustomMessage({name})"),
            zellij_tile::prelude::Event::WebRequestResult(status, ..) => format!("WebRequestResult({status})"),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => "PermissionRequestResult".to_string(),
            _ => "Other".to_string(),
        }
    }

    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        if key.has_modifiers(&[KeyModifier::Ctrl]) {
            return match key.bare_key {
                BareKey::Char('n') => Some(Event::KeyDown),
                BareKey::Char('p') => Some(Event::KeyUp),
                _ => None,
            };
        }

        let event = match self.app.input_mode {
            InputMode::Search => match key.bare_key {
                BareKey::Down => Event::KeyDown,
                BareKey::Up => Event::KeyUp,
                BareKey::Enter => Event::FocusResults,
                BareKey::Esc => Event::ExitSearch,
                BareKey::Backspace => Event::Backspace,
                BareKey::Char(c) if !c.is_control() => Event::Char(c),
                _ => return None,
            },
            InputMode::Normal => match key.bare_key {
                BareKey::Down | BareKey::Char('j') => Event::KeyDown,
                BareKey::Up | BareKey::Char('k') => Event::KeyUp,
                BareKey::Char('/') => Event::StartSearch,
                BareKey::Char('r') => Event::ToggleRegionList,
                BareKey::Enter => Event::SelectRegion,
                BareKey::Char('t') => Event::ToggleTheme,
                BareKey::Esc => Event::ExitSearch,
                BareKey::Char('q') => Event::CloseFocus,
                _ => return None,
            },
        };

        Some(event)
    }

    fn map_worker_message(message: &str, payload: &str) -> Option<Event> {
        if message != WORKER_NAME {
            tracing::debug!(message_name = %message, "ignoring custom message with unknown name");
            return None;
        }

        match serde_json::from_str::<WorkerResponse>(payload) {
            Ok(response) => Some(Event::WorkerResponse(response)),
            Err(e) => {
                tracing::debug!(error = %e, "failed to deserialize worker response");
                None
            }
        }
    }

    fn post_worker_message(message: &WorkerMessage) {
        match serde_json::to_string(message) {
            Ok(payload) => post_message_to(PluginMessage {
                worker_name: Some(WORKER_NAME.to_string()),
                name: WORKER_NAME.to_string(),
                payload,
            }),
            Err(e) => tracing::debug!(error = %e, "failed to serialize worker message"),
        }
    }

    #[tracing::instrument(level = "debug")]
    fn execute_action(action: Action) {
        match action {
            Action::CloseFocus => hide_self(),
            Action::FetchCountries { url } => {
                web_request(url, HttpVerb::Get, BTreeMap::new(), vec![], countries_request_context());
            }
            Action::PostToWorker(message) => Self::post_worker_message(&message),
        }
    }
}
