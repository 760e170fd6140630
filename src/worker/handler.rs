//! Preference worker running on a Zellij worker thread.
//!
//! Keeps file I/O off the render loop. The store is opened lazily on the first
//! message so a missing or unwritable data directory only affects theme
//! persistence, never browsing.

use crate::domain::error::{CountryBrowserError, Result};
use crate::infrastructure::paths;
use crate::storage::{JsonPreferenceStore, PreferenceStore, ThemeChoice};
use crate::worker::{WorkerMessage, WorkerResponse};
use serde::{Deserialize, Serialize};
use zellij_tile::prelude::{PluginMessage, ZellijWorker};
use zellij_tile::shim::post_message_to_plugin;

/// Name of the preference file inside the data directory.
const PREFERENCES_FILE: &str = "preferences.json";

/// Worker thread state.
#[derive(Serialize, Deserialize, Default)]
pub struct PreferenceWorker {
    #[serde(skip)]
    store: Option<Box<dyn PreferenceStore>>,
}

impl PreferenceWorker {
    /// Creates a worker backed by the JSON store in the data directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be opened.
    pub fn open_default() -> Result<Self> {
        let path = paths::get_data_dir().join(PREFERENCES_FILE);
        Ok(Self::with_store(Box::new(JsonPreferenceStore::new(path)?)))
    }

    /// Creates a worker over an already-opened store.
    #[must_use]
    pub fn with_store(store: Box<dyn PreferenceStore>) -> Self {
        Self { store: Some(store) }
    }

    fn store_mut(&mut self) -> Result<&mut Box<dyn PreferenceStore>> {
        self.store
            .as_mut()
            .ok_or_else(|| CountryBrowserError::Worker("preference store not initialized".to_string()))
    }

    fn handle_load_theme(&mut self, now: i64) -> WorkerResponse {
        match self.store_mut().and_then(|store| store.load_theme(now)) {
            Ok(theme) => {
                let dark = theme.is_some_and(ThemeChoice::is_dark);
                tracing::debug!(dark = dark, stored = theme.is_some(), "theme loaded");
                WorkerResponse::ThemeLoaded { dark }
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to read theme, falling back to light");
                WorkerResponse::ThemeLoaded { dark: false }
            }
        }
    }

    fn handle_save_theme(&mut self, dark: bool, now: i64) -> WorkerResponse {
        let theme = ThemeChoice::from_dark(dark);

        match self.store_mut().and_then(|store| store.save_theme(theme, now)) {
            Ok(record) => {
                tracing::debug!(dark = dark, expires_at = record.expires_at, "theme saved");
                WorkerResponse::ThemeSaved {
                    dark,
                    expires_at: record.expires_at,
                }
            }
            Err(e) => {
                tracing::debug!(error = %e, "failed to save theme");
                WorkerResponse::Error {
                    message: format!("save theme: {e}"),
                }
            }
        }
    }

    /// Reattaches the sender's trace context on this thread.
    ///
    /// The returned guard must be held for the duration of the operation.
    fn attach_parent_trace_context(message: &WorkerMessage) -> Option<opentelemetry::ContextGuard> {
        use opentelemetry::trace::{SpanContext, SpanId, TraceContextExt, TraceFlags, TraceId, TraceState};

        let trace_context = message.trace_context()?;
        let trace_id = TraceId::from_hex(&trace_context.trace_id).ok()?;
        let span_id = SpanId::from_hex(&trace_context.parent_span_id).ok()?;

        let span_context = SpanContext::new(trace_id, span_id, TraceFlags::SAMPLED, true, TraceState::default());

        Some(opentelemetry::Context::current().with_remote_span_context(span_context).attach())
    }

    /// Processes one message at time `now` and returns the response.
    pub fn handle_message_at(&mut self, message: WorkerMessage, now: i64) -> WorkerResponse {
        let _context_guard = Self::attach_parent_trace_context(&message);
        let _span = tracing::debug_span!("worker_handle_message", message_type = ?message).entered();

        match message {
            WorkerMessage::LoadTheme { .. } => self.handle_load_theme(now),
            WorkerMessage::SaveTheme { dark, .. } => self.handle_save_theme(dark, now),
        }
    }

    /// Processes one message using the current wall clock.
    pub fn handle_message(&mut self, message: WorkerMessage) -> WorkerResponse {
        self.handle_message_at(message, chrono::Utc::now().timestamp())
    }
}

fn post_response(name: String, response: &WorkerResponse) {
    match serde_json::to_string(response) {
        Ok(payload) => post_message_to_plugin(PluginMessage {
            name,
            payload,
            worker_name: None,
        }),
        Err(e) => tracing::debug!(error = %e, "failed to serialize worker response"),
    }
}

impl ZellijWorker<'_> for PreferenceWorker {
    fn on_message(&mut self, message: String, payload: String) {
        // The worker is a separate wasm instance and needs its own subscriber.
        crate::observability::init_tracing(&crate::Config::default());

        let worker_message: WorkerMessage = match serde_json::from_str(&payload) {
            Ok(msg) => msg,
            Err(e) => {
                tracing::debug!(error = %e, "failed to deserialize worker message");
                return;
            }
        };

        if self.store.is_none() {
            match Self::open_default() {
                Ok(worker) => self.store = worker.store,
                Err(e) => {
                    tracing::debug!(error = %e, "failed to open preference store");
                    if matches!(worker_message, WorkerMessage::LoadTheme { .. }) {
                        post_response(message, &WorkerResponse::ThemeLoaded { dark: false });
                    } else {
                        post_response(
                            message,
                            &WorkerResponse::Error {
                                message: format!("failed to open preference store: {e}"),
                            },
                        );
                    }
                    return;
                }
            }
        }

        let response = self.handle_message(worker_message);
        post_response(message, &response);
    }
}
