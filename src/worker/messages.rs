//! Plugin ⇄ worker protocol.
//!
//! Requests carry the sender's trace context so the worker's spans join the
//! trace of the key press or permission grant that caused them. Both sides
//! travel as JSON in `PluginMessage` payloads.

use serde::{Deserialize, Serialize};

/// IDs of the span that sent a message, so the worker can parent its own
/// span under it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceContext {
    /// 32 hex chars.
    pub trace_id: String,

    /// 16 hex chars.
    pub parent_span_id: String,
}

impl TraceContext {
    /// Captures the trace and span IDs of the current tracing span.
    ///
    /// Returns `None` when no valid OpenTelemetry context is active, e.g. when
    /// tracing was never initialized.
    #[must_use]
    pub fn from_current() -> Option<Self> {
        use opentelemetry::trace::TraceContextExt;
        use tracing_opentelemetry::OpenTelemetrySpanExt;

        let context = tracing::Span::current().context();
        let span = context.span();
        let ids = span.span_context();

        ids.is_valid().then(|| Self {
            trace_id: format!("{:032x}", ids.trace_id()),
            parent_span_id: format!("{:016x}", ids.span_id()),
        })
    }
}

/// Messages sent from the plugin thread to the worker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerMessage {
    /// Read the persisted theme, honouring its expiry.
    LoadTheme {
        #[serde(skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },

    /// Persist the theme for the next two hours.
    SaveTheme {
        /// `true` for dark, `false` for light.
        dark: bool,

        #[serde(skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },
}

impl WorkerMessage {
    /// Asks for the stored theme, tagged with the current trace.
    #[must_use]
    pub fn load_theme() -> Self {
        Self::LoadTheme {
            trace_context: TraceContext::from_current(),
        }
    }

    /// Asks the worker to persist `dark`, tagged with the current trace.
    #[must_use]
    pub fn save_theme(dark: bool) -> Self {
        Self::SaveTheme {
            dark,
            trace_context: TraceContext::from_current(),
        }
    }

    /// Returns the trace context carried by any variant.
    #[must_use]
    pub const fn trace_context(&self) -> Option<&TraceContext> {
        match self {
            Self::LoadTheme { trace_context } | Self::SaveTheme { trace_context, .. } => {
                trace_context.as_ref()
            }
        }
    }
}

/// Responses sent from the worker back to the plugin thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerResponse {
    /// The persisted theme; `false` when absent, expired or unreadable.
    ThemeLoaded { dark: bool },

    /// The theme was written.
    ThemeSaved {
        dark: bool,
        /// Unix timestamp at which the stored value lapses.
        expires_at: i64,
    },

    /// A worker operation failed.
    Error {
        /// Human-readable error message.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builders_carry_no_context_without_tracing() {
        let message = WorkerMessage::save_theme(true);

        assert_eq!(
            message,
            WorkerMessage::SaveTheme {
                dark: true,
                trace_context: None
            }
        );
        assert!(message.trace_context().is_none());
    }

    #[test]
    fn absent_context_is_not_serialized() {
        let json = serde_json::to_string(&WorkerMessage::load_theme()).unwrap();

        assert_eq!(json, r#"{"LoadTheme":{}}"#);
    }
}
