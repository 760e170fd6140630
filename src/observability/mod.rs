//! Trace pipeline writing OTLP JSON to a local file.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → SDK TracerProvider
//!     → simple exporter → OTLP JSON line → rotating file
//! ```
//!
//! The plugin has no collector to talk to, so every exported batch becomes
//! one OTLP JSON document on its own line in
//! `~/.local/share/zellij/country-browser/country-browser-otlp.json`. The file
//! rotates at 10 MB and keeps three numbered backups.
//!
//! The level comes from the `trace_level` plugin option (default `info`) and
//! accepts any `EnvFilter` directive, e.g. `country_browser=debug`.
//!
//! - [`init`]: Subscriber setup
//! - [`exporter`]: `SpanExporter` writing to the file
//! - [`otlp`]: Span to OTLP JSON encoding
//! - [`rotation`]: Size-based rotating file

mod exporter;
mod init;
mod otlp;
mod rotation;

pub use init::init_tracing;

/// `service.name` resource attribute and instrumentation scope.
pub(crate) const SERVICE_NAME: &str = "CountryBrowser";

/// Trace file name inside the data directory.
pub(crate) const TRACE_FILE_NAME: &str = "country-browser-otlp.json";
