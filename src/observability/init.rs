//! Subscriber setup.

use super::{exporter, SERVICE_NAME, TRACE_FILE_NAME};
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::resource::Resource;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Level used when `trace_level` is unset or not a valid directive.
const DEFAULT_LEVEL: &str = "info";

static INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Installs the global subscriber exporting to the trace file.
///
/// Best-effort and idempotent: the first call in a wasm instance wins,
/// later calls return immediately, and an unusable data directory leaves
/// tracing disabled rather than failing the plugin.
pub fn init_tracing(config: &Config) {
    if INITIALIZED.swap(true, Ordering::SeqCst) {
        return;
    }

    let data_dir = crate::infrastructure::paths::get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let resource = Resource::new(vec![opentelemetry::KeyValue::new("service.name", SERVICE_NAME)]);
    let provider = exporter::build_provider(data_dir.join(TRACE_FILE_NAME), resource);
    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME));

    let _ = tracing_subscriber::registry()
        .with(level_filter(config.trace_level.as_deref()))
        .with(otel_layer)
        .try_init();
}

/// Builds the filter for `level`, falling back to `info` on bad input.
fn level_filter(level: Option<&str>) -> EnvFilter {
    level
        .map(str::trim)
        .filter(|directive| !directive.is_empty())
        .and_then(|directive| EnvFilter::try_new(directive).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LEVEL))
}
