//! `SpanExporter` that appends OTLP JSON lines to a rotating file.

use super::otlp;
use super::rotation::RotatingFile;
use futures_util::future::BoxFuture;
use opentelemetry::trace::TraceError;
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::TracerProvider;
use std::path::PathBuf;

/// Writes each exported batch as one line.
#[derive(Debug)]
struct OtlpFileExporter {
    file: RotatingFile,
    resource: Resource,
    stopped: bool,
}

impl OtlpFileExporter {
    fn new(path: PathBuf, resource: Resource) -> Self {
        Self {
            file: RotatingFile::new(path),
            resource,
            stopped: false,
        }
    }

    fn write_batch(&self, batch: &[SpanData]) -> ExportResult {
        if self.stopped {
            return Err(TraceError::from("file exporter already shut down"));
        }

        let document = otlp::encode_batch(&self.resource, batch);
        self.file
            .append_line(&document.to_string())
            .map_err(|e| TraceError::from(format!("trace file write failed: {e}")))
    }
}

impl SpanExporter for OtlpFileExporter {
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        let result = self.write_batch(&batch);
        Box::pin(std::future::ready(result))
    }

    fn shutdown(&mut self) {
        self.stopped = true;
    }

    fn set_resource(&mut self, resource: &Resource) {
        self.resource = resource.clone();
    }
}

/// Builds a provider that exports every finished span immediately.
///
/// The simple (unbatched) processor is used because the plugin runs on a
/// single-threaded wasm runtime without a background executor.
pub fn build_provider(path: PathBuf, resource: Resource) -> TracerProvider {
    let exporter = OtlpFileExporter::new(path, resource.clone());

    TracerProvider::builder()
        .with_config(opentelemetry_sdk::trace::Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}
