//! Tracer provider that exports spans to a local JSON file.
//!
//! The plugin runs inside the Zellij WASM sandbox without network access, so
//! spans are appended to `jobdeck-otlp.json` in the data directory instead of
//! being shipped to a collector.

use super::file_writer::FileWriter;
use super::span_formatter::SpanFormatter;
use futures_util::future::BoxFuture;
use opentelemetry::trace::TraceError;
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::TracerProvider;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};

/// Writes each span batch as one OTLP JSON line.
struct FileSpanExporter {
    writer: FileWriter,
    formatter: SpanFormatter,
    is_shutdown: AtomicBool,
}

impl FileSpanExporter {
    const fn new(file_path: PathBuf, resource: Resource) -> Self {
        Self {
            writer: FileWriter::new(file_path),
            formatter: SpanFormatter::new(resource),
            is_shutdown: AtomicBool::new(false),
        }
    }
}

impl SpanExporter for FileSpanExporter {
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        if self.is_shutdown.load(Ordering::SeqCst) {
            return Box::pin(std::future::ready(Err(TraceError::from(
                "jobdeck span exporter is shut down",
            ))));
        }

        let line = self.formatter.format_batch(&batch).to_string();
        let result = self
            .writer
            .write_line(&line)
            .map_err(|e| TraceError::from(e.to_string()));
        Box::pin(std::future::ready(result))
    }

    fn shutdown(&mut self) {
        self.is_shutdown.store(true, Ordering::SeqCst);
    }

    // Resource is fixed at construction.
    fn set_resource(&mut self, _res: &Resource) {}
}

impl std::fmt::Debug for FileSpanExporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileSpanExporter")
            .field("writer", &self.writer)
            .field("is_shutdown", &self.is_shutdown)
            .finish_non_exhaustive()
    }
}

/// Builds a provider with a simple (unbatched) file exporter.
///
/// The sandbox has no async runtime to drive a batch processor, so each span
/// is written as soon as it closes.
pub fn create_tracer_provider(file_path: PathBuf, resource: Resource) -> TracerProvider {
    let exporter = FileSpanExporter::new(file_path, resource.clone());

    TracerProvider::builder()
        .with_config(opentelemetry_sdk::trace::Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use opentelemetry::KeyValue;

    #[test]
    fn export_after_shutdown_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.json");
        let resource = Resource::new(vec![KeyValue::new("service.name", super::super::SERVICE_NAME)]);
        let mut exporter = FileSpanExporter::new(path.clone(), resource);

        let ok = futures_util::FutureExt::now_or_never(exporter.export(Vec::new()));
        assert!(matches!(ok, Some(Ok(()))));
        assert!(std::fs::read_to_string(&path).unwrap().contains("resourceSpans"));

        exporter.shutdown();
        let rejected = futures_util::FutureExt::now_or_never(exporter.export(Vec::new()));
        assert!(matches!(rejected, Some(Err(_))));
    }
}
