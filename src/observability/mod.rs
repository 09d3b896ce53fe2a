//! Trace export for the plugin.
//!
//! Zellij plugins run in a WASM sandbox with no stdout for logs and no
//! network, so spans are exported as OTLP JSON lines to a local file:
//!
//! ```text
//! tracing macros → tracing-opentelemetry → SDK TracerProvider → FileSpanExporter
//!                                                                  │
//!                         ~/.local/share/zellij/jobdeck/jobdeck-otlp.json
//! ```
//!
//! The file rotates at 10 MB and keeps three backups. The filter level comes
//! from the `trace_level` plugin option (default `info`).
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - [`tracer`]: Tracer provider with the file exporter
//! - [`span_formatter`]: OTLP JSON serialization of span batches
//! - [`file_writer`]: Size-rotated line writer

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use init::init_tracing;

/// `service.name` resource attribute and instrumentation scope name.
pub const SERVICE_NAME: &str = "Jobdeck";

/// Trace file name inside the plugin data directory.
pub const TRACE_FILE_NAME: &str = "jobdeck-otlp.json";
