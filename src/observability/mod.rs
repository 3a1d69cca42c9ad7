//! OpenTelemetry tracing exported to a local JSON-lines file.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → OpenTelemetry SDK → exporter → <data_dir>/search-screen-otlp.jsonl
//! ```
//!
//! The store opens a `dispatch` span per action and the controller one span
//! per gesture, so a trace file shows every gesture with the actions it
//! produced nested beneath it.
//!
//! # Filter Resolution
//!
//! 1. `RUST_LOG` environment variable
//! 2. `trace_level` from [`Config`](crate::Config)
//! 3. Default: `"info"`
//!
//! # Modules
//!
//! - [`init`]: subscriber setup
//! - [`exporter`]: span exporter and tracer provider

pub mod exporter;
pub mod init;

pub use init::init_tracing;

/// `service.name` reported on every exported span.
pub const SERVICE_NAME: &str = "search-screen";
