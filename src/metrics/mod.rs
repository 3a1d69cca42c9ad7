//! Telemetry for the search screen.
//!
//! - [`events`]: the events the controller emits
//! - [`recorder`]: the [`MetricsRecorder`] contract plus a no-op and a
//!   JSON-lines file sink

pub mod events;
pub mod recorder;

pub use events::MetricEvent;
pub use recorder::{JsonLinesMetrics, MetricsRecorder, NoopMetrics};
