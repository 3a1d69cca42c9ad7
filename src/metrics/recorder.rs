//! Metrics collaborator contract and its sinks.
//!
//! Recording is best effort. [`MetricsRecorder::track`] returns nothing, and a
//! sink that fails to persist an event logs the failure and drops the event.

use super::events::MetricEvent;
use crate::domain::error::{Result, SearchScreenError};
use crate::infrastructure::FileWriter;
use serde::Serialize;
use std::path::PathBuf;

/// Receiver of telemetry events.
pub trait MetricsRecorder {
    fn track(&self, event: MetricEvent);
}

/// Discards every event. Used when telemetry is disabled.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopMetrics;

impl MetricsRecorder for NoopMetrics {
    fn track(&self, event: MetricEvent) {
        tracing::trace!(event = event.name(), "metrics disabled, dropping event");
    }
}

#[derive(Serialize)]
struct MetricLine<'a> {
    recorded_at: i64,
    #[serde(flatten)]
    event: &'a MetricEvent,
}

/// Appends one JSON object per event to a rotating file.
///
/// ```text
/// {"recorded_at":1718000000123,"event":"entered_url","autocomplete":false}
/// ```
#[derive(Debug)]
pub struct JsonLinesMetrics {
    writer: FileWriter,
}

impl JsonLinesMetrics {
    #[must_use]
    pub const fn new(file_path: PathBuf) -> Self {
        Self {
            writer: FileWriter::new(file_path),
        }
    }

    /// Encodes and writes one event.
    ///
    /// # Errors
    ///
    /// Returns [`SearchScreenError::Metrics`] if the event cannot be encoded and
    /// [`SearchScreenError::Io`] if it cannot be written.
    pub fn write(&self, event: &MetricEvent) -> Result<()> {
        let line = serde_json::to_string(&MetricLine {
            recorded_at: chrono::Utc::now().timestamp_millis(),
            event,
        })
        .map_err(|e| SearchScreenError::Metrics(format!("failed to encode {}: {e}", event.name())))?;

        self.writer.write_line(&line)?;
        Ok(())
    }
}

impl MetricsRecorder for JsonLinesMetrics {
    fn track(&self, event: MetricEvent) {
        match self.write(&event) {
            Ok(()) => tracing::debug!(event = event.name(), "metric recorded"),
            Err(e) => tracing::warn!(
                event = event.name(),
                path = ?self.writer.path(),
                error = %e,
                "failed to record metric"
            ),
        }
    }
}
