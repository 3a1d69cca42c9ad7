//! OpenTelemetry span exporter writing one JSON object per span.
//!
//! Spans go through the same rotating [`FileWriter`] the metrics sink uses,
//! which keeps traces readable with nothing more than `jq`:
//!
//! ```text
//! tracing → tracing-opentelemetry → TracerProvider → SpanLineExporter → search-screen-otlp.jsonl
//! ```

use crate::infrastructure::FileWriter;
use futures_util::future::BoxFuture;
use opentelemetry::trace::{SpanId, Status, TraceError};
use opentelemetry::{KeyValue, Value};
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::TracerProvider;
use serde_json::{json, Map, Value as JsonValue};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

struct SpanLineExporter {
    writer: FileWriter,
    service: String,
    is_shutdown: AtomicBool,
}

impl SpanLineExporter {
    fn new(writer: FileWriter, service: String) -> Self {
        Self {
            writer,
            service,
            is_shutdown: AtomicBool::new(false),
        }
    }

    fn unix_nanos(time: SystemTime) -> u128 {
        time.duration_since(UNIX_EPOCH)
            .unwrap_or(Duration::ZERO)
            .as_nanos()
    }

    fn attribute_value(value: &Value) -> JsonValue {
        match value {
            Value::Bool(b) => JsonValue::Bool(*b),
            Value::I64(i) => JsonValue::from(*i),
            Value::F64(f) => JsonValue::from(*f),
            Value::String(s) => JsonValue::String(s.to_string()),
            Value::Array(_) => JsonValue::String(value.to_string()),
        }
    }

    fn attributes(attributes: &[KeyValue]) -> JsonValue {
        let map: Map<String, JsonValue> = attributes
            .iter()
            .map(|kv| (kv.key.to_string(), Self::attribute_value(&kv.value)))
            .collect();
        JsonValue::Object(map)
    }

    fn format_span(&self, span: &SpanData) -> JsonValue {
        let events: Vec<JsonValue> = span
            .events
            .iter()
            .map(|event| {
                json!({
                    "name": event.name,
                    "time_unix_nano": Self::unix_nanos(event.timestamp).to_string(),
                    "attributes": Self::attributes(&event.attributes),
                })
            })
            .collect();

        let status = match &span.status {
            Status::Unset => JsonValue::Null,
            Status::Ok => json!("ok"),
            Status::Error { description } => json!({ "error": description }),
        };

        let parent = (span.parent_span_id != SpanId::INVALID)
            .then(|| format!("{:016x}", span.parent_span_id));

        let duration = span
            .end_time
            .duration_since(span.start_time)
            .unwrap_or(Duration::ZERO);

        json!({
            "service": self.service,
            "trace_id": format!("{:032x}", span.span_context.trace_id()),
            "span_id": format!("{:016x}", span.span_context.span_id()),
            "parent_span_id": parent,
            "name": span.name,
            "start_unix_nano": Self::unix_nanos(span.start_time).to_string(),
            "duration_us": u64::try_from(duration.as_micros()).unwrap_or(u64::MAX),
            "attributes": Self::attributes(&span.attributes),
            "events": events,
            "status": status,
        })
    }
}

impl SpanExporter for SpanLineExporter {
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        if self.is_shutdown.load(Ordering::SeqCst) {
            return Box::pin(std::future::ready(Err(TraceError::from(
                "exporter is shut down",
            ))));
        }

        let result = batch.iter().try_for_each(|span| {
            self.writer.write_line(&self.format_span(span).to_string())
        });

        Box::pin(std::future::ready(
            result.map_err(|e| TraceError::from(e.to_string())),
        ))
    }

    fn shutdown(&mut self) {
        self.is_shutdown.store(true, Ordering::SeqCst);
    }
}

impl std::fmt::Debug for SpanLineExporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpanLineExporter")
            .field("writer", &self.writer)
            .field("service", &self.service)
            .field("is_shutdown", &self.is_shutdown)
            .finish()
    }
}

/// Builds a tracer provider that exports every finished span immediately to
/// `file_path`.
pub fn create_tracer_provider(file_path: PathBuf, service: &str, resource: Resource) -> TracerProvider {
    let exporter = SpanLineExporter::new(FileWriter::new(file_path), service.to_string());

    TracerProvider::builder()
        .with_config(opentelemetry_sdk::trace::Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}
