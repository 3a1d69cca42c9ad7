//! Tracing subscriber setup.

use super::{exporter, SERVICE_NAME};
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs the global tracing subscriber.
///
/// Spans are written to [`Config::trace_path`]. The data directory is created
/// on demand; if that fails tracing simply stays off, since observability is
/// optional. Only the first call in a process takes effect.
///
/// ```rust,no_run
/// use search_screen::observability::init_tracing;
/// use search_screen::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
/// init_tracing(&config);
///
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let level = config
        .trace_level
        .clone()
        .unwrap_or_else(|| "info".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    if std::fs::create_dir_all(config.data_dir()).is_err() {
        return;
    }

    let resource = Resource::new(vec![KeyValue::new("service.name", SERVICE_NAME)]);
    let provider = exporter::create_tracer_provider(config.trace_path(), SERVICE_NAME, resource);

    let tracer = provider.tracer(SERVICE_NAME);
    let otel_layer = OpenTelemetryLayer::new(tracer);

    let subscriber = tracing_subscriber::registry().with(filter).with(otel_layer);

    let _ = subscriber.try_init();
}
