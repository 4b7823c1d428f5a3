//! Tracing subscriber setup.

use super::exporter::file_tracer_provider;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// File name of the span export inside the data directory.
pub const TRACE_FILE: &str = "docnav-otlp.json";

/// Installs the global subscriber: an [`EnvFilter`] plus an OpenTelemetry
/// layer exporting to `<data_dir>/docnav-otlp.json`.
///
/// The filter comes from `RUST_LOG` when set, else `config.trace_level`, else
/// `"info"`. Does nothing if the data directory cannot be created. Only the
/// first call installs a subscriber.
///
/// # Example
///
/// ```rust,no_run
/// use docnav::observability::init_tracing;
/// use docnav::Config;
///
/// let config = Config {
///     trace_level: Some("docnav=debug".to_string()),
///     ..Default::default()
/// };
/// init_tracing(&config);
/// ```
pub fn init_tracing(config: &Config) {
    let level = config.trace_level.as_deref().unwrap_or("info");
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let data_dir = crate::infrastructure::get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let resource = Resource::new(vec![
        KeyValue::new("service.name", "docnav"),
        KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
    ]);
    let provider = file_tracer_provider(data_dir.join(TRACE_FILE), resource);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(OpenTelemetryLayer::new(provider.tracer("docnav")))
        .try_init();
}
