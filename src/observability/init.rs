//! Subscriber setup.

use super::exporter::file_tracer_provider;
use crate::domain::error::Result;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Name of the trace file inside the data directory.
pub const TRACE_FILE_NAME: &str = "linkhub-otlp.json";

/// Installs the global subscriber: an [`EnvFilter`] at `config.trace_level`
/// (default `info`) feeding an OpenTelemetry layer that exports to
/// `<data_dir>/linkhub-otlp.json`.
///
/// Calling it again once a subscriber is installed has no effect.
///
/// # Errors
///
/// Returns an error if the data directory cannot be created; no subscriber is
/// installed in that case and the plugin runs without traces.
pub fn init_tracing(config: &Config) -> Result<()> {
    let level = config.trace_level.as_deref().unwrap_or("info");

    std::fs::create_dir_all(&config.data_dir)?;

    let resource = Resource::new(vec![
        KeyValue::new("service.name", "linkhub"),
        KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
    ]);
    let provider = file_tracer_provider(config.data_dir.join(TRACE_FILE_NAME), resource);
    let tracer = provider.tracer("linkhub");

    let installed = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(OpenTelemetryLayer::new(tracer))
        .try_init();
    if installed.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
    Ok(())
}
