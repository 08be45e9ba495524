//! Telemetry module for logging and OpenTelemetry distributed tracing.
//!
//! This module provides initialization for the `tracing` subscriber stack:
//! an `EnvFilter`, a console formatter (pretty or JSON), and an optional
//! OpenTelemetry layer with OTLP export.

#[cfg(feature = "telemetry")]
use opentelemetry::trace::TracerProvider;
#[cfg(feature = "telemetry")]
use opentelemetry::KeyValue;
#[cfg(feature = "telemetry")]
use opentelemetry_otlp::WithExportConfig;
#[cfg(feature = "telemetry")]
use opentelemetry_sdk::{
    runtime,
    trace::{RandomIdGenerator, Sampler},
    Resource,
};
#[cfg(feature = "telemetry")]
use opentelemetry_semantic_conventions::resource::SERVICE_NAME;
#[cfg(feature = "telemetry")]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::PricegateResult;
use serde::{Deserialize, Serialize};

/// Telemetry configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryConfig {
    /// Whether OpenTelemetry export is enabled.
    #[serde(default)]
    pub enabled: bool,

    /// Service name for tracing.
    #[serde(default = "default_service_name")]
    pub service_name: String,

    /// OTLP endpoint URL (e.g., "http://localhost:4317").
    #[serde(default)]
    pub otlp_endpoint: Option<String>,

    /// Sampling ratio (0.0 to 1.0).
    #[serde(default = "default_sampling_ratio")]
    pub sampling_ratio: f64,

    /// Whether to enable console output.
    #[serde(default = "default_console_output")]
    pub console_output: bool,

    /// Console format: `pretty` or `json`.
    #[serde(default = "default_log_format")]
    pub log_format: String,

    /// Filter directive used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_service_name() -> String {
    "pricegate".to_string()
}

fn default_sampling_ratio() -> f64 {
    1.0
}

fn default_console_output() -> bool {
    true
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_log_filter() -> String {
    "info,pricegate=debug,tower_http=debug".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            service_name: default_service_name(),
            otlp_endpoint: None,
            sampling_ratio: default_sampling_ratio(),
            console_output: default_console_output(),
            log_format: default_log_format(),
            log_filter: default_log_filter(),
        }
    }
}

impl TelemetryConfig {
    /// Returns true if console output should be JSON formatted.
    #[must_use]
    pub fn json_output(&self) -> bool {
        self.log_format.eq_ignore_ascii_case("json")
    }
}

/// Initialize telemetry with the given configuration.
///
/// This sets up:
/// - an `EnvFilter` from `RUST_LOG`, falling back to `log_filter`
/// - console output (pretty or JSON) if enabled
/// - OpenTelemetry tracer with OTLP exporter if `enabled`
#[cfg(feature = "telemetry")]
pub fn init_telemetry(config: &TelemetryConfig) -> PricegateResult<()> {
    let tracer = if config.enabled {
        Some(build_tracer(config)?)
    } else {
        None
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_filter.as_str()));

    let json_layer = (config.console_output && config.json_output())
        .then(|| tracing_subscriber::fmt::layer().json().with_target(true));
    let pretty_layer = (config.console_output && !config.json_output())
        .then(|| tracing_subscriber::fmt::layer().with_target(true));
    let otel_layer = tracer.map(|tracer| tracing_opentelemetry::layer().with_tracer(tracer));

    tracing_subscriber::registry()
        .with(filter)
        .with(otel_layer)
        .with(json_layer)
        .with(pretty_layer)
        .try_init()
        .map_err(|e| crate::PricegateError::Internal(format!("Failed to install subscriber: {}", e)))?;

    tracing::info!(
        service_name = %config.service_name,
        otel_enabled = config.enabled,
        sampling_ratio = %config.sampling_ratio,
        otlp_endpoint = ?config.otlp_endpoint,
        "Telemetry initialized"
    );

    Ok(())
}

#[cfg(feature = "telemetry")]
fn build_tracer(config: &TelemetryConfig) -> PricegateResult<opentelemetry_sdk::trace::Tracer> {
    let sampler = if config.sampling_ratio >= 1.0 {
        Sampler::AlwaysOn
    } else if config.sampling_ratio <= 0.0 {
        Sampler::AlwaysOff
    } else {
        Sampler::TraceIdRatioBased(config.sampling_ratio)
    };

    let resource = Resource::new(vec![KeyValue::new(SERVICE_NAME, config.service_name.clone())]);

    let tracer_provider = if let Some(endpoint) = &config.otlp_endpoint {
        let exporter = opentelemetry_otlp::SpanExporter::builder()
            .with_tonic()
            .with_endpoint(endpoint)
            .build()
            .map_err(|e| crate::PricegateError::Internal(format!("Failed to create OTLP exporter: {}", e)))?;

        opentelemetry_sdk::trace::TracerProvider::builder()
            .with_batch_exporter(exporter, runtime::Tokio)
            .with_sampler(sampler)
            .with_id_generator(RandomIdGenerator::default())
            .with_resource(resource)
            .build()
    } else {
        // No OTLP endpoint: spans get ids and sampling but are not exported
        opentelemetry_sdk::trace::TracerProvider::builder()
            .with_sampler(sampler)
            .with_id_generator(RandomIdGenerator::default())
            .with_resource(resource)
            .build()
    };

    let tracer = tracer_provider.tracer("pricegate");
    opentelemetry::global::set_tracer_provider(tracer_provider);

    Ok(tracer)
}

/// Shutdown telemetry, flushing any pending spans.
#[cfg(feature = "telemetry")]
pub fn shutdown_telemetry() {
    opentelemetry::global::shutdown_tracer_provider();
    tracing::info!("Telemetry shutdown complete");
}

/// Placeholder for when telemetry feature is disabled.
#[cfg(not(feature = "telemetry"))]
pub fn init_telemetry(_config: &TelemetryConfig) -> PricegateResult<()> {
    Ok(())
}

/// Placeholder for when telemetry feature is disabled.
#[cfg(not(feature = "telemetry"))]
pub fn shutdown_telemetry() {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TelemetryConfig::default();
        assert!(!config.enabled);
        assert_eq!(config.service_name, "pricegate");
        assert_eq!(config.sampling_ratio, 1.0);
        assert!(config.console_output);
        assert!(!config.json_output());
    }

    #[test]
    fn test_json_output_is_case_insensitive() {
        let config = TelemetryConfig {
            log_format: "JSON".to_string(),
            ..TelemetryConfig::default()
        };
        assert!(config.json_output());
    }
}
