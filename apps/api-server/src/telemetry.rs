//! Telemetry initialization - tracing subscriber setup.

use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is unset or unparseable.
const DEFAULT_FILTER: &str = "info,api_server=debug,quill_infra=debug";

/// Output encoding of log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Multi-line human readable output.
    Pretty,
    /// One JSON object per event, for log shippers.
    Json,
}

/// Telemetry configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelemetryConfig {
    pub format: LogFormat,
    /// Service name recorded on startup.
    pub service_name: String,
    /// Directive string from `RUST_LOG`, if any.
    pub filter: Option<String>,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::Pretty,
            service_name: "quill-api".to_string(),
            filter: None,
        }
    }
}

impl TelemetryConfig {
    /// Load configuration from `LOG_FORMAT`, `SERVICE_NAME` and `RUST_LOG`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let format = match lookup("LOG_FORMAT") {
            Some(v) if v.eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Pretty,
        };

        Self {
            format,
            service_name: lookup("SERVICE_NAME").unwrap_or(defaults.service_name),
            filter: lookup("RUST_LOG").filter(|v| !v.trim().is_empty()),
        }
    }

    fn env_filter(&self) -> EnvFilter {
        self.filter
            .as_deref()
            .and_then(|directives| EnvFilter::try_new(directives).ok())
            .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
    }
}

/// Install the global tracing subscriber.
///
/// Fails if a subscriber has already been installed.
pub fn init_telemetry(config: &TelemetryConfig) -> Result<(), TryInitError> {
    let (json, pretty) = match config.format {
        LogFormat::Json => (Some(fmt::layer().json()), None),
        LogFormat::Pretty => (None, Some(fmt::layer().pretty())),
    };

    tracing_subscriber::registry()
        .with(config.env_filter())
        .with(json)
        .with(pretty)
        .try_init()?;

    tracing::info!(
        service = %config.service_name,
        format = ?config.format,
        "Telemetry initialized"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> TelemetryConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        TelemetryConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_without_env() {
        assert_eq!(config_from(&[]), TelemetryConfig::default());
    }

    #[test]
    fn test_json_format_and_overrides() {
        let config = config_from(&[
            ("LOG_FORMAT", "JSON"),
            ("SERVICE_NAME", "quill-staging"),
            ("RUST_LOG", "warn"),
        ]);
        assert_eq!(config.format, LogFormat::Json);
        assert_eq!(config.service_name, "quill-staging");
        assert_eq!(config.filter.as_deref(), Some("warn"));
    }

    #[test]
    fn test_unknown_format_and_blank_filter_fall_back() {
        let config = config_from(&[("LOG_FORMAT", "logfmt"), ("RUST_LOG", "  ")]);
        assert_eq!(config.format, LogFormat::Pretty);
        assert_eq!(config.filter, None);
        assert_eq!(config.env_filter().to_string(), EnvFilter::new(DEFAULT_FILTER).to_string());
    }
}
