// Telemetry initialisation
//
// Console logging through tracing-subscriber with an EnvFilter.
// Every binary calls init_telemetry once, before anything logs.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Configuration for logging
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    /// Service name, attached to the start-up log line
    pub service_name: String,
    /// Service version
    pub service_version: Option<String>,
    /// Log filter (e.g., "info", "debug", "chessplayers_api=debug")
    pub log_filter: Option<String>,
    /// Whether to print the target module on each line
    pub with_target: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            service_name: "chessplayers".to_string(),
            service_version: None,
            log_filter: None,
            with_target: true,
        }
    }
}

impl TelemetryConfig {
    /// Create configuration from environment variables
    ///
    /// Environment variables:
    /// - `SERVICE_NAME`: Service name (default: "chessplayers")
    /// - `RUST_LOG` or `LOG_LEVEL`: Log filter
    pub fn from_env() -> Self {
        Self {
            service_name: std::env::var("SERVICE_NAME")
                .unwrap_or_else(|_| "chessplayers".to_string()),
            service_version: None,
            log_filter: std::env::var("RUST_LOG")
                .ok()
                .or_else(|| std::env::var("LOG_LEVEL").ok()),
            with_target: true,
        }
    }

    /// Use `filter` unless a filter was already configured from the environment
    pub fn with_default_filter(mut self, filter: &str) -> Self {
        if self.log_filter.is_none() {
            self.log_filter = Some(filter.to_string());
        }
        self
    }

    fn env_filter(&self) -> EnvFilter {
        self.log_filter
            .as_ref()
            .and_then(|f| EnvFilter::try_new(f).ok())
            .unwrap_or_else(|| EnvFilter::new("info"))
    }
}

/// Install the global tracing subscriber.
///
/// Panics if a global subscriber is already set, like `tracing_subscriber::init`.
pub fn init_telemetry(config: TelemetryConfig) {
    let console_layer = tracing_subscriber::fmt::layer()
        .with_target(config.with_target)
        .with_filter(config.env_filter());

    tracing_subscriber::registry().with(console_layer).init();

    tracing::info!(
        service = %config.service_name,
        version = config.service_version.as_deref().unwrap_or("unknown"),
        "Telemetry initialized"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = TelemetryConfig::default();
        assert_eq!(config.service_name, "chessplayers");
        assert!(config.log_filter.is_none());
        assert!(config.with_target);
    }

    #[test]
    fn test_default_filter_does_not_override_explicit_one() {
        let config = TelemetryConfig {
            log_filter: Some("warn".to_string()),
            ..Default::default()
        }
        .with_default_filter("debug");
        assert_eq!(config.log_filter.as_deref(), Some("warn"));

        let config = TelemetryConfig::default().with_default_filter("debug");
        assert_eq!(config.log_filter.as_deref(), Some("debug"));
    }
}
