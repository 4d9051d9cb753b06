//! Telemetry initialization: structured logging and metric descriptions

pub mod metrics;

use crate::config::TelemetryConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install a global `tracing` subscriber for hosts that do not bring their own.
///
/// Returns `false` when a subscriber was already installed; the existing one
/// is left in place.
pub fn init(config: &TelemetryConfig) -> bool {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "lancepay_notifications=info".into());

    if config.metrics_enabled {
        metrics::describe_metrics();
    }

    let registry = tracing_subscriber::registry().with(env_filter);

    let installed = if config.log_format == "json" {
        // Flatten event fields so `message` is top-level in JSON output
        let fmt_layer = tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true);
        registry.with(fmt_layer).try_init()
    } else {
        registry.with(tracing_subscriber::fmt::layer()).try_init()
    };

    installed.is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        let config = TelemetryConfig {
            log_format: "json".to_string(),
            metrics_enabled: true,
        };

        init(&config);
        // A second install must not panic
        assert!(!init(&config));
    }
}
