//! Telemetry configuration from environment variables.

use serde::{Deserialize, Serialize};
use std::env;

/// Configuration for structured logging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TelemetryConfig {
    /// Service name attached to every event
    pub service_name: String,

    /// Log level filter (trace, debug, info, warn, error, or a full directive)
    pub log_level: String,

    /// Whether to write events to stderr at all
    pub console_output: bool,

    /// Whether to emit JSON instead of human-readable lines
    pub json_logs: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            service_name: "waitgate".to_string(),
            log_level: "info".to_string(),
            console_output: true,
            json_logs: false,
        }
    }
}

impl TelemetryConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `WG_SERVICE_NAME`: Service name (default: waitgate)
    /// - `WG_LOG_LEVEL` or `RUST_LOG`: Log level (default: info)
    /// - `WG_CONSOLE_OUTPUT`: Enable console output (default: true)
    /// - `WG_JSON_LOGS`: Enable JSON logs (default: false, true in containers)
    pub fn from_env() -> Self {
        let is_container =
            env::var("KUBERNETES_SERVICE_HOST").is_ok() || env::var("DOCKER_CONTAINER").is_ok();

        Self {
            service_name: env::var("WG_SERVICE_NAME").unwrap_or_else(|_| "waitgate".to_string()),

            log_level: env::var("WG_LOG_LEVEL")
                .or_else(|_| env::var("RUST_LOG"))
                .unwrap_or_else(|_| "info".to_string()),

            console_output: env::var("WG_CONSOLE_OUTPUT")
                .map(|v| v.to_lowercase() != "false" && v != "0")
                .unwrap_or(true),

            json_logs: env::var("WG_JSON_LOGS")
                .map(|v| v.to_lowercase() == "true" || v == "1")
                .unwrap_or(is_container),
        }
    }

    /// Overlay environment variables that are actually set onto `self`.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(name) = env::var("WG_SERVICE_NAME") {
            self.service_name = name;
        }
        if let Ok(level) = env::var("WG_LOG_LEVEL") {
            self.log_level = level;
        }
        if let Ok(v) = env::var("WG_JSON_LOGS") {
            self.json_logs = v.to_lowercase() == "true" || v == "1";
        }
        self
    }
}
