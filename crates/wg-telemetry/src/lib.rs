//! # Waitgate Telemetry
//!
//! Structured logging for Waitgate services.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use wg_telemetry::{init_logging, TelemetryConfig};
//!
//! let config = TelemetryConfig::from_env();
//! init_logging(&config)?;
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `WG_SERVICE_NAME` | `waitgate` | Service name in log events |
//! | `WG_LOG_LEVEL` | `info` | Log level filter (falls back to `RUST_LOG`) |
//! | `WG_CONSOLE_OUTPUT` | `true` | Write events to stderr |
//! | `WG_JSON_LOGS` | `false` | JSON output (defaults on in containers) |

mod config;
mod logging;

pub use config::TelemetryConfig;
pub use logging::init_logging;

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Invalid log filter: {0}")]
    Filter(String),

    #[error("Global subscriber already installed: {0}")]
    AlreadyInitialized(String),
}
