//! Operator configuration file.
//!
//! ```toml
//! [telemetry]
//! log_level = "debug"
//!
//! [admission]
//! default_country_code = "1"
//! max_metadata_entries = 16
//!
//! [registration]
//! registry_timeout_ms = 500
//!
//! [policy]
//! capacity = 1000
//! registration_cap = 250
//! signup_cutoff = 100
//! registration_mode = "waitlist_only"
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use wg_01_admission::AdmissionConfig;
use wg_02_eligibility::{PolicySnapshot, RegistrationConfig};
use wg_telemetry::TelemetryConfig;

/// Full wg-admin configuration. Every table is optional.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminConfig {
    pub telemetry: TelemetryConfig,
    pub admission: AdmissionConfig,
    pub registration: RegistrationConfig,
    pub policy: PolicySnapshot,
}

impl AdminConfig {
    /// Parses a TOML document.
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("Failed to parse wg-admin config")
    }

    /// Loads from `path`, or returns defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read config {}", path.display()))?;
                Self::from_toml(&text)
            }
            None => Ok(Self::default()),
        }
    }
}
