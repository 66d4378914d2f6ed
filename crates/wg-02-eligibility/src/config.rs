//! Configuration for the Eligibility subsystem

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Orchestrator configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistrationConfig {
    /// Deadline for each registry call (milliseconds)
    pub registry_timeout_ms: u64,
}

impl RegistrationConfig {
    /// Registry deadline as a `Duration`
    pub fn registry_timeout(&self) -> Duration {
        Duration::from_millis(self.registry_timeout_ms)
    }
}

impl Default for RegistrationConfig {
    fn default() -> Self {
        Self {
            registry_timeout_ms: 2_000,
        }
    }
}
