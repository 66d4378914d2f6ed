//! Waitlist entities.

use super::identity::{Identity, NormalizerConfig};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use uuid::Uuid;

/// Caller-supplied key/value data attached to an entry.
pub type Metadata = BTreeMap<String, String>;

/// 1-based waitlist rank. `0` means "not on the waitlist".
pub type Position = u64;

/// Opaque unique entry identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(Uuid);

impl EntryId {
    /// Generates a fresh random id.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

}

impl Default for EntryId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A single waitlist record.
///
/// Created exactly once by a successful admission. Only `metadata` changes
/// afterwards (overwritten by repeated admission attempts).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaitlistEntry {
    pub entry_id: EntryId,
    pub position: Position,
    pub identity: Identity,
    pub metadata: Metadata,
}

/// Result of a successful enqueue-or-lookup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Admission {
    pub entry_id: EntryId,
    pub position: Position,
    /// `true` when the identity was already queued and nothing was appended.
    pub already_existed: bool,
}

/// Admission subsystem configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdmissionConfig {
    /// Country calling code for national-format phone numbers.
    pub default_country_code: Option<String>,
    /// Maximum metadata keys accepted per admission.
    pub max_metadata_entries: usize,
}

impl Default for AdmissionConfig {
    fn default() -> Self {
        Self {
            default_country_code: None,
            max_metadata_entries: 32,
        }
    }
}

impl From<&AdmissionConfig> for NormalizerConfig {
    fn from(config: &AdmissionConfig) -> Self {
        Self {
            default_country_code: config.default_country_code.clone(),
        }
    }
}
