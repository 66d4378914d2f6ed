//! Onboarding policy snapshot.
//!
//! Owned and mutated by the external registry. The evaluator only ever sees
//! one consistent copy per decision.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How new registrants are let in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegistrationMode {
    /// Anyone passing the capacity check may register.
    #[default]
    Open,
    /// Only waitlisted identities within the signup cutoff may register.
    WaitlistOnly,
}

impl fmt::Display for RegistrationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open => write!(f, "open"),
            Self::WaitlistOnly => write!(f, "waitlist_only"),
        }
    }
}

impl FromStr for RegistrationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "open" => Ok(Self::Open),
            "waitlist_only" | "waitlist-only" | "waitlist" => Ok(Self::WaitlistOnly),
            other => Err(format!("unknown registration mode: {other}")),
        }
    }
}

/// Point-in-time onboarding policy.
///
/// Sentinels: `registration_cap == 0` is unlimited, `signup_cutoff < 0`
/// closes registration for every waitlisted identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicySnapshot {
    /// Maximum waitlist length.
    pub capacity: u64,
    /// Identities that completed full registration.
    pub registered_count: u64,
    /// Maximum full registrations, 0 for unlimited.
    pub registration_cap: u64,
    /// Highest waitlist position currently allowed to register.
    pub signup_cutoff: i64,
    /// Registration mode.
    pub registration_mode: RegistrationMode,
}

impl Default for PolicySnapshot {
    fn default() -> Self {
        Self {
            capacity: 10_000,
            registered_count: 0,
            registration_cap: 0,
            signup_cutoff: 0,
            registration_mode: RegistrationMode::Open,
        }
    }
}

impl PolicySnapshot {
    /// Whether the registration cap has been reached.
    pub fn registration_cap_reached(&self) -> bool {
        self.registration_cap > 0 && self.registered_count >= self.registration_cap
    }

    /// Whether waitlisted identities are barred from registering entirely.
    pub fn cutoff_closed(&self) -> bool {
        self.signup_cutoff < 0
    }

    /// Cutoff test: a queued identity (`position > 0`) is eligible iff the
    /// cutoff is open and its position is at or below it. Unqueued
    /// identities (`position == 0`) never pass.
    pub fn within_cutoff(&self, position: u64) -> bool {
        position > 0
            && self.signup_cutoff >= 0
            && i128::from(position) <= i128::from(self.signup_cutoff)
    }
}
