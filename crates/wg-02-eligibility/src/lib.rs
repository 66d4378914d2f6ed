//! # WG-02: Eligibility & Registration Subsystem
//!
//! **Subsystem ID:** 2
//! **Architecture:** Hexagonal (Domain + Ports/Adapters + Application)
//!
//! ## Purpose
//!
//! Decides whether an identity may proceed to full registration given the
//! current onboarding policy, and applies the single resulting side effect:
//! commit the registration, or admit the identity to the waitlist.
//!
//! ## Outcomes
//!
//! | Outcome | Orchestrator action |
//! |---------|---------------------|
//! | `AlreadyRegistered` | none |
//! | `CapacityExhausted` | admit to waitlist |
//! | `WaitlistOnlyIneligible` | admit to (or confirm on) waitlist |
//! | `BlockedByCutoff` | admit to (or confirm on) waitlist |
//! | `EligibleToRegister` | commit registration |
//!
//! ## Outbound Dependencies
//!
//! | Collaborator | Trait | Purpose |
//! |--------------|-------|---------|
//! | WG-01 Admission | `AdmissionStore` | Position lookup, atomic admission |
//! | External registry | `Registry` | Policy snapshot, registrant set, commit |
//!
//! ## Module Structure
//!
//! - **Domain**: PolicySnapshot, evaluator, outcomes, errors
//! - **Ports**: Inbound (`RegistrationApi`) and Outbound (`Registry`)
//! - **Adapters**: `InMemoryRegistry`
//! - **Application**: `RegistrationService` orchestration

#![warn(clippy::all)]

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod metrics;
pub mod ports;

pub use adapters::InMemoryRegistry;
pub use application::RegistrationService;
pub use config::RegistrationConfig;
pub use domain::*;
pub use ports::{RegistrationApi, Registry};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
