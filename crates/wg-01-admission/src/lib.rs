//! # WG-01: Waitlist Admission Subsystem
//!
//! **Subsystem ID:** 1
//! **Architecture:** Hexagonal (Domain + Ports/Adapters)
//!
//! ## Purpose
//!
//! Normalizes raw identities (email or phone) and admits them into an
//! ordered, capacity-limited waitlist with stable 1-based positions.
//!
//! ## Domain Invariants
//!
//! | Invariant | Enforcement Location |
//! |-----------|---------------------|
//! | One entry per identity | `domain/queue.rs` - `by_identity` lookup before append |
//! | Queue length never exceeds capacity | `domain/queue.rs` - checked before append |
//! | Positions are exactly `1..=len` | `domain/queue.rs` - assigned from post-push length |
//! | Concurrent admissions are atomic | `adapters/memory.rs` - write lock spans the whole operation |
//!
//! ## Store Operations
//!
//! | Operation | Effect |
//! |-----------|--------|
//! | `enqueue_or_lookup` | Admit, or return existing entry and overwrite metadata |
//! | `position_of` | Position by identity, 0 if absent |
//! | `exists` | Membership check |
//! | `position_of_entry` | Position by entry id, 0 if absent |
//!
//! ## Module Structure
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  adapters/memory.rs - InMemoryAdmissionStore (RwLock)          │
//! └─────────────────────────────────────────────────────────────────┘
//!                          ↑ implements ↑
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  ports/inbound.rs - AdmissionStore trait                       │
//! └─────────────────────────────────────────────────────────────────┘
//!                          ↑ uses ↑
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  domain/identity.rs   - Identity normalizer                    │
//! │  domain/queue.rs      - AdmissionQueue                         │
//! │  domain/entities.rs   - WaitlistEntry, Admission, config       │
//! │  domain/invariants.rs - Invariant checks                       │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod metrics;
pub mod ports;

pub use adapters::InMemoryAdmissionStore;
pub use domain::{
    normalize, Admission, AdmissionConfig, AdmissionError, AdmissionQueue, EntryId, Identity,
    IdentityError, IdentityKind, IdentityNormalizer, Metadata, NormalizerConfig, Position,
    WaitlistEntry, WaitlistStats,
};
pub use ports::AdmissionStore;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
