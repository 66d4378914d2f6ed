//! # Domain Layer - Admission Subsystem
//!
//! Pure waitlist logic with no I/O and no locking.
//!
//! ## Components
//!
//! - `identity`: Identity normalizer (email / E.164 phone)
//! - `entities`: WaitlistEntry, EntryId, Admission, AdmissionConfig
//! - `queue`: AdmissionQueue (ordered queue + identity index)
//! - `invariants`: Checkable queue invariants
//! - `value_objects`: WaitlistStats
//! - `errors`: IdentityError, AdmissionError

pub mod entities;
pub mod errors;
pub mod identity;
pub mod invariants;
pub mod queue;
pub mod value_objects;

pub use entities::*;
pub use errors::*;
pub use identity::*;
pub use queue::*;
pub use value_objects::*;
