//! # Domain Layer - Eligibility Subsystem
//!
//! ## Components
//!
//! - `policy`: PolicySnapshot, RegistrationMode
//! - `evaluator`: pure eligibility decision
//! - `value_objects`: RegistrationResult, EligibilityStatus
//! - `errors`: RegistryError, RegistrationError

pub mod errors;
pub mod evaluator;
pub mod policy;
pub mod value_objects;

pub use errors::*;
pub use evaluator::*;
pub use policy::*;
pub use value_objects::*;
