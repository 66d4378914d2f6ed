//! Adapters layer for the Admission subsystem.
//!
//! - `memory`: process-local `AdmissionStore` behind a read/write lock

pub mod memory;

pub use memory::InMemoryAdmissionStore;
