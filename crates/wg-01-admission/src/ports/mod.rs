//! Ports layer for the Admission subsystem.
//!
//! The store is consumed through the `AdmissionStore` driving port so it can
//! be backed by an in-process structure or a shared transactional store.

pub mod inbound;

pub use inbound::*;
