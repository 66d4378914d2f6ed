//! Adapters layer for the Eligibility subsystem.

pub mod registry;

pub use registry::InMemoryRegistry;
