//! Cross-subsystem integration tests.

pub mod admission_races;
pub mod registration_flows;
