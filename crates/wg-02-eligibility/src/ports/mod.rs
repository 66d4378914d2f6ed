//! Ports layer for the Eligibility subsystem.
//!
//! - Inbound (Driving) port: `RegistrationApi`
//! - Outbound (Driven) port: `Registry`

pub mod inbound;
pub mod outbound;

pub use inbound::*;
pub use outbound::*;
