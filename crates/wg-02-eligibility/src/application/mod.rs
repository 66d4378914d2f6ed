//! Application layer: registration orchestration.

pub mod service;

pub use service::RegistrationService;
