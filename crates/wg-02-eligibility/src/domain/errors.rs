//! Error types for the Eligibility subsystem.

use thiserror::Error;
use wg_01_admission::{AdmissionError, IdentityError};

/// Failures reported by the external registry.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// Registry could not be reached.
    #[error("Registry unavailable: {0}")]
    Unavailable(String),

    /// Registry call exceeded the configured deadline.
    #[error("Registry call timed out")]
    Timeout,

    /// Registry refused the registration.
    #[error("Registration rejected: {0}")]
    Rejected(String),
}

/// All errors surfaced by the registration orchestrator.
///
/// Each variant is returned before, or instead of, any side effect.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum RegistrationError {
    /// Raw input normalizes to neither email nor phone.
    #[error("Invalid identity: {0}")]
    InvalidIdentity(#[from] IdentityError),

    /// Waitlist is at capacity; cannot join now.
    #[error("Waitlist full at {capacity} entries")]
    WaitlistFull { capacity: u64 },

    /// Policy or registration status could not be fetched.
    #[error("Registry unavailable: {0}")]
    RegistryUnavailable(RegistryError),

    /// The registration commit failed.
    #[error("Registration commit failed: {0}")]
    Registry(RegistryError),

    /// The admission store rejected the request.
    #[error("Admission failed: {0}")]
    Admission(AdmissionError),
}

impl From<AdmissionError> for RegistrationError {
    fn from(err: AdmissionError) -> Self {
        match err {
            AdmissionError::Full { capacity } => Self::WaitlistFull { capacity },
            other => Self::Admission(other),
        }
    }
}
