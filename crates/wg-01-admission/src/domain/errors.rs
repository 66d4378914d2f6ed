//! Error types for the Admission subsystem.

use thiserror::Error;

/// Raw input could not be normalized to an email or phone identity.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum IdentityError {
    /// Input was empty or whitespace.
    #[error("Identity is empty")]
    Empty,

    /// Input looked like an email but failed validation.
    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    /// Input looked like a phone number but failed validation.
    #[error("Invalid phone number: {0}")]
    InvalidPhone(String),

    /// Configured default country calling code is malformed.
    #[error("Invalid country calling code: {0:?}")]
    InvalidCountryCode(String),
}

/// Admission store failures.
///
/// None of these leave a partial mutation behind.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AdmissionError {
    /// Waitlist already holds `capacity` entries.
    #[error("Waitlist full at {capacity} entries")]
    Full { capacity: u64 },

    /// Metadata map exceeds the configured entry limit.
    #[error("Metadata has {entries} entries, maximum is {max}")]
    MetadataTooLarge { entries: usize, max: usize },

    /// Backing store could not be reached.
    #[error("Admission store unavailable: {0}")]
    Unavailable(String),
}
