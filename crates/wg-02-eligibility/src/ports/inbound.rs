//! Inbound (Driving) port for the Eligibility subsystem.

use crate::domain::{EligibilityStatus, RegistrationError, RegistrationResult};
use async_trait::async_trait;
use wg_01_admission::{Metadata, Position};

/// Registration entry point.
#[async_trait]
pub trait RegistrationApi: Send + Sync {
    /// Decides and applies the one side effect for a registration attempt.
    ///
    /// This is the main entry point. It:
    /// 1. Normalizes the raw identity
    /// 2. Fetches registered flag, waitlist position and policy concurrently
    /// 3. Evaluates eligibility
    /// 4. Either commits the registration or admits to the waitlist
    async fn process(
        &self,
        raw_identity: &str,
        metadata: Metadata,
    ) -> Result<RegistrationResult, RegistrationError>;

    /// Evaluates eligibility without any side effect.
    async fn status(&self, raw_identity: &str) -> Result<EligibilityStatus, RegistrationError>;

    /// Waitlist position for a raw identity, 0 if not queued.
    async fn position(&self, raw_identity: &str) -> Result<Position, RegistrationError>;
}
