//! Outbound (Driven) port for the Eligibility subsystem.
//!
//! The registry owns onboarding policy and the set of full registrants.

use crate::domain::{PolicySnapshot, RegistryError};
use async_trait::async_trait;
use wg_01_admission::Identity;

/// External registry.
#[async_trait]
pub trait Registry: Send + Sync {
    /// Current policy, consistent at a single point in time.
    async fn get_policy(&self) -> Result<PolicySnapshot, RegistryError>;

    /// Whether `identity` has completed full registration.
    async fn identity_is_registered(&self, identity: &Identity) -> Result<bool, RegistryError>;

    /// Commits a full registration.
    ///
    /// Idempotent: committing an already-registered identity succeeds.
    async fn commit_registration(&self, identity: &Identity) -> Result<(), RegistryError>;
}
