//! Registration Service
//!
//! Orchestrates one registration attempt:
//! 1. Normalize the raw identity
//! 2. Fetch registered flag, waitlist position and policy concurrently
//! 3. Evaluate eligibility
//! 4. Apply at most one side effect (commit registration, or admit to waitlist)
//!
//! The decision may be based on a policy snapshot that is a moment stale by
//! the time the side effect runs. That window is accepted; the admission
//! itself stays atomic in the store.

use crate::config::RegistrationConfig;
use crate::domain::{
    evaluate, EligibilityOutcome, EligibilityStatus, PolicySnapshot, RegistrationError,
    RegistrationResult, RegistryError,
};
use crate::metrics;
use crate::ports::inbound::RegistrationApi;
use crate::ports::outbound::Registry;
use async_trait::async_trait;
use std::future::Future;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};
use wg_01_admission::{AdmissionStore, Identity, IdentityNormalizer, Metadata, Position};

/// Registration orchestrator over an admission store and a registry.
pub struct RegistrationService<S, R> {
    config: RegistrationConfig,
    normalizer: IdentityNormalizer,
    store: Arc<S>,
    registry: Arc<R>,
}

impl<S, R> RegistrationService<S, R>
where
    S: AdmissionStore,
    R: Registry,
{
    /// Create a service with default config and normalizer
    pub fn new(store: Arc<S>, registry: Arc<R>) -> Self {
        Self::with_config(
            RegistrationConfig::default(),
            IdentityNormalizer::default(),
            store,
            registry,
        )
    }

    /// Create a service with custom config
    pub fn with_config(
        config: RegistrationConfig,
        normalizer: IdentityNormalizer,
        store: Arc<S>,
        registry: Arc<R>,
    ) -> Self {
        Self {
            config,
            normalizer,
            store,
            registry,
        }
    }

    /// The admission store.
    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    /// The registry.
    pub fn registry(&self) -> &Arc<R> {
        &self.registry
    }

    /// Runs a registry call under the configured deadline.
    async fn bounded<T>(
        &self,
        call: impl Future<Output = Result<T, RegistryError>>,
    ) -> Result<T, RegistryError> {
        tokio::time::timeout(self.config.registry_timeout(), call)
            .await
            .map_err(|_| RegistryError::Timeout)?
    }

    /// Fetches (registered, position, policy) concurrently.
    async fn fetch(
        &self,
        identity: &Identity,
    ) -> Result<(bool, Position, PolicySnapshot), RegistrationError> {
        let registered = self.bounded(self.registry.identity_is_registered(identity));
        let position = async { Ok::<_, RegistryError>(self.store.position_of(identity).await) };
        let policy = self.bounded(self.registry.get_policy());

        tokio::try_join!(registered, position, policy).map_err(|e| {
            warn!(identity = %identity.redacted(), error = %e, "Registry fetch failed");
            RegistrationError::RegistryUnavailable(e)
        })
    }

    async fn process_inner(
        &self,
        raw_identity: &str,
        metadata: Metadata,
    ) -> Result<RegistrationResult, RegistrationError> {
        let identity = self.normalizer.normalize(raw_identity)?;
        let (registered, position, policy) = self.fetch(&identity).await?;

        let outcome = evaluate(&identity, registered, position, &policy);
        metrics::record_outcome(outcome.code());
        debug!(
            identity = %identity.redacted(),
            position,
            outcome = outcome.code(),
            "Eligibility evaluated"
        );

        match outcome {
            EligibilityOutcome::EligibleToRegister => {
                match self.bounded(self.registry.commit_registration(&identity)).await {
                    Ok(()) => {
                        metrics::record_commit(true);
                        info!(identity = %identity.redacted(), position, "Registered");
                        Ok(RegistrationResult::Registered { position })
                    }
                    Err(e) => {
                        metrics::record_commit(false);
                        warn!(
                            identity = %identity.redacted(),
                            error = %e,
                            "Registration commit failed"
                        );
                        Err(RegistrationError::Registry(e))
                    }
                }
            }
            EligibilityOutcome::AlreadyRegistered { position } => {
                Ok(RegistrationResult::AlreadyRegistered { position })
            }
            EligibilityOutcome::CapacityExhausted
            | EligibilityOutcome::WaitlistOnlyIneligible
            | EligibilityOutcome::BlockedByCutoff(_) => {
                let admission = self
                    .store
                    .enqueue_or_lookup(identity, metadata, policy.capacity)
                    .await?;
                Ok(RegistrationResult::Waitlisted {
                    entry_id: admission.entry_id,
                    position: admission.position,
                    newly_admitted: !admission.already_existed,
                    outcome,
                })
            }
        }
    }
}

#[async_trait]
impl<S, R> RegistrationApi for RegistrationService<S, R>
where
    S: AdmissionStore,
    R: Registry,
{
    async fn process(
        &self,
        raw_identity: &str,
        metadata: Metadata,
    ) -> Result<RegistrationResult, RegistrationError> {
        let started = Instant::now();
        let result = self.process_inner(raw_identity, metadata).await;
        metrics::record_process_latency(started.elapsed().as_secs_f64());
        result
    }

    async fn status(&self, raw_identity: &str) -> Result<EligibilityStatus, RegistrationError> {
        let identity = self.normalizer.normalize(raw_identity)?;
        let (registered, position, policy) = self.fetch(&identity).await?;
        let outcome = evaluate(&identity, registered, position, &policy);

        Ok(EligibilityStatus {
            identity,
            position,
            outcome,
        })
    }

    async fn position(&self, raw_identity: &str) -> Result<Position, RegistrationError> {
        let identity = self.normalizer.normalize(raw_identity)?;
        Ok(self.store.position_of(&identity).await)
    }
}
