//! # Registration Flows
//!
//! End-to-end registration attempts through `RegistrationService` wired to the
//! in-memory admission store and registry.
//!
//! ## Flow
//!
//! ```text
//! raw identity ──→ normalize ──→ fetch(registered, position, policy)
//!                                        │
//!                                        ↓
//!                                    evaluate
//!                          ┌─────────────┼─────────────┐
//!                          ↓             ↓             ↓
//!                  commit_registration  no-op   enqueue_or_lookup
//! ```

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use futures::future::join_all;
    use std::sync::Arc;
    use std::time::Duration;

    use wg_01_admission::{
        normalize, Identity, IdentityNormalizer, InMemoryAdmissionStore, Metadata, NormalizerConfig,
    };
    use wg_02_eligibility::{
        evaluate, CutoffBlock, EligibilityOutcome, InMemoryRegistry, PolicySnapshot,
        RegistrationApi, RegistrationConfig, RegistrationError, RegistrationMode,
        RegistrationResult, RegistrationService, Registry, RegistryError,
    };

    type Service = RegistrationService<InMemoryAdmissionStore, InMemoryRegistry>;

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    fn service(policy: PolicySnapshot) -> Arc<Service> {
        Arc::new(RegistrationService::new(
            Arc::new(InMemoryAdmissionStore::default()),
            Arc::new(InMemoryRegistry::new(policy)),
        ))
    }

    fn policy(mode: RegistrationMode, cutoff: i64) -> PolicySnapshot {
        PolicySnapshot {
            capacity: 100,
            signup_cutoff: cutoff,
            registration_mode: mode,
            ..Default::default()
        }
    }

    fn id(raw: &str) -> Identity {
        normalize(raw).unwrap()
    }

    /// Registry whose policy lookups stall past any reasonable deadline.
    struct StalledRegistry {
        inner: InMemoryRegistry,
        delay: Duration,
    }

    #[async_trait]
    impl Registry for StalledRegistry {
        async fn get_policy(&self) -> Result<PolicySnapshot, RegistryError> {
            tokio::time::sleep(self.delay).await;
            self.inner.get_policy().await
        }

        async fn identity_is_registered(&self, identity: &Identity) -> Result<bool, RegistryError> {
            self.inner.identity_is_registered(identity).await
        }

        async fn commit_registration(&self, identity: &Identity) -> Result<(), RegistryError> {
            self.inner.commit_registration(identity).await
        }
    }

    // =============================================================================
    // EVALUATION SCENARIOS
    // =============================================================================

    #[test]
    fn test_waitlist_only_beyond_cutoff() {
        let outcome = evaluate(
            &id("b@x.com"),
            false,
            2,
            &policy(RegistrationMode::WaitlistOnly, 1),
        );
        assert_eq!(outcome, EligibilityOutcome::WaitlistOnlyIneligible);
    }

    #[test]
    fn test_waitlist_only_blocks_never_queued_identity() {
        let outcome = evaluate(
            &id("new@x.com"),
            false,
            0,
            &policy(RegistrationMode::WaitlistOnly, 5),
        );
        assert_eq!(outcome, EligibilityOutcome::WaitlistOnlyIneligible);
    }

    #[test]
    fn test_closed_cutoff_differs_from_beyond_cutoff() {
        let identity = id("c@x.com");
        let closed = evaluate(&identity, false, 3, &policy(RegistrationMode::Open, -1));
        let beyond = evaluate(&identity, false, 3, &policy(RegistrationMode::Open, 2));

        assert_eq!(closed, EligibilityOutcome::BlockedByCutoff(CutoffBlock::Closed));
        assert_eq!(
            beyond,
            EligibilityOutcome::BlockedByCutoff(CutoffBlock::BeyondCutoff {
                position: 3,
                cutoff: 2
            })
        );
        assert_ne!(closed.code(), beyond.code());
    }

    #[test]
    fn test_cap_reached_for_new_identity() {
        let snapshot = PolicySnapshot {
            registration_cap: 10,
            registered_count: 10,
            ..Default::default()
        };
        let outcome = evaluate(&id("new@x.com"), false, 0, &snapshot);

        assert_eq!(outcome, EligibilityOutcome::CapacityExhausted);
        assert!(outcome.should_waitlist());
    }

    // =============================================================================
    // ORCHESTRATED FLOWS
    // =============================================================================

    #[tokio::test]
    async fn test_cap_reached_admits_to_waitlist_instead_of_registering() {
        let svc = service(PolicySnapshot {
            registration_cap: 10,
            registered_count: 10,
            ..Default::default()
        });

        let result = svc.process("new@x.com", Metadata::new()).await.unwrap();

        assert!(matches!(
            result,
            RegistrationResult::Waitlisted {
                position: 1,
                newly_admitted: true,
                outcome: EligibilityOutcome::CapacityExhausted,
                ..
            }
        ));
        assert_eq!(svc.registry().commit_count(), 0);
        assert_eq!(svc.registry().policy().registered_count, 10);
    }

    #[tokio::test]
    async fn test_closed_cutoff_keeps_waitlisted_identity_in_place() {
        let svc = service(policy(RegistrationMode::WaitlistOnly, -1));
        for raw in ["a@x.com", "b@x.com", "c@x.com"] {
            svc.process(raw, Metadata::new()).await.unwrap();
        }

        svc.registry()
            .update_policy(|p| p.registration_mode = RegistrationMode::Open);
        let result = svc.process("c@x.com", Metadata::new()).await.unwrap();

        assert!(matches!(
            result,
            RegistrationResult::Waitlisted {
                position: 3,
                newly_admitted: false,
                outcome: EligibilityOutcome::BlockedByCutoff(CutoffBlock::Closed),
                ..
            }
        ));
        assert_eq!(svc.store().len(), 3);
    }

    #[tokio::test]
    async fn test_waitlisted_then_registered_then_already_registered() {
        let svc = service(policy(RegistrationMode::WaitlistOnly, 0));

        let first = svc.process("+1 415 555 2671", Metadata::new()).await.unwrap();
        assert_eq!(first.position(), 1);
        assert!(!first.is_registered());

        svc.registry().update_policy(|p| p.signup_cutoff = 1);
        let second = svc.process("+1-415-555-2671", Metadata::new()).await.unwrap();
        assert_eq!(second, RegistrationResult::Registered { position: 1 });

        let third = svc.process("0014155552671", Metadata::new()).await.unwrap();
        assert_eq!(third, RegistrationResult::AlreadyRegistered { position: 1 });
        assert_eq!(svc.registry().commit_count(), 1);
        assert_eq!(svc.registry().policy().registered_count, 1);
    }

    #[tokio::test]
    async fn test_metadata_overwritten_on_repeat_admission() {
        let svc = service(policy(RegistrationMode::WaitlistOnly, 0));
        let meta = |v: &str| Metadata::from([("source".to_string(), v.to_string())]);

        svc.process("a@x.com", meta("ad")).await.unwrap();
        svc.process("a@x.com", meta("referral")).await.unwrap();

        let snapshot = svc.store().snapshot();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].metadata, meta("referral"));
    }

    #[tokio::test]
    async fn test_default_country_code_joins_national_and_international_forms() {
        let normalizer = IdentityNormalizer::new(NormalizerConfig {
            default_country_code: Some("44".to_string()),
        })
        .unwrap();
        let svc = RegistrationService::with_config(
            RegistrationConfig::default(),
            normalizer,
            Arc::new(InMemoryAdmissionStore::default()),
            Arc::new(InMemoryRegistry::new(policy(RegistrationMode::WaitlistOnly, 0))),
        );

        svc.process("07911 123456", Metadata::new()).await.unwrap();
        let again = svc.process("+44 7911 123456", Metadata::new()).await.unwrap();

        assert!(matches!(
            again,
            RegistrationResult::Waitlisted {
                position: 1,
                newly_admitted: false,
                ..
            }
        ));
    }

    // =============================================================================
    // FAILURE HANDLING
    // =============================================================================

    #[tokio::test]
    async fn test_registry_deadline_leaves_store_untouched() {
        let store = Arc::new(InMemoryAdmissionStore::default());
        let registry = Arc::new(StalledRegistry {
            inner: InMemoryRegistry::new(policy(RegistrationMode::WaitlistOnly, 0)),
            delay: Duration::from_millis(200),
        });
        let svc = RegistrationService::with_config(
            RegistrationConfig {
                registry_timeout_ms: 20,
            },
            IdentityNormalizer::default(),
            Arc::clone(&store),
            registry,
        );

        let err = svc.process("a@x.com", Metadata::new()).await.unwrap_err();

        assert_eq!(
            err,
            RegistrationError::RegistryUnavailable(RegistryError::Timeout)
        );
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_outage_recovers_without_duplicate_entries() {
        let svc = service(policy(RegistrationMode::WaitlistOnly, 0));
        svc.process("a@x.com", Metadata::new()).await.unwrap();

        svc.registry().set_available(false);
        assert!(svc.process("a@x.com", Metadata::new()).await.is_err());
        assert!(svc.status("a@x.com").await.is_err());

        svc.registry().set_available(true);
        let result = svc.process("a@x.com", Metadata::new()).await.unwrap();
        assert_eq!(result.position(), 1);
        assert_eq!(svc.store().len(), 1);
    }

    // =============================================================================
    // CONCURRENT ATTEMPTS
    // =============================================================================

    #[tokio::test(flavor = "multi_thread", worker_threads = 8)]
    async fn test_concurrent_waitlist_attempts_admit_once() {
        const N: usize = 32;
        let svc = service(policy(RegistrationMode::WaitlistOnly, 0));

        let handles = (0..N).map(|_| {
            let svc = Arc::clone(&svc);
            tokio::spawn(async move { svc.process("a@x.com", Metadata::new()).await })
        });
        let results: Vec<RegistrationResult> = join_all(handles)
            .await
            .into_iter()
            .map(|joined| joined.unwrap().unwrap())
            .collect();

        let newly = results
            .iter()
            .filter(|r| {
                matches!(
                    r,
                    RegistrationResult::Waitlisted {
                        newly_admitted: true,
                        ..
                    }
                )
            })
            .count();
        assert_eq!(newly, 1);
        assert!(results.iter().all(|r| r.position() == 1));
        assert_eq!(svc.store().len(), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 8)]
    async fn test_concurrent_registrations_count_once() {
        const N: usize = 32;
        let svc = service(PolicySnapshot::default());

        let handles = (0..N).map(|_| {
            let svc = Arc::clone(&svc);
            tokio::spawn(async move { svc.process("a@x.com", Metadata::new()).await })
        });
        let results: Vec<RegistrationResult> = join_all(handles)
            .await
            .into_iter()
            .map(|joined| joined.unwrap().unwrap())
            .collect();

        assert!(results.iter().all(|r| r.is_registered()));
        assert_eq!(svc.registry().policy().registered_count, 1);
        assert!(svc.store().is_empty());
    }
}
