//! In-memory Registry Adapter
//!
//! Implements the `Registry` port for development, operator tooling and tests.
//! Policy and registrants live behind one lock so every `get_policy` returns a
//! consistent snapshot.

use crate::domain::{PolicySnapshot, RegistryError};
use crate::ports::outbound::Registry;
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use tracing::{debug, info};
use wg_01_admission::Identity;

#[derive(Debug, Default)]
struct RegistryState {
    policy: PolicySnapshot,
    registered: HashSet<Identity>,
}

/// Process-local registry.
#[derive(Debug)]
pub struct InMemoryRegistry {
    state: RwLock<RegistryState>,
    available: AtomicBool,
    reject_commits: AtomicBool,
    commits: AtomicU64,
}

impl InMemoryRegistry {
    /// Creates a registry serving `policy`.
    pub fn new(policy: PolicySnapshot) -> Self {
        Self {
            state: RwLock::new(RegistryState {
                policy,
                registered: HashSet::new(),
            }),
            available: AtomicBool::new(true),
            reject_commits: AtomicBool::new(false),
            commits: AtomicU64::new(0),
        }
    }

    /// Replaces the policy.
    pub fn set_policy(&self, policy: PolicySnapshot) {
        self.state.write().policy = policy;
    }

    /// Applies `f` to the policy under the write lock.
    pub fn update_policy(&self, f: impl FnOnce(&mut PolicySnapshot)) {
        f(&mut self.state.write().policy);
    }

    /// Current policy, bypassing availability checks.
    pub fn policy(&self) -> PolicySnapshot {
        self.state.read().policy
    }

    /// Simulates an outage: every call fails with `Unavailable` while `false`.
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    /// Makes `commit_registration` fail with `Rejected` while `true`.
    pub fn set_reject_commits(&self, reject: bool) {
        self.reject_commits.store(reject, Ordering::SeqCst);
    }

    /// Number of successful `commit_registration` calls.
    pub fn commit_count(&self) -> u64 {
        self.commits.load(Ordering::SeqCst)
    }

    fn ensure_available(&self) -> Result<(), RegistryError> {
        if self.available.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(RegistryError::Unavailable("registry offline".to_string()))
        }
    }
}

impl Default for InMemoryRegistry {
    fn default() -> Self {
        Self::new(PolicySnapshot::default())
    }
}

#[async_trait]
impl Registry for InMemoryRegistry {
    async fn get_policy(&self) -> Result<PolicySnapshot, RegistryError> {
        self.ensure_available()?;
        Ok(self.state.read().policy)
    }

    async fn identity_is_registered(&self, identity: &Identity) -> Result<bool, RegistryError> {
        self.ensure_available()?;
        Ok(self.state.read().registered.contains(identity))
    }

    async fn commit_registration(&self, identity: &Identity) -> Result<(), RegistryError> {
        self.ensure_available()?;
        if self.reject_commits.load(Ordering::SeqCst) {
            return Err(RegistryError::Rejected("commits disabled".to_string()));
        }

        let mut state = self.state.write();
        if state.registered.insert(identity.clone()) {
            state.policy.registered_count += 1;
            info!(
                identity = %identity.redacted(),
                registered_count = state.policy.registered_count,
                "Registration committed"
            );
        } else {
            debug!(identity = %identity.redacted(), "Registration already committed");
        }
        self.commits.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
