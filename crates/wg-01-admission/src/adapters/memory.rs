//! In-memory Admission Store Adapter
//!
//! Implements the `AdmissionStore` port over an `AdmissionQueue` guarded by a
//! `parking_lot::RwLock`. The write lock is the single serialization point
//! for admissions; lookups share the read lock.

use crate::domain::{
    Admission, AdmissionConfig, AdmissionError, AdmissionQueue, EntryId, Identity, Metadata,
    Position, WaitlistEntry, WaitlistStats,
};
use crate::metrics;
use crate::ports::inbound::AdmissionStore;
use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::{debug, info, warn};

/// Process-local admission store.
pub struct InMemoryAdmissionStore {
    queue: RwLock<AdmissionQueue>,
}

impl InMemoryAdmissionStore {
    /// Creates an empty store.
    pub fn new(config: &AdmissionConfig) -> Self {
        Self {
            queue: RwLock::new(AdmissionQueue::new(config.max_metadata_entries)),
        }
    }

    /// Snapshot of all entries in admission order.
    pub fn snapshot(&self) -> Vec<WaitlistEntry> {
        self.queue.read().entries().cloned().collect()
    }

    /// Number of admitted entries.
    pub fn len(&self) -> usize {
        self.queue.read().len()
    }

    /// Returns true if nothing has been admitted.
    pub fn is_empty(&self) -> bool {
        self.queue.read().is_empty()
    }
}

impl Default for InMemoryAdmissionStore {
    fn default() -> Self {
        Self::new(&AdmissionConfig::default())
    }
}

#[async_trait]
impl AdmissionStore for InMemoryAdmissionStore {
    async fn enqueue_or_lookup(
        &self,
        identity: Identity,
        metadata: Metadata,
        capacity: u64,
    ) -> Result<Admission, AdmissionError> {
        let redacted = identity.redacted();

        // Held across lookup, capacity check, append and index.
        let result = self
            .queue
            .write()
            .enqueue_or_lookup(identity, metadata, capacity);

        match &result {
            Ok(admission) if admission.already_existed => {
                debug!(
                    identity = %redacted,
                    position = admission.position,
                    "Identity already on waitlist"
                );
                metrics::record_admission("existing");
            }
            Ok(admission) => {
                info!(
                    identity = %redacted,
                    entry_id = %admission.entry_id,
                    position = admission.position,
                    "Admitted to waitlist"
                );
                metrics::record_admission("admitted");
            }
            Err(AdmissionError::Full { capacity }) => {
                warn!(identity = %redacted, capacity, "Waitlist full, admission rejected");
                metrics::record_admission("full");
            }
            Err(e) => {
                warn!(identity = %redacted, error = %e, "Admission rejected");
                metrics::record_admission("rejected");
            }
        }

        result
    }

    async fn position_of(&self, identity: &Identity) -> Position {
        self.queue.read().position_of(identity)
    }

    async fn exists(&self, identity: &Identity) -> bool {
        self.queue.read().exists(identity)
    }

    async fn position_of_entry(&self, entry_id: &EntryId) -> Position {
        self.queue.read().position_of_entry(entry_id)
    }

    async fn entry(&self, entry_id: &EntryId) -> Option<WaitlistEntry> {
        self.queue.read().get(entry_id).cloned()
    }

    async fn stats(&self) -> WaitlistStats {
        self.queue.read().stats()
    }
}
