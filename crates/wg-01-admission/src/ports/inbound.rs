//! Inbound (Driving) port for the Admission subsystem.

use crate::domain::{
    Admission, AdmissionError, EntryId, Identity, Metadata, Position, WaitlistEntry, WaitlistStats,
};
use async_trait::async_trait;

/// Atomic admission store.
///
/// Implementations must run `enqueue_or_lookup` as a single indivisible unit
/// against every other store operation, and must never expose a
/// partially-applied admission to readers.
#[async_trait]
pub trait AdmissionStore: Send + Sync {
    /// Admits `identity`, or returns its existing entry (overwriting metadata).
    ///
    /// # Errors
    /// - `Full` when a new admission would exceed `capacity`
    /// - `MetadataTooLarge` when `metadata` exceeds the configured limit
    /// - `Unavailable` when the backing store cannot be reached
    async fn enqueue_or_lookup(
        &self,
        identity: Identity,
        metadata: Metadata,
        capacity: u64,
    ) -> Result<Admission, AdmissionError>;

    /// Position of `identity`, 0 if not present.
    async fn position_of(&self, identity: &Identity) -> Position;

    /// Whether `identity` is on the waitlist.
    async fn exists(&self, identity: &Identity) -> bool;

    /// Position of `entry_id`, 0 if not present.
    async fn position_of_entry(&self, entry_id: &EntryId) -> Position;

    /// Entry record by id.
    async fn entry(&self, entry_id: &EntryId) -> Option<WaitlistEntry>;

    /// Current queue summary.
    async fn stats(&self) -> WaitlistStats;
}
