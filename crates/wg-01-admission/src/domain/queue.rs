//! # Admission Queue
//!
//! The single-owner waitlist structure. Not synchronized itself; adapters
//! wrap it in a lock so that `enqueue_or_lookup` runs as one indivisible unit.
//!
//! ## Data Structures
//!
//! - `order`: entry ids in admission order (position = index + 1)
//! - `by_identity`: O(1) duplicate detection
//! - `entries`: entry records by id
//!
//! ## Invariants Enforced
//!
//! - Unique identity: checked before any append
//! - Capacity: `order.len() <= capacity` checked before append
//! - Dense positions: positions are only ever assigned as `order.len()` after push

use super::entities::{Admission, AdmissionConfig, EntryId, Metadata, Position, WaitlistEntry};
use super::errors::AdmissionError;
use super::identity::Identity;
use super::value_objects::WaitlistStats;
use std::collections::HashMap;

/// Ordered waitlist with identity index.
#[derive(Debug)]
pub struct AdmissionQueue {
    /// Maximum metadata keys per admission.
    max_metadata_entries: usize,

    /// Entry ids in insertion order.
    order: Vec<EntryId>,

    /// Identity -> entry id.
    by_identity: HashMap<Identity, EntryId>,

    /// Entry records.
    entries: HashMap<EntryId, WaitlistEntry>,
}

impl Default for AdmissionQueue {
    fn default() -> Self {
        Self::new(AdmissionConfig::default().max_metadata_entries)
    }
}

impl AdmissionQueue {
    /// Creates an empty queue.
    pub fn new(max_metadata_entries: usize) -> Self {
        Self {
            max_metadata_entries,
            order: Vec::new(),
            by_identity: HashMap::new(),
            entries: HashMap::new(),
        }
    }

    /// Number of admitted entries.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns true if nothing has been admitted.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Current stats.
    pub fn stats(&self) -> WaitlistStats {
        WaitlistStats::for_len(self.order.len() as u64)
    }

    /// Admits `identity` or returns its existing entry.
    ///
    /// For an existing identity the stored metadata is overwritten and
    /// `already_existed` is set. Capacity only applies to new admissions.
    ///
    /// # Errors
    /// - `MetadataTooLarge` if `metadata` exceeds the configured limit
    /// - `Full` if the queue already holds `capacity` entries
    pub fn enqueue_or_lookup(
        &mut self,
        identity: Identity,
        metadata: Metadata,
        capacity: u64,
    ) -> Result<Admission, AdmissionError> {
        if metadata.len() > self.max_metadata_entries {
            return Err(AdmissionError::MetadataTooLarge {
                entries: metadata.len(),
                max: self.max_metadata_entries,
            });
        }

        if let Some(entry_id) = self.by_identity.get(&identity).copied() {
            let entry = self.entries.get_mut(&entry_id).ok_or_else(|| {
                AdmissionError::Unavailable(format!("index points at missing entry {entry_id}"))
            })?;
            entry.metadata = metadata;
            return Ok(Admission {
                entry_id,
                position: entry.position,
                already_existed: true,
            });
        }

        if self.order.len() as u64 >= capacity {
            return Err(AdmissionError::Full { capacity });
        }

        let entry_id = EntryId::new();
        self.order.push(entry_id);
        let position = self.order.len() as Position;

        self.by_identity.insert(identity.clone(), entry_id);
        self.entries.insert(
            entry_id,
            WaitlistEntry {
                entry_id,
                position,
                identity,
                metadata,
            },
        );

        debug_assert_eq!(self.by_identity.len(), self.order.len());
        debug_assert_eq!(self.entries.len(), self.order.len());

        Ok(Admission {
            entry_id,
            position,
            already_existed: false,
        })
    }

    /// Position of `identity`, or 0 when absent.
    pub fn position_of(&self, identity: &Identity) -> Position {
        self.by_identity
            .get(identity)
            .map(|id| self.position_of_entry(id))
            .unwrap_or(0)
    }

    /// Whether `identity` has been admitted.
    pub fn exists(&self, identity: &Identity) -> bool {
        self.by_identity.contains_key(identity)
    }

    /// Position of `entry_id`, or 0 when absent.
    pub fn position_of_entry(&self, entry_id: &EntryId) -> Position {
        self.entries.get(entry_id).map(|e| e.position).unwrap_or(0)
    }

    /// Entry record by id.
    pub fn get(&self, entry_id: &EntryId) -> Option<&WaitlistEntry> {
        self.entries.get(entry_id)
    }

    /// Entries in admission order.
    pub fn entries(&self) -> impl Iterator<Item = &WaitlistEntry> + '_ {
        self.order.iter().filter_map(|id| self.entries.get(id))
    }
}
