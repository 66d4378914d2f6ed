//! # Domain Invariants
//!
//! Checks over a sequence of entries in admission order. Each check scans the
//! whole sequence, so they run from tests and audits rather than per append.

use super::entities::WaitlistEntry;
use std::collections::HashSet;

/// Invariant: every identity maps to at most one entry, and entry ids are unique.
pub fn invariant_unique_index<'a, I>(entries: I) -> Result<(), String>
where
    I: IntoIterator<Item = &'a WaitlistEntry>,
{
    let mut identities = HashSet::new();
    let mut ids = HashSet::new();
    for entry in entries {
        if !identities.insert(&entry.identity) {
            return Err(format!("identity {} admitted twice", entry.identity.redacted()));
        }
        if !ids.insert(entry.entry_id) {
            return Err(format!("entry id {} reused", entry.entry_id));
        }
    }
    Ok(())
}

/// Invariant: positions are exactly `1..=len` in admission order.
pub fn invariant_dense_positions<'a, I>(entries: I) -> Result<(), String>
where
    I: IntoIterator<Item = &'a WaitlistEntry>,
{
    for (index, entry) in entries.into_iter().enumerate() {
        let expected = index as u64 + 1;
        if entry.position != expected {
            return Err(format!(
                "entry {} has position {}, expected {}",
                entry.entry_id, entry.position, expected
            ));
        }
    }
    Ok(())
}

/// Invariant: the queue never holds more than `capacity` entries.
pub fn invariant_capacity(len: usize, capacity: u64) -> Result<(), String> {
    if len as u64 > capacity {
        return Err(format!("queue length {len} exceeds capacity {capacity}"));
    }
    Ok(())
}
