//! Value objects for the Admission subsystem.

use super::entities::Position;
use serde::{Deserialize, Serialize};

/// Point-in-time summary of the waitlist.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaitlistStats {
    /// Number of admitted entries.
    pub len: u64,
    /// Position the next admission would receive.
    pub next_position: Position,
}

impl WaitlistStats {
    /// Creates stats for a queue of `len` entries.
    pub fn for_len(len: u64) -> Self {
        Self {
            len,
            next_position: len + 1,
        }
    }

    /// Slots left under `capacity`.
    pub fn remaining(&self, capacity: u64) -> u64 {
        capacity.saturating_sub(self.len)
    }
}
