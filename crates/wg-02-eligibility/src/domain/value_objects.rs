//! Value objects returned by the orchestrator.

use super::evaluator::EligibilityOutcome;
use serde::{Deserialize, Serialize};
use wg_01_admission::{EntryId, Identity, Position};

/// Observable result of `process`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum RegistrationResult {
    /// Registration was committed.
    Registered { position: Position },
    /// Identity was already a full registrant; nothing changed.
    AlreadyRegistered { position: Position },
    /// Identity was admitted to, or confirmed on, the waitlist.
    Waitlisted {
        entry_id: EntryId,
        position: Position,
        newly_admitted: bool,
        outcome: EligibilityOutcome,
    },
}

impl RegistrationResult {
    /// Waitlist position carried by the result (0 if none).
    pub fn position(&self) -> Position {
        match self {
            Self::Registered { position }
            | Self::AlreadyRegistered { position }
            | Self::Waitlisted { position, .. } => *position,
        }
    }

    /// Whether the identity is a full registrant after this call.
    pub fn is_registered(&self) -> bool {
        matches!(self, Self::Registered { .. } | Self::AlreadyRegistered { .. })
    }
}

/// Read-only eligibility view returned by `status`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilityStatus {
    pub identity: Identity,
    pub position: Position,
    pub outcome: EligibilityOutcome,
}
