//! # Eligibility Evaluator
//!
//! Pure decision procedure over admission state and a policy snapshot.
//!
//! ## Check Order (first match wins)
//!
//! | # | Outcome | Condition |
//! |---|---------|-----------|
//! | 1 | `AlreadyRegistered` | external registry knows the identity |
//! | 2 | `CapacityExhausted` | `registration_cap > 0 && registered_count >= registration_cap` |
//! | 3 | `WaitlistOnlyIneligible` | mode is `WaitlistOnly` and cutoff test fails |
//! | 4 | `BlockedByCutoff` | `position > 0` and cutoff test fails |
//! | 5 | `EligibleToRegister` | otherwise |
//!
//! A reached registration cap defers even a cutoff-eligible identity to the
//! waitlist. Waitlist-only ("never offered registration") is reported apart
//! from a cutoff block ("offered, not yet your turn").

use super::policy::{PolicySnapshot, RegistrationMode};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::trace;
use wg_01_admission::{Identity, Position};

/// Why a waitlisted identity is held back by the signup cutoff.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum CutoffBlock {
    /// Negative cutoff: registration is closed for all waitlisted identities.
    Closed,
    /// Position is past a non-negative cutoff.
    BeyondCutoff { position: Position, cutoff: i64 },
}

/// Result of an eligibility evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum EligibilityOutcome {
    /// Identity already completed full registration.
    AlreadyRegistered { position: Position },
    /// Registration cap reached; admit to the waitlist instead.
    CapacityExhausted,
    /// Waitlist-only mode and the identity is not within the cutoff.
    WaitlistOnlyIneligible,
    /// Waitlisted identity held back by the cutoff.
    BlockedByCutoff(CutoffBlock),
    /// May proceed to full registration.
    EligibleToRegister,
}

impl EligibilityOutcome {
    /// Stable machine-readable code, used for log fields and metric labels.
    pub fn code(&self) -> &'static str {
        match self {
            Self::AlreadyRegistered { .. } => "already_registered",
            Self::CapacityExhausted => "capacity_exhausted",
            Self::WaitlistOnlyIneligible => "waitlist_only",
            Self::BlockedByCutoff(CutoffBlock::Closed) => "cutoff_closed",
            Self::BlockedByCutoff(CutoffBlock::BeyondCutoff { .. }) => "beyond_cutoff",
            Self::EligibleToRegister => "eligible",
        }
    }

    /// Whether the orchestrator admits to the waitlist for this outcome.
    pub fn should_waitlist(&self) -> bool {
        matches!(
            self,
            Self::CapacityExhausted | Self::WaitlistOnlyIneligible | Self::BlockedByCutoff(_)
        )
    }
}

impl fmt::Display for EligibilityOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Evaluates eligibility. Never suspends, never fails.
pub fn evaluate(
    identity: &Identity,
    already_registered: bool,
    position: Position,
    policy: &PolicySnapshot,
) -> EligibilityOutcome {
    let outcome = decide(already_registered, position, policy);
    trace!(
        identity = %identity.redacted(),
        position,
        outcome = outcome.code(),
        "Evaluated eligibility"
    );
    outcome
}

fn decide(
    already_registered: bool,
    position: Position,
    policy: &PolicySnapshot,
) -> EligibilityOutcome {
    if already_registered {
        return EligibilityOutcome::AlreadyRegistered { position };
    }

    if policy.registration_cap_reached() {
        return EligibilityOutcome::CapacityExhausted;
    }

    let within_cutoff = policy.within_cutoff(position);

    if policy.registration_mode == RegistrationMode::WaitlistOnly && !within_cutoff {
        return EligibilityOutcome::WaitlistOnlyIneligible;
    }

    if position > 0 && !within_cutoff {
        let block = if policy.cutoff_closed() {
            CutoffBlock::Closed
        } else {
            CutoffBlock::BeyondCutoff {
                position,
                cutoff: policy.signup_cutoff,
            }
        };
        return EligibilityOutcome::BlockedByCutoff(block);
    }

    EligibilityOutcome::EligibleToRegister
}
