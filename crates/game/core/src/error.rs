//! Rule-level errors.
//!
//! These cover precondition violations only. Invariant clamping (resource
//! values pushed out of range by legitimate deltas) is silently corrected and
//! is never an error.

use thiserror::Error;

use crate::state::Rarity;

/// Gacha draw precondition failures. The draw is a no-op in every case.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GachaError {
    #[error("no spins left")]
    NoSpins,

    #[error("technique catalog has no entries for tier {0}")]
    EmptyTier(Rarity),
}

/// Duel state machine violations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DuelError {
    #[error("room identifier must not be empty")]
    EmptyRoom,

    #[error("duel is already resolved; no further turns are accepted")]
    AlreadyResolved,

    #[error("operation is not valid in phase {0:?}")]
    WrongPhase(crate::duel::DuelPhase),
}
