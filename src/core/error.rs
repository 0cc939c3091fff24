//! Error types.
//!
//! - `EffectError`: an effect could not be applied
//! - `PlayError`: a play action was rejected (mostly recoverable)
//! - `SessionError`: a condition that ends the session with a non-zero status
//! - `CatalogError`: a card definition could not be registered or loaded

use thiserror::Error;

use super::mana::ManaKind;
use crate::cards::{CardId, CustomEffectId};

/// Failure while applying an effect.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EffectError {
    #[error("no custom effect registered for {0}")]
    UnknownCustom(CustomEffectId),

    #[error("{0} is not in the catalog")]
    UnknownCard(CardId),

    #[error("{kind} mana overflowed")]
    ManaOverflow { kind: ManaKind },
}

/// Rejection of a play action.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PlayError {
    /// The hand slot is empty or outside the hand.
    #[error("card out of range (hand slot {index})")]
    InvalidSlot { index: usize },

    /// No empty in-play slot is left.
    #[error("in-play zone is full ({capacity} slots)")]
    BoardFull { capacity: usize },

    #[error(transparent)]
    Effect(#[from] EffectError),
}

/// Fatal session condition.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SessionError {
    /// The `error` kill-switch token was entered.
    #[error("forced abort requested")]
    ForcedAbort,

    #[error("effect failed: {0}")]
    Effect(#[from] EffectError),

    #[error("in-play zone is full ({capacity} slots)")]
    BoardFull { capacity: usize },
}

impl SessionError {
    /// Process exit status for this error.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        1
    }
}

/// Failure while building or loading a card catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("card id {0} is already registered")]
    DuplicateId(CardId),

    #[error("card name {0:?} is already registered")]
    DuplicateName(String),

    #[error("card name {name:?} exceeds {max} bytes")]
    NameTooLong { name: String, max: usize },

    #[error("invalid lifetime {0}: expected -1 or a positive round count")]
    InvalidLifetime(i32),

    #[error("hand references unknown {0}")]
    UnknownCard(CardId),

    #[error("hand slot {index} is outside a hand of {capacity} slots")]
    HandSlot { index: usize, capacity: usize },

    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
}
