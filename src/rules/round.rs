//! Round phases and extension hooks.
//!
//! A round is `RoundStart` (enemy step, mana reset, lifetime resolution,
//! draw step) followed by `PlayerTurn`, which loops on player input until
//! the player passes or quits. Quitting moves to `SessionEnd`.

use serde::{Deserialize, Serialize};

use crate::cards::CardRegistry;
use crate::core::error::EffectError;
use crate::core::state::PlayerState;

/// Phase of the round state machine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundPhase {
    #[default]
    RoundStart,
    PlayerTurn,
    SessionEnd,
}

impl RoundPhase {
    /// Phase after the player's turn loop exits.
    #[must_use]
    pub const fn after_turn(running: bool) -> Self {
        if running {
            RoundPhase::RoundStart
        } else {
            RoundPhase::SessionEnd
        }
    }

    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, RoundPhase::SessionEnd)
    }
}

/// Extension points of round-start resolution.
///
/// Both hooks default to doing nothing. An opponent or a drawing
/// algorithm plugs in here without touching the state machine.
pub trait RoundHooks {
    /// Opponent step, run before mana is reset.
    fn enemy_round(
        &mut self,
        _player: &mut PlayerState,
        _registry: &CardRegistry,
    ) -> Result<(), EffectError> {
        Ok(())
    }

    /// Draw step, run after lifetimes are resolved.
    fn draw_step(
        &mut self,
        _player: &mut PlayerState,
        _registry: &CardRegistry,
    ) -> Result<(), EffectError> {
        Ok(())
    }
}

/// Hooks that do nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopHooks;

impl RoundHooks for NoopHooks {}
