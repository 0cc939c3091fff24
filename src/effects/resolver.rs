//! Effect resolution - executing effects against a narrow context.
//!
//! Effects never see the whole session. They go through `EffectContext`,
//! which exposes only the mutations effects are allowed to make.

use tracing::trace;

use crate::cards::{CardRegistry, CustomEffectId};
use crate::core::error::EffectError;
use crate::core::mana::{ManaKind, ManaPool};

use super::Effect;

/// Mutation interface available to effects.
pub trait EffectContext {
    /// Add mana to the owning player's pool.
    fn add_mana(&mut self, kind: ManaKind, amount: u32) -> Result<(), EffectError>;

    /// Emit a message for the player.
    fn announce(&mut self, text: &str);

    /// Look up the text of a custom effect.
    fn custom_text(&self, id: CustomEffectId) -> Option<&str>;
}

/// Context over one player's mana pool.
///
/// Announcements are appended to `messages` for the caller to report.
pub struct PlayerEffectContext<'a> {
    pub mana: &'a mut ManaPool,
    pub registry: &'a CardRegistry,
    pub messages: &'a mut Vec<String>,
}

impl EffectContext for PlayerEffectContext<'_> {
    fn add_mana(&mut self, kind: ManaKind, amount: u32) -> Result<(), EffectError> {
        self.mana.add(kind, amount)
    }

    fn announce(&mut self, text: &str) {
        self.messages.push(text.to_string());
    }

    fn custom_text(&self, id: CustomEffectId) -> Option<&str> {
        self.registry.custom_text(id)
    }
}

/// Resolves effects.
pub struct EffectResolver;

impl EffectResolver {
    /// Resolve a single effect.
    pub fn resolve(effect: Effect, ctx: &mut dyn EffectContext) -> Result<(), EffectError> {
        trace!(%effect, "resolving effect");
        match effect {
            Effect::NoOp => Ok(()),

            Effect::IncrementMana(kind) => ctx.add_mana(kind, 1),

            Effect::Custom(id) => {
                let text = ctx
                    .custom_text(id)
                    .ok_or(EffectError::UnknownCustom(id))?
                    .to_string();
                ctx.announce(&text);
                Ok(())
            }
        }
    }
}
