//! Effect definitions.
//!
//! Effects are the data form of a card's hooks. They are a closed set of
//! variants, so a card catalog can be written and read as plain data.

use serde::{Deserialize, Serialize};

use crate::cards::CustomEffectId;
use crate::core::mana::ManaKind;

/// A card effect.
///
/// - `NoOp`: does nothing
/// - `IncrementMana`: adds one mana of a kind to the owner's pool
/// - `Custom`: announces registered flavour text, no state change
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Effect {
    #[default]
    NoOp,

    /// Add one mana of this kind.
    IncrementMana(ManaKind),

    /// Announce the text registered for this id.
    Custom(CustomEffectId),
}

impl std::fmt::Display for Effect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Effect::NoOp => f.write_str("nothing"),
            Effect::IncrementMana(kind) => write!(f, "+1 {}", kind),
            Effect::Custom(id) => write!(f, "{}", id),
        }
    }
}
