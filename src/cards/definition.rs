//! Card definitions - static card data.
//!
//! `CardDefinition` holds the immutable properties of a card type:
//! its name, mana cost, lifetime and the two effect hooks.
//!
//! Runtime data (remaining lifetime of a card in play) is stored
//! separately in `PlayerState`.

use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use crate::core::error::CatalogError;
use crate::core::mana::ManaCost;
use crate::effects::Effect;

/// Longest card name, in bytes.
pub const MAX_NAME_LEN: usize = 63;

/// Unique identifier for a card definition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Identifier of a registered flavour effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CustomEffectId(pub u16);

impl CustomEffectId {
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CustomEffectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Custom({})", self.0)
    }
}

/// How long a card stays in play.
///
/// Serialized as a raw integer: `-1` is permanent, a positive value is a
/// number of rounds. Zero is never a valid definition lifetime.
///
/// ```
/// use mana_ccg::cards::Lifetime;
///
/// let two = Lifetime::rounds(2).unwrap();
/// let one = two.tick().unwrap();
/// assert_eq!(one.raw(), 1);
/// assert_eq!(one.tick(), None);
///
/// assert_eq!(Lifetime::Permanent.tick(), Some(Lifetime::Permanent));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum Lifetime {
    /// Never expires.
    Permanent,
    /// Rounds remaining.
    Rounds(NonZeroU32),
}

impl Lifetime {
    /// A lifetime of `n` rounds, or `None` for zero.
    #[must_use]
    pub fn rounds(n: u32) -> Option<Self> {
        NonZeroU32::new(n).map(Self::Rounds)
    }

    /// Advance one round.
    ///
    /// Returns `None` when the lifetime reaches zero. Permanent lifetimes
    /// are never decremented.
    #[must_use]
    pub fn tick(self) -> Option<Self> {
        match self {
            Lifetime::Permanent => Some(Lifetime::Permanent),
            Lifetime::Rounds(n) => Self::rounds(n.get() - 1),
        }
    }

    #[must_use]
    pub const fn is_permanent(self) -> bool {
        matches!(self, Lifetime::Permanent)
    }

    /// Raw integer form: `-1` for permanent, otherwise rounds remaining.
    #[must_use]
    pub fn raw(self) -> i32 {
        match self {
            Lifetime::Permanent => -1,
            Lifetime::Rounds(n) => i32::try_from(n.get()).unwrap_or(i32::MAX),
        }
    }
}

impl TryFrom<i32> for Lifetime {
    type Error = CatalogError;

    fn try_from(raw: i32) -> Result<Self, Self::Error> {
        match raw {
            -1 => Ok(Lifetime::Permanent),
            n if n > 0 => Ok(Lifetime::Rounds(
                NonZeroU32::new(n.unsigned_abs()).ok_or(CatalogError::InvalidLifetime(raw))?,
            )),
            _ => Err(CatalogError::InvalidLifetime(raw)),
        }
    }
}

impl From<Lifetime> for i32 {
    fn from(lifetime: Lifetime) -> Self {
        lifetime.raw()
    }
}

impl std::fmt::Display for Lifetime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.raw())
    }
}

/// Static card definition.
///
/// ## Example
///
/// ```
/// use mana_ccg::cards::{CardDefinition, CardId, Lifetime};
/// use mana_ccg::core::ManaKind;
/// use mana_ccg::effects::Effect;
///
/// let channel = CardDefinition::new(CardId::new(2), "Channel Void")
///     .with_lifetime(Lifetime::Permanent)
///     .on_round_start(Effect::IncrementMana(ManaKind::Void));
///
/// assert_eq!(channel.lifetime.raw(), -1);
/// assert_eq!(channel.on_play, Effect::NoOp);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDefinition {
    /// Unique identifier for this card definition.
    pub id: CardId,

    /// Card name (for display).
    pub name: String,

    /// Mana cost per kind.
    #[serde(default)]
    pub mana_cost: ManaCost,

    /// Rounds the card stays in play.
    pub lifetime: Lifetime,

    /// Fired once when the card moves from hand into play.
    #[serde(default)]
    pub on_play: Effect,

    /// Fired at every round start while the card is in play.
    #[serde(default)]
    pub on_round_start: Effect,
}

impl CardDefinition {
    /// Create a permanent, free card with no effects.
    #[must_use]
    pub fn new(id: CardId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            mana_cost: ManaCost::free(),
            lifetime: Lifetime::Permanent,
            on_play: Effect::NoOp,
            on_round_start: Effect::NoOp,
        }
    }

    #[must_use]
    pub fn with_cost(mut self, cost: ManaCost) -> Self {
        self.mana_cost = cost;
        self
    }

    #[must_use]
    pub fn with_lifetime(mut self, lifetime: Lifetime) -> Self {
        self.lifetime = lifetime;
        self
    }

    /// Set the on-play effect (builder pattern).
    #[must_use]
    pub fn on_play(mut self, effect: Effect) -> Self {
        self.on_play = effect;
        self
    }

    /// Set the round-start effect (builder pattern).
    #[must_use]
    pub fn on_round_start(mut self, effect: Effect) -> Self {
        self.on_round_start = effect;
        self
    }

    /// Check the definition against catalog limits.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.name.len() > MAX_NAME_LEN {
            return Err(CatalogError::NameTooLong {
                name: self.name.clone(),
                max: MAX_NAME_LEN,
            });
        }
        Ok(())
    }
}
