//! Mana kinds, card costs and the per-round mana pool.
//!
//! ## ManaKind
//!
//! Seven fixed resource categories. The number of kinds is exposed as
//! `ManaKind::COUNT` instead of a sentinel variant, so every `ManaKind`
//! value is a real kind.
//!
//! ## ManaCost / ManaPool
//!
//! Both are fixed vectors indexed by `ManaKind`. Counts are `u32`, so they
//! can never go negative.

use serde::{Deserialize, Serialize};

use super::error::EffectError;

/// A mana kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ManaKind {
    Void,
    Light,
    Time,
    Fire,
    Earth,
    Lightning,
    Water,
}

impl ManaKind {
    /// Number of mana kinds.
    pub const COUNT: usize = 7;

    /// All kinds in display order.
    pub const ALL: [ManaKind; Self::COUNT] = [
        ManaKind::Void,
        ManaKind::Light,
        ManaKind::Time,
        ManaKind::Fire,
        ManaKind::Earth,
        ManaKind::Lightning,
        ManaKind::Water,
    ];

    /// Position of this kind in `ALL`.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Console label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            ManaKind::Void => "VOID",
            ManaKind::Light => "LIGHT",
            ManaKind::Time => "TIME",
            ManaKind::Fire => "FIRE",
            ManaKind::Earth => "EARTH",
            ManaKind::Lightning => "LIGHTNING",
            ManaKind::Water => "WATER",
        }
    }
}

impl std::fmt::Display for ManaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Mana cost of a card definition.
///
/// ```
/// use mana_ccg::core::{ManaCost, ManaKind};
///
/// let cost = ManaCost::free().with(ManaKind::Fire, 2);
/// assert_eq!(cost.get(ManaKind::Fire), 2);
/// assert_eq!(cost.get(ManaKind::Water), 0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ManaCost([u32; ManaKind::COUNT]);

impl ManaCost {
    /// A cost of zero in every kind.
    #[must_use]
    pub const fn free() -> Self {
        Self([0; ManaKind::COUNT])
    }

    /// Set the amount for one kind (builder pattern).
    #[must_use]
    pub const fn with(mut self, kind: ManaKind, amount: u32) -> Self {
        self.0[kind.index()] = amount;
        self
    }

    #[must_use]
    pub const fn get(&self, kind: ManaKind) -> u32 {
        self.0[kind.index()]
    }

    /// Check if the cost is zero in every kind.
    #[must_use]
    pub fn is_free(&self) -> bool {
        self.0.iter().all(|&n| n == 0)
    }

    /// Iterate `(kind, amount)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (ManaKind, u32)> + '_ {
        ManaKind::ALL.iter().map(move |&k| (k, self.get(k)))
    }
}

/// A player's mana pool, emptied at the start of every round.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ManaPool([u32; ManaKind::COUNT]);

impl ManaPool {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn get(&self, kind: ManaKind) -> u32 {
        self.0[kind.index()]
    }

    /// Add mana of one kind.
    ///
    /// Overflow is reported as an effect failure rather than wrapping.
    pub fn add(&mut self, kind: ManaKind, amount: u32) -> Result<(), EffectError> {
        let slot = &mut self.0[kind.index()];
        *slot = slot
            .checked_add(amount)
            .ok_or(EffectError::ManaOverflow { kind })?;
        Ok(())
    }

    /// Set every kind back to zero.
    pub fn reset(&mut self) {
        self.0 = [0; ManaKind::COUNT];
    }

    /// Total mana across all kinds.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.0.iter().map(|&n| u64::from(n)).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|&n| n == 0)
    }

    /// Iterate `(kind, amount)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (ManaKind, u32)> + '_ {
        ManaKind::ALL.iter().map(move |&k| (k, self.get(k)))
    }
}
