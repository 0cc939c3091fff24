//! Player state: mana pool and the five card zones.
//!
//! ## PlayerState
//!
//! - Mana pool (reset every round)
//! - Deck, draw pile, hand, discard pile: slots of `CardId`
//! - In play: slots of `InPlayCard`, which carries the card's remaining
//!   lifetime so it is vacated together with its slot
//!
//! ## Operations
//!
//! - `play`: hand slot → lowest empty in-play slot, firing the on-play effect
//! - `reset_mana`: zero every mana kind
//! - `tick_lifetimes`: fire round-start effects and age cards in play

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, info};

use super::config::{EngineConfig, ZoneKind};
use super::error::{EffectError, PlayError};
use super::mana::ManaPool;
use crate::cards::{CardId, CardRegistry, Lifetime};
use crate::effects::{EffectResolver, PlayerEffectContext};
use crate::zones::SlotZone;

/// A card in the in-play zone together with its runtime lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InPlayCard {
    pub card: CardId,
    pub lifetime: Lifetime,
}

/// Result of a successful play.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlayOutcome {
    pub card: CardId,
    pub hand_index: usize,
    /// In-play slot the card landed in.
    pub slot: usize,
}

/// A card whose lifetime ran out during round-start resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpiredCard {
    pub slot: usize,
    pub card: CardId,
}

/// What happened during one `tick_lifetimes` pass.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundReport {
    /// In-play slots whose round-start effect fired, in order.
    pub fired: SmallVec<[usize; 8]>,
    /// Cards vacated because their lifetime reached zero.
    pub expired: SmallVec<[ExpiredCard; 4]>,
}

/// One player's mana and zones.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    pub mana: ManaPool,
    pub deck: SlotZone<CardId>,
    pub draw: SlotZone<CardId>,
    pub hand: SlotZone<CardId>,
    pub discard: SlotZone<CardId>,
    pub in_play: SlotZone<InPlayCard>,
}

impl PlayerState {
    /// Create an empty player with zone capacities from `config`.
    #[must_use]
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            mana: ManaPool::new(),
            deck: SlotZone::with_capacity(config.capacity_of(ZoneKind::Deck)),
            draw: SlotZone::with_capacity(config.capacity_of(ZoneKind::Draw)),
            hand: SlotZone::with_capacity(config.capacity_of(ZoneKind::Hand)),
            discard: SlotZone::with_capacity(config.capacity_of(ZoneKind::Discard)),
            in_play: SlotZone::with_capacity(config.capacity_of(ZoneKind::InPlay)),
        }
    }

    /// Put a card directly into a hand slot (launch seeding).
    ///
    /// Returns the card previously in that slot.
    pub fn seed_hand(&mut self, index: usize, card: CardId) -> Option<CardId> {
        self.hand.place(index, card)
    }

    /// Remaining lifetime of the card in an in-play slot.
    #[must_use]
    pub fn card_state(&self, slot: usize) -> Option<Lifetime> {
        self.in_play.get(slot).map(|c| c.lifetime)
    }

    /// Number of cards held across a zone.
    #[must_use]
    pub fn zone_count(&self, zone: ZoneKind) -> usize {
        match zone {
            ZoneKind::Deck => self.deck.occupied_count(),
            ZoneKind::Draw => self.draw.occupied_count(),
            ZoneKind::Hand => self.hand.occupied_count(),
            ZoneKind::Discard => self.discard.occupied_count(),
            ZoneKind::InPlay => self.in_play.occupied_count(),
        }
    }

    /// Set every mana kind to zero.
    pub fn reset_mana(&mut self) {
        self.mana.reset();
    }

    /// Play the card in a hand slot.
    ///
    /// Fails with `InvalidSlot` on an empty slot and `BoardFull` when no
    /// in-play slot is free; both leave state unchanged. On success the
    /// on-play effect has fired and the card sits in the lowest empty
    /// in-play slot with its definition lifetime.
    pub fn play(
        &mut self,
        hand_index: usize,
        registry: &CardRegistry,
        messages: &mut Vec<String>,
    ) -> Result<PlayOutcome, PlayError> {
        let card = *self
            .hand
            .get(hand_index)
            .ok_or(PlayError::InvalidSlot { index: hand_index })?;
        let def = registry.get(card).ok_or(EffectError::UnknownCard(card))?;

        if self.in_play.is_full() {
            return Err(PlayError::BoardFull {
                capacity: self.in_play.capacity(),
            });
        }

        let mut ctx = PlayerEffectContext {
            mana: &mut self.mana,
            registry,
            messages,
        };
        EffectResolver::resolve(def.on_play, &mut ctx)?;

        self.hand.take(hand_index);
        let slot = self
            .in_play
            .place_first_empty(InPlayCard {
                card,
                lifetime: def.lifetime,
            })
            .map_err(|_| PlayError::BoardFull {
                capacity: self.in_play.capacity(),
            })?;

        info!(card = %def.name, hand_index, slot, "card played");
        Ok(PlayOutcome {
            card,
            hand_index,
            slot,
        })
    }

    /// Resolve round start for every card in play, in slot order.
    ///
    /// The round-start effect fires before the lifetime is decremented, so
    /// a card's final round still triggers it. Permanent cards are never
    /// decremented. A card whose lifetime reaches zero is vacated.
    ///
    /// Stops at the first effect error.
    pub fn tick_lifetimes(
        &mut self,
        registry: &CardRegistry,
        messages: &mut Vec<String>,
    ) -> Result<RoundReport, EffectError> {
        let mut report = RoundReport::default();
        let slots: SmallVec<[usize; 16]> = self.in_play.occupied_indices().collect();

        for slot in slots {
            let Some(entry) = self.in_play.get(slot).copied() else {
                continue;
            };
            let def = registry
                .get(entry.card)
                .ok_or(EffectError::UnknownCard(entry.card))?;

            debug!(card = %def.name, lifetime = entry.lifetime.raw(), slot, "found card in play");

            let mut ctx = PlayerEffectContext {
                mana: &mut self.mana,
                registry,
                messages: &mut *messages,
            };
            EffectResolver::resolve(def.on_round_start, &mut ctx)?;
            report.fired.push(slot);

            match entry.lifetime.tick() {
                Some(next) => {
                    if let Some(in_play) = self.in_play.get_mut(slot) {
                        in_play.lifetime = next;
                    }
                }
                None => {
                    self.in_play.take(slot);
                    debug!(card = %def.name, slot, "card expired");
                    report.expired.push(ExpiredCard {
                        slot,
                        card: entry.card,
                    });
                }
            }
        }

        Ok(report)
    }
}
