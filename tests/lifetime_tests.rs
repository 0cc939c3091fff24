//! Lifetime and mana resolution tests.
//!
//! These tests verify round-start resolution on `PlayerState`:
//! - Mana resets to zero every round
//! - Permanent cards are never decremented or vacated
//! - Timed cards count down and are vacated at zero
//! - Plays land in the lowest empty in-play slot

use proptest::prelude::*;

use mana_ccg::cards::{CardDefinition, CardId, CardRegistry, CustomEffectId, Lifetime};
use mana_ccg::core::{EngineConfig, InPlayCard, ManaKind, PlayError, PlayerState};
use mana_ccg::effects::Effect;

const PERMANENT: CardId = CardId::new(0);
const GREETER: CardId = CardId::new(1);

fn registry() -> CardRegistry {
    let mut registry = CardRegistry::new();
    registry.register_custom(CustomEffectId::new(0), "hi");
    registry
        .register(
            CardDefinition::new(PERMANENT, "Channel Void")
                .on_round_start(Effect::IncrementMana(ManaKind::Void)),
        )
        .unwrap();
    registry
        .register(
            CardDefinition::new(GREETER, "Greeter")
                .with_lifetime(Lifetime::rounds(1).unwrap())
                .on_round_start(Effect::Custom(CustomEffectId::new(0))),
        )
        .unwrap();
    registry
}

fn kind_strategy() -> impl Strategy<Value = ManaKind> {
    prop::sample::select(ManaKind::ALL.to_vec())
}

fn lifetime_strategy() -> impl Strategy<Value = Lifetime> {
    prop_oneof![
        Just(Lifetime::Permanent),
        (1u32..20).prop_map(|n| Lifetime::rounds(n).unwrap()),
    ]
}

proptest! {
    #[test]
    fn reset_mana_zeroes_every_kind(adds in prop::collection::vec((kind_strategy(), 0u32..1000), 0..20)) {
        let mut player = PlayerState::new(&EngineConfig::default());
        for (kind, amount) in adds {
            player.mana.add(kind, amount).unwrap();
        }

        player.reset_mana();

        for kind in ManaKind::ALL {
            prop_assert_eq!(player.mana.get(kind), 0);
        }
    }

    #[test]
    fn tick_ages_each_card_by_one(
        lifetimes in prop::collection::vec(prop::option::of(lifetime_strategy()), 1..30)
    ) {
        let registry = registry();
        let mut player = PlayerState::new(&EngineConfig::default());
        for (slot, lifetime) in lifetimes.iter().enumerate() {
            if let Some(lifetime) = lifetime {
                player.in_play.place(slot, InPlayCard { card: PERMANENT, lifetime: *lifetime });
            }
        }

        let mut messages = Vec::new();
        let report = player.tick_lifetimes(&registry, &mut messages).unwrap();

        for (slot, lifetime) in lifetimes.iter().enumerate() {
            match lifetime {
                None => {
                    prop_assert!(!player.in_play.is_occupied(slot));
                }
                Some(Lifetime::Permanent) => {
                    prop_assert_eq!(player.card_state(slot), Some(Lifetime::Permanent));
                }
                Some(Lifetime::Rounds(n)) if n.get() > 1 => {
                    prop_assert_eq!(player.card_state(slot).map(Lifetime::raw), Some(n.get() as i32 - 1));
                }
                Some(Lifetime::Rounds(_)) => {
                    prop_assert!(!player.in_play.is_occupied(slot));
                    prop_assert_eq!(player.card_state(slot), None);
                    prop_assert!(report.expired.iter().any(|e| e.slot == slot));
                }
            }
        }

        let occupied = lifetimes.iter().filter(|l| l.is_some()).count();
        prop_assert_eq!(report.fired.len(), occupied);
        prop_assert_eq!(player.mana.get(ManaKind::Void) as usize, occupied);
    }

    #[test]
    fn permanent_cards_survive_any_number_of_rounds(rounds in 1usize..50) {
        let registry = registry();
        let mut player = PlayerState::new(&EngineConfig::default());
        player.in_play.place(4, InPlayCard { card: PERMANENT, lifetime: Lifetime::Permanent });

        let mut messages = Vec::new();
        for _ in 0..rounds {
            player.reset_mana();
            player.tick_lifetimes(&registry, &mut messages).unwrap();
        }

        prop_assert_eq!(player.card_state(4), Some(Lifetime::Permanent));
        prop_assert_eq!(player.mana.get(ManaKind::Void), 1);
    }

    #[test]
    fn play_picks_lowest_empty_slot(taken in prop::collection::btree_set(0usize..20, 0..19)) {
        let registry = registry();
        let config = EngineConfig::default().with_zone_capacity(20);
        let mut player = PlayerState::new(&config);
        for &slot in &taken {
            player.in_play.place(slot, InPlayCard { card: PERMANENT, lifetime: Lifetime::Permanent });
        }
        player.seed_hand(0, GREETER);

        let expected = (0..20).find(|s| !taken.contains(s)).unwrap();
        let mut messages = Vec::new();
        let outcome = player.play(0, &registry, &mut messages).unwrap();

        prop_assert_eq!(outcome.slot, expected);
        prop_assert!(!player.hand.is_occupied(0));
        prop_assert_eq!(player.card_state(expected).map(Lifetime::raw), Some(1));
    }

    #[test]
    fn play_from_empty_slot_changes_nothing(index in 0usize..10) {
        let registry = registry();
        let mut player = PlayerState::new(&EngineConfig::default());
        player.mana.add(ManaKind::Earth, 2).unwrap();
        let before = player.clone();

        let mut messages = Vec::new();
        let err = player.play(index, &registry, &mut messages).unwrap_err();

        prop_assert_eq!(err, PlayError::InvalidSlot { index });
        prop_assert_eq!(player, before);
        prop_assert!(messages.is_empty());
    }
}

/// A lifetime-1 card fires its round-start effect once, then leaves play.
#[test]
fn test_single_round_card_fires_once() {
    let registry = registry();
    let mut player = PlayerState::new(&EngineConfig::default());
    let mut messages = Vec::new();
    player.seed_hand(0, GREETER);
    player.play(0, &registry, &mut messages).unwrap();

    player.reset_mana();
    player.tick_lifetimes(&registry, &mut messages).unwrap();
    assert_eq!(messages, vec!["hi".to_string()]);
    assert!(player.in_play.is_empty());

    player.reset_mana();
    player.tick_lifetimes(&registry, &mut messages).unwrap();
    assert_eq!(messages.len(), 1);
}

/// A vacated slot is reused by the next play.
#[test]
fn test_expired_slot_is_reused() {
    let registry = registry();
    let mut player = PlayerState::new(&EngineConfig::default());
    let mut messages = Vec::new();
    player.seed_hand(0, GREETER);
    player.seed_hand(1, PERMANENT);
    player.seed_hand(2, PERMANENT);

    assert_eq!(player.play(0, &registry, &mut messages).unwrap().slot, 0);
    assert_eq!(player.play(1, &registry, &mut messages).unwrap().slot, 1);

    player.tick_lifetimes(&registry, &mut messages).unwrap();
    assert!(!player.in_play.is_occupied(0));

    assert_eq!(player.play(2, &registry, &mut messages).unwrap().slot, 0);
    assert_eq!(player.in_play.occupied_count(), 2);
}
