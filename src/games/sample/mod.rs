//! Sample game shipped with the binary.
//!
//! A five-card catalog and a fixed launch hand:
//! - Tjena: lives 5 rounds, greets on play and every round start
//! - Hejsan: permanent, greets on play and every round start
//! - Channel Void / Light / Time: permanent, +1 mana of their kind per round
//!
//! The hand is seeded directly (there is no drawing yet).

mod game;

pub use game::{
    sample_registry, SampleGameBuilder, CHANNEL_LIGHT, CHANNEL_TIME, CHANNEL_VOID, GREET_HEJSAN,
    GREET_TJENA, HEJSAN, LAUNCH_HAND, TJENA,
};
