//! Core engine types: mana, configuration, errors, player state.
//!
//! This module contains the building blocks the round state machine
//! operates on. Sessions configure capacities and policies via
//! `EngineConfig` rather than modifying the core.

pub mod mana;
pub mod config;
pub mod error;
pub mod state;

pub use mana::{ManaCost, ManaKind, ManaPool};
pub use config::{
    BoardFullPolicy, EngineConfig, InputProtocol, ZoneKind, DEFAULT_HAND_CAPACITY,
    DEFAULT_ZONE_CAPACITY,
};
pub use error::{CatalogError, EffectError, PlayError, SessionError};
pub use state::{ExpiredCard, InPlayCard, PlayOutcome, PlayerState, RoundReport};
