//! # mana-ccg
//!
//! A deterministic, single-player, turn-based card game engine.
//!
//! Players hold a hand of cards, play them into a persistent in-play zone,
//! accrue typed mana and resolve per-round effects until cards expire.
//!
//! ## Design Principles
//!
//! 1. **Data-Described Cards**: Card hooks are `Effect` values, not
//!    callbacks, so a catalog can be compiled in or loaded from JSON.
//!
//! 2. **Narrow Effect Access**: Effects mutate state only through
//!    `EffectContext`.
//!
//! 3. **Policy Over Crashes**: Fatal conditions surface as `SessionError`
//!    values; the binary decides the exit status.
//!
//! ## Modules
//!
//! - `core`: Mana, configuration, errors, player state
//! - `zones`: Fixed-capacity slot zones
//! - `cards`: Card definitions and registry
//! - `effects`: Effect variants and resolution
//! - `rules`: Commands, round phases, extension hooks
//! - `session`: The round/turn state machine and console glue
//! - `games`: The sample catalog

pub mod core;
pub mod zones;
pub mod cards;
pub mod effects;
pub mod rules;
pub mod session;
pub mod games;

// Re-export commonly used types
pub use crate::core::{
    ManaKind, ManaCost, ManaPool,
    EngineConfig, BoardFullPolicy, InputProtocol, ZoneKind,
    EffectError, PlayError, SessionError, CatalogError,
    PlayerState, InPlayCard, PlayOutcome, RoundReport,
};

pub use crate::zones::SlotZone;

pub use crate::cards::{CardId, CustomEffectId, Lifetime, CardDefinition, CardRegistry};

pub use crate::effects::{Effect, EffectContext, EffectResolver};

pub use crate::rules::{Command, RoundPhase, RoundHooks, NoopHooks};

pub use crate::session::{
    GameSession, GameEvent, TurnStep, Snapshot,
    Console, StdConsole, ScriptedConsole,
};
