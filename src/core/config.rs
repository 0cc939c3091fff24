//! Engine configuration types.
//!
//! The session is configured at startup by providing:
//! - Zone capacities (`hand_capacity`, `zone_capacity`)
//! - `BoardFullPolicy`: what a full in-play zone does to a play action
//! - `InputProtocol`: strict or legacy console token handling
//! - `EngineConfig`: combines all configuration
//!
//! Nothing here is read from files or the environment.

use serde::{Deserialize, Serialize};

/// Default number of hand slots.
pub const DEFAULT_HAND_CAPACITY: usize = 10;

/// Default number of slots in deck, draw, discard and in-play zones.
pub const DEFAULT_ZONE_CAPACITY: usize = 100;

/// The five card zones every player owns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZoneKind {
    Deck,
    Draw,
    Hand,
    Discard,
    InPlay,
}

impl ZoneKind {
    pub const ALL: [ZoneKind; 5] = [
        ZoneKind::Deck,
        ZoneKind::Draw,
        ZoneKind::Hand,
        ZoneKind::Discard,
        ZoneKind::InPlay,
    ];

    /// Human-readable name (for debugging/display).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ZoneKind::Deck => "Deck",
            ZoneKind::Draw => "Draw",
            ZoneKind::Hand => "Hand",
            ZoneKind::Discard => "Discard",
            ZoneKind::InPlay => "In Play",
        }
    }
}

impl std::fmt::Display for ZoneKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// What happens when a card is played while every in-play slot is taken.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoardFullPolicy {
    /// Reject the play, report it and keep prompting.
    #[default]
    Reject,
    /// End the session with a non-zero status.
    Abort,
}

/// Console token handling.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputProtocol {
    /// One token per prompt.
    #[default]
    Strict,
    /// Token consumption of the legacy console loop: a token is discarded
    /// before the first round, and one extra token is consumed after every
    /// play index, whether or not the play succeeds (only checked for
    /// `error`). Messages are the same as under `Strict`.
    Legacy,
}

/// Complete engine configuration.
///
/// ```
/// use mana_ccg::core::{BoardFullPolicy, EngineConfig, InputProtocol};
///
/// let config = EngineConfig::default()
///     .with_zone_capacity(8)
///     .with_board_full(BoardFullPolicy::Abort);
///
/// assert_eq!(config.hand_capacity, 10);
/// assert_eq!(config.zone_capacity, 8);
/// assert_eq!(config.protocol, InputProtocol::Strict);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Number of hand slots.
    pub hand_capacity: usize,

    /// Number of slots in deck, draw, discard and in-play zones.
    pub zone_capacity: usize,

    /// Behaviour of a play when the in-play zone is full.
    pub board_full: BoardFullPolicy,

    /// Console token handling.
    pub protocol: InputProtocol,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            hand_capacity: DEFAULT_HAND_CAPACITY,
            zone_capacity: DEFAULT_ZONE_CAPACITY,
            board_full: BoardFullPolicy::default(),
            protocol: InputProtocol::default(),
        }
    }
}

impl EngineConfig {
    /// Legacy token stream and abort-on-full-board.
    #[must_use]
    pub fn legacy() -> Self {
        Self {
            board_full: BoardFullPolicy::Abort,
            protocol: InputProtocol::Legacy,
            ..Self::default()
        }
    }

    /// Set the number of hand slots.
    #[must_use]
    pub fn with_hand_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Hand must have at least 1 slot");
        self.hand_capacity = capacity;
        self
    }

    /// Set the capacity of the deck, draw, discard and in-play zones.
    #[must_use]
    pub fn with_zone_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Zones must have at least 1 slot");
        self.zone_capacity = capacity;
        self
    }

    #[must_use]
    pub fn with_board_full(mut self, policy: BoardFullPolicy) -> Self {
        self.board_full = policy;
        self
    }

    #[must_use]
    pub fn with_protocol(mut self, protocol: InputProtocol) -> Self {
        self.protocol = protocol;
        self
    }

    /// Get the slot count of a zone.
    #[must_use]
    pub fn capacity_of(&self, zone: ZoneKind) -> usize {
        match zone {
            ZoneKind::Hand => self.hand_capacity,
            ZoneKind::Deck | ZoneKind::Draw | ZoneKind::Discard | ZoneKind::InPlay => {
                self.zone_capacity
            }
        }
    }
}
