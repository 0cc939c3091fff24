//! Messages produced by the session for the player.

use serde::{Deserialize, Serialize};

/// Something the console should tell the player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A card moved from hand into play.
    CardPlayed { hand_index: usize, name: String },
    /// Flavour text from a custom effect.
    Announcement(String),
    /// The token did not name an occupied hand slot.
    OutOfRange,
    /// The play was rejected because every in-play slot is taken.
    BoardFull { capacity: usize },
    /// A card's lifetime ran out.
    CardExpired { slot: usize, name: String },
}

impl std::fmt::Display for GameEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameEvent::CardPlayed { hand_index, name } => {
                write!(f, "Played card({}): {}", hand_index, name)
            }
            GameEvent::Announcement(text) => f.write_str(text),
            GameEvent::OutOfRange => f.write_str("Card out of range!"),
            GameEvent::BoardFull { capacity } => {
                write!(f, "No room in play ({} slots taken)!", capacity)
            }
            GameEvent::CardExpired { slot, name } => {
                write!(f, "{} left play (slot {})", name, slot)
            }
        }
    }
}
