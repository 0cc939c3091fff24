//! Zone system for card locations.
//!
//! Every player owns five fixed-capacity zones (deck, draw pile, hand,
//! discard pile, in play). Each is a `SlotZone`: an ordered array of slots
//! that are either empty or hold one card reference.
//!
//! ## Key Types
//!
//! - `ZoneKind`: Which of the five zones (from `core::config`)
//! - `SlotZone`: Slot storage with lowest-index-first placement

pub mod slots;

pub use slots::SlotZone;

// Re-export zone types from core for convenience
pub use crate::core::config::ZoneKind;
