//! Renderable snapshot of the session and its console layout.

use std::fmt::Write;

use serde::Serialize;

use crate::core::mana::{ManaCost, ManaKind, ManaPool};
use crate::rules::RoundPhase;

/// Terminal sequence that homes the cursor and clears the screen.
pub const CLEAR_SCREEN: &str = "\x1b[1;1H\x1b[2J";

/// Banner printed above the player's mana pool.
pub const PLAYER_BANNER: &str = "--- PLAYER ---";

/// A card in the hand, as shown to the player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HandEntry {
    pub index: usize,
    pub name: String,
    pub cost: ManaCost,
}

/// A card in play, as shown to the player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct InPlayEntry {
    pub slot: usize,
    pub name: String,
    /// `-1` for permanent cards.
    pub lifetime: i32,
}

/// Read-only view of the session for rendering.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub round: u32,
    pub phase: RoundPhase,
    pub hand: Vec<HandEntry>,
    pub in_play: Vec<InPlayEntry>,
    pub mana: ManaPool,
}

fn write_mana_line(out: &mut String, kind: ManaKind, amount: u32) {
    // LIGHTNING is long enough that one tab lines it up with the rest.
    let pad = if kind.label().len() >= 8 { "\t" } else { "\t\t" };
    let _ = writeln!(out, "{}: {}{}", kind.label(), pad, amount);
}

/// Render the full-screen redraw: hand, then the mana pool.
///
/// ```
/// use mana_ccg::core::{ManaCost, ManaPool};
/// use mana_ccg::rules::RoundPhase;
/// use mana_ccg::session::{render_screen, HandEntry, Snapshot};
///
/// let snapshot = Snapshot {
///     round: 1,
///     phase: RoundPhase::PlayerTurn,
///     hand: vec![HandEntry { index: 0, name: "Tjena".into(), cost: ManaCost::free() }],
///     in_play: vec![],
///     mana: ManaPool::new(),
/// };
///
/// let screen = render_screen(&snapshot);
/// assert!(screen.contains("0: Tjena\nVOID: \t\t0\n"));
/// assert!(screen.contains("--- PLAYER ---\n"));
/// ```
#[must_use]
pub fn render_screen(snapshot: &Snapshot) -> String {
    let mut out = String::from(CLEAR_SCREEN);

    for entry in &snapshot.hand {
        let _ = writeln!(out, "{}: {}", entry.index, entry.name);
        for (kind, amount) in entry.cost.iter() {
            write_mana_line(&mut out, kind, amount);
        }
        out.push('\n');
    }
    out.push('\n');

    out.push_str(PLAYER_BANNER);
    out.push('\n');
    for (kind, amount) in snapshot.mana.iter() {
        write_mana_line(&mut out, kind, amount);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> Snapshot {
        let mut mana = ManaPool::new();
        mana.add(ManaKind::Void, 2).unwrap();
        Snapshot {
            round: 3,
            phase: RoundPhase::PlayerTurn,
            hand: vec![
                HandEntry {
                    index: 1,
                    name: "Hejsan".to_string(),
                    cost: ManaCost::free(),
                },
                HandEntry {
                    index: 4,
                    name: "Channel Time".to_string(),
                    cost: ManaCost::free().with(ManaKind::Time, 1),
                },
            ],
            in_play: vec![],
            mana,
        }
    }

    #[test]
    fn test_screen_layout() {
        let screen = render_screen(&snapshot());

        let expected_card = "1: Hejsan\n\
                             VOID: \t\t0\n\
                             LIGHT: \t\t0\n\
                             TIME: \t\t0\n\
                             FIRE: \t\t0\n\
                             EARTH: \t\t0\n\
                             LIGHTNING: \t0\n\
                             WATER: \t\t0\n\
                             \n";
        assert!(screen.starts_with(CLEAR_SCREEN));
        assert!(screen.contains(expected_card));
        assert!(screen.contains("4: Channel Time\nVOID: \t\t0\nLIGHT: \t\t0\nTIME: \t\t1\n"));
        assert!(screen.ends_with("--- PLAYER ---\nVOID: \t\t2\nLIGHT: \t\t0\nTIME: \t\t0\nFIRE: \t\t0\nEARTH: \t\t0\nLIGHTNING: \t0\nWATER: \t\t0\n"));
    }

    #[test]
    fn test_hand_order_preserved() {
        let screen = render_screen(&snapshot());
        let first = screen.find("1: Hejsan").unwrap();
        let second = screen.find("4: Channel Time").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_empty_hand() {
        let mut snap = snapshot();
        snap.hand.clear();
        let screen = render_screen(&snap);
        assert_eq!(
            screen,
            format!(
                "{}\n{}\nVOID: \t\t2\nLIGHT: \t\t0\nTIME: \t\t0\nFIRE: \t\t0\nEARTH: \t\t0\nLIGHTNING: \t0\nWATER: \t\t0\n",
                CLEAR_SCREEN, PLAYER_BANNER
            )
        );
    }
}
