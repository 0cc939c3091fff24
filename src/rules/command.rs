//! Console tokens parsed into turn commands.

use serde::{Deserialize, Serialize};

/// Token that ends the session.
pub const QUIT_TOKEN: &str = "q";
/// Token that ends the player's turn.
pub const PASS_TOKEN: &str = "d";
/// Token that aborts the session with a non-zero status.
pub const ABORT_TOKEN: &str = "error";

/// A single player command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Play the card in this hand slot.
    Play(usize),
    /// End the turn.
    Pass,
    /// End the session.
    Quit,
    /// Kill switch: end the session with a failure status.
    Abort,
    /// Anything else.
    Invalid,
}

impl Command {
    /// Parse one token.
    ///
    /// A play index must be all ASCII digits and at most `hand_capacity`.
    /// The index equal to `hand_capacity` is accepted here and rejected by
    /// the play itself as an empty slot.
    ///
    /// ```
    /// use mana_ccg::rules::Command;
    ///
    /// assert_eq!(Command::parse("3", 10), Command::Play(3));
    /// assert_eq!(Command::parse("d", 10), Command::Pass);
    /// assert_eq!(Command::parse("11", 10), Command::Invalid);
    /// assert_eq!(Command::parse("-1", 10), Command::Invalid);
    /// ```
    #[must_use]
    pub fn parse(token: &str, hand_capacity: usize) -> Self {
        match token {
            QUIT_TOKEN => Command::Quit,
            PASS_TOKEN => Command::Pass,
            ABORT_TOKEN => Command::Abort,
            _ if !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit()) => {
                match token.parse::<usize>() {
                    Ok(index) if index <= hand_capacity => Command::Play(index),
                    _ => Command::Invalid,
                }
            }
            _ => Command::Invalid,
        }
    }
}
