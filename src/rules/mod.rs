//! Round/turn rules.
//!
//! - `Command`: a console token interpreted as a turn command
//! - `RoundPhase`: state of the round machine
//! - `RoundHooks`: enemy and draw extension points (no-op by default)
//!
//! The state machine itself is driven by `session::GameSession`.

pub mod command;
pub mod round;

pub use command::{Command, ABORT_TOKEN, PASS_TOKEN, QUIT_TOKEN};
pub use round::{NoopHooks, RoundHooks, RoundPhase};
