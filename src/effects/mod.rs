//! Effect system for card hooks.
//!
//! - `Effect`: Closed set of effect variants a card hook can hold
//! - `EffectContext`: The narrow mutation interface effects run against
//! - `EffectResolver`: Executes an effect on a context
//!
//! ## Failure
//!
//! Resolution returns `Result<(), EffectError>`. Callers in the round
//! state machine treat any effect error as fatal to the session.

mod effect;
mod resolver;

pub use effect::Effect;
pub use resolver::{EffectContext, EffectResolver, PlayerEffectContext};
