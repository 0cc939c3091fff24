//! Card system: definitions and registry.
//!
//! ## Key Types
//!
//! - `CardId`: Identifier for card definitions
//! - `Lifetime`: Rounds a card stays in play (`-1` permanent)
//! - `CardDefinition`: Static card data (name, cost, lifetime, effect hooks)
//! - `CardRegistry`: Card definition lookup
//!
//! Zones hold `CardId`s, never copies of definitions.

pub mod definition;
pub mod registry;

pub use definition::{CardDefinition, CardId, CustomEffectId, Lifetime, MAX_NAME_LEN};
pub use registry::CardRegistry;
