//! Card registry for definition lookup.
//!
//! The `CardRegistry` stores all card definitions for a game, along with
//! the flavour text of custom effects. It is read-only once the session
//! starts. Definitions can be registered in code or loaded from JSON.

use rustc_hash::FxHashMap;
use serde::Deserialize;

use super::definition::{CardDefinition, CardId, CustomEffectId};
use crate::core::error::CatalogError;

/// Registry of card definitions.
///
/// ## Example
///
/// ```
/// use mana_ccg::cards::{CardDefinition, CardId, CardRegistry};
///
/// let mut registry = CardRegistry::new();
/// registry.register(CardDefinition::new(CardId::new(1), "Hejsan")).unwrap();
///
/// let found = registry.get(CardId::new(1)).unwrap();
/// assert_eq!(found.name, "Hejsan");
/// assert_eq!(registry.get_by_name("Hejsan").unwrap().id, CardId::new(1));
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardRegistry {
    cards: FxHashMap<CardId, CardDefinition>,
    by_name: FxHashMap<String, CardId>,
    custom_effects: FxHashMap<CustomEffectId, String>,
}

/// On-disk catalog layout.
#[derive(Deserialize)]
struct CatalogFile {
    #[serde(default)]
    custom_effects: Vec<CustomEffectEntry>,
    cards: Vec<CardDefinition>,
}

#[derive(Deserialize)]
struct CustomEffectEntry {
    id: CustomEffectId,
    text: String,
}

impl CardRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a catalog from JSON.
    ///
    /// ```
    /// use mana_ccg::cards::{CardId, CardRegistry};
    ///
    /// let json = r#"{
    ///     "custom_effects": [{ "id": 0, "text": "Hello" }],
    ///     "cards": [
    ///         { "id": 0, "name": "Greeter", "lifetime": 2, "on_play": { "Custom": 0 } }
    ///     ]
    /// }"#;
    ///
    /// let registry = CardRegistry::from_json(json).unwrap();
    /// assert_eq!(registry.get(CardId::new(0)).unwrap().lifetime.raw(), 2);
    /// ```
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(json)?;
        let mut registry = Self::new();
        for entry in file.custom_effects {
            registry.register_custom(entry.id, entry.text);
        }
        for card in file.cards {
            registry.register(card)?;
        }
        Ok(registry)
    }

    /// Register a card definition.
    ///
    /// Ids and names must be unique.
    pub fn register(&mut self, card: CardDefinition) -> Result<(), CatalogError> {
        card.validate()?;
        if self.cards.contains_key(&card.id) {
            return Err(CatalogError::DuplicateId(card.id));
        }
        if self.by_name.contains_key(&card.name) {
            return Err(CatalogError::DuplicateName(card.name));
        }
        self.by_name.insert(card.name.clone(), card.id);
        self.cards.insert(card.id, card);
        Ok(())
    }

    /// Register the text a custom effect announces.
    pub fn register_custom(&mut self, id: CustomEffectId, text: impl Into<String>) {
        self.custom_effects.insert(id, text.into());
    }

    /// Get the text of a custom effect.
    #[must_use]
    pub fn custom_text(&self, id: CustomEffectId) -> Option<&str> {
        self.custom_effects.get(&id).map(String::as_str)
    }

    /// Get a card definition by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&CardDefinition> {
        self.cards.get(&id)
    }

    /// Get a card definition by name.
    #[must_use]
    pub fn get_by_name(&self, name: &str) -> Option<&CardDefinition> {
        self.by_name.get(name).and_then(|id| self.cards.get(id))
    }

    /// Get a card definition by ID, or a catalog error naming it.
    pub fn lookup(&self, id: CardId) -> Result<&CardDefinition, CatalogError> {
        self.get(id).ok_or(CatalogError::UnknownCard(id))
    }

    /// Check if a card ID is registered.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.contains_key(&id)
    }

    /// Get the number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all card definitions in id order.
    pub fn iter(&self) -> impl Iterator<Item = &CardDefinition> {
        let mut cards: Vec<_> = self.cards.values().collect();
        cards.sort_by_key(|c| c.id);
        cards.into_iter()
    }
}
