//! Sample catalog and session builder.

use crate::cards::{CardDefinition, CardId, CardRegistry, CustomEffectId, Lifetime};
use crate::core::error::CatalogError;
use crate::core::{EngineConfig, ManaKind};
use crate::effects::Effect;
use crate::rules::{NoopHooks, RoundHooks};
use crate::session::GameSession;

pub const TJENA: CardId = CardId::new(0);
pub const HEJSAN: CardId = CardId::new(1);
pub const CHANNEL_VOID: CardId = CardId::new(2);
pub const CHANNEL_LIGHT: CardId = CardId::new(3);
pub const CHANNEL_TIME: CardId = CardId::new(4);

pub const GREET_TJENA: CustomEffectId = CustomEffectId::new(0);
pub const GREET_HEJSAN: CustomEffectId = CustomEffectId::new(1);

/// Hand slots filled at launch.
pub const LAUNCH_HAND: [(usize, CardId); 6] = [
    (0, TJENA),
    (1, HEJSAN),
    (2, CHANNEL_VOID),
    (3, CHANNEL_LIGHT),
    (4, CHANNEL_TIME),
    (5, CHANNEL_VOID),
];

const TJENA_ROUNDS: u32 = 5;

fn channel(id: CardId, name: &str, kind: ManaKind) -> CardDefinition {
    CardDefinition::new(id, name)
        .with_lifetime(Lifetime::Permanent)
        .on_round_start(Effect::IncrementMana(kind))
}

/// Build the five-card sample catalog.
pub fn sample_registry() -> Result<CardRegistry, CatalogError> {
    let mut registry = CardRegistry::new();
    registry.register_custom(GREET_TJENA, "Tjena din jävel");
    registry.register_custom(GREET_HEJSAN, "Hejsan din jävel");

    let tjena_lifetime =
        Lifetime::rounds(TJENA_ROUNDS).ok_or(CatalogError::InvalidLifetime(0))?;
    registry.register(
        CardDefinition::new(TJENA, "Tjena")
            .with_lifetime(tjena_lifetime)
            .on_play(Effect::Custom(GREET_TJENA))
            .on_round_start(Effect::Custom(GREET_TJENA)),
    )?;
    registry.register(
        CardDefinition::new(HEJSAN, "Hejsan")
            .with_lifetime(Lifetime::Permanent)
            .on_play(Effect::Custom(GREET_HEJSAN))
            .on_round_start(Effect::Custom(GREET_HEJSAN)),
    )?;
    registry.register(channel(CHANNEL_VOID, "Channel Void", ManaKind::Void))?;
    registry.register(channel(CHANNEL_LIGHT, "Channel Light", ManaKind::Light))?;
    registry.register(channel(CHANNEL_TIME, "Channel Time", ManaKind::Time))?;

    Ok(registry)
}

/// Builder for a session over the sample catalog.
pub struct SampleGameBuilder<H: RoundHooks = NoopHooks> {
    config: EngineConfig,
    registry: Option<CardRegistry>,
    hooks: H,
}

impl Default for SampleGameBuilder<NoopHooks> {
    fn default() -> Self {
        Self {
            config: EngineConfig::default(),
            registry: None,
            hooks: NoopHooks,
        }
    }
}

impl SampleGameBuilder<NoopHooks> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<H: RoundHooks> SampleGameBuilder<H> {
    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Use a different catalog. It must still contain the launch hand cards.
    pub fn registry(mut self, registry: CardRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Swap in enemy/draw behaviour.
    pub fn hooks<H2: RoundHooks>(self, hooks: H2) -> SampleGameBuilder<H2> {
        SampleGameBuilder {
            config: self.config,
            registry: self.registry,
            hooks,
        }
    }

    /// Build the session with the launch hand seeded.
    pub fn build(self) -> Result<GameSession<H>, CatalogError> {
        let registry = match self.registry {
            Some(registry) => registry,
            None => sample_registry()?,
        };

        let mut session = GameSession::with_hooks(self.config, registry, self.hooks);
        for (index, card) in LAUNCH_HAND {
            session.seed_hand(index, card)?;
        }
        Ok(session)
    }
}
