//! Game session: the round/turn state machine and its console loop.
//!
//! ## Flow
//!
//! ```text
//! RoundStart ──► PlayerTurn ──(d)──► RoundStart
//!                    │
//!                   (q)──► SessionEnd
//! ```
//!
//! `RoundStart` runs the enemy hook, resets mana, resolves lifetimes of
//! cards in play and runs the draw hook. `PlayerTurn` renders the screen
//! and handles one token at a time until the player passes or quits.
//!
//! Fatal conditions (the `error` token, a failing effect, a full board
//! under `BoardFullPolicy::Abort`) come back as `SessionError`; the caller
//! decides how to exit.

mod console;
mod event;
mod render;

pub use console::{Console, ScriptedConsole, StdConsole};
pub use event::GameEvent;
pub use render::{render_screen, HandEntry, InPlayEntry, Snapshot, CLEAR_SCREEN, PLAYER_BANNER};

use tracing::{error, info, warn};

use crate::cards::{CardId, CardRegistry};
use crate::core::config::{BoardFullPolicy, EngineConfig, InputProtocol};
use crate::core::error::{CatalogError, PlayError, SessionError};
use crate::core::state::{PlayOutcome, PlayerState, RoundReport};
use crate::rules::{Command, NoopHooks, RoundHooks, RoundPhase, ABORT_TOKEN, QUIT_TOKEN};

/// Result of handling one turn token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnStep {
    /// A card was played.
    Played(PlayOutcome),
    /// The token was reported back and nothing changed.
    Rejected,
    /// The turn ended.
    Passed,
    /// The session is ending.
    Quit,
}

/// A single-player game session.
pub struct GameSession<H: RoundHooks = NoopHooks> {
    config: EngineConfig,
    registry: CardRegistry,
    player: PlayerState,
    hooks: H,
    phase: RoundPhase,
    running: bool,
    player_turn: bool,
    /// Last raw token read.
    buffer: String,
    round: u32,
    events: Vec<GameEvent>,
}

impl GameSession<NoopHooks> {
    /// Create a session with no enemy or draw behaviour.
    #[must_use]
    pub fn new(config: EngineConfig, registry: CardRegistry) -> Self {
        Self::with_hooks(config, registry, NoopHooks)
    }
}

impl<H: RoundHooks> GameSession<H> {
    /// Create a session with custom round hooks.
    #[must_use]
    pub fn with_hooks(config: EngineConfig, registry: CardRegistry, hooks: H) -> Self {
        let player = PlayerState::new(&config);
        Self {
            config,
            registry,
            player,
            hooks,
            phase: RoundPhase::RoundStart,
            running: true,
            player_turn: true,
            buffer: String::new(),
            round: 0,
            events: Vec::new(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[must_use]
    pub fn registry(&self) -> &CardRegistry {
        &self.registry
    }

    #[must_use]
    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut PlayerState {
        &mut self.player
    }

    #[must_use]
    pub fn hooks(&self) -> &H {
        &self.hooks
    }

    #[must_use]
    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[must_use]
    pub fn is_player_turn(&self) -> bool {
        self.player_turn
    }

    /// Last raw token handled.
    #[must_use]
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Number of rounds started so far.
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Put a catalog card into a hand slot before the session starts.
    pub fn seed_hand(&mut self, index: usize, card: CardId) -> Result<(), CatalogError> {
        self.registry.lookup(card)?;
        let capacity = self.player.hand.capacity();
        if index >= capacity {
            return Err(CatalogError::HandSlot { index, capacity });
        }
        self.player.seed_hand(index, card);
        Ok(())
    }

    /// Run round-start resolution and enter the player's turn.
    ///
    /// Effect errors are fatal.
    pub fn start_round(&mut self) -> Result<RoundReport, SessionError> {
        self.phase = RoundPhase::RoundStart;
        self.round += 1;

        self.hooks.enemy_round(&mut self.player, &self.registry)?;

        self.player_turn = true;
        self.player.reset_mana();

        let mut messages = Vec::new();
        let result = self.player.tick_lifetimes(&self.registry, &mut messages);
        self.events
            .extend(messages.into_iter().map(GameEvent::Announcement));
        let report = result.map_err(|err| {
            error!(%err, round = self.round, "round-start effect failed");
            SessionError::from(err)
        })?;

        for expired in &report.expired {
            let name = self.card_name(expired.card);
            self.events.push(GameEvent::CardExpired {
                slot: expired.slot,
                name,
            });
        }

        self.hooks.draw_step(&mut self.player, &self.registry)?;

        self.phase = RoundPhase::PlayerTurn;
        info!(
            round = self.round,
            fired = report.fired.len(),
            expired = report.expired.len(),
            "round started"
        );
        Ok(report)
    }

    /// Handle one token of the player's turn.
    pub fn handle_token(&mut self, token: &str) -> Result<TurnStep, SessionError> {
        self.buffer.clear();
        self.buffer.push_str(token);

        match Command::parse(token, self.config.hand_capacity) {
            Command::Quit => {
                self.running = false;
                Ok(TurnStep::Quit)
            }
            Command::Pass => {
                self.player_turn = false;
                Ok(TurnStep::Passed)
            }
            Command::Abort => {
                error!("abort token received");
                Err(SessionError::ForcedAbort)
            }
            Command::Play(index) => self.play(index),
            Command::Invalid => {
                warn!(token, "rejected input");
                self.events.push(GameEvent::OutOfRange);
                Ok(TurnStep::Rejected)
            }
        }
    }

    fn play(&mut self, index: usize) -> Result<TurnStep, SessionError> {
        let mut messages = Vec::new();
        match self.player.play(index, &self.registry, &mut messages) {
            Ok(outcome) => {
                let name = self.card_name(outcome.card);
                self.events.push(GameEvent::CardPlayed {
                    hand_index: index,
                    name,
                });
                self.events
                    .extend(messages.into_iter().map(GameEvent::Announcement));
                Ok(TurnStep::Played(outcome))
            }
            Err(PlayError::InvalidSlot { index }) => {
                warn!(index, "play from empty hand slot");
                self.events.push(GameEvent::OutOfRange);
                Ok(TurnStep::Rejected)
            }
            Err(PlayError::BoardFull { capacity }) => match self.config.board_full {
                BoardFullPolicy::Reject => {
                    warn!(capacity, "in-play zone full, play rejected");
                    self.events.push(GameEvent::BoardFull { capacity });
                    Ok(TurnStep::Rejected)
                }
                BoardFullPolicy::Abort => {
                    error!(capacity, "in-play zone full");
                    Err(SessionError::BoardFull { capacity })
                }
            },
            Err(PlayError::Effect(err)) => {
                error!(%err, index, "on-play effect failed");
                Err(SessionError::Effect(err))
            }
        }
    }

    /// Mark the session finished.
    pub fn end_session(&mut self) {
        self.running = false;
        self.player_turn = false;
        self.phase = RoundPhase::SessionEnd;
    }

    /// Events produced since the last drain.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Current renderable state.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        let hand = self
            .player
            .hand
            .occupied()
            .map(|(index, &card)| {
                let (name, cost) = self
                    .registry
                    .get(card)
                    .map(|def| (def.name.clone(), def.mana_cost))
                    .unwrap_or_else(|| (card.to_string(), Default::default()));
                HandEntry { index, name, cost }
            })
            .collect();

        let in_play = self
            .player
            .in_play
            .occupied()
            .map(|(slot, entry)| InPlayEntry {
                slot,
                name: self.card_name(entry.card),
                lifetime: entry.lifetime.raw(),
            })
            .collect();

        Snapshot {
            round: self.round,
            phase: self.phase,
            hand,
            in_play,
            mana: self.player.mana,
        }
    }

    /// Drive the session until the player quits or a fatal error occurs.
    ///
    /// End of input is treated as `q`.
    pub fn run<C: Console>(&mut self, console: &mut C) -> Result<(), SessionError> {
        let legacy = self.config.protocol == InputProtocol::Legacy;
        if legacy {
            // Legacy input starts with one token that is never interpreted.
            let _ = console.read_token();
        }

        while self.running {
            self.start_round()?;
            self.flush_events(console);

            while self.player_turn && self.running {
                console.show(&self.snapshot());

                let token = console
                    .read_token()
                    .unwrap_or_else(|| QUIT_TOKEN.to_string());
                // Any play index, occupied or not, is followed by one extra token.
                let reads_extra = legacy
                    && matches!(
                        Command::parse(&token, self.config.hand_capacity),
                        Command::Play(_)
                    );
                self.handle_token(&token)?;
                self.flush_events(console);

                if reads_extra {
                    let extra = console
                        .read_token()
                        .unwrap_or_else(|| QUIT_TOKEN.to_string());
                    self.buffer = extra;
                    if self.buffer == ABORT_TOKEN {
                        error!("abort token received");
                        return Err(SessionError::ForcedAbort);
                    }
                }
            }

            self.phase = RoundPhase::after_turn(self.running);
        }

        self.end_session();
        console.clear_screen();
        info!(rounds = self.round, "session ended");
        Ok(())
    }

    fn flush_events<C: Console>(&mut self, console: &mut C) {
        for event in self.drain_events() {
            console.message(&event);
        }
    }

    fn card_name(&self, card: CardId) -> String {
        self.registry
            .get(card)
            .map_or_else(|| card.to_string(), |def| def.name.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardDefinition, CustomEffectId, Lifetime};
    use crate::core::error::EffectError;
    use crate::core::ManaKind;
    use crate::effects::Effect;

    fn registry() -> CardRegistry {
        let mut registry = CardRegistry::new();
        registry.register_custom(CustomEffectId::new(0), "Tjena din jävel");
        registry
            .register(
                CardDefinition::new(CardId::new(0), "Tjena")
                    .with_lifetime(Lifetime::rounds(1).unwrap())
                    .on_play(Effect::Custom(CustomEffectId::new(0)))
                    .on_round_start(Effect::Custom(CustomEffectId::new(0))),
            )
            .unwrap();
        registry
            .register(
                CardDefinition::new(CardId::new(2), "Channel Void")
                    .on_round_start(Effect::IncrementMana(ManaKind::Void)),
            )
            .unwrap();
        registry
            .register(
                CardDefinition::new(CardId::new(9), "Glitch")
                    .on_play(Effect::Custom(CustomEffectId::new(42))),
            )
            .unwrap();
        registry
    }

    #[test]
    fn test_new_session() {
        let session = GameSession::new(EngineConfig::default(), registry());
        assert!(session.is_running());
        assert!(session.is_player_turn());
        assert_eq!(session.phase(), RoundPhase::RoundStart);
        assert_eq!(session.round(), 0);
        assert_eq!(session.buffer(), "");
    }

    #[test]
    fn test_seed_hand_validation() {
        let mut session = GameSession::new(EngineConfig::default(), registry());

        session.seed_hand(2, CardId::new(2)).unwrap();
        assert_eq!(session.player().hand.get(2), Some(&CardId::new(2)));

        assert!(matches!(
            session.seed_hand(0, CardId::new(77)),
            Err(CatalogError::UnknownCard(_))
        ));
        assert!(matches!(
            session.seed_hand(10, CardId::new(2)),
            Err(CatalogError::HandSlot { index: 10, capacity: 10 })
        ));
    }

    #[test]
    fn test_start_round_enters_turn() {
        let mut session = GameSession::new(EngineConfig::default(), registry());
        session.player_mut().mana.add(ManaKind::Fire, 3).unwrap();

        session.start_round().unwrap();

        assert_eq!(session.phase(), RoundPhase::PlayerTurn);
        assert!(session.is_player_turn());
        assert_eq!(session.round(), 1);
        assert!(session.player().mana.is_empty());
    }

    #[test]
    fn test_play_token_reports_events() {
        let mut session = GameSession::new(EngineConfig::default(), registry());
        session.seed_hand(0, CardId::new(0)).unwrap();
        session.start_round().unwrap();

        let step = session.handle_token("0").unwrap();
        assert!(matches!(step, TurnStep::Played(PlayOutcome { slot: 0, .. })));
        assert_eq!(
            session.drain_events(),
            vec![
                GameEvent::CardPlayed {
                    hand_index: 0,
                    name: "Tjena".to_string()
                },
                GameEvent::Announcement("Tjena din jävel".to_string()),
            ]
        );
        assert_eq!(session.buffer(), "0");
    }

    #[test]
    fn test_invalid_tokens_do_not_mutate() {
        let mut session = GameSession::new(EngineConfig::default(), registry());
        session.seed_hand(0, CardId::new(0)).unwrap();
        session.start_round().unwrap();
        let before = session.player().clone();

        for token in ["5", "10", "11", "abc"] {
            assert_eq!(session.handle_token(token).unwrap(), TurnStep::Rejected);
        }

        assert_eq!(session.player(), &before);
        assert_eq!(session.drain_events(), vec![GameEvent::OutOfRange; 4]);
        assert!(session.is_running());
        assert!(session.is_player_turn());
    }

    #[test]
    fn test_pass_and_quit() {
        let mut session = GameSession::new(EngineConfig::default(), registry());
        session.start_round().unwrap();

        assert_eq!(session.handle_token("d").unwrap(), TurnStep::Passed);
        assert!(!session.is_player_turn());
        assert!(session.is_running());

        session.start_round().unwrap();
        assert_eq!(session.handle_token("q").unwrap(), TurnStep::Quit);
        assert!(!session.is_running());
    }

    #[test]
    fn test_abort_token() {
        let mut session = GameSession::new(EngineConfig::default(), registry());
        session.start_round().unwrap();

        let err = session.handle_token("error").unwrap_err();
        assert_eq!(err, SessionError::ForcedAbort);
        assert_ne!(err.exit_code(), 0);
    }

    #[test]
    fn test_effect_failure_is_fatal() {
        let mut session = GameSession::new(EngineConfig::default(), registry());
        session.seed_hand(1, CardId::new(9)).unwrap();
        session.start_round().unwrap();

        let err = session.handle_token("1").unwrap_err();
        assert_eq!(
            err,
            SessionError::Effect(EffectError::UnknownCustom(CustomEffectId::new(42)))
        );
    }

    #[test]
    fn test_board_full_policies() {
        let config = EngineConfig::default().with_zone_capacity(1);
        let mut session = GameSession::new(config.clone(), registry());
        session.seed_hand(0, CardId::new(2)).unwrap();
        session.seed_hand(1, CardId::new(2)).unwrap();
        session.start_round().unwrap();
        session.handle_token("0").unwrap();
        session.drain_events();

        assert_eq!(session.handle_token("1").unwrap(), TurnStep::Rejected);
        assert_eq!(
            session.drain_events(),
            vec![GameEvent::BoardFull { capacity: 1 }]
        );
        assert!(session.player().hand.is_occupied(1));

        let mut strict = GameSession::new(config.with_board_full(BoardFullPolicy::Abort), registry());
        strict.seed_hand(0, CardId::new(2)).unwrap();
        strict.seed_hand(1, CardId::new(2)).unwrap();
        strict.start_round().unwrap();
        strict.handle_token("0").unwrap();

        assert_eq!(
            strict.handle_token("1").unwrap_err(),
            SessionError::BoardFull { capacity: 1 }
        );
    }

    #[test]
    fn test_snapshot() {
        let mut session = GameSession::new(EngineConfig::default(), registry());
        session.seed_hand(3, CardId::new(2)).unwrap();
        session.seed_hand(1, CardId::new(0)).unwrap();
        session.start_round().unwrap();
        session.handle_token("3").unwrap();

        let snapshot = session.snapshot();
        assert_eq!(snapshot.round, 1);
        assert_eq!(snapshot.phase, RoundPhase::PlayerTurn);
        assert_eq!(snapshot.hand.len(), 1);
        assert_eq!(snapshot.hand[0].index, 1);
        assert_eq!(snapshot.hand[0].name, "Tjena");
        assert_eq!(
            snapshot.in_play,
            vec![InPlayEntry {
                slot: 0,
                name: "Channel Void".to_string(),
                lifetime: -1
            }]
        );
    }
}
