//! Turn loop, elimination bookkeeping and termination.

use std::fmt;

use tracing::{debug, info, instrument};

use super::GameBuilder;
use crate::core::{Die, GameConfig, Player, PlayerId};
use crate::error::{KnockoutError, KnockoutResult};
use crate::observer::GameObserver;
use crate::rules::{resolve_roll, GamePhase, GameResult, RollOutcome, TurnRoll};

/// A game of *Knock Out!*.
///
/// The game owns its die, its roster and its observers. Players can be
/// inspected at any time but only change inside [`Game::play`].
pub struct Game {
    config: GameConfig,
    die: Die,
    players: Vec<Player>,
    observers: Vec<Box<dyn GameObserver>>,
    phase: GamePhase,
    turns: u64,
}

impl Game {
    /// Create a game with default rules and a freshly seeded RNG.
    pub fn new(player_count: usize) -> KnockoutResult<Self> {
        GameBuilder::new(player_count).build()
    }

    /// Start building a game for `player_count` players.
    pub fn builder(player_count: usize) -> GameBuilder {
        GameBuilder::new(player_count)
    }

    pub(super) fn from_parts(
        config: GameConfig,
        die: Die,
        players: Vec<Player>,
        observers: Vec<Box<dyn GameObserver>>,
    ) -> Self {
        Self {
            config,
            die,
            players,
            observers,
            phase: GamePhase::NotStarted,
            turns: 0,
        }
    }

    /// Replace all observers with `observer`.
    pub fn set_observer(&mut self, observer: impl GameObserver + 'static) {
        self.observers.clear();
        self.add_observer(observer);
    }

    /// Register an additional observer.
    pub fn add_observer(&mut self, observer: impl GameObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Play the game to the end.
    ///
    /// Turns go round the roster in order, skipping knocked-out players,
    /// until a player reaches the score target, every player is knocked
    /// out, or the configured turn cap is spent. Without a turn cap this
    /// may in principle never return.
    ///
    /// A game can only be played once; later calls return
    /// [`KnockoutError::AlreadyPlayed`] without touching any state.
    #[instrument(skip(self), fields(players = self.players.len()))]
    pub fn play(&mut self) -> KnockoutResult<GameResult> {
        if self.phase != GamePhase::NotStarted {
            return Err(KnockoutError::AlreadyPlayed);
        }

        self.phase = GamePhase::Running;
        info!(target_score = self.config.score_target, "game started");
        for observer in &mut self.observers {
            observer.on_game_start(&self.players);
        }

        let result = self.run_turns();

        info!(%result, turns = self.turns, "game ended");
        self.phase = GamePhase::Ended(result.clone());
        for observer in &mut self.observers {
            observer.on_game_end(&result);
        }

        Ok(result)
    }

    fn run_turns(&mut self) -> GameResult {
        let mut round = 0;
        loop {
            round += 1;
            for index in 0..self.players.len() {
                if self.players[index].is_eliminated() {
                    continue;
                }
                if let Some(limit) = self.config.max_turns {
                    if self.turns >= limit {
                        return GameResult::TurnLimit { turns: self.turns };
                    }
                }

                let roll = self.take_turn(index, round);
                for observer in &mut self.observers {
                    observer.on_roll(&roll);
                }

                if let Some(result) = self.apply_roll(index, roll.sum) {
                    return result;
                }
            }
        }
    }

    fn take_turn(&mut self, index: usize, round: u64) -> TurnRoll {
        self.turns += 1;
        let dice = self.die.roll_many(self.config.dice_per_turn);
        let roll = TurnRoll::new(self.turns, round, self.players[index].id(), dice);
        debug!(turn = roll.turn, round, player = %roll.player, sum = roll.sum, "rolled");
        roll
    }

    fn apply_roll(&mut self, index: usize, sum: u32) -> Option<GameResult> {
        let player = &mut self.players[index];
        let id = player.id();

        match resolve_roll(player, sum, self.config.score_target) {
            RollOutcome::Eliminated => {
                let remaining = self.players.iter().filter(|p| p.is_active()).count();
                debug!(player = %id, remaining, "knocked out");
                (remaining == 0).then_some(GameResult::AllEliminated)
            }
            RollOutcome::Scored { score } => {
                debug!(player = %id, score, "scored");
                None
            }
            RollOutcome::ReachedTarget { score } => Some(GameResult::ScoreTarget { winner: id, score }),
        }
    }

    /// The rules this game is played with.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The die thrown each turn.
    #[must_use]
    pub fn die(&self) -> &Die {
        &self.die
    }

    /// The roster, in turn order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Look up a player by ID.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id.index()?)
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> &GamePhase {
        &self.phase
    }

    /// The result, once the game has ended.
    #[must_use]
    pub fn result(&self) -> Option<&GameResult> {
        self.phase.result()
    }

    /// Turns taken so far.
    #[must_use]
    pub fn turns_taken(&self) -> u64 {
        self.turns
    }
}

impl fmt::Debug for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Game")
            .field("config", &self.config)
            .field("die", &self.die)
            .field("players", &self.players)
            .field("observers", &self.observers.len())
            .field("phase", &self.phase)
            .field("turns", &self.turns)
            .finish()
    }
}
