//! Turn-counting observer.

use tracing::info;

use super::GameObserver;
use crate::core::Player;
use crate::rules::{GameResult, TurnRoll};

/// Counts the turns of a game and logs its progress.
///
/// The count resets when a game starts, so one tracker can follow several
/// games in sequence.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TurnTracker {
    turns: u64,
    result: Option<GameResult>,
}

impl TurnTracker {
    /// Create a tracker with a zero count.
    pub fn new() -> Self {
        Self::default()
    }

    /// Turns seen since the last game started.
    #[must_use]
    pub fn turns(&self) -> u64 {
        self.turns
    }

    /// Result of the last game, once it has ended.
    #[must_use]
    pub fn result(&self) -> Option<&GameResult> {
        self.result.as_ref()
    }
}

impl GameObserver for TurnTracker {
    fn on_game_start(&mut self, players: &[Player]) {
        self.turns = 0;
        self.result = None;
        info!(players = players.len(), "started a new game");
    }

    fn on_roll(&mut self, roll: &TurnRoll) {
        self.turns += 1;
        info!(player = %roll.player, sum = roll.sum, "rolled a {}", roll.sum);
    }

    fn on_game_end(&mut self, result: &GameResult) {
        info!(%result, "the game lasted {} turns", self.turns);
        self.result = Some(result.clone());
    }
}
