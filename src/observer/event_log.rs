//! Observer that records every notification.

use serde::{Deserialize, Serialize};

use super::GameObserver;
use crate::core::Player;
use crate::rules::{GameResult, TurnRoll};

/// A recorded notification.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    /// The game started with this roster.
    Started {
        /// Roster as it stood before the first roll.
        players: Vec<Player>,
    },
    /// A player rolled.
    Rolled {
        /// The throw.
        roll: TurnRoll,
    },
    /// The game ended.
    Ended {
        /// How it ended.
        result: GameResult,
    },
}

/// Records notifications in the order they arrive.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventLog {
    events: Vec<GameEvent>,
}

impl EventLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded events.
    #[must_use]
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Number of recorded events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Iterate over the recorded rolls.
    pub fn rolls(&self) -> impl Iterator<Item = &TurnRoll> {
        self.events.iter().filter_map(|event| match event {
            GameEvent::Rolled { roll } => Some(roll),
            GameEvent::Started { .. } | GameEvent::Ended { .. } => None,
        })
    }

    /// The recorded end result, if the game has ended.
    #[must_use]
    pub fn result(&self) -> Option<&GameResult> {
        self.events.iter().find_map(|event| match event {
            GameEvent::Ended { result } => Some(result),
            GameEvent::Started { .. } | GameEvent::Rolled { .. } => None,
        })
    }

    /// Serialize the log as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.events)
    }
}

impl GameObserver for EventLog {
    fn on_game_start(&mut self, players: &[Player]) {
        self.events.push(GameEvent::Started {
            players: players.to_vec(),
        });
    }

    fn on_roll(&mut self, roll: &TurnRoll) {
        self.events.push(GameEvent::Rolled { roll: roll.clone() });
    }

    fn on_game_end(&mut self, result: &GameResult) {
        self.events.push(GameEvent::Ended {
            result: result.clone(),
        });
    }
}
