//! Game outcomes and lifecycle phases.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// Why a game ended.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// A player reached the score target.
    ScoreTarget {
        /// The player who reached the target.
        winner: PlayerId,
        /// Their final score.
        score: u32,
    },
    /// Every player rolled their own threshold.
    AllEliminated,
    /// The configured turn cap was hit first.
    TurnLimit {
        /// Turns taken before the game was called off.
        turns: u64,
    },
}

impl GameResult {
    /// The winning player, if any.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self {
            GameResult::ScoreTarget { winner, .. } => Some(*winner),
            GameResult::AllEliminated | GameResult::TurnLimit { .. } => None,
        }
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        self.winner() == Some(player)
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::ScoreTarget { winner, score } => {
                write!(f, "{winner} has won with a final score of {score}!")
            }
            GameResult::AllEliminated => write!(f, "All players have been knocked out!"),
            GameResult::TurnLimit { turns } => write!(f, "No winner after {turns} turns."),
        }
    }
}

/// Lifecycle of a game: `NotStarted -> Running -> Ended`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// `play()` has not been called.
    #[default]
    NotStarted,
    /// Turns are being taken.
    Running,
    /// A terminal condition was reached.
    Ended(GameResult),
}

impl GamePhase {
    /// Whether the game has finished.
    #[must_use]
    pub fn is_ended(&self) -> bool {
        matches!(self, GamePhase::Ended(_))
    }

    /// The result, once ended.
    #[must_use]
    pub fn result(&self) -> Option<&GameResult> {
        match self {
            GamePhase::Ended(result) => Some(result),
            GamePhase::NotStarted | GamePhase::Running => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_result_is_winner() {
        let result = GameResult::ScoreTarget {
            winner: PlayerId::new(2),
            score: 104,
        };
        assert!(!result.is_winner(PlayerId::new(1)));
        assert!(result.is_winner(PlayerId::new(2)));
        assert_eq!(result.winner(), Some(PlayerId::new(2)));

        assert_eq!(GameResult::AllEliminated.winner(), None);
        assert!(!GameResult::TurnLimit { turns: 5 }.is_winner(PlayerId::new(1)));
    }

    #[test]
    fn test_game_result_display() {
        let won = GameResult::ScoreTarget {
            winner: PlayerId::new(3),
            score: 104,
        };
        assert_eq!(won.to_string(), "Player 3 has won with a final score of 104!");
        assert_eq!(
            GameResult::AllEliminated.to_string(),
            "All players have been knocked out!"
        );
        assert_eq!(
            GameResult::TurnLimit { turns: 50 }.to_string(),
            "No winner after 50 turns."
        );
    }

    #[test]
    fn test_phase() {
        assert_eq!(GamePhase::default(), GamePhase::NotStarted);
        assert!(!GamePhase::Running.is_ended());
        assert_eq!(GamePhase::Running.result(), None);

        let ended = GamePhase::Ended(GameResult::AllEliminated);
        assert!(ended.is_ended());
        assert_eq!(ended.result(), Some(&GameResult::AllEliminated));
    }

    #[test]
    fn test_result_serialization() {
        let result = GameResult::ScoreTarget {
            winner: PlayerId::new(1),
            score: 108,
        };
        let json = serde_json::to_string(&result).unwrap();
        let deserialized: GameResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, deserialized);
    }
}
