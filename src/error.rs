//! Error types for game construction and play.

use std::ops::RangeInclusive;

/// Errors raised while configuring or driving a game.
///
/// Everything except [`KnockoutError::AlreadyPlayed`] is a configuration
/// error and is reported at construction time, never mid-game.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KnockoutError {
    /// A game needs at least one player.
    #[error("a game needs at least one player")]
    NoPlayers,

    /// Player IDs are `u32`, so a roster cannot be larger than that.
    #[error("too many players: {0}")]
    TooManyPlayers(usize),

    /// A die must have at least one side.
    #[error("invalid side count: {0} (a die needs at least one side)")]
    InvalidSideCount(u32),

    /// Too many dice per turn.
    #[error("invalid dice per turn: {0} (at most {max})", max = crate::core::MAX_DICE_PER_TURN)]
    InvalidDicePerTurn(u32),

    /// The elimination threshold range is empty.
    #[error("invalid threshold range {low}..={high}")]
    InvalidThresholdRange {
        /// Lower bound.
        low: u32,
        /// Upper bound.
        high: u32,
    },

    /// The raw draw range of a die is empty.
    #[error("invalid draw range {low}..={high}")]
    InvalidDrawRange {
        /// Lower bound.
        low: u32,
        /// Upper bound.
        high: u32,
    },

    /// Pinned thresholds were supplied for the wrong number of players.
    #[error("expected {expected} thresholds, got {actual}")]
    ThresholdCountMismatch {
        /// Number of players in the game.
        expected: usize,
        /// Number of thresholds supplied.
        actual: usize,
    },

    /// A serialized configuration could not be read.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// `play()` was called on a game that already started.
    #[error("game has already been played")]
    AlreadyPlayed,
}

impl KnockoutError {
    pub(crate) fn threshold_range(range: &RangeInclusive<u32>) -> Self {
        Self::InvalidThresholdRange {
            low: *range.start(),
            high: *range.end(),
        }
    }

    pub(crate) fn draw_range(range: &RangeInclusive<u32>) -> Self {
        Self::InvalidDrawRange {
            low: *range.start(),
            high: *range.end(),
        }
    }
}

/// Convenience result type for game operations.
pub type KnockoutResult<T> = Result<T, KnockoutError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[allow(clippy::reversed_empty_ranges)]
    fn test_error_messages() {
        assert_eq!(KnockoutError::NoPlayers.to_string(), "a game needs at least one player");
        assert_eq!(
            KnockoutError::threshold_range(&(9..=6)).to_string(),
            "invalid threshold range 9..=6"
        );
        assert_eq!(KnockoutError::TooManyPlayers(7).to_string(), "too many players: 7");
        assert_eq!(
            KnockoutError::InvalidDicePerTurn(100).to_string(),
            "invalid dice per turn: 100 (at most 64)"
        );
        assert_eq!(
            KnockoutError::ThresholdCountMismatch { expected: 3, actual: 2 }.to_string(),
            "expected 3 thresholds, got 2"
        );
    }
}
