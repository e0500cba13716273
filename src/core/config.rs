//! Game rule configuration.
//!
//! Every number the rules depend on is a named field on [`GameConfig`]
//! rather than a literal in the game loop. Defaults reproduce the
//! standard *Knock Out!* table:
//!
//! | Parameter | Default |
//! |-----------|---------|
//! | score target | 100 |
//! | elimination threshold | 6..=9 |
//! | sides per die | 6 |
//! | dice per turn | 2 (at most 64) |
//! | raw draw range | 1..=10 |
//! | turn cap | none |
//!
//! Configurations can be loaded from JSON; missing fields fall back to the
//! defaults.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::error::{KnockoutError, KnockoutResult};

/// Score that wins the game.
pub const DEFAULT_SCORE_TARGET: u32 = 100;

/// Range elimination thresholds are drawn from.
pub const DEFAULT_THRESHOLD_RANGE: RangeInclusive<u32> = 6..=9;

/// Sides per die.
pub const DEFAULT_SIDES: u32 = 6;

/// Dice thrown each turn.
pub const DEFAULT_DICE_PER_TURN: u32 = 2;

/// Upper bound on dice thrown each turn.
pub const MAX_DICE_PER_TURN: u32 = 64;

/// Range a die's raw value is drawn from before reduction.
pub const DEFAULT_DRAW_RANGE: RangeInclusive<u32> = 1..=10;

/// Rule parameters for a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// A player whose score reaches this wins.
    pub score_target: u32,

    /// Elimination thresholds are drawn uniformly from this range.
    pub threshold_range: RangeInclusive<u32>,

    /// Sides per die.
    pub sides: u32,

    /// Dice thrown each turn, up to [`MAX_DICE_PER_TURN`]. Zero is allowed
    /// and always sums to 0.
    pub dice_per_turn: u32,

    /// Range each die draws its raw value from.
    pub draw_range: RangeInclusive<u32>,

    /// Maximum turns before the game is called off (`None` = unlimited).
    ///
    /// The rules alone do not guarantee termination, so callers that need
    /// a bound set one here.
    pub max_turns: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            score_target: DEFAULT_SCORE_TARGET,
            threshold_range: DEFAULT_THRESHOLD_RANGE,
            sides: DEFAULT_SIDES,
            dice_per_turn: DEFAULT_DICE_PER_TURN,
            draw_range: DEFAULT_DRAW_RANGE,
            max_turns: None,
        }
    }
}

impl GameConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from JSON and validate it.
    pub fn from_json(json: &str) -> KnockoutResult<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| KnockoutError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the configuration describes a playable game.
    pub fn validate(&self) -> KnockoutResult<()> {
        if self.sides == 0 {
            return Err(KnockoutError::InvalidSideCount(self.sides));
        }
        if self.dice_per_turn > MAX_DICE_PER_TURN {
            return Err(KnockoutError::InvalidDicePerTurn(self.dice_per_turn));
        }
        if self.threshold_range.is_empty() {
            return Err(KnockoutError::threshold_range(&self.threshold_range));
        }
        if self.draw_range.is_empty() {
            return Err(KnockoutError::draw_range(&self.draw_range));
        }
        Ok(())
    }

    /// Set the winning score.
    #[must_use]
    pub fn with_score_target(mut self, target: u32) -> Self {
        self.score_target = target;
        self
    }

    /// Set the elimination threshold range.
    #[must_use]
    pub fn with_threshold_range(mut self, range: RangeInclusive<u32>) -> Self {
        self.threshold_range = range;
        self
    }

    /// Set the number of sides per die.
    #[must_use]
    pub fn with_sides(mut self, sides: u32) -> Self {
        self.sides = sides;
        self
    }

    /// Set the number of dice thrown per turn.
    #[must_use]
    pub fn with_dice_per_turn(mut self, dice: u32) -> Self {
        self.dice_per_turn = dice;
        self
    }

    /// Set the raw draw range of each die.
    #[must_use]
    pub fn with_draw_range(mut self, range: RangeInclusive<u32>) -> Self {
        self.draw_range = range;
        self
    }

    /// Cap the number of turns.
    #[must_use]
    pub fn with_max_turns(mut self, turns: u64) -> Self {
        self.max_turns = Some(turns);
        self
    }
}
