//! Dice backed by a shared random source.
//!
//! A [`Die`] draws a raw value from a wider range and reduces it modulo
//! its side count: `roll = raw % sides + 1`. When the size of the draw
//! range is not a multiple of `sides` the faces are not exactly uniform.
//! With the default `1..=10` draw on a d6, faces 2-5 come up twice as
//! often as 1 and 6. This bias is part of the game's rules.

use std::fmt;
use std::ops::RangeInclusive;

use smallvec::SmallVec;

use super::config::DEFAULT_DRAW_RANGE;
use super::rng::SharedSource;
use crate::error::{KnockoutError, KnockoutResult};

/// Individual die values of one throw. Inline for up to four dice.
pub type DiceValues = SmallVec<[u32; 4]>;

/// A die with a fixed number of sides.
///
/// Cloning a die shares its random source.
#[derive(Clone)]
pub struct Die {
    sides: u32,
    draw: RangeInclusive<u32>,
    source: SharedSource,
}

impl Die {
    /// Create a die drawing from the default `1..=10` range.
    pub fn new(sides: u32, source: SharedSource) -> KnockoutResult<Self> {
        Self::with_draw_range(sides, DEFAULT_DRAW_RANGE, source)
    }

    /// Create a die drawing raw values from `draw`.
    pub fn with_draw_range(
        sides: u32,
        draw: RangeInclusive<u32>,
        source: SharedSource,
    ) -> KnockoutResult<Self> {
        if sides == 0 {
            return Err(KnockoutError::InvalidSideCount(sides));
        }
        if draw.is_empty() {
            return Err(KnockoutError::draw_range(&draw));
        }
        Ok(Self { sides, draw, source })
    }

    /// Number of sides.
    #[must_use]
    pub fn sides(&self) -> u32 {
        self.sides
    }

    /// Range raw values are drawn from before reduction.
    #[must_use]
    pub fn draw_range(&self) -> &RangeInclusive<u32> {
        &self.draw
    }

    /// Roll once. The result is in `1..=sides`.
    pub fn roll(&self) -> u32 {
        let raw = self
            .source
            .borrow_mut()
            .next_in_range(*self.draw.start(), *self.draw.end());
        raw % self.sides + 1
    }

    /// Roll `count` times.
    pub fn roll_many(&self, count: u32) -> DiceValues {
        (0..count).map(|_| self.roll()).collect()
    }
}

impl fmt::Debug for Die {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Die")
            .field("sides", &self.sides)
            .field("draw", &self.draw)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Die {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "d{}", self.sides)
    }
}
