//! Injected randomness for dice and threshold draws.
//!
//! The game never reaches for a global RNG. Every random value comes from a
//! [`RandomSource`] handed to it at construction, so a game can be replayed
//! from a seed or driven by a fixed script in tests.
//!
//! ## Sources
//!
//! - [`GameRng`]: seeded ChaCha8 generator, the default for real games.
//!   [`GameRng::fork`] derives independent generators, e.g. one per game
//!   in a batch of simulations.
//! - [`ScriptedSource`]: replays a fixed sequence of values.
//!
//! ```
//! use knockout::core::{GameRng, RandomSource};
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//! assert_eq!(a.next_in_range(1, 10), b.next_in_range(1, 10));
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// A capability that produces integers in an inclusive range.
///
/// Callers always pass `lo <= hi`; implementations must return a value in
/// `lo..=hi`.
pub trait RandomSource {
    /// Draw an integer from `lo..=hi`.
    fn next_in_range(&mut self, lo: u32, hi: u32) -> u32;
}

/// A random source shared between several dice and the threshold draws.
pub type SharedSource = Rc<RefCell<dyn RandomSource>>;

/// Wrap a source so it can back several consumers.
pub fn shared<R: RandomSource + 'static>(source: R) -> SharedSource {
    Rc::new(RefCell::new(source))
}

/// Deterministic RNG for game simulation.
///
/// Uses ChaCha8 for speed while keeping good statistical quality.
/// The same seed always produces the same game.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Fork this RNG into an independent generator.
    ///
    /// Each fork produces a different but deterministic sequence: two RNGs
    /// with the same seed hand out the same forks in the same order.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self::new(fork_seed)
    }

    /// Create an RNG with a fresh random seed.
    ///
    /// The chosen seed is available through [`GameRng::seed`] so the game
    /// can be reproduced later.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
            fork_counter: self.fork_counter,
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
            fork_counter: state.fork_counter,
        }
    }
}

impl RandomSource for GameRng {
    fn next_in_range(&mut self, lo: u32, hi: u32) -> u32 {
        self.inner.gen_range(lo..=hi)
    }
}

/// Serializable RNG state for checkpointing.
///
/// Uses the ChaCha8 word position, so capturing state is O(1) no matter
/// how many values have been drawn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
    /// Forks handed out so far
    pub fork_counter: u64,
}

/// A source that replays a fixed sequence of values, cycling at the end.
///
/// A scripted value outside the requested range is folded into it as
/// `lo + value % (hi - lo + 1)`, so the range contract always holds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScriptedSource {
    values: Vec<u32>,
    draws: usize,
}

impl ScriptedSource {
    /// Create a source that cycles through `values`.
    ///
    /// # Panics
    ///
    /// Panics if `values` is empty.
    pub fn new(values: impl Into<Vec<u32>>) -> Self {
        let values = values.into();
        assert!(!values.is_empty(), "Scripted source needs at least one value");
        Self { values, draws: 0 }
    }

    /// Create a source that always yields the same value.
    #[must_use]
    pub fn constant(value: u32) -> Self {
        Self::new(vec![value])
    }

    /// Number of values drawn so far.
    #[must_use]
    pub fn draws(&self) -> usize {
        self.draws
    }
}

impl RandomSource for ScriptedSource {
    fn next_in_range(&mut self, lo: u32, hi: u32) -> u32 {
        let value = self.values[self.draws % self.values.len()];
        self.draws += 1;

        if (lo..=hi).contains(&value) {
            return value;
        }

        let span = u64::from(hi) - u64::from(lo) + 1;
        let folded = u64::from(lo) + u64::from(value) % span;
        // folded <= hi, which fits in u32
        folded as u32
    }
}
