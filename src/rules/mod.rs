//! Turn rules and game outcomes.
//!
//! - A turn is a throw of every die; the sum is the roll.
//! - Rolling your own elimination threshold knocks you out.
//! - Any other roll is added to your score; reaching the score target wins.
//!
//! The game loop in [`crate::game`] decides whose turn it is and when the
//! game ends; this module only says what a single roll does.

mod result;
mod turn;

pub use result::{GamePhase, GameResult};
pub use turn::TurnRoll;

pub(crate) use turn::{resolve_roll, RollOutcome};
