//! The *Knock Out!* game state machine.
//!
//! ## Rules
//!
//! 1. Each player has a private knock-out number, drawn from 6..=9.
//! 2. Players take turns throwing both dice and add the sum to their score.
//! 3. Rolling your own knock-out number knocks you out of the game.
//! 4. Play ends when every player is knocked out, or when one player
//!    reaches 100 points.
//!
//! ```
//! use knockout::game::Game;
//! use knockout::rules::GameResult;
//!
//! let mut game = Game::builder(3).seed(42).build().unwrap();
//! match game.play().unwrap() {
//!     GameResult::ScoreTarget { winner, score } => assert!(score >= 100, "{winner}"),
//!     GameResult::AllEliminated => assert!(game.players().iter().all(|p| p.is_eliminated())),
//!     GameResult::TurnLimit { .. } => unreachable!("no turn cap configured"),
//! }
//! ```

mod builder;
mod knockout;

pub use builder::GameBuilder;
pub use knockout::Game;
