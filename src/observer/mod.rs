//! Observers of a game's lifecycle.
//!
//! A [`GameObserver`] is told when a game starts, about every roll, and
//! when it ends. Observers cannot influence the game and the game never
//! reads anything back from them.
//!
//! ## Notification order
//!
//! 1. `on_game_start` exactly once, before the first roll.
//! 2. `on_roll` once per turn, before the roll is applied, so the eliminating
//!    and winning rolls are reported too.
//! 3. `on_game_end` exactly once, after which nothing else is sent.
//!
//! Observers are called synchronously, in registration order.
//!
//! ## Keeping a handle
//!
//! The game owns its observers. To read an observer's state after the game,
//! register an `Rc<RefCell<O>>` and keep a clone:
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use knockout::game::Game;
//! use knockout::observer::TurnTracker;
//!
//! let tracker = Rc::new(RefCell::new(TurnTracker::new()));
//! let mut game = Game::builder(4).seed(7).build().unwrap();
//! game.set_observer(Rc::clone(&tracker));
//!
//! game.play().unwrap();
//! assert_eq!(tracker.borrow().turns(), game.turns_taken());
//! ```

mod event_log;
mod tracker;

use std::cell::RefCell;
use std::rc::Rc;

use crate::core::Player;
use crate::rules::{GameResult, TurnRoll};

pub use event_log::{EventLog, GameEvent};
pub use tracker::TurnTracker;

/// Receives lifecycle notifications from a game.
///
/// Every method has an empty default, so observers implement only what
/// they care about.
pub trait GameObserver {
    /// The game is about to take its first turn.
    fn on_game_start(&mut self, _players: &[Player]) {}

    /// A player rolled. Called before elimination or scoring is applied.
    fn on_roll(&mut self, _roll: &TurnRoll) {}

    /// The game has ended.
    fn on_game_end(&mut self, _result: &GameResult) {}
}

impl<O: GameObserver + ?Sized> GameObserver for Rc<RefCell<O>> {
    fn on_game_start(&mut self, players: &[Player]) {
        self.borrow_mut().on_game_start(players);
    }

    fn on_roll(&mut self, roll: &TurnRoll) {
        self.borrow_mut().on_roll(roll);
    }

    fn on_game_end(&mut self, result: &GameResult) {
        self.borrow_mut().on_game_end(result);
    }
}

impl<O: GameObserver + ?Sized> GameObserver for Box<O> {
    fn on_game_start(&mut self, players: &[Player]) {
        (**self).on_game_start(players);
    }

    fn on_roll(&mut self, roll: &TurnRoll) {
        (**self).on_roll(roll);
    }

    fn on_game_end(&mut self, result: &GameResult) {
        (**self).on_game_end(result);
    }
}
