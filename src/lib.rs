//! # knockout
//!
//! An engine for *Knock Out!*, a turn-based elimination dice race.
//!
//! Every player gets a private knock-out number. Players take turns
//! throwing two dice and banking the sum; rolling your own knock-out
//! number removes you from the game. The first player to reach 100 wins,
//! unless everyone is knocked out first.
//!
//! ## Design Principles
//!
//! 1. **Injected randomness**: dice and thresholds draw from a
//!    [`RandomSource`] passed in at construction. Seeded games replay
//!    exactly; scripted sources make any scenario reproducible.
//!
//! 2. **Configuration over constants**: the score target, threshold range,
//!    die shape and dice per turn live in [`GameConfig`].
//!
//! 3. **Observers, not printing**: the game reports its lifecycle to
//!    [`GameObserver`]s and emits `tracing` events; formatting is left to
//!    the caller.
//!
//! ## Modules
//!
//! - `core`: players, dice, randomness, configuration
//! - `rules`: what a roll does, results, lifecycle phases
//! - `observer`: lifecycle notifications and the shipped observers
//! - `game`: the turn loop state machine
//! - `error`: configuration and misuse errors

pub mod core;
pub mod error;
pub mod game;
pub mod observer;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    shared, Die, GameConfig, GameRng, GameRngState, Player, PlayerId, RandomSource,
    ScriptedSource, SharedSource,
};

pub use crate::error::{KnockoutError, KnockoutResult};

pub use crate::game::{Game, GameBuilder};

pub use crate::observer::{EventLog, GameEvent, GameObserver, TurnTracker};

pub use crate::rules::{GamePhase, GameResult, TurnRoll};
