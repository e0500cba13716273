//! Core building blocks: players, dice, randomness, configuration.
//!
//! These types know nothing about turn order or termination. The game
//! state machine in [`crate::game`] composes them.

pub mod config;
pub mod die;
pub mod player;
pub mod rng;

pub use config::{
    GameConfig, DEFAULT_DICE_PER_TURN, DEFAULT_DRAW_RANGE, DEFAULT_SCORE_TARGET, DEFAULT_SIDES,
    DEFAULT_THRESHOLD_RANGE, MAX_DICE_PER_TURN,
};
pub use die::{DiceValues, Die};
pub use player::{Player, PlayerId};
pub use rng::{shared, GameRng, GameRngState, RandomSource, ScriptedSource, SharedSource};
