//! Game construction.

use std::fmt;

use tracing::debug;

use super::Game;
use crate::core::{shared, Die, GameConfig, GameRng, Player, PlayerId, SharedSource};
use crate::error::{KnockoutError, KnockoutResult};
use crate::observer::GameObserver;

/// Builder for creating a [`Game`].
///
/// By default the game uses [`GameConfig::default`] and a freshly seeded
/// [`GameRng`]. The same source backs the dice and the threshold draws
/// unless thresholds are pinned with [`GameBuilder::thresholds`].
pub struct GameBuilder {
    player_count: usize,
    config: GameConfig,
    seed: Option<u64>,
    source: Option<SharedSource>,
    thresholds: Option<Vec<u32>>,
    observers: Vec<Box<dyn GameObserver>>,
}

impl GameBuilder {
    /// Start building a game for `player_count` players.
    pub fn new(player_count: usize) -> Self {
        Self {
            player_count,
            config: GameConfig::default(),
            seed: None,
            source: None,
            thresholds: None,
            observers: Vec::new(),
        }
    }

    /// Use these rules.
    #[must_use]
    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    /// Seed the default [`GameRng`]. Ignored when a source is supplied.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Draw all randomness from `source`.
    #[must_use]
    pub fn source(mut self, source: SharedSource) -> Self {
        self.source = Some(source);
        self
    }

    /// Pin each player's elimination threshold, in turn order.
    ///
    /// Pinned thresholds are used as given, even outside the configured
    /// threshold range.
    #[must_use]
    pub fn thresholds(mut self, thresholds: impl Into<Vec<u32>>) -> Self {
        self.thresholds = Some(thresholds.into());
        self
    }

    /// Register an observer.
    #[must_use]
    pub fn observer(mut self, observer: impl GameObserver + 'static) -> Self {
        self.observers.push(Box::new(observer));
        self
    }

    /// Validate the configuration and build the game.
    pub fn build(self) -> KnockoutResult<Game> {
        if self.player_count == 0 {
            return Err(KnockoutError::NoPlayers);
        }
        if u32::try_from(self.player_count).is_err() {
            return Err(KnockoutError::TooManyPlayers(self.player_count));
        }
        self.config.validate()?;

        let source = match self.source {
            Some(source) => source,
            None => {
                let rng = self.seed.map_or_else(GameRng::from_entropy, GameRng::new);
                debug!(seed = rng.seed(), "seeded game rng");
                shared(rng)
            }
        };

        let die = Die::with_draw_range(
            self.config.sides,
            self.config.draw_range.clone(),
            source.clone(),
        )?;

        let players: Vec<Player> = match self.thresholds {
            Some(thresholds) => {
                if thresholds.len() != self.player_count {
                    return Err(KnockoutError::ThresholdCountMismatch {
                        expected: self.player_count,
                        actual: thresholds.len(),
                    });
                }
                PlayerId::all(self.player_count)
                    .zip(thresholds)
                    .map(|(id, threshold)| Player::new(id, threshold))
                    .collect()
            }
            None => {
                let mut source = source.borrow_mut();
                PlayerId::all(self.player_count)
                    .map(|id| {
                        Player::with_drawn_threshold(id, &self.config.threshold_range, &mut *source)
                    })
                    .collect()
            }
        };

        Ok(Game::from_parts(self.config, die, players, self.observers))
    }
}

impl fmt::Debug for GameBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameBuilder")
            .field("player_count", &self.player_count)
            .field("config", &self.config)
            .field("seed", &self.seed)
            .field("thresholds", &self.thresholds)
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ScriptedSource;

    #[test]
    fn test_zero_players() {
        let err = GameBuilder::new(0).build().unwrap_err();
        assert_eq!(err, KnockoutError::NoPlayers);
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_too_many_players() {
        let count = u32::MAX as usize + 1;
        let err = GameBuilder::new(count).seed(1).build().unwrap_err();
        assert_eq!(err, KnockoutError::TooManyPlayers(count));
    }

    #[test]
    fn test_huge_dice_count_fails_at_build() {
        let err = GameBuilder::new(2)
            .config(GameConfig::new().with_dice_per_turn(u32::MAX))
            .build()
            .unwrap_err();
        assert_eq!(err, KnockoutError::InvalidDicePerTurn(u32::MAX));
    }

    #[test]
    fn test_invalid_config_fails_at_build() {
        let err = GameBuilder::new(2)
            .config(GameConfig::new().with_sides(0))
            .build()
            .unwrap_err();
        assert_eq!(err, KnockoutError::InvalidSideCount(0));
    }

    #[test]
    fn test_sequential_ids() {
        let game = GameBuilder::new(5).seed(1).build().unwrap();
        let ids: Vec<_> = game.players().iter().map(|p| p.id().raw()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_drawn_thresholds_in_range() {
        let game = GameBuilder::new(50).seed(9).build().unwrap();
        for player in game.players() {
            assert!((6..=9).contains(&player.elimination_threshold()));
            assert_eq!(player.score(), 0);
            assert!(!player.is_eliminated());
        }
    }

    #[test]
    fn test_thresholds_drawn_from_source() {
        let game = GameBuilder::new(3)
            .source(shared(ScriptedSource::new([9, 6, 8])))
            .build()
            .unwrap();
        let thresholds: Vec<_> = game
            .players()
            .iter()
            .map(Player::elimination_threshold)
            .collect();
        assert_eq!(thresholds, vec![9, 6, 8]);
    }

    #[test]
    fn test_pinned_thresholds() {
        let game = GameBuilder::new(2).seed(3).thresholds([0, 12]).build().unwrap();
        assert_eq!(game.players()[0].elimination_threshold(), 0);
        assert_eq!(game.players()[1].elimination_threshold(), 12);
    }

    #[test]
    fn test_threshold_count_mismatch() {
        let err = GameBuilder::new(3).thresholds([6, 7]).build().unwrap_err();
        assert_eq!(
            err,
            KnockoutError::ThresholdCountMismatch {
                expected: 3,
                actual: 2
            }
        );
    }

    #[test]
    fn test_same_seed_same_roster() {
        let a = GameBuilder::new(6).seed(77).build().unwrap();
        let b = GameBuilder::new(6).seed(77).build().unwrap();
        assert_eq!(a.players(), b.players());
    }
}
