//! Player identification and per-player game state.
//!
//! ## PlayerId
//!
//! Players are numbered 1..=N in turn order, matching how the game
//! announces them ("Player 3 has won ...").
//!
//! ## Player
//!
//! A player's elimination threshold is fixed at creation. Score and the
//! eliminated flag only change inside [`Game::play`](crate::game::Game::play);
//! outside the game a player is read-only.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use super::rng::RandomSource;

/// Player identifier. The first player is `PlayerId(1)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u32);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw 1-based ID.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Position of this player in the roster (0-based).
    ///
    /// Returns `None` for `PlayerId(0)`, which never names a player.
    #[must_use]
    pub const fn index(self) -> Option<usize> {
        match self.0 {
            0 => None,
            n => Some(n as usize - 1),
        }
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// Counts beyond `u32::MAX` stop at `PlayerId(u32::MAX)`.
    ///
    /// ```
    /// use knockout::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(3).collect();
    /// assert_eq!(players, vec![PlayerId::new(1), PlayerId::new(2), PlayerId::new(3)]);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        let last = u32::try_from(player_count).unwrap_or(u32::MAX);
        (1..=last).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// A participant in a game.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    elimination_threshold: u32,
    score: u32,
    eliminated: bool,
}

impl Player {
    /// Create a player with a known elimination threshold.
    #[must_use]
    pub fn new(id: PlayerId, elimination_threshold: u32) -> Self {
        Self {
            id,
            elimination_threshold,
            score: 0,
            eliminated: false,
        }
    }

    /// Create a player whose threshold is drawn once from `range`.
    ///
    /// `range` must be non-empty; game construction validates this.
    pub fn with_drawn_threshold(
        id: PlayerId,
        range: &RangeInclusive<u32>,
        source: &mut dyn RandomSource,
    ) -> Self {
        let threshold = source.next_in_range(*range.start(), *range.end());
        Self::new(id, threshold)
    }

    /// This player's ID.
    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    /// The roll sum that knocks this player out.
    #[must_use]
    pub fn elimination_threshold(&self) -> u32 {
        self.elimination_threshold
    }

    /// Running score.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Whether this player has been knocked out.
    #[must_use]
    pub fn is_eliminated(&self) -> bool {
        self.eliminated
    }

    /// Whether this player still takes turns.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.eliminated
    }

    pub(crate) fn eliminate(&mut self) {
        self.eliminated = true;
    }

    /// Add to the running score, returning the new total.
    pub(crate) fn add_score(&mut self, points: u32) -> u32 {
        self.score = self.score.saturating_add(points);
        self.score
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::{GameRng, ScriptedSource};

    #[test]
    fn test_player_id_basics() {
        let p1 = PlayerId::new(1);
        let p2 = PlayerId::new(2);

        assert_eq!(p1.index(), Some(0));
        assert_eq!(p2.index(), Some(1));
        assert_eq!(PlayerId::new(0).index(), None);
        assert_eq!(format!("{}", p1), "Player 1");
    }

    #[test]
    fn test_player_id_all() {
        let players: Vec<_> = PlayerId::all(4).collect();
        assert_eq!(players.len(), 4);
        assert_eq!(players[0], PlayerId::new(1));
        assert_eq!(players[3], PlayerId::new(4));
        assert_eq!(PlayerId::all(0).count(), 0);
    }

    #[test]
    fn test_new_player() {
        let player = Player::new(PlayerId::new(3), 7);

        assert_eq!(player.id(), PlayerId::new(3));
        assert_eq!(player.elimination_threshold(), 7);
        assert_eq!(player.score(), 0);
        assert!(!player.is_eliminated());
        assert!(player.is_active());
    }

    #[test]
    fn test_drawn_threshold_in_range() {
        let mut rng = GameRng::new(42);
        for id in PlayerId::all(200) {
            let player = Player::with_drawn_threshold(id, &(6..=9), &mut rng);
            assert!((6..=9).contains(&player.elimination_threshold()));
        }
    }

    #[test]
    fn test_drawn_threshold_from_script() {
        let mut source = ScriptedSource::new([8, 6]);
        let a = Player::with_drawn_threshold(PlayerId::new(1), &(6..=9), &mut source);
        let b = Player::with_drawn_threshold(PlayerId::new(2), &(6..=9), &mut source);

        assert_eq!(a.elimination_threshold(), 8);
        assert_eq!(b.elimination_threshold(), 6);
    }

    #[test]
    fn test_score_and_elimination() {
        let mut player = Player::new(PlayerId::new(1), 6);

        assert_eq!(player.add_score(12), 12);
        assert_eq!(player.add_score(5), 17);
        player.eliminate();

        assert!(player.is_eliminated());
        assert_eq!(player.score(), 17);
    }

    #[test]
    fn test_score_saturates() {
        let mut player = Player::new(PlayerId::new(1), 6);
        player.add_score(u32::MAX);
        assert_eq!(player.add_score(10), u32::MAX);
    }

    #[test]
    fn test_player_serialization() {
        let player = Player::new(PlayerId::new(2), 9);
        let json = serde_json::to_string(&player).unwrap();
        let deserialized: Player = serde_json::from_str(&json).unwrap();
        assert_eq!(player, deserialized);
    }
}
