//! A single turn: the throw and how it changes the roller.

use serde::{Deserialize, Serialize};

use crate::core::{DiceValues, Player, PlayerId};

/// One player's throw, as reported to observers.
///
/// Observers receive this before the rules are applied, so it carries no
/// outcome.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRoll {
    /// Turn number across the whole game, starting at 1.
    pub turn: u64,
    /// Pass over the roster this turn belongs to, starting at 1.
    pub round: u64,
    /// Who rolled.
    pub player: PlayerId,
    /// Individual die values.
    pub dice: DiceValues,
    /// Sum of the dice.
    pub sum: u32,
}

impl TurnRoll {
    /// Build a roll record, summing the dice.
    ///
    /// The sum saturates at `u32::MAX`.
    pub fn new(turn: u64, round: u64, player: PlayerId, dice: DiceValues) -> Self {
        let sum = dice.iter().fold(0u32, |total, &value| total.saturating_add(value));
        Self {
            turn,
            round,
            player,
            dice,
            sum,
        }
    }
}

/// What a roll did to the player who threw it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum RollOutcome {
    /// The sum matched the player's threshold.
    Eliminated,
    /// The sum was added to the score, still short of the target.
    Scored { score: u32 },
    /// The sum was added and the score reached the target.
    ReachedTarget { score: u32 },
}

/// Apply a roll sum to the player who threw it.
///
/// Rolling your own threshold knocks you out and scores nothing.
pub(crate) fn resolve_roll(player: &mut Player, sum: u32, score_target: u32) -> RollOutcome {
    if sum == player.elimination_threshold() {
        player.eliminate();
        return RollOutcome::Eliminated;
    }

    let score = player.add_score(sum);
    if score >= score_target {
        RollOutcome::ReachedTarget { score }
    } else {
        RollOutcome::Scored { score }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    #[test]
    fn test_turn_roll_sums_dice() {
        let roll = TurnRoll::new(4, 2, PlayerId::new(1), smallvec![3, 5]);
        assert_eq!(roll.sum, 8);
        assert_eq!(roll.dice.as_slice(), &[3, 5]);

        let empty = TurnRoll::new(1, 1, PlayerId::new(1), DiceValues::new());
        assert_eq!(empty.sum, 0);
    }

    #[test]
    fn test_turn_roll_sum_saturates() {
        let roll = TurnRoll::new(1, 1, PlayerId::new(1), smallvec![u32::MAX, u32::MAX, 3]);
        assert_eq!(roll.sum, u32::MAX);
    }

    #[test]
    fn test_threshold_eliminates() {
        let mut player = Player::new(PlayerId::new(1), 7);
        player.add_score(40);

        assert_eq!(resolve_roll(&mut player, 7, 100), RollOutcome::Eliminated);
        assert!(player.is_eliminated());
        assert_eq!(player.score(), 40);
    }

    #[test]
    fn test_other_sums_score() {
        let mut player = Player::new(PlayerId::new(1), 7);

        assert_eq!(resolve_roll(&mut player, 8, 100), RollOutcome::Scored { score: 8 });
        assert_eq!(resolve_roll(&mut player, 6, 100), RollOutcome::Scored { score: 14 });
        assert!(!player.is_eliminated());
    }

    #[test]
    fn test_reaching_target() {
        let mut player = Player::new(PlayerId::new(1), 7);
        player.add_score(90);

        assert_eq!(
            resolve_roll(&mut player, 10, 100),
            RollOutcome::ReachedTarget { score: 100 }
        );
    }

    #[test]
    fn test_threshold_beats_target() {
        // A roll that would cross the target still eliminates on a threshold match.
        let mut player = Player::new(PlayerId::new(1), 12);
        player.add_score(95);

        assert_eq!(resolve_roll(&mut player, 12, 100), RollOutcome::Eliminated);
        assert_eq!(player.score(), 95);
    }

    #[test]
    fn test_roll_serialization() {
        let roll = TurnRoll::new(1, 1, PlayerId::new(2), smallvec![6, 6]);
        let json = serde_json::to_string(&roll).unwrap();
        let deserialized: TurnRoll = serde_json::from_str(&json).unwrap();
        assert_eq!(roll, deserialized);
    }
}
