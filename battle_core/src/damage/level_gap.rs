//! LevelGap - Level difference between attacker and receiver

use crate::character::CharacterLevel;
use serde::{Deserialize, Serialize};

/// Receiver and attacker levels for one damage computation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LevelGap {
    pub receiver_level: i32,
    pub attacker_level: i32,
}

impl LevelGap {
    pub fn new(receiver_level: i32, attacker_level: i32) -> Self {
        LevelGap {
            receiver_level,
            attacker_level,
        }
    }

    /// Gap from an attacker's and a receiver's character level
    pub fn between(attacker: &CharacterLevel, receiver: &CharacterLevel) -> Self {
        Self::new(receiver.value(), attacker.value())
    }

    /// `receiver - attacker`; positive when the attacker is under-leveled
    pub fn gap(&self) -> i32 {
        self.receiver_level.saturating_sub(self.attacker_level)
    }

    /// Exponential scaling term: `correction ^ gap`
    pub fn level_factor(&self, correction: f64) -> f64 {
        correction.powi(self.gap())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::damage::constants::LEVEL_GAP_CORRECTION;

    #[test]
    fn test_gap_sign() {
        assert_eq!(LevelGap::new(10, 7).gap(), 3);
        assert_eq!(LevelGap::new(7, 10).gap(), -3);
        assert_eq!(LevelGap::new(5, 5).gap(), 0);
    }

    #[test]
    fn test_equal_levels_factor_is_one() {
        let factor = LevelGap::new(12, 12).level_factor(LEVEL_GAP_CORRECTION);
        assert!((factor - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_three_levels_doubles() {
        let factor = LevelGap::new(20, 17).level_factor(LEVEL_GAP_CORRECTION);
        assert!((factor - 2.0).abs() < 1e-9);

        let factor = LevelGap::new(17, 20).level_factor(LEVEL_GAP_CORRECTION);
        assert!((factor - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_between_levels() {
        let attacker = CharacterLevel::new(4).unwrap();
        let receiver = CharacterLevel::new(9).unwrap();
        let gap = LevelGap::between(&attacker, &receiver);
        assert_eq!(gap.attacker_level, 4);
        assert_eq!(gap.receiver_level, 9);
        assert_eq!(gap.gap(), 5);
    }
}
