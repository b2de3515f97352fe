//! CharacterLevel - Level derived from cumulative experience
//!
//! Required cumulative experience follows a geometric series:
//! `required(level) = I * (1 - A^(level - 1)) / (1 - A)` with
//! `I = INITIAL_EXP_REQUIREMENT` and `A = EXP_GROWTH`.

use super::constants::{EXP_GROWTH, INITIAL_EXP_REQUIREMENT, KILLS_PER_LEVEL, MAX_LEVEL};
use crate::error::BattleError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Amount of experience points
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Experience(u64);

impl Experience {
    pub fn new(value: u64) -> Self {
        Experience(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    /// Add experience, saturating at `u64::MAX`
    pub fn add(self, other: Experience) -> Experience {
        Experience(self.0.saturating_add(other.0))
    }

    /// Experience needed to advance from `level` to `level + 1`
    pub fn to_next_level(level: i32) -> Experience {
        let exponent = (level.max(1) - 1) as f64;
        Experience((INITIAL_EXP_REQUIREMENT * EXP_GROWTH.powf(exponent)) as u64)
    }

    /// Experience granted for defeating one enemy of `level`
    pub fn for_defeating(level: i32) -> Experience {
        let exponent = (level.max(1) - 1) as f64;
        let exp = INITIAL_EXP_REQUIREMENT * EXP_GROWTH.powf(exponent) / KILLS_PER_LEVEL;
        Experience(exp.round() as u64)
    }

    /// Cumulative experience at which `level` is reached
    pub fn required_for_level(level: i32) -> Experience {
        let exponent = (level.max(1) - 1) as f64;
        let total =
            INITIAL_EXP_REQUIREMENT * (1.0 - EXP_GROWTH.powf(exponent)) / (1.0 - EXP_GROWTH);
        Experience(total as u64)
    }

    /// Level reached with this much cumulative experience, capped at `MAX_LEVEL`
    pub fn level(&self) -> i32 {
        // Closed-form estimate, then corrected against the integer thresholds
        let ratio = 1.0 - self.0 as f64 * (1.0 - EXP_GROWTH) / INITIAL_EXP_REQUIREMENT;
        let estimate = (ratio.ln() / EXP_GROWTH.ln()) as i32 + 1;
        let mut level = estimate.clamp(1, MAX_LEVEL);

        while level < MAX_LEVEL && Experience::required_for_level(level + 1) <= *self {
            level += 1;
        }
        while level > 1 && Experience::required_for_level(level) > *self {
            level -= 1;
        }
        level
    }
}

/// Level of a character, stored as cumulative experience
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CharacterLevel {
    cumulative_exp: Experience,
}

impl CharacterLevel {
    /// Create a level at exactly the experience threshold of `level`
    pub fn new(level: i32) -> Result<Self, BattleError> {
        if !(1..=MAX_LEVEL).contains(&level) {
            return Err(BattleError::InvalidLevel(level));
        }
        Ok(CharacterLevel {
            cumulative_exp: Experience::required_for_level(level),
        })
    }

    /// Create a level from cumulative experience
    pub fn from_experience(cumulative_exp: Experience) -> Self {
        CharacterLevel { cumulative_exp }
    }

    pub fn value(&self) -> i32 {
        self.cumulative_exp.level()
    }

    pub fn cumulative_exp(&self) -> Experience {
        self.cumulative_exp
    }

    /// Return the level after gaining `exp`
    pub fn add_exp(&self, exp: Experience) -> CharacterLevel {
        CharacterLevel {
            cumulative_exp: self.cumulative_exp.add(exp),
        }
    }

    pub fn is_max_level(&self) -> bool {
        self.value() == MAX_LEVEL
    }
}

impl fmt::Display for CharacterLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Lv.{}", self.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_level_from_experience() {
        assert_eq!(Experience::new(0).level(), 1);
        assert_eq!(Experience::new(99).level(), 1);
        assert_eq!(Experience::new(100).level(), 2);
        assert_eq!(Experience::new(224).level(), 2);
        assert_eq!(Experience::new(225).level(), 3);
    }

    #[test]
    fn test_required_for_level() {
        assert_eq!(Experience::required_for_level(1).value(), 0);
        assert_eq!(Experience::required_for_level(2).value(), 100);
        assert_eq!(Experience::required_for_level(3).value(), 225);
    }

    #[test]
    fn test_to_next_level_grows() {
        assert_eq!(Experience::to_next_level(1).value(), 100);
        assert_eq!(Experience::to_next_level(2).value(), 125);
        assert!(Experience::to_next_level(10) > Experience::to_next_level(9));
    }

    #[test]
    fn test_for_defeating() {
        // 100 / 5 kills
        assert_eq!(Experience::for_defeating(1).value(), 20);
        // 125 / 5 kills
        assert_eq!(Experience::for_defeating(2).value(), 25);
    }

    #[test]
    fn test_level_caps_at_max() {
        let level = CharacterLevel::from_experience(Experience::new(u64::MAX));
        assert_eq!(level.value(), MAX_LEVEL);
        assert!(level.is_max_level());
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        assert_eq!(CharacterLevel::new(0), Err(BattleError::InvalidLevel(0)));
        assert_eq!(CharacterLevel::new(101), Err(BattleError::InvalidLevel(101)));
    }

    #[test]
    fn test_add_exp() {
        let level = CharacterLevel::new(1).unwrap();
        let level = level.add_exp(Experience::new(100));
        assert_eq!(level.value(), 2);
        assert_eq!(level.to_string(), "Lv.2");
    }

    proptest! {
        #[test]
        fn prop_new_round_trips(level in 1i32..=MAX_LEVEL) {
            prop_assert_eq!(CharacterLevel::new(level).unwrap().value(), level);
        }

        #[test]
        fn prop_level_is_monotonic(a in 0u64..10_000_000, b in 0u64..10_000_000) {
            let (low, high) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(Experience::new(low).level() <= Experience::new(high).level());
        }
    }
}
