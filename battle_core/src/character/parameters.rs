//! LevelDependentParameters - Strength/agility allocated from level points

use super::constants::{POINTS_PER_LEVEL, STAT_PER_POINT};
use super::CharacterLevel;
use crate::error::BattleError;
use serde::{Deserialize, Serialize};

/// Parameters that grow with character level
///
/// Every level grants `POINTS_PER_LEVEL` points to spread over strength and
/// agility. Both start at 1 and can never exceed the level's point budget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawParameters", into = "RawParameters")]
pub struct LevelDependentParameters {
    level: CharacterLevel,
    strength: i32,
    agility: i32,
}

impl Default for LevelDependentParameters {
    fn default() -> Self {
        LevelDependentParameters {
            level: CharacterLevel::default(),
            strength: 1,
            agility: 1,
        }
    }
}

impl LevelDependentParameters {
    /// Create parameters with explicit allocation
    pub fn new(level: CharacterLevel, strength: i32, agility: i32) -> Result<Self, BattleError> {
        if strength < 1 || agility < 1 {
            return Err(BattleError::invalid_argument(format!(
                "strength and agility must be at least 1, got STR {strength}, AGI {agility}"
            )));
        }
        let budget = Self::total_points(&level);
        let allocated = strength.checked_add(agility);
        if allocated.map_or(true, |points| points > budget) {
            return Err(BattleError::invalid_argument(format!(
                "STR {strength} + AGI {agility} exceeds the {budget} points available at {level}"
            )));
        }
        Ok(LevelDependentParameters {
            level,
            strength,
            agility,
        })
    }

    /// Total points available at a level
    pub fn total_points(level: &CharacterLevel) -> i32 {
        level.value() * POINTS_PER_LEVEL
    }

    pub fn level(&self) -> CharacterLevel {
        self.level
    }

    pub fn strength(&self) -> i32 {
        self.strength
    }

    pub fn agility(&self) -> i32 {
        self.agility
    }

    /// Points not yet allocated
    pub fn remaining_points(&self) -> i32 {
        Self::total_points(&self.level) - (self.strength + self.agility)
    }

    /// Allocate more points to strength and agility
    pub fn add_points(&self, strength: i32, agility: i32) -> Result<Self, BattleError> {
        if strength < 0 || agility < 0 {
            return Err(BattleError::invalid_argument(format!(
                "cannot allocate negative points, got STR {strength}, AGI {agility}"
            )));
        }
        let remaining = self.remaining_points();
        if strength.checked_add(agility).map_or(true, |points| points > remaining) {
            return Err(BattleError::invalid_argument(format!(
                "only {remaining} points left, tried to add STR {strength}, AGI {agility}"
            )));
        }
        Self::new(self.level, self.strength + strength, self.agility + agility)
    }

    /// Same allocation at a new level (a level up never invalidates it)
    pub fn with_level(&self, level: CharacterLevel) -> Result<Self, BattleError> {
        Self::new(level, self.strength, self.agility)
    }

    /// Attack granted by the allocated points
    pub fn attack_contribution(&self) -> i32 {
        (self.strength + self.agility) * STAT_PER_POINT
    }

    /// Defense granted by the allocated points
    pub fn defense_contribution(&self) -> i32 {
        (self.strength + self.agility) * STAT_PER_POINT
    }
}

#[derive(Serialize, Deserialize)]
struct RawParameters {
    level: CharacterLevel,
    strength: i32,
    agility: i32,
}

impl TryFrom<RawParameters> for LevelDependentParameters {
    type Error = BattleError;

    fn try_from(raw: RawParameters) -> Result<Self, Self::Error> {
        LevelDependentParameters::new(raw.level, raw.strength, raw.agility)
    }
}

impl From<LevelDependentParameters> for RawParameters {
    fn from(params: LevelDependentParameters) -> Self {
        RawParameters {
            level: params.level,
            strength: params.strength,
            agility: params.agility,
        }
    }
}
