//! HealthPoint - Current and maximum health of a combatant

use crate::character::CharacterLevel;
use crate::config::HealthConstants;
use crate::error::BattleError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Health pool with `0 <= current <= maximum` and `maximum >= 1`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawHealth", into = "RawHealth")]
pub struct HealthPoint {
    current: i32,
    maximum: i32,
}

impl HealthPoint {
    pub fn new(current: i32, maximum: i32) -> Result<Self, BattleError> {
        if maximum < 1 || current < 0 || current > maximum {
            return Err(BattleError::InvalidRange { current, maximum });
        }
        Ok(HealthPoint { current, maximum })
    }

    /// Full health pool of `maximum`
    pub fn with_max(maximum: i32) -> Result<Self, BattleError> {
        Self::new(maximum, maximum)
    }

    /// Full health pool sized for a character level
    pub fn from_level(level: &CharacterLevel, constants: &HealthConstants) -> Self {
        let maximum = level.value().saturating_mul(constants.per_level).max(1);
        HealthPoint {
            current: maximum,
            maximum,
        }
    }

    /// Health after taking `amount` damage; negative amounts deal nothing
    pub fn take_damage(&self, amount: i32) -> HealthPoint {
        let current = self.current.saturating_sub(amount.max(0)).max(0);
        HealthPoint {
            current,
            maximum: self.maximum,
        }
    }

    /// Health after healing `amount`, capped at the maximum
    pub fn heal_health(&self, amount: i32) -> Result<HealthPoint, BattleError> {
        if amount < 0 {
            return Err(BattleError::invalid_argument(format!(
                "heal amount must not be negative, got {amount}"
            )));
        }
        Ok(HealthPoint {
            current: self.current.saturating_add(amount).min(self.maximum),
            maximum: self.maximum,
        })
    }

    /// `(current, maximum)`
    pub fn values(&self) -> (i32, i32) {
        (self.current, self.maximum)
    }

    pub fn current(&self) -> i32 {
        self.current
    }

    pub fn maximum(&self) -> i32 {
        self.maximum
    }

    pub fn is_dead(&self) -> bool {
        self.current == 0
    }
}

impl fmt::Display for HealthPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.current, self.maximum)
    }
}

#[derive(Serialize, Deserialize)]
struct RawHealth {
    current: i32,
    maximum: i32,
}

impl TryFrom<RawHealth> for HealthPoint {
    type Error = BattleError;

    fn try_from(raw: RawHealth) -> Result<Self, Self::Error> {
        HealthPoint::new(raw.current, raw.maximum)
    }
}

impl From<HealthPoint> for RawHealth {
    fn from(health: HealthPoint) -> Self {
        RawHealth {
            current: health.current,
            maximum: health.maximum,
        }
    }
}
