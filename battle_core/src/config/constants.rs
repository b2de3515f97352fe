//! Game constants configuration

use super::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Tunable battle constants
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameConstants {
    #[serde(default)]
    pub damage: DamageConstants,
    #[serde(default)]
    pub health: HealthConstants,
    #[serde(default)]
    pub enhancement: EnhancementConstants,
}

impl GameConstants {
    /// Load constants from a TOML file and validate them
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let constants: GameConstants = super::load_toml(path)?;
        constants.validate()?;
        Ok(constants)
    }

    /// Parse constants from a TOML string and validate them
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let constants: GameConstants = super::parse_toml(content)?;
        constants.validate()?;
        Ok(constants)
    }

    /// Constants shipped with the crate (`config/constants.toml`)
    pub fn bundled() -> Self {
        let toml = include_str!("../../config/constants.toml");
        Self::parse(toml).unwrap_or_else(|err| {
            tracing::warn!("bundled constants rejected ({err}), using defaults");
            Self::default()
        })
    }

    /// Reject values that would break the damage or health invariants
    pub fn validate(&self) -> Result<(), ConfigError> {
        let correction = self.damage.level_gap_correction;
        if !correction.is_finite() || correction <= 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "damage.level_gap_correction must be positive, got {correction}"
            )));
        }
        if self.damage.minimum_damage < 1 {
            return Err(ConfigError::ValidationError(format!(
                "damage.minimum_damage must be at least 1, got {}",
                self.damage.minimum_damage
            )));
        }
        if self.health.per_level < 1 {
            return Err(ConfigError::ValidationError(format!(
                "health.per_level must be at least 1, got {}",
                self.health.per_level
            )));
        }
        if self.enhancement.level_window < 0 {
            return Err(ConfigError::ValidationError(format!(
                "enhancement.level_window must not be negative, got {}",
                self.enhancement.level_window
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DamageConstants {
    /// Base of the level factor: `correction ^ gap` (2^(1/3) doubles damage every 3 levels)
    #[serde(default = "default_level_gap_correction")]
    pub level_gap_correction: f64,
    /// Lowest damage a hit can deal
    #[serde(default = "default_minimum_damage")]
    pub minimum_damage: i32,
}

impl Default for DamageConstants {
    fn default() -> Self {
        DamageConstants {
            level_gap_correction: default_level_gap_correction(),
            minimum_damage: default_minimum_damage(),
        }
    }
}

fn default_level_gap_correction() -> f64 {
    crate::damage::constants::LEVEL_GAP_CORRECTION
}
fn default_minimum_damage() -> i32 {
    crate::damage::constants::MINIMUM_DAMAGE
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthConstants {
    /// Maximum health granted per character level
    #[serde(default = "default_health_per_level")]
    pub per_level: i32,
}

impl Default for HealthConstants {
    fn default() -> Self {
        HealthConstants {
            per_level: default_health_per_level(),
        }
    }
}

fn default_health_per_level() -> i32 {
    10
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnhancementConstants {
    /// Success chance (percent) of the first enhancement at a matching level
    #[serde(default = "default_base_success_percent")]
    pub base_success_percent: i32,
    /// Percent lost per enhancement already applied
    #[serde(default = "default_penalty_per_enhance")]
    pub penalty_per_enhance: i32,
    /// Levels below the item requirement that still count, and the cap on the level bonus
    #[serde(default = "default_level_window")]
    pub level_window: i32,
}

impl Default for EnhancementConstants {
    fn default() -> Self {
        EnhancementConstants {
            base_success_percent: default_base_success_percent(),
            penalty_per_enhance: default_penalty_per_enhance(),
            level_window: default_level_window(),
        }
    }
}

fn default_base_success_percent() -> i32 {
    90
}
fn default_penalty_per_enhance() -> i32 {
    10
}
fn default_level_window() -> i32 {
    5
}
