//! Prelude module for convenient imports
//!
//! ```rust
//! use battle_core::prelude::*;
//! ```

// Core types
pub use crate::error::BattleError;
pub use crate::types::{EnhanceType, EquipmentType};

// Character
pub use crate::character::{CharacterLevel, Experience, LevelDependentParameters};

// Stats and damage
pub use crate::damage::{DamageValue, LevelGap};
pub use crate::stat::{AttackValue, DefenseValue};

// Combat
pub use crate::combat::{resolve_attack, CharacterBattleModule, CombatResult, HealthPoint};
pub use crate::effect::{BattleStatusEffect, EffectId};

// Equipment
pub use crate::equipment::{
    BattleEquipmentModule, EnhanceDependentParameters, EnhancedResultType,
    EquipmentEnhanceService, EquippableItem, RandomSource, RngSource,
};

// Config
pub use crate::config::GameConstants;
