//! battle_core - Combat math and equipment enhancement for character battles
//!
//! This library provides:
//! - HealthPoint: Bounded health with damage and healing
//! - AttackValue / DefenseValue: Aggregated from level, equipment and status effects
//! - DamageValue: Level-gap scaled damage formula
//! - CharacterBattleModule: Immutable combatant snapshot with pure transitions
//! - EquipmentEnhanceService: Probabilistic equipment enhancement

pub mod character;
pub mod combat;
pub mod config;
pub mod damage;
pub mod effect;
pub mod equipment;
pub mod error;
pub mod prelude;
pub mod stat;
pub mod types;

// Re-export core types for convenience
pub use character::{CharacterLevel, Experience, LevelDependentParameters};
pub use combat::{resolve_attack, CharacterBattleModule, CombatResult, HealthPoint};
pub use config::{ConfigError, GameConstants};
pub use damage::{DamageValue, LevelGap};
pub use effect::{BattleStatusEffect, EffectId, StatusEffectModule};
pub use equipment::{
    BattleEquipment, BattleEquipmentModule, EnhanceDependentParameters, Enhanceable,
    EnhancedResult, EnhancedResultType, EnhancementParameter, EquipmentEnhanceService,
    EquippableItem, RandomSource,
};
pub use error::BattleError;
pub use stat::{AttackValue, DefenseValue, StatBreakdown};
pub use types::{EnhanceType, EquipmentType};
