//! Combat - Health, combatant snapshots and attack resolution

mod health;
mod module;
mod resolution;
mod result;

pub use health::HealthPoint;
pub use module::CharacterBattleModule;
pub use resolution::{resolve_attack, resolve_attack_with};
pub use result::CombatResult;
