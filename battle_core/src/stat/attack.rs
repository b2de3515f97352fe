//! AttackValue - Offensive magnitude of a combatant

use super::{equipment_bonuses, StatBreakdown};
use crate::character::LevelDependentParameters;
use crate::effect::StatusEffectModule;
use crate::equipment::{BattleEquipment, BattleEquipmentModule};
use crate::error::BattleError;
use serde::Serialize;
use std::fmt;

/// Attack power, always `>= 0`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct AttackValue {
    value: i32,
    breakdown: StatBreakdown,
}

impl AttackValue {
    /// Explicit attack value (`AttackValue::new(0)` for an unarmed default)
    pub fn new(value: i32) -> Result<Self, BattleError> {
        if value < 0 {
            return Err(BattleError::invalid_argument(format!(
                "attack must not be negative, got {value}"
            )));
        }
        Ok(AttackValue {
            value,
            breakdown: StatBreakdown {
                from_explicit: value,
                ..StatBreakdown::default()
            },
        })
    }

    /// Attack from allocated parameters alone
    pub fn from_parameters(parameters: &LevelDependentParameters) -> Self {
        Self::from_breakdown(StatBreakdown {
            from_level: parameters.attack_contribution(),
            ..StatBreakdown::default()
        })
    }

    /// Attack from parameters plus the weapon's and the armor's attack bonus
    pub fn from_equipment(
        parameters: &LevelDependentParameters,
        weapon: Option<&dyn BattleEquipment>,
        armor: Option<&dyn BattleEquipment>,
    ) -> Result<Self, BattleError> {
        let (from_weapon, from_armor) = equipment_bonuses(weapon, armor, |e| e.attack_bonus())?;
        Ok(Self::from_breakdown(StatBreakdown {
            from_level: parameters.attack_contribution(),
            from_weapon,
            from_armor,
            ..StatBreakdown::default()
        }))
    }

    /// Attack from parameters, an equipped loadout and active status effects
    ///
    /// Debuffs can push the total below zero; it is floored at 0.
    pub fn from_loadout(
        parameters: &LevelDependentParameters,
        equipment: &BattleEquipmentModule,
        effects: &StatusEffectModule,
    ) -> Self {
        Self::from_breakdown(StatBreakdown {
            from_level: parameters.attack_contribution(),
            from_weapon: equipment.weapon().map_or(0, |w| w.attack_bonus()),
            from_armor: equipment.armor().map_or(0, |a| a.attack_bonus()),
            from_effects: effects.total_attack(),
            from_explicit: 0,
        })
    }

    fn from_breakdown(breakdown: StatBreakdown) -> Self {
        AttackValue {
            value: breakdown.total().max(0),
            breakdown,
        }
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    pub fn breakdown(&self) -> &StatBreakdown {
        &self.breakdown
    }
}

impl fmt::Display for AttackValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
