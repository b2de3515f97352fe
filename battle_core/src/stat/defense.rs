//! DefenseValue - Defensive magnitude of a combatant
//!
//! Defense is part of the damage formula's denominator (`A + D`), so it is
//! never allowed to reach zero.

use super::{equipment_bonuses, StatBreakdown};
use crate::character::LevelDependentParameters;
use crate::effect::StatusEffectModule;
use crate::equipment::{BattleEquipment, BattleEquipmentModule};
use crate::error::BattleError;
use serde::Serialize;
use std::fmt;

/// Lowest defense any combatant can have
pub const MIN_DEFENSE: i32 = 1;

/// Defense power, always `>= MIN_DEFENSE`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DefenseValue {
    value: i32,
    breakdown: StatBreakdown,
}

impl DefenseValue {
    /// Explicit defense value; rejects `value <= 0`
    pub fn new(value: i32) -> Result<Self, BattleError> {
        if value < MIN_DEFENSE {
            return Err(BattleError::invalid_argument(format!(
                "defense must be at least {MIN_DEFENSE}, got {value}"
            )));
        }
        Ok(DefenseValue {
            value,
            breakdown: StatBreakdown {
                from_explicit: value,
                ..StatBreakdown::default()
            },
        })
    }

    /// Defense from allocated parameters alone
    pub fn from_parameters(parameters: &LevelDependentParameters) -> Self {
        Self::from_breakdown(StatBreakdown {
            from_level: parameters.defense_contribution(),
            ..StatBreakdown::default()
        })
    }

    /// Defense from parameters plus the weapon's and the armor's defense bonus
    pub fn from_equipment(
        parameters: &LevelDependentParameters,
        weapon: Option<&dyn BattleEquipment>,
        armor: Option<&dyn BattleEquipment>,
    ) -> Result<Self, BattleError> {
        let (from_weapon, from_armor) = equipment_bonuses(weapon, armor, |e| e.defense_bonus())?;
        Ok(Self::from_breakdown(StatBreakdown {
            from_level: parameters.defense_contribution(),
            from_weapon,
            from_armor,
            ..StatBreakdown::default()
        }))
    }

    /// Defense from parameters, an equipped loadout and active status effects
    ///
    /// Debuffs can push the total down; it is floored at `MIN_DEFENSE`.
    pub fn from_loadout(
        parameters: &LevelDependentParameters,
        equipment: &BattleEquipmentModule,
        effects: &StatusEffectModule,
    ) -> Self {
        Self::from_breakdown(StatBreakdown {
            from_level: parameters.defense_contribution(),
            from_weapon: equipment.weapon().map_or(0, |w| w.defense_bonus()),
            from_armor: equipment.armor().map_or(0, |a| a.defense_bonus()),
            from_effects: effects.total_defense(),
            from_explicit: 0,
        })
    }

    fn from_breakdown(breakdown: StatBreakdown) -> Self {
        DefenseValue {
            value: breakdown.total().max(MIN_DEFENSE),
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

impl fmt::Display for DefenseValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
