//! Attack and defense - Aggregated from level parameters, equipment and effects

mod attack;
mod defense;

pub use attack::AttackValue;
pub use defense::{DefenseValue, MIN_DEFENSE};

use crate::equipment::{check_slot, BattleEquipment};
use crate::error::BattleError;
use crate::types::EquipmentType;
use serde::{Deserialize, Serialize};

/// Where an attack or defense value came from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StatBreakdown {
    pub from_level: i32,
    pub from_weapon: i32,
    pub from_armor: i32,
    pub from_effects: i32,
    /// Value given directly rather than derived from a source
    pub from_explicit: i32,
}

impl StatBreakdown {
    /// Sum of every source, saturating
    pub fn total(&self) -> i32 {
        self.from_level
            .saturating_add(self.from_weapon)
            .saturating_add(self.from_armor)
            .saturating_add(self.from_effects)
            .saturating_add(self.from_explicit)
    }
}

/// Read one bonus from optional weapon/armor references, checking their slots
pub(crate) fn equipment_bonuses(
    weapon: Option<&dyn BattleEquipment>,
    armor: Option<&dyn BattleEquipment>,
    bonus: impl Fn(&dyn BattleEquipment) -> i32,
) -> Result<(i32, i32), BattleError> {
    let from_weapon = match weapon {
        Some(weapon) => {
            check_slot(weapon, EquipmentType::Weapon)?;
            non_negative(bonus(weapon), "weapon bonus")?
        }
        None => 0,
    };
    let from_armor = match armor {
        Some(armor) => {
            check_slot(armor, EquipmentType::Armor)?;
            non_negative(bonus(armor), "armor bonus")?
        }
        None => 0,
    };
    Ok((from_weapon, from_armor))
}

fn non_negative(value: i32, what: &str) -> Result<i32, BattleError> {
    if value < 0 {
        return Err(BattleError::invalid_argument(format!(
            "{what} must not be negative, got {value}"
        )));
    }
    Ok(value)
}
