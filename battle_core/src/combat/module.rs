//! CharacterBattleModule - Immutable snapshot of one combatant
//!
//! Every transition returns a new snapshot. Attack and defense are derived
//! from parameters, equipment and status effects whenever a snapshot is built,
//! so they can never drift from their inputs.

use super::health::HealthPoint;
use crate::character::{CharacterLevel, LevelDependentParameters};
use crate::damage::DamageValue;
use crate::effect::{BattleStatusEffect, EffectId, StatusEffectModule};
use crate::equipment::{BattleEquipmentModule, EquippableItem};
use crate::error::BattleError;
use crate::stat::{AttackValue, DefenseValue};
use crate::types::EquipmentType;
use serde::{Deserialize, Serialize};

/// Combat state of one character
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawBattleModule", into = "RawBattleModule")]
pub struct CharacterBattleModule {
    health: HealthPoint,
    parameters: LevelDependentParameters,
    equipment: BattleEquipmentModule,
    effects: StatusEffectModule,
    attack: AttackValue,
    defense: DefenseValue,
}

impl CharacterBattleModule {
    pub fn new(
        health: HealthPoint,
        parameters: LevelDependentParameters,
        equipment: BattleEquipmentModule,
    ) -> Self {
        Self::with_effects(health, parameters, equipment, StatusEffectModule::new())
    }

    /// Snapshot with status effects already active
    pub fn with_effects(
        health: HealthPoint,
        parameters: LevelDependentParameters,
        equipment: BattleEquipmentModule,
        effects: StatusEffectModule,
    ) -> Self {
        let attack = AttackValue::from_loadout(&parameters, &equipment, &effects);
        let defense = DefenseValue::from_loadout(&parameters, &equipment, &effects);
        CharacterBattleModule {
            health,
            parameters,
            equipment,
            effects,
            attack,
            defense,
        }
    }

    /// Snapshot after taking `damage`; only health changes
    pub fn take_damage(&self, damage: &DamageValue) -> CharacterBattleModule {
        CharacterBattleModule {
            health: self.health.take_damage(damage.value()),
            ..self.clone()
        }
    }

    pub fn heal_health(&self, amount: i32) -> Result<CharacterBattleModule, BattleError> {
        Ok(CharacterBattleModule {
            health: self.health.heal_health(amount)?,
            ..self.clone()
        })
    }

    pub fn add_status_effect(
        &self,
        effect: BattleStatusEffect,
    ) -> Result<CharacterBattleModule, BattleError> {
        let effects = self.effects.add(effect)?;
        Ok(self.rebuild(self.equipment.clone(), effects))
    }

    pub fn remove_status_effect(
        &self,
        id: &EffectId,
    ) -> Result<CharacterBattleModule, BattleError> {
        let effects = self.effects.remove(id)?;
        Ok(self.rebuild(self.equipment.clone(), effects))
    }

    /// Snapshot with a new loadout; health is kept
    pub fn change_equipment(&self, equipment: BattleEquipmentModule) -> CharacterBattleModule {
        self.rebuild(equipment, self.effects.clone())
    }

    /// Equip `item` in the slot of its type, returning the item it displaced
    pub fn equip(
        &self,
        item: EquippableItem,
    ) -> Result<(CharacterBattleModule, Option<EquippableItem>), BattleError> {
        let (equipment, displaced) = self.equipment.swap(item)?;
        Ok((self.change_equipment(equipment), displaced))
    }

    /// Empty the `slot`, returning the item that was in it
    pub fn unequip(
        &self,
        slot: EquipmentType,
    ) -> Result<(CharacterBattleModule, Option<EquippableItem>), BattleError> {
        let (equipment, removed) = self.equipment.take(slot)?;
        Ok((self.change_equipment(equipment), removed))
    }

    fn rebuild(
        &self,
        equipment: BattleEquipmentModule,
        effects: StatusEffectModule,
    ) -> CharacterBattleModule {
        Self::with_effects(self.health, self.parameters.clone(), equipment, effects)
    }

    pub fn level(&self) -> CharacterLevel {
        self.parameters.level()
    }

    pub fn health(&self) -> &HealthPoint {
        &self.health
    }

    pub fn attack(&self) -> &AttackValue {
        &self.attack
    }

    pub fn defense(&self) -> &DefenseValue {
        &self.defense
    }

    pub fn parameters(&self) -> &LevelDependentParameters {
        &self.parameters
    }

    pub fn equipment(&self) -> &BattleEquipmentModule {
        &self.equipment
    }

    pub fn status_effects(&self) -> &StatusEffectModule {
        &self.effects
    }

    pub fn is_dead(&self) -> bool {
        self.health.is_dead()
    }
}

#[derive(Serialize, Deserialize)]
struct RawBattleModule {
    health: HealthPoint,
    parameters: LevelDependentParameters,
    #[serde(default)]
    equipment: BattleEquipmentModule,
    #[serde(default)]
    effects: StatusEffectModule,
}

impl From<RawBattleModule> for CharacterBattleModule {
    fn from(raw: RawBattleModule) -> Self {
        CharacterBattleModule::with_effects(raw.health, raw.parameters, raw.equipment, raw.effects)
    }
}

impl From<CharacterBattleModule> for RawBattleModule {
    fn from(module: CharacterBattleModule) -> Self {
        RawBattleModule {
            health: module.health,
            parameters: module.parameters,
            equipment: module.equipment,
            effects: module.effects,
        }
    }
}
