//! BattleEquipmentModule - The weapon and armor a combatant fights with

use super::item::EquippableItem;
use crate::error::BattleError;
use crate::types::EquipmentType;
use serde::{Deserialize, Serialize};

/// Anything that can sit in a weapon or armor slot
pub trait BattleEquipment {
    /// Declared slot type
    fn equipment_type(&self) -> EquipmentType;

    /// Flat attack added while equipped
    fn attack_bonus(&self) -> i32;

    /// Flat defense added while equipped
    fn defense_bonus(&self) -> i32;
}

/// Ensure `equipment` declares the `expected` slot type
pub fn check_slot(
    equipment: &(impl BattleEquipment + ?Sized),
    expected: EquipmentType,
) -> Result<(), BattleError> {
    let found = equipment.equipment_type();
    if found != expected {
        return Err(BattleError::SlotMismatch { expected, found });
    }
    Ok(())
}

/// Equipped weapon and armor; either slot may be empty
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawLoadout", into = "RawLoadout")]
pub struct BattleEquipmentModule {
    weapon: Option<EquippableItem>,
    armor: Option<EquippableItem>,
}

impl BattleEquipmentModule {
    /// Equip a weapon and armor, checking both slot types
    pub fn new(
        weapon: Option<EquippableItem>,
        armor: Option<EquippableItem>,
    ) -> Result<Self, BattleError> {
        if let Some(ref weapon) = weapon {
            check_slot(weapon, EquipmentType::Weapon)?;
        }
        if let Some(ref armor) = armor {
            check_slot(armor, EquipmentType::Armor)?;
        }
        Ok(BattleEquipmentModule { weapon, armor })
    }

    /// No weapon, no armor
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn weapon(&self) -> Option<&EquippableItem> {
        self.weapon.as_ref()
    }

    pub fn armor(&self) -> Option<&EquippableItem> {
        self.armor.as_ref()
    }

    /// Loadout with the weapon slot replaced
    pub fn with_weapon(&self, weapon: Option<EquippableItem>) -> Result<Self, BattleError> {
        Self::new(weapon, self.armor.clone())
    }

    /// Loadout with the armor slot replaced
    pub fn with_armor(&self, armor: Option<EquippableItem>) -> Result<Self, BattleError> {
        Self::new(self.weapon.clone(), armor)
    }

    /// Put `item` in the slot of its own type, returning the item it displaced
    ///
    /// Accessories have no battle slot and fail with `SlotMismatch`.
    pub fn swap(
        &self,
        item: EquippableItem,
    ) -> Result<(Self, Option<EquippableItem>), BattleError> {
        let slot = item.equipment_type();
        self.replace_slot(slot, Some(item))
    }

    /// Empty the `slot`, returning the item that was in it
    pub fn take(&self, slot: EquipmentType) -> Result<(Self, Option<EquippableItem>), BattleError> {
        self.replace_slot(slot, None)
    }

    fn replace_slot(
        &self,
        slot: EquipmentType,
        item: Option<EquippableItem>,
    ) -> Result<(Self, Option<EquippableItem>), BattleError> {
        match slot {
            EquipmentType::Weapon => Ok((self.with_weapon(item)?, self.weapon.clone())),
            EquipmentType::Armor => Ok((self.with_armor(item)?, self.armor.clone())),
            EquipmentType::Accessory => Err(BattleError::SlotMismatch {
                expected: EquipmentType::Weapon,
                found: EquipmentType::Accessory,
            }),
        }
    }
}

#[derive(Serialize, Deserialize)]
struct RawLoadout {
    weapon: Option<EquippableItem>,
    armor: Option<EquippableItem>,
}

impl TryFrom<RawLoadout> for BattleEquipmentModule {
    type Error = BattleError;

    fn try_from(raw: RawLoadout) -> Result<Self, Self::Error> {
        BattleEquipmentModule::new(raw.weapon, raw.armor)
    }
}

impl From<BattleEquipmentModule> for RawLoadout {
    fn from(module: BattleEquipmentModule) -> Self {
        RawLoadout {
            weapon: module.weapon,
            armor: module.armor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_loadout() {
        let module = BattleEquipmentModule::empty();
        assert!(module.weapon().is_none());
        assert!(module.armor().is_none());
    }

    #[test]
    fn test_valid_loadout() {
        let sword = EquippableItem::weapon("Iron Sword", 12, 0).unwrap();
        let mail = EquippableItem::armor("Chain Mail", 0, 9).unwrap();
        let module = BattleEquipmentModule::new(Some(sword.clone()), Some(mail)).unwrap();
        assert_eq!(module.weapon(), Some(&sword));
    }

    #[test]
    fn test_armor_in_weapon_slot() {
        let mail = EquippableItem::armor("Chain Mail", 0, 9).unwrap();
        let result = BattleEquipmentModule::new(Some(mail), None);
        assert_eq!(
            result,
            Err(BattleError::SlotMismatch {
                expected: EquipmentType::Weapon,
                found: EquipmentType::Armor,
            })
        );
    }

    #[test]
    fn test_weapon_in_armor_slot() {
        let sword = EquippableItem::weapon("Iron Sword", 12, 0).unwrap();
        let module = BattleEquipmentModule::empty();
        assert!(matches!(
            module.with_armor(Some(sword)),
            Err(BattleError::SlotMismatch { expected: EquipmentType::Armor, .. })
        ));
    }

    #[test]
    fn test_accessory_fits_no_battle_slot() {
        let ring = EquippableItem::new("Ring", EquipmentType::Accessory, 2, 2).unwrap();
        assert!(BattleEquipmentModule::new(Some(ring.clone()), None).is_err());
        assert!(BattleEquipmentModule::new(None, Some(ring)).is_err());
    }

    #[test]
    fn test_swap_returns_displaced_item() {
        let old = EquippableItem::weapon("Iron Sword", 12, 0).unwrap();
        let new = EquippableItem::weapon("Steel Sword", 18, 0).unwrap();
        let module = BattleEquipmentModule::new(Some(old.clone()), None).unwrap();

        let (module, displaced) = module.swap(new.clone()).unwrap();
        assert_eq!(module.weapon(), Some(&new));
        assert_eq!(displaced, Some(old));

        let mail = EquippableItem::armor("Chain Mail", 0, 9).unwrap();
        let (module, displaced) = module.swap(mail.clone()).unwrap();
        assert_eq!(module.armor(), Some(&mail));
        assert_eq!(module.weapon(), Some(&new));
        assert_eq!(displaced, None);
    }

    #[test]
    fn test_take_empties_slot() {
        let mail = EquippableItem::armor("Chain Mail", 0, 9).unwrap();
        let module = BattleEquipmentModule::new(None, Some(mail.clone())).unwrap();

        let (module, removed) = module.take(EquipmentType::Armor).unwrap();
        assert!(module.armor().is_none());
        assert_eq!(removed, Some(mail));

        let (_, removed) = module.take(EquipmentType::Weapon).unwrap();
        assert_eq!(removed, None);
    }

    #[test]
    fn test_accessory_cannot_be_swapped_in() {
        let ring = EquippableItem::new("Ring", EquipmentType::Accessory, 2, 2).unwrap();
        let module = BattleEquipmentModule::empty();

        assert!(matches!(
            module.swap(ring),
            Err(BattleError::SlotMismatch { found: EquipmentType::Accessory, .. })
        ));
        assert!(module.take(EquipmentType::Accessory).is_err());
    }

    #[test]
    fn test_deserialize_rejects_mismatch() {
        let mail = EquippableItem::armor("Chain Mail", 0, 9).unwrap();
        let json = serde_json::json!({ "weapon": mail, "armor": null });
        let result: Result<BattleEquipmentModule, _> = serde_json::from_value(json);
        assert!(result.is_err());
    }
}
