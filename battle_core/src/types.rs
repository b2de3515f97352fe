//! Core types shared across the battle modules

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of equippable item, doubling as the slot it may occupy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentType {
    Weapon,
    Armor,
    Accessory,
}

impl fmt::Display for EquipmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EquipmentType::Weapon => "weapon",
            EquipmentType::Armor => "armor",
            EquipmentType::Accessory => "accessory",
        };
        f.write_str(name)
    }
}

/// Enhancement tier an enhancement attempt tries to raise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnhanceType {
    Sharpness,
    Quickness,
    Accuracy,
    Heaviness,
    Durability,
}

impl EnhanceType {
    /// Get all enhancement types
    pub fn all() -> &'static [EnhanceType] {
        &[
            EnhanceType::Sharpness,
            EnhanceType::Quickness,
            EnhanceType::Accuracy,
            EnhanceType::Heaviness,
            EnhanceType::Durability,
        ]
    }
}
