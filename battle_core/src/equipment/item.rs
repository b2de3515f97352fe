//! EquippableItem - Weapons and armor with enhancement tiers

use super::enhance::{EnhanceDependentParameters, Enhanceable};
use super::loadout::BattleEquipment;
use crate::character::CharacterLevel;
use crate::config::EnhancementConstants;
use crate::error::BattleError;
use crate::types::{EnhanceType, EquipmentType};
use serde::{Deserialize, Serialize};

/// Tiers gained from successful enhancements
///
/// Tiers only ever go up: `add_enhance` returns a copy with exactly one tier
/// raised by one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EnhancementParameter {
    pub sharpness: u32,
    pub quickness: u32,
    pub accuracy: u32,
    pub heaviness: u32,
    pub durability: u32,
}

impl EnhancementParameter {
    pub fn new(
        sharpness: u32,
        quickness: u32,
        accuracy: u32,
        heaviness: u32,
        durability: u32,
    ) -> Self {
        EnhancementParameter {
            sharpness,
            quickness,
            accuracy,
            heaviness,
            durability,
        }
    }

    /// Total number of successful enhancements, saturating at `u32::MAX`
    pub fn enhanced_count(&self) -> u32 {
        EnhanceType::all()
            .iter()
            .fold(0u32, |acc, t| acc.saturating_add(self.tier(*t)))
    }

    /// Tier reached for one enhancement type
    pub fn tier(&self, enhance_type: EnhanceType) -> u32 {
        match enhance_type {
            EnhanceType::Sharpness => self.sharpness,
            EnhanceType::Quickness => self.quickness,
            EnhanceType::Accuracy => self.accuracy,
            EnhanceType::Heaviness => self.heaviness,
            EnhanceType::Durability => self.durability,
        }
    }

    /// Next tier set with `enhance_type` raised by one
    pub fn add_enhance(&self, enhance_type: EnhanceType) -> EnhancementParameter {
        let mut next = *self;
        match enhance_type {
            EnhanceType::Sharpness => next.sharpness = next.sharpness.saturating_add(1),
            EnhanceType::Quickness => next.quickness = next.quickness.saturating_add(1),
            EnhanceType::Accuracy => next.accuracy = next.accuracy.saturating_add(1),
            EnhanceType::Heaviness => next.heaviness = next.heaviness.saturating_add(1),
            EnhanceType::Durability => next.durability = next.durability.saturating_add(1),
        }
        next
    }

    /// True when no tier of `self` is below the matching tier of `other`
    pub fn is_at_least(&self, other: &EnhancementParameter) -> bool {
        EnhanceType::all()
            .iter()
            .all(|t| self.tier(*t) >= other.tier(*t))
    }
}

/// Requirements to equip an item
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequireParameter {
    pub level: CharacterLevel,
    pub strength: i32,
    pub agility: i32,
}

/// A weapon, armor piece or accessory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquippableItem {
    name: String,
    equipment_type: EquipmentType,
    attack: i32,
    defense: i32,
    #[serde(default)]
    enhancement: EnhancementParameter,
    #[serde(default)]
    require: RequireParameter,
}

impl EquippableItem {
    /// Create an item with no enhancement and no requirement
    pub fn new(
        name: impl Into<String>,
        equipment_type: EquipmentType,
        attack: i32,
        defense: i32,
    ) -> Result<Self, BattleError> {
        if attack < 0 || defense < 0 {
            return Err(BattleError::invalid_argument(format!(
                "equipment bonuses must not be negative, got attack {attack}, defense {defense}"
            )));
        }
        Ok(EquippableItem {
            name: name.into(),
            equipment_type,
            attack,
            defense,
            enhancement: EnhancementParameter::default(),
            require: RequireParameter::default(),
        })
    }

    /// Shorthand for a weapon
    pub fn weapon(name: impl Into<String>, attack: i32, defense: i32) -> Result<Self, BattleError> {
        Self::new(name, EquipmentType::Weapon, attack, defense)
    }

    /// Shorthand for armor
    pub fn armor(name: impl Into<String>, attack: i32, defense: i32) -> Result<Self, BattleError> {
        Self::new(name, EquipmentType::Armor, attack, defense)
    }

    pub fn with_requirement(mut self, require: RequireParameter) -> Self {
        self.require = require;
        self
    }

    pub fn with_enhancement(mut self, enhancement: EnhancementParameter) -> Self {
        self.enhancement = enhancement;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attack(&self) -> i32 {
        self.attack
    }

    pub fn defense(&self) -> i32 {
        self.defense
    }

    pub fn enhancement(&self) -> &EnhancementParameter {
        &self.enhancement
    }

    pub fn requirement(&self) -> &RequireParameter {
        &self.require
    }

    /// Same item carrying `enhancement` instead of its current tiers
    pub fn enchant(&self, enhancement: EnhancementParameter) -> EquippableItem {
        EquippableItem {
            enhancement,
            ..self.clone()
        }
    }

    /// Chance (0.0 - 1.0) that the next enhancement succeeds
    ///
    /// Starts at `base_success_percent`, loses `penalty_per_enhance` per tier
    /// already gained, and gains up to `level_window` points when the
    /// character out-levels the item requirement.
    pub fn success_probability_with(
        &self,
        parameters: &EnhanceDependentParameters,
        constants: &EnhancementConstants,
    ) -> f64 {
        let window = constants.level_window;
        let base_level = (self.require.level.value() - window).max(0);
        let diff = (parameters.character_level.value() - base_level).min(window);
        let count = i32::try_from(self.enhancement.enhanced_count()).unwrap_or(i32::MAX);

        let percent = constants
            .base_success_percent
            .saturating_sub(constants.penalty_per_enhance.saturating_mul(count))
            .saturating_add(diff)
            .min(100);

        (percent as f64 / 100.0).clamp(0.0, 1.0)
    }
}

impl BattleEquipment for EquippableItem {
    fn equipment_type(&self) -> EquipmentType {
        self.equipment_type
    }

    fn attack_bonus(&self) -> i32 {
        self.attack
    }

    fn defense_bonus(&self) -> i32 {
        self.defense
    }
}

impl Enhanceable for EquippableItem {
    fn success_probability(&self, parameters: &EnhanceDependentParameters) -> f64 {
        self.success_probability_with(parameters, &EnhancementConstants::default())
    }

    fn add_enhance(&self, enhance_type: EnhanceType) -> EnhancementParameter {
        self.enhancement.add_enhance(enhance_type)
    }

    fn enchant(&self, enhancement: EnhancementParameter) -> Self {
        EquippableItem::enchant(self, enhancement)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(level: i32) -> EnhanceDependentParameters {
        EnhanceDependentParameters::new(CharacterLevel::new(level).unwrap())
    }

    #[test]
    fn test_add_enhance_raises_one_tier() {
        let base = EnhancementParameter::default();
        let next = base.add_enhance(EnhanceType::Sharpness);
        assert_eq!(next.sharpness, 1);
        assert_eq!(next.enhanced_count(), 1);
        assert!(next.is_at_least(&base));
        assert!(!base.is_at_least(&next));
    }

    #[test]
    fn test_enhanced_count() {
        let tiers = EnhancementParameter::new(1, 2, 0, 3, 1);
        assert_eq!(tiers.enhanced_count(), 7);
        assert_eq!(tiers.tier(EnhanceType::Heaviness), 3);
    }

    #[test]
    fn test_enhanced_count_saturates() {
        let tiers = EnhancementParameter::new(u32::MAX, 1, 0, 0, 7);
        assert_eq!(tiers.enhanced_count(), u32::MAX);
    }

    #[test]
    fn test_rejects_negative_bonus() {
        assert!(EquippableItem::weapon("Broken Sword", -1, 0).is_err());
    }

    #[test]
    fn test_enchant_keeps_everything_else() {
        let sword = EquippableItem::weapon("Iron Sword", 12, 1).unwrap();
        let tiers = EnhancementParameter::new(1, 0, 0, 0, 0);
        let enchanted = sword.enchant(tiers);
        assert_eq!(enchanted.name(), "Iron Sword");
        assert_eq!(enchanted.attack(), 12);
        assert_eq!(enchanted.enhancement(), &tiers);
        assert_eq!(sword.enhancement().enhanced_count(), 0);
    }

    #[test]
    fn test_success_probability_fresh_item() {
        // Requirement level 1 -> base level 0, character level 1 -> diff 1
        // (90 - 0 + 1) / 100
        let sword = EquippableItem::weapon("Iron Sword", 12, 1).unwrap();
        let p = sword.success_probability(&params(1));
        assert!((p - 0.91).abs() < 1e-9);
    }

    #[test]
    fn test_success_probability_level_bonus_caps() {
        // diff is capped at the level window (5)
        let sword = EquippableItem::weapon("Iron Sword", 12, 1).unwrap();
        let p = sword.success_probability(&params(40));
        assert!((p - 0.95).abs() < 1e-9);
    }

    #[test]
    fn test_success_probability_drops_per_enhancement() {
        let sword = EquippableItem::weapon("Iron Sword", 12, 1)
            .unwrap()
            .with_enhancement(EnhancementParameter::new(3, 0, 0, 0, 0));
        // (90 - 30 + 5) / 100
        let p = sword.success_probability(&params(10));
        assert!((p - 0.65).abs() < 1e-9);
    }

    #[test]
    fn test_success_probability_underleveled() {
        let require = RequireParameter {
            level: CharacterLevel::new(30).unwrap(),
            strength: 1,
            agility: 1,
        };
        let sword = EquippableItem::weapon("Knight Sword", 40, 2)
            .unwrap()
            .with_requirement(require);
        // base level 25, character level 10 -> diff -15
        let p = sword.success_probability(&params(10));
        assert!((p - 0.75).abs() < 1e-9);
    }

    #[test]
    fn test_success_probability_never_negative() {
        let sword = EquippableItem::weapon("Iron Sword", 12, 1)
            .unwrap()
            .with_enhancement(EnhancementParameter::new(20, 0, 0, 0, 0));
        assert_eq!(sword.success_probability(&params(1)), 0.0);
    }
}
