//! Status effects - Temporary attack/defense modifiers on a combatant

use crate::error::BattleError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Identifier for an active status effect
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EffectId(pub String);

impl From<&str> for EffectId {
    fn from(s: &str) -> Self {
        EffectId(s.to_string())
    }
}

impl From<String> for EffectId {
    fn from(s: String) -> Self {
        EffectId(s)
    }
}

impl fmt::Display for EffectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A buff or debuff adjusting attack and defense
///
/// Modifiers may be negative (debuffs).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleStatusEffect {
    pub id: EffectId,
    pub attack: i32,
    pub defense: i32,
}

impl BattleStatusEffect {
    pub fn new(id: impl Into<EffectId>, attack: i32, defense: i32) -> Self {
        BattleStatusEffect {
            id: id.into(),
            attack,
            defense,
        }
    }
}

/// Set of active status effects, keyed by id
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<BattleStatusEffect>", into = "Vec<BattleStatusEffect>")]
pub struct StatusEffectModule {
    effects: BTreeMap<EffectId, BattleStatusEffect>,
}

impl StatusEffectModule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a module with `effect` added
    pub fn add(&self, effect: BattleStatusEffect) -> Result<Self, BattleError> {
        if self.effects.contains_key(&effect.id) {
            return Err(BattleError::DuplicateEffect(effect.id));
        }
        let mut effects = self.effects.clone();
        effects.insert(effect.id.clone(), effect);
        Ok(StatusEffectModule { effects })
    }

    /// Return a module without the effect `id`
    pub fn remove(&self, id: &EffectId) -> Result<Self, BattleError> {
        if !self.effects.contains_key(id) {
            return Err(BattleError::UnknownEffect(id.clone()));
        }
        let mut effects = self.effects.clone();
        effects.remove(id);
        Ok(StatusEffectModule { effects })
    }

    pub fn get(&self, id: &EffectId) -> Option<&BattleStatusEffect> {
        self.effects.get(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &BattleStatusEffect> {
        self.effects.values()
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    /// Sum of attack modifiers
    pub fn total_attack(&self) -> i32 {
        self.effects.values().fold(0i32, |acc, e| acc.saturating_add(e.attack))
    }

    /// Sum of defense modifiers
    pub fn total_defense(&self) -> i32 {
        self.effects.values().fold(0i32, |acc, e| acc.saturating_add(e.defense))
    }
}

impl TryFrom<Vec<BattleStatusEffect>> for StatusEffectModule {
    type Error = BattleError;

    fn try_from(effects: Vec<BattleStatusEffect>) -> Result<Self, Self::Error> {
        let mut map = BTreeMap::new();
        for effect in effects {
            if map.contains_key(&effect.id) {
                return Err(BattleError::DuplicateEffect(effect.id));
            }
            map.insert(effect.id.clone(), effect);
        }
        Ok(StatusEffectModule { effects: map })
    }
}

impl From<StatusEffectModule> for Vec<BattleStatusEffect> {
    fn from(module: StatusEffectModule) -> Self {
        module.effects.into_values().collect()
    }
}
