//! Equipment enhancement - One probability roll per attempt
//!
//! A failed roll leaves the item untouched: enhancement tiers never go down.

use super::item::EnhancementParameter;
use super::random::{RandomSource, RngSource};
use crate::character::CharacterLevel;
use crate::types::EnhanceType;
use serde::{Deserialize, Serialize};

/// Character-side inputs to an enhancement attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnhanceDependentParameters {
    pub character_level: CharacterLevel,
}

impl EnhanceDependentParameters {
    pub fn new(character_level: CharacterLevel) -> Self {
        EnhanceDependentParameters { character_level }
    }
}

/// Item-side enhancement logic; the service never looks at tiers itself
pub trait Enhanceable: Sized {
    /// Chance in `[0.0, 1.0]` that the next attempt succeeds
    fn success_probability(&self, parameters: &EnhanceDependentParameters) -> f64;

    /// Tiers after raising `enhance_type` once
    fn add_enhance(&self, enhance_type: EnhanceType) -> EnhancementParameter;

    /// Copy of the item carrying `enhancement`
    fn enchant(&self, enhancement: EnhancementParameter) -> Self;
}

/// Outcome kind of an enhancement attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum EnhancedResultType {
    /// Roll succeeded, item gained a tier
    Success,
    /// Roll failed, item returned unchanged
    Endure,
}

/// Result of one enhancement attempt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnhancedResult<I> {
    pub result_type: EnhancedResultType,
    pub item: I,
}

impl<I> EnhancedResult<I> {
    pub fn is_success(&self) -> bool {
        self.result_type == EnhancedResultType::Success
    }

    pub fn into_item(self) -> I {
        self.item
    }
}

/// Stateless enhancement service
#[derive(Debug, Clone, Copy, Default)]
pub struct EquipmentEnhanceService;

impl EquipmentEnhanceService {
    pub fn new() -> Self {
        EquipmentEnhanceService
    }

    /// Attempt an enhancement using the thread-local generator
    pub fn enhance<I: Enhanceable + Clone>(
        &self,
        item: &I,
        enhance_type: EnhanceType,
        parameters: &EnhanceDependentParameters,
    ) -> EnhancedResult<I> {
        let mut source = RngSource::new(rand::thread_rng());
        self.enhance_with(item, enhance_type, parameters, &mut source)
    }

    /// Attempt an enhancement drawing exactly one sample from `source`
    pub fn enhance_with<I: Enhanceable + Clone>(
        &self,
        item: &I,
        enhance_type: EnhanceType,
        parameters: &EnhanceDependentParameters,
        source: &mut impl RandomSource,
    ) -> EnhancedResult<I> {
        let roll = source.next_uniform();
        let probability = item.success_probability(parameters);

        if roll <= probability {
            tracing::debug!(
                "enhance {:?} succeeded (roll {:.3} <= {:.3})",
                enhance_type,
                roll,
                probability
            );
            let enhancement = item.add_enhance(enhance_type);
            return EnhancedResult {
                result_type: EnhancedResultType::Success,
                item: item.enchant(enhancement),
            };
        }

        tracing::debug!(
            "enhance {:?} endured (roll {:.3} > {:.3})",
            enhance_type,
            roll,
            probability
        );
        EnhancedResult {
            result_type: EnhancedResultType::Endure,
            item: item.clone(),
        }
    }
}
