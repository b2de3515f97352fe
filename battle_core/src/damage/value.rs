//! DamageValue - Damage dealt by one landed hit
//!
//! Formula:
//! `damage = max(floor(correction ^ gap * A^2 / (A + D)), minimum)`
//!
//! The floor happens before the minimum clamp, so a hit always deals a
//! positive integer amount. `D >= 1` is guaranteed by `DefenseValue`, which
//! keeps the denominator positive.

use super::constants::{LEVEL_GAP_CORRECTION, MINIMUM_DAMAGE};
use super::LevelGap;
use crate::config::DamageConstants;
use crate::stat::{AttackValue, DefenseValue};
use serde::Serialize;
use std::fmt;

/// Damage from one attack event, always `>= 1`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct DamageValue {
    value: i32,
}

impl DamageValue {
    /// Damage using the default formula constants
    pub fn calculate(gap: &LevelGap, attack: &AttackValue, defense: &DefenseValue) -> Self {
        Self::compute(gap, attack, defense, LEVEL_GAP_CORRECTION, MINIMUM_DAMAGE)
    }

    /// Damage using configured formula constants
    pub fn calculate_with(
        gap: &LevelGap,
        attack: &AttackValue,
        defense: &DefenseValue,
        constants: &DamageConstants,
    ) -> Self {
        Self::compute(
            gap,
            attack,
            defense,
            constants.level_gap_correction,
            constants.minimum_damage.max(MINIMUM_DAMAGE),
        )
    }

    /// Fixed damage that bypasses the formula
    #[deprecated(note = "use DamageValue::calculate; fixed damage skips the level gap formula")]
    pub fn fixed(value: i32) -> Self {
        DamageValue {
            value: value.max(MINIMUM_DAMAGE),
        }
    }

    fn compute(
        gap: &LevelGap,
        attack: &AttackValue,
        defense: &DefenseValue,
        correction: f64,
        minimum: i32,
    ) -> Self {
        let a = attack.value() as f64;
        let d = defense.value() as f64;

        let level_factor = gap.level_factor(correction);
        let raw = (level_factor * a * a / (a + d)).floor();

        // NaN and overflow are clamped, never reported
        let value = if raw.is_nan() {
            minimum
        } else {
            // `as` saturates at i32::MIN / i32::MAX
            (raw as i32).max(minimum)
        };

        DamageValue { value }
    }

    pub fn value(&self) -> i32 {
        self.value
    }
}

impl fmt::Display for DamageValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
