//! CombatResult - Outcome of one resolved attack

use crate::damage::{DamageValue, LevelGap};
use serde::Serialize;

/// What happened to the receiver of an attack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CombatResult {
    /// Level gap the damage was computed with
    pub level_gap: LevelGap,
    pub damage: DamageValue,
    pub health_before: i32,
    pub health_after: i32,
    /// Receiver died on this hit
    pub is_killing_blow: bool,
}

impl CombatResult {
    /// Health actually lost; less than `damage` on overkill
    pub fn health_lost(&self) -> i32 {
        self.health_before - self.health_after
    }

    /// Damage beyond what the receiver had left
    pub fn overkill(&self) -> i32 {
        self.damage.value().saturating_sub(self.health_lost())
    }

    /// Get a summary string
    pub fn summary(&self) -> String {
        let mut parts = vec![format!("{} damage taken", self.damage)];

        parts.push(format!("{} -> {} health", self.health_before, self.health_after));

        if self.overkill() > 0 {
            parts.push(format!("{} overkill", self.overkill()));
        }

        if self.is_killing_blow {
            parts.push("FATAL".to_string());
        }

        parts.join(", ")
    }
}
