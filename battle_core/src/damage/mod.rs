//! Damage system - Level gap and the damage formula

mod level_gap;
mod value;

pub use level_gap::LevelGap;
pub use value::DamageValue;

/// Damage formula constants
pub mod constants {
    /// Level factor base: 2^(1/3), so a 3-level gap doubles the factor
    pub const LEVEL_GAP_CORRECTION: f64 = 1.2599210498948731;

    /// Every landed hit deals at least this much
    pub const MINIMUM_DAMAGE: i32 = 1;
}
