//! Character progression - Level, experience and level-dependent parameters

mod level;
mod parameters;

pub use level::{CharacterLevel, Experience};
pub use parameters::LevelDependentParameters;

/// Progression constants
pub mod constants {
    /// Highest reachable character level
    pub const MAX_LEVEL: i32 = 100;

    /// Experience needed to go from level 1 to level 2
    pub const INITIAL_EXP_REQUIREMENT: f64 = 100.0;

    /// Growth of the per-level experience requirement
    pub const EXP_GROWTH: f64 = 1.25;

    /// Same-level enemies to defeat for one level
    pub const KILLS_PER_LEVEL: f64 = 5.0;

    /// Parameter points granted per level
    pub const POINTS_PER_LEVEL: i32 = 3;

    /// Attack and defense granted per allocated strength/agility point
    pub const STAT_PER_POINT: i32 = 2;
}
