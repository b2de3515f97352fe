//! Equipment - Items, equipped loadout and enhancement

mod enhance;
mod item;
mod loadout;
mod random;

pub use enhance::{
    EnhanceDependentParameters, Enhanceable, EnhancedResult, EnhancedResultType,
    EquipmentEnhanceService,
};
pub use item::{EnhancementParameter, EquippableItem, RequireParameter};
pub use loadout::{check_slot, BattleEquipment, BattleEquipmentModule};
pub use random::{RandomSource, RngSource, SequenceSource};
