//! Battle errors raised while building combat values

use crate::effect::EffectId;
use crate::types::EquipmentType;
use thiserror::Error;

/// Errors raised synchronously when a combat value would break its invariants
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BattleError {
    /// Health outside `0 <= current <= maximum` or `maximum < 1`
    #[error("health out of range: {current} / {maximum}")]
    InvalidRange { current: i32, maximum: i32 },
    /// Level outside `1..=MAX_LEVEL`
    #[error("level {0} is out of range")]
    InvalidLevel(i32),
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// Equipment placed in the slot of another type
    #[error("slot mismatch: expected {expected:?}, found {found:?}")]
    SlotMismatch {
        expected: EquipmentType,
        found: EquipmentType,
    },
    #[error("status effect {0} is already active")]
    DuplicateEffect(EffectId),
    #[error("status effect {0} is not active")]
    UnknownEffect(EffectId),
}

impl BattleError {
    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        BattleError::InvalidArgument(message.into())
    }
}
