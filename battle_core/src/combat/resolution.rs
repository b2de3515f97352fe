//! Attack resolution - Apply one attacker's hit to a receiver

use super::module::CharacterBattleModule;
use super::result::CombatResult;
use crate::config::DamageConstants;
use crate::damage::{DamageValue, LevelGap};

/// Resolve one hit of `attacker` against `receiver` (immutable API)
///
/// Returns the new receiver state and the combat result. The level gap is
/// taken from both snapshots, damage from the attacker's attack and the
/// receiver's defense. Turn order and targeting are up to the caller.
pub fn resolve_attack(
    attacker: &CharacterBattleModule,
    receiver: &CharacterBattleModule,
) -> (CharacterBattleModule, CombatResult) {
    resolve_attack_with(attacker, receiver, &DamageConstants::default())
}

/// Resolve a hit with configured damage constants
pub fn resolve_attack_with(
    attacker: &CharacterBattleModule,
    receiver: &CharacterBattleModule,
    constants: &DamageConstants,
) -> (CharacterBattleModule, CombatResult) {
    let level_gap = LevelGap::between(&attacker.level(), &receiver.level());
    let damage = DamageValue::calculate_with(
        &level_gap,
        attacker.attack(),
        receiver.defense(),
        constants,
    );

    let new_receiver = receiver.take_damage(&damage);

    let result = CombatResult {
        level_gap,
        damage,
        health_before: receiver.health().current(),
        health_after: new_receiver.health().current(),
        is_killing_blow: !receiver.is_dead() && new_receiver.is_dead(),
    };

    tracing::trace!(
        "attack {} vs defense {} at gap {}: {}",
        attacker.attack(),
        receiver.defense(),
        level_gap.gap(),
        result.summary()
    );
    if result.is_killing_blow {
        tracing::debug!("killing blow for {} damage", damage);
    }

    (new_receiver, result)
}
