//! Integration test: Build combatants -> Equip -> Attack -> Heal -> Enhance
//!
//! This test validates the full flow from character setup to combat resolution
//! and equipment enhancement.

use battle_core::config::HealthConstants;
use battle_core::equipment::SequenceSource;
use battle_core::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn combatant(
    level: i32,
    strength: i32,
    agility: i32,
    weapon: Option<EquippableItem>,
    armor: Option<EquippableItem>,
) -> CharacterBattleModule {
    let level = CharacterLevel::new(level).unwrap();
    let parameters = LevelDependentParameters::new(level, strength, agility).unwrap();
    let equipment = BattleEquipmentModule::new(weapon, armor).unwrap();
    let health = HealthPoint::from_level(&level, &HealthConstants::default());
    CharacterBattleModule::new(health, parameters, equipment)
}

#[test]
fn test_equip_attack_heal_flow() {
    // Lv.5: STR 10 + AGI 5 -> 30, plus a 14 attack sword
    let sword = EquippableItem::weapon("Iron Sword", 14, 0).unwrap();
    let hero = combatant(5, 10, 5, Some(sword), None);
    // Lv.5: STR 3 + AGI 3 -> 12, plus 8 defense mail
    let mail = EquippableItem::armor("Chain Mail", 0, 8).unwrap();
    let goblin = combatant(5, 3, 3, None, Some(mail));

    assert_eq!(hero.attack().value(), 44);
    assert_eq!(goblin.defense().value(), 20);
    assert_eq!(goblin.health().values(), (50, 50));

    // floor(44^2 / 64) = floor(30.25) = 30
    let (goblin, first) = resolve_attack(&hero, &goblin);
    assert_eq!(first.damage.value(), 30);
    assert_eq!(goblin.health().current(), 20);
    assert!(!first.is_killing_blow);

    let goblin = goblin.heal_health(5).unwrap();
    assert_eq!(goblin.health().current(), 25);

    let (goblin, second) = resolve_attack(&hero, &goblin);
    assert!(second.is_killing_blow);
    assert!(goblin.is_dead());
    assert_eq!(second.overkill(), 5);
    assert!(second.summary().contains("FATAL"));

    // Equipment and parameters survived both hits
    assert_eq!(goblin.defense().value(), 20);
    assert_eq!(goblin.level().value(), 5);
}

#[test]
fn test_status_effect_changes_damage() {
    let hero = combatant(5, 10, 5, None, None);
    let target = combatant(5, 5, 5, None, None);

    let (_, plain) = resolve_attack(&hero, &target);

    let shielded = target
        .add_status_effect(BattleStatusEffect::new("stone_skin", 0, 30))
        .unwrap();
    let (_, reduced) = resolve_attack(&hero, &shielded);

    assert!(reduced.damage.value() < plain.damage.value());

    let restored = shielded
        .remove_status_effect(&EffectId::from("stone_skin"))
        .unwrap();
    let (_, again) = resolve_attack(&hero, &restored);
    assert_eq!(again.damage, plain.damage);
}

#[test]
fn test_enhance_then_equip() {
    let service = EquipmentEnhanceService::new();
    let parameters = EnhanceDependentParameters::new(CharacterLevel::new(10).unwrap());
    let sword = EquippableItem::weapon("Iron Sword", 14, 0).unwrap();

    // First roll misses (p = 0.95), second one lands
    let mut source = SequenceSource::new([0.99, 0.10]);

    let endured = service.enhance_with(&sword, EnhanceType::Sharpness, &parameters, &mut source);
    assert_eq!(endured.result_type, EnhancedResultType::Endure);
    assert_eq!(endured.item, sword);

    let enhanced = service.enhance_with(
        &endured.item,
        EnhanceType::Sharpness,
        &parameters,
        &mut source,
    );
    assert!(enhanced.is_success());
    assert_eq!(enhanced.item.enhancement().tier(EnhanceType::Sharpness), 1);
    assert_eq!(source.drawn(), 2);

    let hero = combatant(10, 5, 5, Some(enhanced.into_item()), None);
    assert_eq!(hero.equipment().weapon().unwrap().enhancement().enhanced_count(), 1);
}

#[test]
fn test_seeded_enhancement_is_reproducible() {
    let service = EquipmentEnhanceService::new();
    let parameters = EnhanceDependentParameters::new(CharacterLevel::new(20).unwrap());
    let start = EquippableItem::weapon("Rune Blade", 20, 2).unwrap();

    let run = |seed: u64| {
        let mut source = RngSource::new(ChaCha8Rng::seed_from_u64(seed));
        let mut item = start.clone();
        let mut outcomes = Vec::new();
        for _ in 0..12 {
            let before = *item.enhancement();
            let result =
                service.enhance_with(&item, EnhanceType::Quickness, &parameters, &mut source);
            let after = *result.item.enhancement();

            // Tiers never go down; they only rise on success
            assert!(after.is_at_least(&before));
            if result.is_success() {
                assert_eq!(after.enhanced_count(), before.enhanced_count() + 1);
            } else {
                assert_eq!(after, before);
            }

            outcomes.push(result.result_type);
            item = result.into_item();
        }
        (outcomes, item)
    };

    let (first_outcomes, first_item) = run(42);
    let (second_outcomes, second_item) = run(42);
    assert_eq!(first_outcomes, second_outcomes);
    assert_eq!(first_item, second_item);
}

#[test]
fn test_bundled_constants_drive_combat() {
    let constants = GameConstants::bundled();
    assert_eq!(constants, GameConstants::default());

    let hero = combatant(3, 4, 4, None, None);
    let target = combatant(3, 4, 4, None, None);

    let (_, default_hit) = resolve_attack(&hero, &target);
    let (_, configured_hit) =
        battle_core::combat::resolve_attack_with(&hero, &target, &constants.damage);

    assert_eq!(default_hit, configured_hit);
}
