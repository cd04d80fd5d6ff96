use combat_rules::{Actor, ActorHost, ActorId, ActorValue, Hand, SlowSource, Spell, Weapon, WeaponType, WorldState};
use proptest::prelude::*;
use slowdown_core::{AnimationEvent, EffectHandles, SlowdownConfig, SlowdownSystem};

fn system() -> SlowdownSystem {
    SlowdownSystem::with_effects(SlowdownConfig::default(), EffectHandles::all())
}

fn fire(system: &SlowdownSystem, world: &mut WorldState, id: ActorId, tag: &str) {
    system.on_animation_event(world, &AnimationEvent::new(id, tag));
}

fn spellsword(speed: f32) -> Actor {
    Actor::player("Spellsword")
        .with_speed(speed)
        .with_skill(ActorValue::Archery, 60.0)
        .with_skill(ActorValue::Destruction, 55.0)
        .with_skill(ActorValue::Conjuration, 20.0)
        .with_weapon(Weapon::new("Elven Bow", WeaponType::Bow))
        .with_spell(Hand::Left, Spell::new("Firebolt", ActorValue::Destruction))
        .with_spell(Hand::Right, Spell::new("Conjure Familiar", ActorValue::Conjuration))
}

#[test]
fn test_archer_draw_and_release_restores_baseline() {
    let system = system();
    let mut world = WorldState::new();
    let id = world.add_actor(spellsword(100.0));

    fire(&system, &mut world, id, "BowDrawn");
    assert!((world.speed(id).unwrap() - 70.0).abs() < 0.01);

    fire(&system, &mut world, id, "bowRelease");
    assert!((world.speed(id).unwrap() - 100.0).abs() < 0.01);
    assert_eq!(system.manager().tracked_count(), 0);
}

#[test]
fn test_bow_keeps_priority_after_cast_release() {
    let system = system();
    let mut world = WorldState::new();
    let id = world.add_actor(spellsword(100.0));

    fire(&system, &mut world, id, "BowDrawn");
    fire(&system, &mut world, id, "BeginCastLeft");
    fire(&system, &mut world, id, "CastStop");

    // Archery 60 on the bow table, same as a bow-only draw
    assert!((world.speed(id).unwrap() - 70.0).abs() < 0.01);
    assert!(system.manager().is_actor_slowed(id));
}

#[test]
fn test_config_file_drives_multipliers() {
    let config = SlowdownConfig::from_toml_str(
        r#"
        [multipliers]
        bow = [0.2, 0.3, 0.4, 0.5]
        "#,
    )
    .unwrap();
    let system = SlowdownSystem::with_effects(config, EffectHandles::all());
    let mut world = WorldState::new();
    let id = world.add_actor(spellsword(100.0));

    fire(&system, &mut world, id, "BowDrawn");
    assert!((world.speed(id).unwrap() - 40.0).abs() < 0.01);
}

#[test]
fn test_scene_loaded_from_json() {
    let mut original = WorldState::new();
    let id = original.add_actor(spellsword(90.0));
    let json = original.to_json().unwrap();
    let mut world = WorldState::from_json(&json).unwrap();

    let system = system();
    fire(&system, &mut world, id, "BeginCastRight");
    // Conjuration 20 -> novice cast tier, offset by the -10 baseline
    assert!((world.speed(id).unwrap() - 40.0).abs() < 0.01);

    let state = system.manager().actor_state(id).unwrap();
    let encoded = serde_json::to_value(state).unwrap();
    assert_eq!(encoded["cast_right_active"], serde_json::json!(true));
}

fn event_tag() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("BowDrawn"),
        Just("bowRelease"),
        Just("BeginCastLeft"),
        Just("BeginCastRight"),
        Just("CastStop"),
        Just("CastOKStop"),
        Just("InterruptCast"),
        Just("attackStop"),
        Just("weaponSheathe"),
        Just("FootLeft"),
    ]
}

fn source() -> impl Strategy<Value = SlowSource> {
    prop_oneof![
        Just(SlowSource::Bow),
        Just(SlowSource::Crossbow),
        Just(SlowSource::CastLeft),
        Just(SlowSource::CastRight),
        Just(SlowSource::DualCast),
    ]
}

proptest! {
    #[test]
    fn test_exact_restore_after_any_sequence(
        start in 60.0_f32..140.0,
        ops in prop::collection::vec((source(), any::<bool>(), 0.0_f32..100.0, -10.0_f32..10.0), 1..40),
    ) {
        let system = system();
        let manager = system.manager();
        let mut world = WorldState::new();
        let id = world.add_actor(spellsword(start));

        for (source, apply, skill, drift) in ops {
            if apply {
                manager.apply_slowdown(&mut world, id, source, skill);
            } else {
                manager.remove_slowdown(&mut world, id, source);
            }
            if manager.is_actor_slowed(id) {
                world.drift_speed(id, drift);
            }
        }

        for source in SlowSource::ALL {
            manager.remove_slowdown(&mut world, id, source);
        }

        prop_assert!(!manager.is_actor_slowed(id));
        prop_assert!(manager.actor_state(id).is_none());
        prop_assert!((world.speed(id).unwrap() - start).abs() < 0.01);
    }

    #[test]
    fn test_state_exists_iff_a_flag_is_set(tags in prop::collection::vec(event_tag(), 1..60)) {
        let system = system();
        let mut world = WorldState::new();
        let id = world.add_actor(spellsword(100.0));

        for tag in tags {
            fire(&system, &mut world, id, tag);
            match system.manager().actor_state(id) {
                Some(state) => {
                    prop_assert!(state.is_active());
                    prop_assert_eq!(state.dual_cast_active, state.cast_left_active && state.cast_right_active);
                }
                None => prop_assert!((world.speed(id).unwrap() - 100.0).abs() < 0.01),
            }
        }
    }

    #[test]
    fn test_idle_npc_never_changes_state(tags in prop::collection::vec(event_tag(), 1..30)) {
        let config = SlowdownConfig {
            apply_to_npcs: true,
            ..SlowdownConfig::default()
        };
        let system = SlowdownSystem::with_effects(config, EffectHandles::all());
        let mut world = WorldState::new();
        let mut npc = spellsword(100.0);
        npc.is_player = false;
        let id = world.add_actor(npc);

        for tag in tags {
            fire(&system, &mut world, id, tag);
        }

        prop_assert_eq!(system.manager().tracked_count(), 0);
        prop_assert_eq!(world.speed(id), Some(100.0));
    }
}
