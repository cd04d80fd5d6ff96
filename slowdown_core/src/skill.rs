//! Which skill level governs a penalty.

use combat_rules::{ActorHost, ActorId, ActorValue, Hand, SlowSource, Spell};

/// Skill used for drawn ranged weapons, bow and crossbow alike.
pub fn ranged_skill(host: &impl ActorHost, actor: ActorId) -> f32 {
    host.actor_value(actor, ActorValue::Archery).unwrap_or(0.0)
}

/// Unweighted mean of the five magic schools.
pub fn average_magic_skill(host: &impl ActorHost, actor: ActorId) -> f32 {
    let total: f32 = ActorValue::MAGIC_SCHOOLS
        .iter()
        .map(|school| host.actor_value(actor, *school).unwrap_or(0.0))
        .sum();
    total / ActorValue::MAGIC_SCHOOLS.len() as f32
}

/// The school skill of a spell, or the magic average when it has no single school.
pub fn spell_skill(host: &impl ActorHost, actor: ActorId, spell: &Spell) -> f32 {
    match spell.associated_skill {
        Some(school) => host
            .actor_value(actor, school)
            .unwrap_or_else(|| average_magic_skill(host, actor)),
        None => average_magic_skill(host, actor),
    }
}

/// Skill for the spell selected in a hand; the magic average if the hand is empty.
pub fn hand_skill(host: &impl ActorHost, actor: ActorId, hand: Hand) -> f32 {
    match host.selected_spell(actor, hand) {
        Some(spell) => spell_skill(host, actor, spell),
        None => average_magic_skill(host, actor),
    }
}

/// Dual casting is governed by the stronger of the two hands.
pub fn dual_cast_skill(host: &impl ActorHost, actor: ActorId) -> f32 {
    hand_skill(host, actor, Hand::Left).max(hand_skill(host, actor, Hand::Right))
}

/// Skill governing a source.
pub fn governing_skill(host: &impl ActorHost, actor: ActorId, source: SlowSource) -> f32 {
    match source {
        SlowSource::Bow | SlowSource::Crossbow => ranged_skill(host, actor),
        SlowSource::CastLeft => hand_skill(host, actor, Hand::Left),
        SlowSource::CastRight => hand_skill(host, actor, Hand::Right),
        SlowSource::DualCast => dual_cast_skill(host, actor),
    }
}
