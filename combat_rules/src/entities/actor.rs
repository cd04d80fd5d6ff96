//! Actor definitions.

use serde::{Deserialize, Serialize};

use super::{ActorId, Equipment, SkillSet, Spell, Weapon};
use crate::mechanics::{ActorValue, Hand};

/// Nominal movement speed: 100% of the actor's base.
pub const NOMINAL_SPEED: f32 = 100.0;

/// A simulated character with everything the slowdown system looks at.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Actor {
    pub id: ActorId,
    pub name: String,
    pub is_player: bool,
    pub in_combat: bool,

    /// Current movement speed in percent (`SpeedMult`).
    pub speed_mult: f32,

    pub skills: SkillSet,
    #[serde(default)]
    pub equipment: Equipment,
}

impl Actor {
    /// Create a new non-player actor with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: ActorId::new(),
            name: name.into(),
            is_player: false,
            in_combat: false,
            speed_mult: NOMINAL_SPEED,
            skills: SkillSet::default(),
            equipment: Equipment::default(),
        }
    }

    /// Create the player actor.
    pub fn player(name: impl Into<String>) -> Self {
        Self {
            is_player: true,
            ..Self::new(name)
        }
    }

    /// Set a skill level.
    pub fn with_skill(mut self, skill: ActorValue, level: f32) -> Self {
        self.skills.set(skill, level);
        self
    }

    /// Equip a weapon.
    pub fn with_weapon(mut self, weapon: Weapon) -> Self {
        self.equipment.weapon = Some(weapon);
        self
    }

    /// Select a spell into a hand.
    pub fn with_spell(mut self, hand: Hand, spell: Spell) -> Self {
        self.equipment.set_spell(hand, Some(spell));
        self
    }

    /// Set the combat flag.
    pub fn with_combat(mut self, in_combat: bool) -> Self {
        self.in_combat = in_combat;
        self
    }

    /// Set the starting speed.
    pub fn with_speed(mut self, speed_mult: f32) -> Self {
        self.speed_mult = speed_mult;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mechanics::WeaponType;

    #[test]
    fn test_new_actor() {
        let actor = Actor::new("Bandit");
        assert_eq!(actor.name, "Bandit");
        assert!(!actor.is_player);
        assert!(!actor.in_combat);
        assert_eq!(actor.speed_mult, NOMINAL_SPEED);
    }

    #[test]
    fn test_player_builder() {
        let player = Actor::player("Dragonborn")
            .with_skill(ActorValue::Archery, 60.0)
            .with_weapon(Weapon::new("Hunting Bow", WeaponType::Bow));

        assert!(player.is_player);
        assert_eq!(player.skills.get(ActorValue::Archery), Some(60.0));
        assert_eq!(
            player.equipment.weapon.as_ref().map(|w| w.weapon_type),
            Some(WeaponType::Bow)
        );
    }
}
