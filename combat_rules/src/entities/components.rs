//! Component definitions for actors.

use serde::{Deserialize, Serialize};

use crate::mechanics::{ActorValue, Hand, WeaponType};

/// Skill levels relevant to slowdown magnitudes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillSet {
    pub archery: f32,
    pub destruction: f32,
    pub restoration: f32,
    pub alteration: f32,
    pub conjuration: f32,
    pub illusion: f32,
}

impl Default for SkillSet {
    fn default() -> Self {
        Self {
            archery: 15.0,
            destruction: 15.0,
            restoration: 15.0,
            alteration: 15.0,
            conjuration: 15.0,
            illusion: 15.0,
        }
    }
}

impl SkillSet {
    /// Read a skill. Returns `None` for values that are not skills.
    pub fn get(&self, value: ActorValue) -> Option<f32> {
        match value {
            ActorValue::Archery => Some(self.archery),
            ActorValue::Destruction => Some(self.destruction),
            ActorValue::Restoration => Some(self.restoration),
            ActorValue::Alteration => Some(self.alteration),
            ActorValue::Conjuration => Some(self.conjuration),
            ActorValue::Illusion => Some(self.illusion),
            ActorValue::SpeedMult => None,
        }
    }

    /// Set a skill. Returns false for values that are not skills.
    pub fn set(&mut self, value: ActorValue, level: f32) -> bool {
        let slot = match value {
            ActorValue::Archery => &mut self.archery,
            ActorValue::Destruction => &mut self.destruction,
            ActorValue::Restoration => &mut self.restoration,
            ActorValue::Alteration => &mut self.alteration,
            ActorValue::Conjuration => &mut self.conjuration,
            ActorValue::Illusion => &mut self.illusion,
            ActorValue::SpeedMult => return false,
        };
        *slot = level;
        true
    }
}

/// A weapon as the host engine describes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Weapon {
    pub name: String,
    pub weapon_type: WeaponType,
}

impl Weapon {
    pub fn new(name: impl Into<String>, weapon_type: WeaponType) -> Self {
        Self {
            name: name.into(),
            weapon_type,
        }
    }
}

/// One effect of a spell, identified by the actor value it primarily changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MagicEffect {
    pub name: String,
    pub primary_value: Option<ActorValue>,
}

/// A spell selected into a casting hand.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Spell {
    pub name: String,
    /// School skill that governs the spell. `None` for spells with no single school.
    pub associated_skill: Option<ActorValue>,
    pub effects: Vec<MagicEffect>,
}

impl Spell {
    /// Create a spell governed by the given school.
    pub fn new(name: impl Into<String>, school: ActorValue) -> Self {
        Self {
            name: name.into(),
            associated_skill: Some(school),
            effects: Vec::new(),
        }
    }

    /// Create a spell with no associated school.
    pub fn without_school(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            associated_skill: None,
            effects: Vec::new(),
        }
    }

    /// Add an effect to this spell.
    pub fn with_effect(mut self, name: impl Into<String>, primary_value: ActorValue) -> Self {
        self.effects.push(MagicEffect {
            name: name.into(),
            primary_value: Some(primary_value),
        });
        self
    }

    /// Check if any effect of this spell changes movement speed itself.
    pub fn modifies_speed(&self) -> bool {
        self.effects
            .iter()
            .any(|e| e.primary_value == Some(ActorValue::SpeedMult))
    }
}

/// Equipped weapon and selected spells.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Equipment {
    pub weapon: Option<Weapon>,
    pub left_spell: Option<Spell>,
    pub right_spell: Option<Spell>,
}

impl Equipment {
    /// The spell selected in a hand.
    pub fn spell(&self, hand: Hand) -> Option<&Spell> {
        match hand {
            Hand::Left => self.left_spell.as_ref(),
            Hand::Right => self.right_spell.as_ref(),
        }
    }

    /// Select (or clear) the spell in a hand.
    pub fn set_spell(&mut self, hand: Hand, spell: Option<Spell>) {
        match hand {
            Hand::Left => self.left_spell = spell,
            Hand::Right => self.right_spell = spell,
        }
    }
}
