//! Game mechanics: actor values, weapon types, casting hands, slowdown sources
//! and skill tiers.

use serde::{Deserialize, Serialize};

/// Actor values the slowdown system reads or modifies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActorValue {
    // Combat skills
    Archery,

    // Magic schools
    Destruction,
    Restoration,
    Alteration,
    Conjuration,
    Illusion,

    /// Movement speed in percent of nominal; 100.0 is unmodified.
    SpeedMult,
}

impl ActorValue {
    /// The five magic schools, averaged for spells with no single school.
    pub const MAGIC_SCHOOLS: [ActorValue; 5] = [
        ActorValue::Destruction,
        ActorValue::Restoration,
        ActorValue::Alteration,
        ActorValue::Conjuration,
        ActorValue::Illusion,
    ];
}

/// Weapon categories as reported by the host engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeaponType {
    HandToHand,
    OneHandSword,
    OneHandDagger,
    OneHandAxe,
    OneHandMace,
    TwoHandSword,
    TwoHandAxe,
    Bow,
    Staff,
    /// Heavy, mechanical ranged weapon.
    Crossbow,
}

impl WeaponType {
    /// Check if the weapon is the heavy/mechanical ranged subtype.
    pub fn is_crossbow(&self) -> bool {
        matches!(self, WeaponType::Crossbow)
    }
}

/// Casting hand (action slot) for a selected spell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Hand {
    Left,
    Right,
}

/// Action category that can cause a movement penalty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SlowSource {
    Bow,
    Crossbow,
    CastLeft,
    CastRight,
    /// Both hands casting at once; derived from the two cast sources.
    DualCast,
}

impl SlowSource {
    /// All sources, in declaration order.
    pub const ALL: [SlowSource; 5] = [
        SlowSource::Bow,
        SlowSource::Crossbow,
        SlowSource::CastLeft,
        SlowSource::CastRight,
        SlowSource::DualCast,
    ];

    /// Check if the source comes from a drawn ranged weapon.
    pub fn is_ranged(&self) -> bool {
        matches!(self, SlowSource::Bow | SlowSource::Crossbow)
    }

    /// Check if the source comes from spell casting.
    pub fn is_casting(&self) -> bool {
        !self.is_ranged()
    }

    /// The single-hand cast source for a hand.
    pub fn cast(hand: Hand) -> Self {
        match hand {
            Hand::Left => SlowSource::CastLeft,
            Hand::Right => SlowSource::CastRight,
        }
    }

    /// Short lowercase name used in diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            SlowSource::Bow => "bow",
            SlowSource::Crossbow => "crossbow",
            SlowSource::CastLeft => "cast-left",
            SlowSource::CastRight => "cast-right",
            SlowSource::DualCast => "dual-cast",
        }
    }
}

impl std::fmt::Display for SlowSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Skill-level buckets used to index multiplier tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SkillTier {
    /// Skill <= 25.
    Novice,
    /// Skill <= 50.
    Apprentice,
    /// Skill <= 75.
    Expert,
    /// Anything above 75.
    Master,
}

impl SkillTier {
    /// Bucket a skill level. Total: NaN and out-of-range values land in a tier.
    pub fn from_skill(skill_level: f32) -> Self {
        if skill_level <= 25.0 {
            SkillTier::Novice
        } else if skill_level <= 50.0 {
            SkillTier::Apprentice
        } else if skill_level <= 75.0 {
            SkillTier::Expert
        } else {
            SkillTier::Master
        }
    }

    /// Index into a 4-entry multiplier table.
    pub fn index(&self) -> usize {
        match self {
            SkillTier::Novice => 0,
            SkillTier::Apprentice => 1,
            SkillTier::Expert => 2,
            SkillTier::Master => 3,
        }
    }
}
