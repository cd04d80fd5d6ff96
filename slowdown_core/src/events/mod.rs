//! Animation events from the host and their classification.

use phf::phf_map;
use serde::{Deserialize, Serialize};

use combat_rules::ActorId;

/// Canonical kinds of animation event the dispatcher acts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnimEventKind {
    BowDrawn,
    BowRelease,
    BeginCastLeft,
    BeginCastRight,
    CastStop,
    CastOkStop,
    InterruptCast,
    AttackStop,
    WeaponSheathe,
    /// Anything else; dropped.
    Unknown,
}

static EVENT_LOOKUP: phf::Map<&'static str, AnimEventKind> = phf_map! {
    "BowDrawn" => AnimEventKind::BowDrawn,
    "bowRelease" => AnimEventKind::BowRelease,
    "BeginCastLeft" => AnimEventKind::BeginCastLeft,
    "BeginCastRight" => AnimEventKind::BeginCastRight,
    "CastStop" => AnimEventKind::CastStop,
    "CastOKStop" => AnimEventKind::CastOkStop,
    "InterruptCast" => AnimEventKind::InterruptCast,
    "attackStop" => AnimEventKind::AttackStop,
    "WeaponSheathe" => AnimEventKind::WeaponSheathe,
    "weaponSheathe" => AnimEventKind::WeaponSheathe,
};

impl AnimEventKind {
    /// Classify an event tag with a single perfect-hash lookup. Tags are
    /// case-sensitive, as the host sends them.
    pub fn classify(tag: &str) -> Self {
        EVENT_LOOKUP.get(tag).copied().unwrap_or(AnimEventKind::Unknown)
    }

    /// Check if the event starts a casting penalty.
    pub fn is_cast_begin(&self) -> bool {
        matches!(self, AnimEventKind::BeginCastLeft | AnimEventKind::BeginCastRight)
    }
}

/// A notification from an actor's animation graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationEvent {
    /// Actor whose graph fired. `None` when the holder is not an actor.
    pub holder: Option<ActorId>,
    pub tag: String,
}

impl AnimationEvent {
    pub fn new(holder: ActorId, tag: impl Into<String>) -> Self {
        Self {
            holder: Some(holder),
            tag: tag.into(),
        }
    }

    pub fn kind(&self) -> AnimEventKind {
        AnimEventKind::classify(&self.tag)
    }
}
