//! The seam with the host engine.
//!
//! The slowdown system never owns actors. It reads them and nudges their speed
//! through these traits, so the same logic runs against the in-memory
//! `WorldState` and a live engine binding.

use serde::{Deserialize, Serialize};

use crate::entities::{ActorId, FormId, Spell, Weapon};
use crate::mechanics::{ActorValue, Hand};

/// Read access to actors plus the single mutation channel: an incremental
/// speed correction.
///
/// Every query returns `None` (or `false`) when the actor reference no longer
/// resolves, which callers treat as a silent no-op.
pub trait ActorHost {
    /// Current `SpeedMult` of the actor.
    fn speed(&self, actor: ActorId) -> Option<f32>;

    /// Add `delta` to the actor's current speed. Never an absolute set, so
    /// modifiers owned by other systems survive. Returns false if the actor
    /// does not resolve.
    fn modify_speed(&mut self, actor: ActorId, delta: f32) -> bool;

    fn is_player(&self, actor: ActorId) -> Option<bool>;

    fn is_in_combat(&self, actor: ActorId) -> Option<bool>;

    /// Current level of a skill actor value.
    fn actor_value(&self, actor: ActorId, value: ActorValue) -> Option<f32>;

    /// Weapon in the main weapon slot.
    fn equipped_weapon(&self, actor: ActorId) -> Option<&Weapon>;

    /// Spell selected in a casting hand.
    fn selected_spell(&self, actor: ActorId, hand: Hand) -> Option<&Spell>;

    /// Display name for diagnostics.
    fn actor_name(&self, actor: ActorId) -> Option<&str>;
}

/// Opaque reference to a penalty effect record inside a loaded content package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EffectHandle {
    /// Load-order slot of the owning package.
    pub package_index: u16,
    pub form_id: FormId,
}

/// Startup-time lookup of effect records by package name and local form ID.
pub trait ContentLookup {
    fn lookup_effect(&self, package: &str, form_id: FormId) -> Option<EffectHandle>;
}
