//! World state - an in-memory host holding actors and loaded content.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::entities::{Actor, ActorId, FormId, Spell, Weapon};
use crate::host::{ActorHost, ContentLookup, EffectHandle};
use crate::mechanics::{ActorValue, Hand};

/// A content package and the effect records it defines.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentPackage {
    pub name: String,
    /// Local form ID -> effect name.
    pub effects: HashMap<FormId, String>,
}

/// The complete state of the simulated world.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct WorldState {
    /// All actors in the world (including the player).
    pub actors: HashMap<ActorId, Actor>,

    /// Loaded content packages, in load order.
    #[serde(default)]
    pub packages: Vec<ContentPackage>,
}

impl WorldState {
    /// Create a new empty world state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a world from its JSON form.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize the world to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Add an actor to the world.
    pub fn add_actor(&mut self, actor: Actor) -> ActorId {
        let id = actor.id;
        self.actors.insert(id, actor);
        id
    }

    /// Remove an actor, as when it unloads. Later references to it no longer resolve.
    pub fn remove_actor(&mut self, id: ActorId) -> Option<Actor> {
        self.actors.remove(&id)
    }

    /// Get actor by ID.
    pub fn actor(&self, id: ActorId) -> Option<&Actor> {
        self.actors.get(&id)
    }

    /// Get mutable actor by ID.
    pub fn actor_mut(&mut self, id: ActorId) -> Option<&mut Actor> {
        self.actors.get_mut(&id)
    }

    /// Get the player actor, if one is loaded.
    pub fn player(&self) -> Option<&Actor> {
        self.actors.values().find(|a| a.is_player)
    }

    /// Register an effect record in a package, creating the package if needed.
    pub fn register_effect(&mut self, package: &str, form_id: FormId, name: impl Into<String>) {
        let index = match self.packages.iter().position(|p| p.name == package) {
            Some(index) => index,
            None => {
                self.packages.push(ContentPackage {
                    name: package.to_string(),
                    effects: HashMap::new(),
                });
                self.packages.len() - 1
            }
        };
        self.packages[index].effects.insert(form_id, name.into());
    }

    /// Change an actor's speed from outside the slowdown system, like any other
    /// buff or debuff would.
    pub fn drift_speed(&mut self, id: ActorId, delta: f32) -> bool {
        match self.actors.get_mut(&id) {
            Some(actor) => {
                actor.speed_mult += delta;
                true
            }
            None => false,
        }
    }
}

impl ActorHost for WorldState {
    fn speed(&self, actor: ActorId) -> Option<f32> {
        self.actor(actor).map(|a| a.speed_mult)
    }

    fn modify_speed(&mut self, actor: ActorId, delta: f32) -> bool {
        match self.actors.get_mut(&actor) {
            Some(a) => {
                a.speed_mult += delta;
                tracing::trace!(actor = %a.name, delta, speed = a.speed_mult, "speed modified");
                true
            }
            None => false,
        }
    }

    fn is_player(&self, actor: ActorId) -> Option<bool> {
        self.actor(actor).map(|a| a.is_player)
    }

    fn is_in_combat(&self, actor: ActorId) -> Option<bool> {
        self.actor(actor).map(|a| a.in_combat)
    }

    fn actor_value(&self, actor: ActorId, value: ActorValue) -> Option<f32> {
        self.actor(actor).and_then(|a| match value {
            ActorValue::SpeedMult => Some(a.speed_mult),
            skill => a.skills.get(skill),
        })
    }

    fn equipped_weapon(&self, actor: ActorId) -> Option<&Weapon> {
        self.actor(actor).and_then(|a| a.equipment.weapon.as_ref())
    }

    fn selected_spell(&self, actor: ActorId, hand: Hand) -> Option<&Spell> {
        self.actor(actor).and_then(|a| a.equipment.spell(hand))
    }

    fn actor_name(&self, actor: ActorId) -> Option<&str> {
        self.actor(actor).map(|a| a.name.as_str())
    }
}

impl ContentLookup for WorldState {
    fn lookup_effect(&self, package: &str, form_id: FormId) -> Option<EffectHandle> {
        let index = self.packages.iter().position(|p| p.name == package)?;
        if !self.packages[index].effects.contains_key(&form_id) {
            return None;
        }
        Some(EffectHandle {
            package_index: u16::try_from(index).ok()?,
            form_id,
        })
    }
}
