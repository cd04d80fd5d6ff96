//! Which actors and sources an event is allowed to affect.

use crate::config::SlowdownConfig;
use crate::events::AnimEventKind;

/// Who fired an event, as far as gating is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActorContext {
    pub is_player: bool,
    pub in_combat: bool,
}

/// Gating policy derived from configuration.
#[derive(Debug, Clone, Copy)]
pub struct EventGate<'a> {
    config: &'a SlowdownConfig,
}

impl<'a> EventGate<'a> {
    pub fn new(config: &'a SlowdownConfig) -> Self {
        Self { config }
    }

    /// First gate, applied before any state is touched.
    ///
    /// The player always passes. An NPC passes only while in combat, and
    /// only if NPC slowdown is on or this is a cast under NPC-only casting.
    /// Penalties left on an NPC that drops out of combat are cleared by
    /// `SlowdownManager::clear_all`.
    pub fn admits(&self, kind: AnimEventKind, actor: ActorContext) -> bool {
        if !self.config.enabled {
            return false;
        }
        if actor.is_player {
            return true;
        }
        if !actor.in_combat {
            return false;
        }
        self.config.apply_to_npcs || (kind.is_cast_begin() && self.config.casting_slowdown_npcs_only)
    }

    /// Whether a drawn ranged weapon may slow this actor. Unaffected by
    /// NPC-only casting.
    pub fn ranged_allowed(&self, is_player: bool) -> bool {
        is_player || self.config.apply_to_npcs
    }

    /// Whether casting may slow this actor.
    pub fn casting_allowed(&self, is_player: bool) -> bool {
        if self.config.casting_slowdown_npcs_only {
            !is_player
        } else {
            is_player || self.config.apply_to_npcs
        }
    }
}
