//! Slowdown state machine - the only place that changes actor speed.
//!
//! Each actor moves between subsets of {ranged, cast-left, cast-right}, with
//! dual-cast derived from the two cast flags. Speed is never set outright:
//! every transition computes a target and applies the difference from the
//! current value, so modifiers owned by other systems are left alone.
//!
//! The actor map sits behind a mutex held for the whole of each public call.

mod state;

pub use state::*;

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use combat_rules::{ActorHost, ActorId, SlowSource, NOMINAL_SPEED};

use crate::config::SlowdownConfig;
use crate::effects::EffectHandles;
use crate::magnitude::MagnitudeCalculator;
use crate::skill;

/// Tracks and applies slowdown state for every affected actor.
#[derive(Debug)]
pub struct SlowdownManager {
    calculator: MagnitudeCalculator,
    effects: EffectHandles,
    dual_cast_enabled: bool,
    actor_states: Mutex<HashMap<ActorId, ActorSlowState>>,
}

impl SlowdownManager {
    /// Create a manager from config and the handles resolved at startup.
    pub fn new(config: &SlowdownConfig, effects: EffectHandles) -> Self {
        Self {
            calculator: MagnitudeCalculator::new(config.multipliers.clone()),
            effects,
            dual_cast_enabled: config.source_enabled(SlowSource::DualCast),
            actor_states: Mutex::new(HashMap::new()),
        }
    }

    pub fn calculator(&self) -> &MagnitudeCalculator {
        &self.calculator
    }

    pub fn effects(&self) -> &EffectHandles {
        &self.effects
    }

    /// Start or extend a penalty for `source` at the given skill level.
    pub fn apply_slowdown<H: ActorHost>(
        &self,
        host: &mut H,
        actor: ActorId,
        source: SlowSource,
        skill_level: f32,
    ) {
        let Some(current) = host.speed(actor) else {
            tracing::warn!(%actor, %source, "ApplySlowdown called with invalid actor");
            return;
        };
        if !self.source_available(source) {
            tracing::debug!(%source, "No effect loaded for source, skipping slowdown");
            return;
        }

        let mut states = self.states();
        let state = states.entry(actor).or_insert_with(|| {
            let base_speed_delta = current - NOMINAL_SPEED;
            tracing::debug!(%actor, base_speed_delta, "Slowdown episode started");
            ActorSlowState::new(base_speed_delta)
        });

        state.set(source);

        let effective = if source.is_casting() && state.dual_cast_active {
            if self.dual_cast_usable() {
                tracing::debug!(%actor, "Dual casting detected");
                SlowSource::DualCast
            } else if source == SlowSource::DualCast {
                SlowSource::CastLeft
            } else {
                source
            }
        } else {
            source
        };

        let skill_level = if effective == SlowSource::DualCast {
            skill::dual_cast_skill(&*host, actor)
        } else {
            skill_level
        };
        let target = self
            .calculator
            .target_speed(skill_level, effective, state.base_speed_delta);
        tracing::debug!(
            %actor,
            %source,
            %effective,
            skill_level,
            target_speed = target,
            "Applying slowdown"
        );
        host.modify_speed(actor, target - current);
    }

    /// Drop the penalty from `source`. Restores speed when nothing remains,
    /// otherwise re-targets under the next governing source.
    pub fn remove_slowdown<H: ActorHost>(&self, host: &mut H, actor: ActorId, source: SlowSource) {
        let Some(current) = host.speed(actor) else {
            return;
        };

        let mut states = self.states();
        let Some(state) = states.get_mut(&actor) else {
            return;
        };

        state.clear(source);

        if !state.is_active() {
            let target = NOMINAL_SPEED + state.base_speed_delta;
            states.remove(&actor);
            tracing::debug!(%actor, %source, target_speed = target, "Removed all slowdowns for actor");
            host.modify_speed(actor, target - current);
            return;
        }

        let Some(governing) = self.governing_source(state) else {
            return;
        };
        let skill_level = skill::governing_skill(&*host, actor, governing);
        let target = self
            .calculator
            .target_speed(skill_level, governing, state.base_speed_delta);
        tracing::debug!(
            %actor,
            %source,
            %governing,
            skill_level,
            target_speed = target,
            "Slowdown continues under remaining source"
        );
        host.modify_speed(actor, target - current);
    }

    /// Force-end the actor's episode whatever is active.
    ///
    /// Only corrects speed upward: if other systems have since pushed the actor
    /// below its baseline, that is left as is.
    pub fn clear_all_slowdowns<H: ActorHost>(&self, host: &mut H, actor: ActorId) {
        let Some(current) = host.speed(actor) else {
            return;
        };

        let mut states = self.states();
        let Some(state) = states.remove(&actor) else {
            return;
        };
        Self::restore_upward(host, actor, &state, current);
        tracing::debug!(%actor, "Cleared all slowdowns for actor");
    }

    /// Force-end every tracked episode. Actors that no longer resolve are skipped.
    pub fn clear_all<H: ActorHost>(&self, host: &mut H) {
        let mut states = self.states();
        let count = states.len();
        for (actor, state) in states.drain() {
            if let Some(current) = host.speed(actor) {
                Self::restore_upward(host, actor, &state, current);
            }
        }
        tracing::debug!(count, "Cleared all slowdowns for all actors");
    }

    /// Check if the actor has an active penalty. No side effects.
    pub fn is_actor_slowed(&self, actor: ActorId) -> bool {
        self.states()
            .get(&actor)
            .map(|state| state.is_active())
            .unwrap_or(false)
    }

    /// Copy of the actor's current state, if tracked.
    pub fn actor_state(&self, actor: ActorId) -> Option<ActorSlowState> {
        self.states().get(&actor).copied()
    }

    /// Number of actors with an active episode.
    pub fn tracked_count(&self) -> usize {
        self.states().len()
    }

    /// Source whose table governs an ongoing episode:
    /// ranged, then dual-cast, then left hand, then right hand.
    pub fn governing_source(&self, state: &ActorSlowState) -> Option<SlowSource> {
        if state.bow_slow_active {
            Some(state.ranged_source)
        } else if state.dual_cast_active && self.dual_cast_usable() {
            Some(SlowSource::DualCast)
        } else if state.cast_left_active {
            Some(SlowSource::CastLeft)
        } else if state.cast_right_active {
            Some(SlowSource::CastRight)
        } else {
            None
        }
    }

    fn restore_upward<H: ActorHost>(host: &mut H, actor: ActorId, state: &ActorSlowState, current: f32) {
        let correction = NOMINAL_SPEED + state.base_speed_delta - current;
        if correction > 0.0 {
            host.modify_speed(actor, correction);
        } else {
            tracing::trace!(%actor, correction, "Speed already at or above baseline");
        }
    }

    fn dual_cast_usable(&self) -> bool {
        self.dual_cast_enabled && self.effects.is_available(SlowSource::DualCast)
    }

    fn source_available(&self, source: SlowSource) -> bool {
        match source {
            SlowSource::DualCast => {
                self.dual_cast_usable() || self.effects.is_available(SlowSource::CastLeft)
            }
            other => self.effects.is_available(other),
        }
    }

    fn states(&self) -> MutexGuard<'_, HashMap<ActorId, ActorSlowState>> {
        self.actor_states.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
