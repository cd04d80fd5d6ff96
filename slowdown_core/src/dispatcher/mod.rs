//! Animation event dispatcher - turns classified host events into state
//! machine transitions.
//!
//! For each event:
//! 1. **Classify**: map the tag to an `AnimEventKind`; unknown tags stop here
//! 2. **Gate**: drop events from actors the configuration excludes
//! 3. **Resolve**: pick the source and the skill level that governs it
//! 4. **Transition**: call into the `SlowdownManager`

mod gating;

pub use gating::*;

use std::sync::Arc;

use combat_rules::{ActorHost, ActorId, Hand, SlowSource};

use crate::config::SlowdownConfig;
use crate::events::{AnimEventKind, AnimationEvent};
use crate::skill;
use crate::slowdown::SlowdownManager;

/// Routes animation events to the slowdown manager.
#[derive(Debug, Clone)]
pub struct AnimationEventDispatcher {
    config: Arc<SlowdownConfig>,
    manager: Arc<SlowdownManager>,
}

impl AnimationEventDispatcher {
    /// Wire a dispatcher to an initialized manager.
    pub fn new(config: Arc<SlowdownConfig>, manager: Arc<SlowdownManager>) -> Self {
        Self { config, manager }
    }

    pub fn manager(&self) -> &Arc<SlowdownManager> {
        &self.manager
    }

    pub fn config(&self) -> &SlowdownConfig {
        &self.config
    }

    /// Handle one event. Returns how it was classified; the event is always
    /// left for other listeners.
    pub fn process_event<H: ActorHost>(&self, host: &mut H, event: &AnimationEvent) -> AnimEventKind {
        let kind = event.kind();
        if kind == AnimEventKind::Unknown {
            return kind;
        }
        let Some(actor) = event.holder else {
            return kind;
        };
        let (Some(is_player), Some(in_combat)) = (host.is_player(actor), host.is_in_combat(actor)) else {
            tracing::debug!(%actor, tag = %event.tag, "Event holder does not resolve");
            return kind;
        };

        let context = ActorContext { is_player, in_combat };
        if !EventGate::new(&self.config).admits(kind, context) {
            return kind;
        }

        tracing::trace!(
            tag = %event.tag,
            actor = host.actor_name(actor).unwrap_or("<unnamed>"),
            is_player,
            "Animation event"
        );

        self.dispatch(host, actor, kind, is_player);
        kind
    }

    fn dispatch<H: ActorHost>(&self, host: &mut H, actor: ActorId, kind: AnimEventKind, is_player: bool) {
        match kind {
            AnimEventKind::BowDrawn => {
                tracing::debug!("Bow drawn event");
                self.on_bow_drawn(host, actor, is_player);
            }
            AnimEventKind::BowRelease => {
                tracing::debug!("Bow release event");
                self.manager.remove_slowdown(host, actor, SlowSource::Bow);
                self.manager.remove_slowdown(host, actor, SlowSource::Crossbow);
            }
            AnimEventKind::BeginCastLeft => self.on_begin_cast(host, actor, Hand::Left, is_player),
            AnimEventKind::BeginCastRight => self.on_begin_cast(host, actor, Hand::Right, is_player),
            AnimEventKind::CastStop => self.on_cast_release(host, actor),
            AnimEventKind::CastOkStop | AnimEventKind::InterruptCast => {
                if self.manager.is_actor_slowed(actor) {
                    tracing::debug!(?kind, "Cast ended early");
                    self.on_cast_release(host, actor);
                }
            }
            AnimEventKind::AttackStop => {
                if self.manager.is_actor_slowed(actor) {
                    tracing::debug!("attackStop while slowed - clearing slowdowns");
                    self.manager.clear_all_slowdowns(host, actor);
                }
            }
            AnimEventKind::WeaponSheathe => {
                if self.manager.is_actor_slowed(actor) {
                    tracing::debug!("Weapon state changed - clearing slowdowns");
                    self.manager.clear_all_slowdowns(host, actor);
                }
            }
            AnimEventKind::Unknown => {}
        }
    }

    fn on_bow_drawn<H: ActorHost>(&self, host: &mut H, actor: ActorId, is_player: bool) {
        if !EventGate::new(&self.config).ranged_allowed(is_player) {
            tracing::trace!("Bow slowdown disabled for NPCs");
            return;
        }

        let is_crossbow = host
            .equipped_weapon(actor)
            .is_some_and(|weapon| weapon.weapon_type.is_crossbow());
        let source = if is_crossbow {
            SlowSource::Crossbow
        } else {
            SlowSource::Bow
        };
        if !self.config.source_enabled(source) {
            tracing::debug!(%source, "Debuff disabled in config");
            return;
        }

        let archery = skill::ranged_skill(&*host, actor);
        tracing::debug!(%source, skill = archery, "Applying ranged slowdown");
        self.manager.apply_slowdown(host, actor, source, archery);
    }

    fn on_begin_cast<H: ActorHost>(&self, host: &mut H, actor: ActorId, hand: Hand, is_player: bool) {
        let source = SlowSource::cast(hand);
        if !self.config.source_enabled(source) {
            return;
        }
        if !EventGate::new(&self.config).casting_allowed(is_player) {
            tracing::trace!(is_player, "Casting slowdown skipped for this actor type");
            return;
        }

        let Some(spell) = host.selected_spell(actor, hand) else {
            tracing::debug!(?hand, "No spell in hand");
            return;
        };
        if spell.modifies_speed() {
            tracing::debug!(?hand, spell = %spell.name, "Spell modifies speed - skipping slowdown");
            return;
        }
        let skill_level = skill::spell_skill(&*host, actor, spell);
        tracing::debug!(?hand, spell = %spell.name, skill = skill_level, "Applying casting slowdown");

        self.manager.apply_slowdown(host, actor, source, skill_level);
    }

    fn on_cast_release<H: ActorHost>(&self, host: &mut H, actor: ActorId) {
        self.manager.remove_slowdown(host, actor, SlowSource::CastLeft);
        self.manager.remove_slowdown(host, actor, SlowSource::CastRight);
        self.manager.remove_slowdown(host, actor, SlowSource::DualCast);
        tracing::debug!("Cast released, removed all casting slowdowns");
    }
}
