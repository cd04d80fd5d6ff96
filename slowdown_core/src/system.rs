//! Composition root: builds the services in order and hands out the pieces
//! the host's event subscription needs.

use std::sync::Arc;

use combat_rules::{ActorHost, ContentLookup};

use crate::config::SlowdownConfig;
use crate::dispatcher::AnimationEventDispatcher;
use crate::effects::EffectHandles;
use crate::events::{AnimEventKind, AnimationEvent};
use crate::slowdown::SlowdownManager;

/// The initialized slowdown services.
///
/// Effect handles are resolved before the dispatcher exists, so nothing can
/// reach the state machine until startup has finished.
#[derive(Debug, Clone)]
pub struct SlowdownSystem {
    dispatcher: AnimationEventDispatcher,
}

impl SlowdownSystem {
    /// Resolve effects against loaded content and wire up the services.
    pub fn initialize(config: SlowdownConfig, content: &impl ContentLookup) -> Self {
        let effects = EffectHandles::resolve(&config.content, content);
        Self::with_effects(config, effects)
    }

    /// Wire up the services with already-resolved effect handles.
    pub fn with_effects(config: SlowdownConfig, effects: EffectHandles) -> Self {
        let manager = Arc::new(SlowdownManager::new(&config, effects));
        let dispatcher = AnimationEventDispatcher::new(Arc::new(config), manager);
        tracing::info!(
            enabled = dispatcher.config().enabled,
            npcs = dispatcher.config().apply_to_npcs,
            "Slowdown system initialized"
        );
        Self { dispatcher }
    }

    pub fn dispatcher(&self) -> &AnimationEventDispatcher {
        &self.dispatcher
    }

    pub fn manager(&self) -> &Arc<SlowdownManager> {
        self.dispatcher.manager()
    }

    /// Feed one animation event from the host.
    pub fn on_animation_event<H: ActorHost>(&self, host: &mut H, event: &AnimationEvent) -> AnimEventKind {
        self.dispatcher.process_event(host, event)
    }

    /// Loaded area changed; drop every tracked penalty.
    pub fn on_area_transition<H: ActorHost>(&self, host: &mut H) {
        tracing::debug!("Area transition, clearing slowdowns");
        self.manager().clear_all(host);
    }

    /// Teardown; restores every tracked actor.
    pub fn shutdown<H: ActorHost>(&self, host: &mut H) {
        self.manager().clear_all(host);
        tracing::info!("Slowdown system shut down");
    }
}
