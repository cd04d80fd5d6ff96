//! Penalty effect handles, resolved once at startup.

use combat_rules::{ContentLookup, EffectHandle, SlowSource};

use crate::config::ContentIds;

/// The four penalty effects. A missing handle makes its source inert.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EffectHandles {
    pub bow: Option<EffectHandle>,
    pub crossbow: Option<EffectHandle>,
    pub cast: Option<EffectHandle>,
    pub dual_cast: Option<EffectHandle>,
}

impl EffectHandles {
    /// Look up every effect in the configured package, logging each failure.
    pub fn resolve(ids: &ContentIds, lookup: &impl ContentLookup) -> Self {
        let resolve_one = |label: &str, source: SlowSource| {
            let form_id = ids.effect_id(source);
            let handle = lookup.lookup_effect(&ids.package, form_id);
            if handle.is_none() {
                tracing::error!(
                    package = %ids.package,
                    %form_id,
                    "Failed to load {} slowdown effect; source disabled",
                    label
                );
            }
            handle
        };

        let handles = Self {
            bow: resolve_one("bow", SlowSource::Bow),
            crossbow: resolve_one("crossbow", SlowSource::Crossbow),
            cast: resolve_one("casting", SlowSource::CastLeft),
            dual_cast: resolve_one("dual cast", SlowSource::DualCast),
        };

        if handles.is_complete() {
            tracing::info!(package = %ids.package, "All slowdown effects loaded");
        }
        handles
    }

    /// Every source available.
    pub fn all() -> Self {
        Self::from_fn(|_| true)
    }

    /// Handles for the sources the predicate accepts; used to model partial loads.
    pub fn from_fn(mut available: impl FnMut(SlowSource) -> bool) -> Self {
        let mut handle = |source: SlowSource, id: u32| {
            available(source).then_some(EffectHandle {
                package_index: 0,
                form_id: combat_rules::FormId(id),
            })
        };
        Self {
            bow: handle(SlowSource::Bow, 0x801),
            crossbow: handle(SlowSource::Crossbow, 0x807),
            cast: handle(SlowSource::CastLeft, 0x805),
            dual_cast: handle(SlowSource::DualCast, 0x806),
        }
    }

    pub fn handle(&self, source: SlowSource) -> Option<EffectHandle> {
        match source {
            SlowSource::Bow => self.bow,
            SlowSource::Crossbow => self.crossbow,
            SlowSource::CastLeft | SlowSource::CastRight => self.cast,
            SlowSource::DualCast => self.dual_cast,
        }
    }

    pub fn is_available(&self, source: SlowSource) -> bool {
        self.handle(source).is_some()
    }

    /// Check that no source was degraded.
    pub fn is_complete(&self) -> bool {
        SlowSource::ALL.iter().all(|s| self.is_available(*s))
    }
}
