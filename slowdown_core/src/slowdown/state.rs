//! Per-actor slowdown state.

use serde::{Deserialize, Serialize};

use combat_rules::SlowSource;

/// Which sources currently penalize one actor, and the speed offset they are
/// measured against.
///
/// Exists only while at least one flag is set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActorSlowState {
    /// Shared by bow and crossbow.
    pub bow_slow_active: bool,
    pub cast_left_active: bool,
    pub cast_right_active: bool,
    /// Derived: both cast flags set.
    pub dual_cast_active: bool,

    /// Speed minus nominal when the first penalty of this episode began.
    /// Fixed for the whole episode.
    pub base_speed_delta: f32,

    /// Which ranged source last set `bow_slow_active`; picks the table.
    pub ranged_source: SlowSource,
}

impl ActorSlowState {
    /// Start an episode with nothing active yet.
    pub fn new(base_speed_delta: f32) -> Self {
        Self {
            bow_slow_active: false,
            cast_left_active: false,
            cast_right_active: false,
            dual_cast_active: false,
            base_speed_delta,
            ranged_source: SlowSource::Bow,
        }
    }

    /// Set the flag(s) for a source. Applying dual-cast marks both hands.
    pub fn set(&mut self, source: SlowSource) {
        match source {
            SlowSource::Bow | SlowSource::Crossbow => {
                self.bow_slow_active = true;
                self.ranged_source = source;
            }
            SlowSource::CastLeft => self.cast_left_active = true,
            SlowSource::CastRight => self.cast_right_active = true,
            SlowSource::DualCast => {
                self.cast_left_active = true;
                self.cast_right_active = true;
            }
        }
        self.refresh_dual_cast();
    }

    /// Clear the flag(s) for a source. Dual-cast removal only touches the
    /// derived flag, which is recomputed straight after.
    pub fn clear(&mut self, source: SlowSource) {
        match source {
            SlowSource::Bow | SlowSource::Crossbow => self.bow_slow_active = false,
            SlowSource::CastLeft => self.cast_left_active = false,
            SlowSource::CastRight => self.cast_right_active = false,
            SlowSource::DualCast => self.dual_cast_active = false,
        }
        self.refresh_dual_cast();
    }

    /// Recompute the derived dual-cast flag.
    pub fn refresh_dual_cast(&mut self) {
        self.dual_cast_active = self.cast_left_active && self.cast_right_active;
    }

    /// Check if any penalty is active.
    pub fn is_active(&self) -> bool {
        self.bow_slow_active || self.cast_left_active || self.cast_right_active || self.dual_cast_active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dual_cast_is_derived() {
        let mut state = ActorSlowState::new(0.0);
        state.set(SlowSource::CastLeft);
        assert!(!state.dual_cast_active);

        state.set(SlowSource::CastRight);
        assert!(state.dual_cast_active);

        state.clear(SlowSource::CastLeft);
        assert!(!state.dual_cast_active);
        assert!(state.cast_right_active);
    }

    #[test]
    fn test_dual_cast_removal_is_rederived() {
        let mut state = ActorSlowState::new(0.0);
        state.set(SlowSource::DualCast);
        assert!(state.cast_left_active && state.cast_right_active && state.dual_cast_active);

        // Both hands are still casting, so the derived flag comes straight back
        state.clear(SlowSource::DualCast);
        assert!(state.dual_cast_active);
    }

    #[test]
    fn test_bow_and_crossbow_share_flag() {
        let mut state = ActorSlowState::new(-5.0);
        state.set(SlowSource::Bow);
        state.set(SlowSource::Crossbow);
        assert_eq!(state.ranged_source, SlowSource::Crossbow);

        state.clear(SlowSource::Bow);
        assert!(!state.bow_slow_active);
        assert!(!state.is_active());
        assert_eq!(state.base_speed_delta, -5.0);
    }
}
