//! Skill-tier lookup of speed multipliers.

use combat_rules::{SkillTier, SlowSource, NOMINAL_SPEED};

use crate::config::MultiplierTables;

/// Maps (skill level, source) to the fraction of speed an actor keeps.
#[derive(Debug, Clone)]
pub struct MagnitudeCalculator {
    tables: MultiplierTables,
}

impl MagnitudeCalculator {
    pub fn new(tables: MultiplierTables) -> Self {
        Self { tables }
    }

    /// Speed multiplier in `(0, 1]` for a validated table. `DualCast` reads its
    /// own table rather than combining the cast tables.
    pub fn multiplier(&self, skill_level: f32, source: SlowSource) -> f32 {
        let tier = SkillTier::from_skill(skill_level);
        let multiplier = self.tables.table(source)[tier.index()];
        tracing::trace!(%source, skill_level, ?tier, multiplier, "Resolved multiplier");
        multiplier
    }

    /// Absolute speed an actor should have while penalized, given the offset
    /// other modifiers contributed when the penalty began.
    pub fn target_speed(&self, skill_level: f32, source: SlowSource, base_speed_delta: f32) -> f32 {
        NOMINAL_SPEED * self.multiplier(skill_level, source) + base_speed_delta
    }
}
