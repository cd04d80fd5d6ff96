//! Tunable settings, stored as TOML.
//!
//! The slowdown core only ever reads a `SlowdownConfig`; loading and saving
//! happen once, outside the event path.

use serde::{Deserialize, Serialize};
use std::path::Path;

use combat_rules::{FormId, SlowSource};

use crate::error::{Result, SlowdownError};

/// Minimum severity written to the log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
    Critical,
}

/// Fraction of speed retained per skill tier (Novice/Apprentice/Expert/Master),
/// one table per source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MultiplierTables {
    pub bow: [f32; 4],
    pub crossbow: [f32; 4],
    pub cast: [f32; 4],
    /// Dedicated table, not derived from `cast`.
    pub dual_cast: [f32; 4],
}

impl Default for MultiplierTables {
    fn default() -> Self {
        Self {
            bow: [0.5, 0.6, 0.7, 0.8],
            crossbow: [0.5, 0.6, 0.7, 0.8],
            cast: [0.5, 0.6, 0.7, 0.8],
            dual_cast: [0.4, 0.5, 0.6, 0.7],
        }
    }
}

impl MultiplierTables {
    /// The table governing a source. Both hands share the cast table.
    pub fn table(&self, source: SlowSource) -> &[f32; 4] {
        match source {
            SlowSource::Bow => &self.bow,
            SlowSource::Crossbow => &self.crossbow,
            SlowSource::CastLeft | SlowSource::CastRight => &self.cast,
            SlowSource::DualCast => &self.dual_cast,
        }
    }

    /// Check that every entry lies in `(0, 1]`.
    pub fn validate(&self) -> Result<()> {
        let tables = [
            (SlowSource::Bow, &self.bow),
            (SlowSource::Crossbow, &self.crossbow),
            (SlowSource::CastLeft, &self.cast),
            (SlowSource::DualCast, &self.dual_cast),
        ];
        for (source, table) in tables {
            for (tier, &value) in table.iter().enumerate() {
                if !(value > 0.0 && value <= 1.0) {
                    return Err(SlowdownError::InvalidMultiplier {
                        slow_source: source,
                        tier,
                        value,
                    });
                }
            }
        }
        Ok(())
    }
}

/// Where the four penalty effects live in the content package.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentIds {
    pub package: String,
    pub bow_effect: FormId,
    pub cast_effect: FormId,
    pub dual_cast_effect: FormId,
    pub crossbow_effect: FormId,
}

impl Default for ContentIds {
    fn default() -> Self {
        Self {
            package: "SigaNG.esp".to_string(),
            bow_effect: FormId(0x801),
            cast_effect: FormId(0x805),
            dual_cast_effect: FormId(0x806),
            crossbow_effect: FormId(0x807),
        }
    }
}

impl ContentIds {
    /// Form ID of the effect record backing a source.
    pub fn effect_id(&self, source: SlowSource) -> FormId {
        match source {
            SlowSource::Bow => self.bow_effect,
            SlowSource::Crossbow => self.crossbow_effect,
            SlowSource::CastLeft | SlowSource::CastRight => self.cast_effect,
            SlowSource::DualCast => self.dual_cast_effect,
        }
    }
}

/// All tunable settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlowdownConfig {
    /// Master switch.
    pub enabled: bool,

    /// Let NPCs in active combat be slowed.
    pub apply_to_npcs: bool,

    /// Restrict casting slowdown to NPCs; the player is never slowed by casting.
    pub casting_slowdown_npcs_only: bool,

    pub log_level: LogLevel,

    pub enable_bow: bool,
    pub enable_crossbow: bool,
    pub enable_cast: bool,
    pub enable_dual_cast: bool,

    pub multipliers: MultiplierTables,
    pub content: ContentIds,
}

impl Default for SlowdownConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            apply_to_npcs: false,
            casting_slowdown_npcs_only: false,
            log_level: LogLevel::Info,
            enable_bow: true,
            enable_crossbow: true,
            enable_cast: true,
            enable_dual_cast: true,
            multipliers: MultiplierTables::default(),
            content: ContentIds::default(),
        }
    }
}

impl SlowdownConfig {
    /// Parse and validate a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: SlowdownConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Render as a TOML document.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Load and validate a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| SlowdownError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::info!(path = %path.display(), "Loaded slowdown config");
        Ok(config)
    }

    /// Write the config, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> Result<()> {
        let io_err = |source| SlowdownError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(io_err)?;
            }
        }
        std::fs::write(path, self.to_toml_string()?).map_err(io_err)?;
        tracing::debug!(path = %path.display(), "Saved slowdown config");
        Ok(())
    }

    /// Load the config, writing defaults first if the file does not exist yet.
    pub fn load_or_create(path: &Path) -> Result<Self> {
        if path.exists() {
            return Self::load(path);
        }
        let config = Self::default();
        config.save(path)?;
        tracing::info!(path = %path.display(), "Created default slowdown config");
        Ok(config)
    }

    /// Check every multiplier table.
    pub fn validate(&self) -> Result<()> {
        self.multipliers.validate()
    }

    /// Per-source enable toggle. Dual-cast also needs casting enabled.
    pub fn source_enabled(&self, source: SlowSource) -> bool {
        match source {
            SlowSource::Bow => self.enable_bow,
            SlowSource::Crossbow => self.enable_crossbow,
            SlowSource::CastLeft | SlowSource::CastRight => self.enable_cast,
            SlowSource::DualCast => self.enable_cast && self.enable_dual_cast,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SlowdownConfig::default();
        assert!(config.enabled);
        assert!(!config.apply_to_npcs);
        assert_eq!(config.multipliers.dual_cast, [0.4, 0.5, 0.6, 0.7]);
        assert_eq!(config.content.package, "SigaNG.esp");
        assert_eq!(config.content.effect_id(SlowSource::Crossbow), FormId(0x807));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = SlowdownConfig::from_toml_str(
            r#"
            apply_to_npcs = true
            log_level = "debug"
            "#,
        )
        .unwrap();

        assert!(config.apply_to_npcs);
        assert_eq!(config.log_level, LogLevel::Debug);
        assert!(config.enable_bow);
        assert_eq!(config.multipliers, MultiplierTables::default());
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = SlowdownConfig::default();
        config.enable_crossbow = false;
        config.multipliers.bow = [0.3, 0.4, 0.5, 0.9];

        let text = config.to_toml_string().unwrap();
        let parsed = SlowdownConfig::from_toml_str(&text).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_rejects_out_of_range_multiplier() {
        let mut config = SlowdownConfig::default();
        config.multipliers.dual_cast[2] = 0.0;
        assert!(matches!(
            config.validate(),
            Err(SlowdownError::InvalidMultiplier {
                slow_source: SlowSource::DualCast,
                tier: 2,
                ..
            })
        ));

        config.multipliers.dual_cast[2] = 1.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_dual_cast_toggle_follows_cast() {
        let mut config = SlowdownConfig::default();
        assert!(config.source_enabled(SlowSource::DualCast));

        config.enable_cast = false;
        assert!(!config.source_enabled(SlowSource::DualCast));
        assert!(!config.source_enabled(SlowSource::CastLeft));
        assert!(config.source_enabled(SlowSource::Bow));
    }

    #[test]
    fn test_load_or_create_writes_defaults() {
        let dir = std::env::temp_dir().join(format!("siga-config-{}", std::process::id()));
        let path = dir.join("nested").join("siga.toml");
        let _ = std::fs::remove_dir_all(&dir);

        let created = SlowdownConfig::load_or_create(&path).unwrap();
        assert!(path.exists());

        let loaded = SlowdownConfig::load(&path).unwrap();
        assert_eq!(created, loaded);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let path = std::env::temp_dir().join("siga-does-not-exist.toml");
        assert!(matches!(
            SlowdownConfig::load(&path),
            Err(SlowdownError::Io { .. })
        ));
    }
}
