use std::path::PathBuf;

use combat_rules::SlowSource;
use thiserror::Error;

/// Errors from loading, validating or saving configuration.
///
/// Runtime slowdown operations never fail; invalid references are no-ops.
#[derive(Error, Debug)]
pub enum SlowdownError {
    #[error("IO error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Config serialization error: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("Invalid {slow_source} multiplier at tier {tier}: {value} (must be in (0, 1])")]
    InvalidMultiplier {
        slow_source: SlowSource,
        tier: usize,
        value: f32,
    },
}

pub type Result<T> = std::result::Result<T, SlowdownError>;
