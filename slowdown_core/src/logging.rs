//! Log output setup.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::config::LogLevel;

impl LogLevel {
    /// The `tracing` filter for this level. `Critical` has no counterpart and
    /// maps to errors only.
    pub fn as_filter(&self) -> LevelFilter {
        match self {
            LogLevel::Trace => LevelFilter::TRACE,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Error | LogLevel::Critical => LevelFilter::ERROR,
        }
    }
}

/// Install the global fmt subscriber at the configured level.
///
/// `RUST_LOG` directives are honored on top of the default. Returns false if a
/// subscriber was already installed, which leaves the existing one in place.
pub fn init(level: LogLevel) -> bool {
    let filter = EnvFilter::builder()
        .with_default_directive(level.as_filter().into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .is_ok()
}
