//! # Slowdown Core
//!
//! Slows actors down while they draw a ranged weapon or hold a spell ready,
//! scaled by skill, and restores them exactly when the action ends.
//!
//! ## Core Components
//!
//! - **magnitude**: skill-tier lookup of speed multipliers
//! - **slowdown**: per-actor state machine; the only code that changes speed
//! - **events**: classification of raw animation tags
//! - **dispatcher**: gating policy and event-to-transition routing
//! - **system**: startup wiring of the above
//!
//! ## Design Philosophy
//!
//! - **Incremental**: speed is only ever nudged by a delta, so other systems'
//!   modifiers survive
//! - **Event-Driven**: the core reacts to host events and never drives the loop
//! - **Total**: invalid references and unknown events are no-ops, never errors

pub mod config;
pub mod dispatcher;
pub mod effects;
pub mod error;
pub mod events;
pub mod logging;
pub mod magnitude;
pub mod skill;
pub mod slowdown;
pub mod system;

pub use config::*;
pub use dispatcher::*;
pub use effects::*;
pub use error::*;
pub use events::*;
pub use magnitude::*;
pub use slowdown::*;
pub use system::*;
