//! # Combat Rules
//!
//! The actor model the slowdown system works against: actors, their skills,
//! equipped weapons and selected spells, plus the traits that form the seam
//! with the host engine.
//!
//! This crate holds no slowdown logic. `WorldState` is an in-memory host used
//! by tests and tools; a real engine binding implements the same traits.

pub mod entities;
pub mod host;
pub mod mechanics;
pub mod world_state;

pub use entities::*;
pub use host::*;
pub use mechanics::*;
pub use world_state::*;
