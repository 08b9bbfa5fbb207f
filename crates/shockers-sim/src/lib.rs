//! Match simulation for SHOCKERS.
//!
//! Owns the hecs ECS world, runs systems at a fixed tick rate,
//! and produces `MatchSnapshot`s for the renderer.

pub mod engine;
pub mod match_state;
pub mod systems;
pub mod world_setup;

pub use engine::{SimConfig, SimulationEngine};
pub use shockers_core as core;
