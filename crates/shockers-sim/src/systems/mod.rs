//! ECS systems that operate on the match world each tick.
//!
//! Systems are plain functions that take `&mut World` (or `&World` for
//! read-only). They do not own state; all state lives in components or
//! in the engine's `MatchState`.

pub mod bot_ai;
pub mod bullets;
pub mod cleanup;
pub mod player_movement;
pub mod shooting;
pub mod snapshot;
pub mod timers;
