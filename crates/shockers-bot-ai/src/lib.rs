//! Bot AI for SHOCKERS.
//!
//! Implements the bot steering refresh state machine and the
//! distance-scaled fire decision.

pub mod fire;
pub mod fsm;

pub use shockers_core as core;
