//! Player commands sent from the presentation layer to the simulation.
//!
//! Commands are queued and applied at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::enums::*;

/// All possible player actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Keyboard ---
    /// Key pressed. `Escape` toggles pause, `Space` jumps.
    KeyDown { key: Key },
    /// Key released.
    KeyUp { key: Key },

    // --- Pointer ---
    /// Absolute camera orientation from pointer-lock controls (radians).
    Look { yaw: f64, pitch: f64 },
    /// Mouse button pressed: fire the equipped weapon.
    Fire,

    // --- Match control ---
    /// Open or close the pause menu.
    TogglePause,
    /// "Exit game" from the pause menu.
    ExitMatch,
}
