//! ECS components for hecs entities.
//!
//! Components are plain data structs with no behaviour.
//! Game logic lives in systems, not components.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::enums::*;

/// Marks the player entity and carries its match counters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Player {
    pub health: u32,
    /// Bots eliminated so far.
    pub score: u32,
}

/// Camera orientation driven by pointer-lock look input (radians).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Look {
    pub yaw: f64,
    pub pitch: f64,
}

/// Vertical jump/gravity state for the player.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlayerBody {
    /// Upward speed (units/s); negative while falling.
    pub vertical_velocity: f64,
    pub on_ground: bool,
}

/// The player's equipped weapon.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Weapon {
    pub kind: WeaponKind,
    /// Seconds until the next shot is allowed.
    pub cooldown_remaining_secs: f64,
}

/// Bot identity and appearance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bot {
    /// Stable id for the match (0..BOT_COUNT).
    pub id: u32,
    pub color: String,
    /// Body radius.
    pub size: f64,
}

/// Bot hit points. 0 means eliminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Health(pub u32);

/// Bot AI state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BotBrain {
    /// Seconds until the next steering refresh.
    pub refresh_remaining_secs: f64,
    /// Point the bot faces; the player's eye position as of this tick.
    pub look_at: DVec3,
}

/// Projectile state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Bullet {
    pub owner: BulletOwner,
    /// Unit vector of travel.
    pub direction: DVec3,
    /// Units per second.
    pub speed: f64,
    pub damage: u32,
    /// Spawn order, used to process bullets deterministically.
    pub sequence: u64,
}

/// Marks a bullet that collided or left the map this tick.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Spent;
