//! Match snapshot: the complete visible state handed to the renderer each tick.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::GameEvent;
use crate::types::SimTime;

/// Complete match state produced after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchSnapshot {
    pub time: SimTime,
    pub phase: MatchPhase,
    /// Countdown steps left; 0 once the match is live.
    pub countdown: u32,
    /// Centre-screen message ("Get Ready!", "2", "GO!"), if any.
    pub banner: Option<String>,
    pub player: PlayerView,
    pub bots: Vec<BotView>,
    pub bullets: Vec<BulletView>,
    pub events: Vec<GameEvent>,
    /// Set once the match has ended.
    pub result: Option<MatchResult>,
}

/// Player state for the HUD and camera.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerView {
    /// Eye (camera) position.
    pub position: DVec3,
    pub yaw: f64,
    pub pitch: f64,
    pub health: u32,
    pub score: u32,
    pub weapon: WeaponKind,
    pub on_ground: bool,
    /// Red damage overlay is showing.
    pub damage_flash: bool,
    /// Viewmodel kick of the equipped weapon while its recoil pose is
    /// showing; 0 otherwise.
    pub recoil: f64,
}

/// A bot as drawn by the scene.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotView {
    pub id: u32,
    pub position: DVec3,
    pub color: String,
    pub size: f64,
    pub health: u32,
    /// False once health reaches 0; the renderer hides the bot.
    pub alive: bool,
    pub look_at: DVec3,
}

/// A bullet in flight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulletView {
    pub position: DVec3,
    pub owner: BulletOwner,
}

/// The outward match-end signal: `(won, score)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub won: bool,
    pub score: u32,
    pub reason: EndReason,
}
