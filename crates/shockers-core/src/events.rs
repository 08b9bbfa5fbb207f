//! Events emitted by the simulation for audio and UI feedback.

use serde::{Deserialize, Serialize};

use crate::enums::*;

/// One-shot notifications produced during a tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A countdown step elapsed; `remaining` is 0 on "GO!".
    CountdownTick { remaining: u32 },
    /// Bots spawned, the match is live.
    MatchStarted,
    /// Escape menu opened.
    Paused,
    /// Escape menu closed.
    Resumed,
    /// A bullet left a muzzle.
    ShotFired { owner: BulletOwner },
    /// A player bullet struck a bot.
    BotHit { bot_id: u32, health: u32 },
    /// A bot dropped to 0 health.
    BotEliminated { bot_id: u32 },
    /// A bot bullet struck the player.
    PlayerHit { health: u32 },
    /// The match reached its terminal state. Emitted exactly once.
    MatchEnded {
        outcome: MatchOutcome,
        reason: EndReason,
        score: u32,
    },
}
