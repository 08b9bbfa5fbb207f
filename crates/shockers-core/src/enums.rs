//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Top-level match phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchPhase {
    /// 3-2-1 countdown before the bots spawn.
    #[default]
    Countdown,
    /// Movement, bullets and bot AI all run.
    Active,
    /// Escape menu open; nothing advances.
    Paused,
    /// Terminal. See `MatchOutcome`.
    Ended,
}

/// How an ended match finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchOutcome {
    Won,
    Lost,
}

/// Why a match ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndReason {
    /// Every bot reached 0 health.
    AllBotsEliminated,
    /// The player reached 0 health.
    PlayerKilled,
    /// The player chose "exit" from the pause menu.
    PlayerExited,
}

impl EndReason {
    pub fn outcome(self) -> MatchOutcome {
        match self {
            EndReason::AllBotsEliminated => MatchOutcome::Won,
            EndReason::PlayerKilled | EndReason::PlayerExited => MatchOutcome::Lost,
        }
    }
}

/// Who fired a bullet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BulletOwner {
    Player,
    Bot,
}

/// Player loadout selectable from the menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeaponKind {
    /// Balanced assault rifle.
    #[default]
    Eggk47,
    /// Fast-firing, low damage.
    Scrambler,
    /// Slow, hard-hitting rifle.
    FreeRanger,
}

/// Keys the match listens to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    W,
    A,
    S,
    D,
    Space,
    Escape,
}
