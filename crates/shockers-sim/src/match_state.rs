//! Match lifecycle data: countdown, pause, end state and cosmetic timers.
//!
//! Stored in `SimulationEngine`, NOT as ECS entities. Every timer here is
//! advanced by simulation time, so a paused match freezes them too.

use std::collections::HashSet;

use shockers_core::constants::*;
use shockers_core::enums::{EndReason, Key, MatchPhase};
use shockers_core::events::GameEvent;
use shockers_core::state::MatchResult;

/// Slack for countdown comparisons after repeated `dt` subtraction.
pub(crate) const TIMER_EPSILON: f64 = 1e-9;

/// Top-level match state owned by the engine.
#[derive(Debug, Clone)]
pub struct MatchState {
    pub phase: MatchPhase,
    /// Countdown steps left before the match goes live.
    pub countdown: u32,
    /// Seconds left in the current countdown step.
    pub countdown_step_remaining_secs: f64,
    /// Centre-screen message.
    pub banner: Option<String>,
    /// Seconds before the "GO!" banner clears. Only used once Active.
    pub banner_remaining_secs: f64,
    pub damage_flash_remaining_secs: f64,
    pub recoil_remaining_secs: f64,
    /// Set exactly once, when the match ends.
    pub result: Option<MatchResult>,
}

impl Default for MatchState {
    fn default() -> Self {
        Self {
            phase: MatchPhase::Countdown,
            countdown: COUNTDOWN_STEPS,
            countdown_step_remaining_secs: COUNTDOWN_STEP_SECS,
            banner: Some(READY_BANNER.to_string()),
            banner_remaining_secs: 0.0,
            damage_flash_remaining_secs: 0.0,
            recoil_remaining_secs: 0.0,
            result: None,
        }
    }
}

impl MatchState {
    /// Advance the countdown by `dt`. Returns the new step count when a
    /// step elapses; `Some(0)` means the match should go live.
    pub fn advance_countdown(&mut self, dt: f64) -> Option<u32> {
        if self.phase != MatchPhase::Countdown || self.countdown == 0 {
            return None;
        }

        self.countdown_step_remaining_secs -= dt;
        if self.countdown_step_remaining_secs > TIMER_EPSILON {
            return None;
        }

        self.countdown -= 1;
        self.countdown_step_remaining_secs = COUNTDOWN_STEP_SECS;
        self.banner = Some(if self.countdown > 0 {
            self.countdown.to_string()
        } else {
            GO_BANNER.to_string()
        });
        Some(self.countdown)
    }

    /// Flip from Countdown to Active and start the "GO!" banner timer.
    pub fn go_live(&mut self) {
        self.phase = MatchPhase::Active;
        self.banner_remaining_secs = GO_BANNER_SECS;
    }

    /// Advance the cosmetic timers by one tick.
    pub fn tick_timers(&mut self, dt: f64) {
        if self.banner.is_some() {
            self.banner_remaining_secs -= dt;
            if self.banner_remaining_secs <= TIMER_EPSILON {
                self.banner = None;
                self.banner_remaining_secs = 0.0;
            }
        }
        self.damage_flash_remaining_secs = (self.damage_flash_remaining_secs - dt).max(0.0);
        self.recoil_remaining_secs = (self.recoil_remaining_secs - dt).max(0.0);
    }

    pub fn start_damage_flash(&mut self) {
        self.damage_flash_remaining_secs = DAMAGE_FLASH_SECS;
    }

    pub fn start_recoil(&mut self) {
        self.recoil_remaining_secs = RECOIL_SECS;
    }

    pub fn is_over(&self) -> bool {
        self.phase == MatchPhase::Ended
    }

    /// Move to Ended. Returns the `MatchEnded` event the first time only.
    pub fn end(&mut self, reason: EndReason, score: u32) -> Option<GameEvent> {
        if self.result.is_some() {
            return None;
        }

        let outcome = reason.outcome();
        self.phase = MatchPhase::Ended;
        self.result = Some(MatchResult {
            won: outcome == shockers_core::enums::MatchOutcome::Won,
            score,
            reason,
        });
        Some(GameEvent::MatchEnded {
            outcome,
            reason,
            score,
        })
    }
}

/// Keyboard state carried between ticks.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    pub held: HashSet<Key>,
    /// Space pressed since the last movement step.
    pub jump_requested: bool,
}

impl InputState {
    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }
}
