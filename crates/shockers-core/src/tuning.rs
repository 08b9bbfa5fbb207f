//! Gameplay tuning loaded at match start.
//!
//! Every field defaults to the matching constant in [`crate::constants`],
//! so a tuning file only needs the values it overrides.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::*;

/// Failure to load or validate a tuning file.
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid tuning value `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Tunable gameplay parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // --- Map ---
    pub map_size: f64,
    pub map_edge_margin: f64,
    pub bullet_ceiling: f64,

    // --- Player ---
    pub player_move_speed: f64,
    pub player_jump_speed: f64,
    pub gravity: f64,
    pub player_hit_radius: f64,

    // --- Bots ---
    pub bot_speed_base: f64,
    pub bot_speed_max: f64,
    pub bot_ai_refresh_secs: f64,
    pub bot_fire_rate_base: f64,
    pub bot_fire_rate_bonus: f64,
    pub bot_bullet_speed: f64,
    pub bot_bullet_damage: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            map_size: MAP_SIZE,
            map_edge_margin: MAP_EDGE_MARGIN,
            bullet_ceiling: BULLET_CEILING,
            player_move_speed: PLAYER_MOVE_SPEED,
            player_jump_speed: PLAYER_JUMP_SPEED,
            gravity: GRAVITY,
            player_hit_radius: PLAYER_HIT_RADIUS,
            bot_speed_base: BOT_SPEED_BASE,
            bot_speed_max: BOT_SPEED_MAX,
            bot_ai_refresh_secs: BOT_AI_REFRESH_SECS,
            bot_fire_rate_base: BOT_FIRE_RATE_BASE,
            bot_fire_rate_bonus: BOT_FIRE_RATE_BONUS,
            bot_bullet_speed: BOT_BULLET_SPEED,
            bot_bullet_damage: BOT_BULLET_DAMAGE,
        }
    }
}

impl Tuning {
    /// Parse and validate a JSON tuning document.
    pub fn from_json_str(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Read, parse and validate a JSON tuning file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Half-extent of the square players and bots are clamped to.
    pub fn play_area_half_extent(&self) -> f64 {
        self.map_size - self.map_edge_margin
    }

    /// Reject values the simulation cannot run with.
    pub fn validate(&self) -> Result<(), TuningError> {
        let positive = [
            ("map_size", self.map_size),
            ("bullet_ceiling", self.bullet_ceiling),
            ("player_move_speed", self.player_move_speed),
            ("gravity", self.gravity),
            ("player_hit_radius", self.player_hit_radius),
            ("bot_ai_refresh_secs", self.bot_ai_refresh_secs),
            ("bot_bullet_speed", self.bot_bullet_speed),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(TuningError::Invalid {
                    field,
                    reason: format!("must be a positive number, got {value}"),
                });
            }
        }

        let non_negative = [
            ("map_edge_margin", self.map_edge_margin),
            ("player_jump_speed", self.player_jump_speed),
            ("bot_speed_base", self.bot_speed_base),
            ("bot_fire_rate_base", self.bot_fire_rate_base),
            ("bot_fire_rate_bonus", self.bot_fire_rate_bonus),
        ];
        for (field, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(TuningError::Invalid {
                    field,
                    reason: format!("must be zero or positive, got {value}"),
                });
            }
        }

        if self.play_area_half_extent() <= 0.0 {
            return Err(TuningError::Invalid {
                field: "map_edge_margin",
                reason: format!(
                    "margin {} leaves no play area on a map of size {}",
                    self.map_edge_margin, self.map_size
                ),
            });
        }
        if !(self.bot_speed_max.is_finite() && self.bot_speed_max >= self.bot_speed_base) {
            return Err(TuningError::Invalid {
                field: "bot_speed_max",
                reason: format!(
                    "must be at least bot_speed_base ({}), got {}",
                    self.bot_speed_base, self.bot_speed_max
                ),
            });
        }
        if self.bot_bullet_damage > MAX_HEALTH {
            return Err(TuningError::Invalid {
                field: "bot_bullet_damage",
                reason: format!("must not exceed {MAX_HEALTH}"),
            });
        }
        Ok(())
    }
}
