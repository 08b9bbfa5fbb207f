//! Bot steering state machine.
//!
//! Pure functions that decide when a bot re-plans its heading and what
//! velocity it picks. No ECS dependency; operates on plain data.
//!
//! A bot is either cruising along its last velocity or due for a refresh.
//! The refresh countdown runs on simulation time, so the same inputs always
//! produce the same schedule.

use glam::DVec3;
use rand::Rng;

use shockers_core::constants::*;
use shockers_core::tuning::Tuning;

/// Slack for countdown comparisons after repeated `dt` subtraction.
const TIMER_EPSILON: f64 = 1e-9;

/// Steering state derived from the refresh countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SteeringState {
    /// Keep moving along the current velocity.
    Cruising,
    /// Pick a new velocity this tick.
    RefreshDue,
}

/// Input to the steering FSM for a single bot.
pub struct BotContext {
    pub position: DVec3,
    pub velocity: DVec3,
    pub player_position: DVec3,
    pub refresh_remaining_secs: f64,
    pub dt: f64,
}

/// Output from the steering FSM.
pub struct BotUpdate {
    pub new_velocity: DVec3,
    pub refresh_remaining_secs: f64,
    pub refreshed: bool,
}

/// Classify the bot after this tick's countdown step.
pub fn steering_state(refresh_remaining_secs: f64, dt: f64) -> SteeringState {
    if refresh_remaining_secs - dt <= TIMER_EPSILON {
        SteeringState::RefreshDue
    } else {
        SteeringState::Cruising
    }
}

/// Advance the countdown by one tick and re-plan the velocity when it expires.
pub fn evaluate<R: Rng + ?Sized>(ctx: &BotContext, tuning: &Tuning, rng: &mut R) -> BotUpdate {
    match steering_state(ctx.refresh_remaining_secs, ctx.dt) {
        SteeringState::Cruising => BotUpdate {
            new_velocity: ctx.velocity,
            refresh_remaining_secs: ctx.refresh_remaining_secs - ctx.dt,
            refreshed: false,
        },
        SteeringState::RefreshDue => {
            let jitter = DVec3::new(
                (rng.gen::<f64>() - 0.5) * BOT_STEER_JITTER,
                0.0,
                (rng.gen::<f64>() - 0.5) * BOT_STEER_JITTER,
            );
            BotUpdate {
                new_velocity: steer_velocity(ctx.position, ctx.player_position, jitter, tuning),
                refresh_remaining_secs: tuning.bot_ai_refresh_secs,
                refreshed: true,
            }
        }
    }
}

/// Blend the heading toward the player with `jitter` and scale by the
/// distance-dependent speed. The heading stays on the ground plane; the
/// speed ramp uses the straight-line distance to the player's eye.
pub fn steer_velocity(position: DVec3, player: DVec3, jitter: DVec3, tuning: &Tuning) -> DVec3 {
    let distance = position.distance(player);
    let mut to_player = player - position;
    to_player.y = 0.0;

    let heading = (to_player.normalize_or_zero() * BOT_STEER_PLAYER_WEIGHT
        + DVec3::new(jitter.x, 0.0, jitter.z))
    .normalize_or_zero();

    heading * speed_for_distance(distance, tuning)
}

/// Bots slow down as they close in on the player.
pub fn speed_for_distance(distance: f64, tuning: &Tuning) -> f64 {
    let ramp = (distance / BOT_SPEED_RAMP_DISTANCE).min(BOT_SPEED_RAMP_CAP);
    tuning.bot_speed_base + ramp * (tuning.bot_speed_max - tuning.bot_speed_base)
}
