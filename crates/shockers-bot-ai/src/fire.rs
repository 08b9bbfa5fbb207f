//! Bot fire decision.
//!
//! Each tick a live bot rolls against a distance-scaled firing rate and,
//! on success, aims at the player with distance-scaled inaccuracy.

use glam::DVec3;
use rand::Rng;

use shockers_core::constants::*;
use shockers_core::tuning::Tuning;

/// A shot a bot decided to take.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FireOrder {
    /// Spawn point just outside the bot body.
    pub origin: DVec3,
    /// Unit vector of travel.
    pub direction: DVec3,
}

/// Probability of firing during one tick of length `dt`.
pub fn fire_chance(distance: f64, tuning: &Tuning, dt: f64) -> f64 {
    let proximity = 1.0 - (distance / BOT_FIRE_PROXIMITY_RANGE).min(1.0);
    let rate = tuning.bot_fire_rate_base + proximity * tuning.bot_fire_rate_bonus;
    (rate * dt).clamp(0.0, 1.0)
}

/// Direction from `from` to `target`, perturbed per axis by `noise`
/// (each component in `[-0.5, 0.5)`) scaled with distance.
pub fn aim_direction(from: DVec3, target: DVec3, noise: DVec3) -> DVec3 {
    let offset = target - from;
    let distance = offset.length();
    let base = offset.normalize_or_zero();
    let spread = BOT_AIM_SPREAD * (distance / BOT_AIM_SPREAD_DISTANCE);

    let aimed = (base + noise * spread).normalize_or_zero();
    if aimed == DVec3::ZERO {
        base
    } else {
        aimed
    }
}

/// Roll for a shot this tick. Returns `None` most ticks.
pub fn decide_fire<R: Rng + ?Sized>(
    bot_position: DVec3,
    bot_size: f64,
    player_position: DVec3,
    tuning: &Tuning,
    dt: f64,
    rng: &mut R,
) -> Option<FireOrder> {
    let distance = bot_position.distance(player_position);
    if !rng.gen_bool(fire_chance(distance, tuning, dt)) {
        return None;
    }

    let noise = DVec3::new(
        rng.gen::<f64>() - 0.5,
        rng.gen::<f64>() - 0.5,
        rng.gen::<f64>() - 0.5,
    );
    let direction = aim_direction(bot_position, player_position, noise);
    if direction == DVec3::ZERO {
        return None;
    }

    Some(FireOrder {
        origin: bot_position + direction * (bot_size + BOT_MUZZLE_GAP),
        direction,
    })
}
