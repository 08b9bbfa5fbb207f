//! Entity spawn factories for setting up the match world.
//!
//! Creates the player, the bot squad and bullets with the
//! appropriate component bundles.

use glam::DVec3;
use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use shockers_core::components::*;
use shockers_core::constants::*;
use shockers_core::enums::*;
use shockers_core::types::{Position, Velocity};

/// Spawn the player at the map centre, standing, full health.
pub fn spawn_player(world: &mut World, weapon: WeaponKind) -> hecs::Entity {
    world.spawn((
        Player {
            health: MAX_HEALTH,
            score: 0,
        },
        Position::new(0.0, PLAYER_EYE_HEIGHT, 0.0),
        Look::default(),
        PlayerBody {
            vertical_velocity: 0.0,
            on_ground: true,
        },
        Weapon {
            kind: weapon,
            cooldown_remaining_secs: 0.0,
        },
    ))
}

/// Spawn the bot squad in a ring around the origin.
pub fn spawn_bots(world: &mut World, rng: &mut ChaCha8Rng) {
    for (id, color) in BOT_COLORS.iter().enumerate().take(BOT_COUNT) {
        let angle: f64 = rng.gen_range(0.0..std::f64::consts::TAU);
        let distance: f64 = rng.gen_range(BOT_SPAWN_DISTANCE_MIN..BOT_SPAWN_DISTANCE_MAX);
        let position = Position::new(
            angle.cos() * distance,
            BOT_SPAWN_HEIGHT,
            angle.sin() * distance,
        );
        spawn_bot(world, id as u32, color, position);
    }
}

/// Spawn a single bot. Its first steering refresh happens on the next
/// Active tick.
pub fn spawn_bot(world: &mut World, id: u32, color: &str, position: Position) -> hecs::Entity {
    world.spawn((
        Bot {
            id,
            color: color.to_string(),
            size: BOT_SIZE,
        },
        Health(MAX_HEALTH),
        position,
        Velocity::default(),
        BotBrain {
            refresh_remaining_secs: 0.0,
            look_at: DVec3::new(0.0, PLAYER_EYE_HEIGHT, 0.0),
        },
    ))
}

/// Spawn a bullet. `direction` must be a unit vector.
pub fn spawn_bullet(
    world: &mut World,
    next_sequence: &mut u64,
    owner: BulletOwner,
    origin: DVec3,
    direction: DVec3,
    speed: f64,
    damage: u32,
) -> hecs::Entity {
    let sequence = *next_sequence;
    *next_sequence += 1;

    world.spawn((
        Bullet {
            owner,
            direction,
            speed,
            damage,
            sequence,
        },
        Position(origin),
    ))
}
