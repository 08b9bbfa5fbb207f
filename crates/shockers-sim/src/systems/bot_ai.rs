//! Bot AI system: runs the steering FSM for every live bot. On a refresh
//! tick the bot only re-plans; on other ticks it may fire, then moves.
//!
//! Bots are visited in id order so RNG draws happen in the same sequence
//! on every run with the same seed.

use glam::DVec3;
use hecs::{Entity, World};
use rand_chacha::ChaCha8Rng;

use shockers_bot_ai::fire;
use shockers_bot_ai::fsm::{self, BotContext};
use shockers_core::components::{Bot, BotBrain, Health};
use shockers_core::enums::BulletOwner;
use shockers_core::events::GameEvent;
use shockers_core::tuning::Tuning;
use shockers_core::types::{Position, Velocity};

use crate::world_setup;

/// Run bot AI for one tick.
pub fn run(
    world: &mut World,
    player_position: DVec3,
    tuning: &Tuning,
    rng: &mut ChaCha8Rng,
    next_bullet_sequence: &mut u64,
    events: &mut Vec<GameEvent>,
    dt: f64,
) {
    let mut bots: Vec<(u32, Entity)> = world
        .query_mut::<(&Bot, &Health)>()
        .into_iter()
        .filter(|(_, (_, health))| health.0 > 0)
        .map(|(entity, (bot, _))| (bot.id, entity))
        .collect();
    bots.sort_by_key(|(id, _)| *id);

    let half_extent = tuning.play_area_half_extent();
    let mut orders = Vec::new();

    for (_, entity) in bots {
        let Ok((bot, pos, vel, brain)) = world
            .query_one_mut::<(&Bot, &mut Position, &mut Velocity, &mut BotBrain)>(entity)
        else {
            continue;
        };

        let ctx = BotContext {
            position: pos.0,
            velocity: vel.0,
            player_position,
            refresh_remaining_secs: brain.refresh_remaining_secs,
            dt,
        };
        let update = fsm::evaluate(&ctx, tuning, rng);
        vel.0 = update.new_velocity;
        brain.refresh_remaining_secs = update.refresh_remaining_secs;
        brain.look_at = player_position;

        // A re-plan takes the whole tick: no movement, no shot.
        if update.refreshed {
            continue;
        }

        // Shots leave from where the bot stood at the start of the tick.
        if let Some(order) = fire::decide_fire(pos.0, bot.size, player_position, tuning, dt, rng) {
            orders.push(order);
        }

        pos.0 += vel.0 * dt;
        pos.clamp_horizontal(half_extent);
    }

    for order in orders {
        world_setup::spawn_bullet(
            world,
            next_bullet_sequence,
            BulletOwner::Bot,
            order.origin,
            order.direction,
            tuning.bot_bullet_speed,
            tuning.bot_bullet_damage,
        );
        events.push(GameEvent::ShotFired {
            owner: BulletOwner::Bot,
        });
    }
}
