//! Bullet advance and collision.
//!
//! Bullets move along their direction at a fixed speed. Hits are tested
//! against the segment travelled this tick, so a fast bullet cannot skip
//! over a target between ticks. A player bullet damages every live bot its
//! path touches this tick, in id order; bot bullets hit the player. A
//! bullet is spent on the tick it hits or when it leaves the map volume.

use glam::DVec3;
use hecs::{Entity, World};
use tracing::debug;

use shockers_core::components::{Bot, Bullet, Health, Player, Spent};
use shockers_core::enums::{BulletOwner, EndReason};
use shockers_core::events::GameEvent;
use shockers_core::tuning::Tuning;
use shockers_core::types::Position;

use crate::match_state::MatchState;

/// Fraction along `start -> end` where the segment first comes within
/// `radius` of `center`, measured at the closest approach.
pub fn segment_hits_sphere(start: DVec3, end: DVec3, center: DVec3, radius: f64) -> Option<f64> {
    let travel = end - start;
    let length_sq = travel.length_squared();
    let t = if length_sq > 0.0 {
        ((center - start).dot(travel) / length_sq).clamp(0.0, 1.0)
    } else {
        0.0
    };

    let closest = start + travel * t;
    (closest.distance(center) < radius).then_some(t)
}

/// True when `pos` has left the volume bullets may occupy.
pub fn out_of_bounds(pos: DVec3, tuning: &Tuning) -> bool {
    pos.x.abs() > tuning.map_size
        || pos.z.abs() > tuning.map_size
        || pos.y < 0.0
        || pos.y > tuning.bullet_ceiling
}

struct BotTarget {
    entity: Entity,
    id: u32,
    center: DVec3,
    radius: f64,
    health: u32,
}

/// Advance every bullet, resolve hits, and mark spent bullets.
pub fn run(
    world: &mut World,
    player: Entity,
    match_state: &mut MatchState,
    tuning: &Tuning,
    events: &mut Vec<GameEvent>,
    dt: f64,
) {
    let mut bullets: Vec<(Entity, Bullet, DVec3)> = world
        .query_mut::<(&Bullet, &Position, Option<&Spent>)>()
        .into_iter()
        .filter(|(_, (_, _, spent))| spent.is_none())
        .map(|(entity, (bullet, pos, _))| (entity, *bullet, pos.0))
        .collect();
    bullets.sort_by_key(|(_, bullet, _)| bullet.sequence);

    let mut bots: Vec<BotTarget> = world
        .query_mut::<(&Bot, &Health, &Position)>()
        .into_iter()
        .map(|(entity, (bot, health, pos))| BotTarget {
            entity,
            id: bot.id,
            center: pos.0,
            radius: bot.size,
            health: health.0,
        })
        .collect();
    bots.sort_by_key(|b| b.id);

    let Ok((mut player_stats, player_pos)) = world
        .query_one_mut::<(&Player, &Position)>(player)
        .map(|(stats, pos)| (*stats, pos.0))
    else {
        return;
    };

    let mut moved: Vec<(Entity, DVec3)> = Vec::with_capacity(bullets.len());
    let mut spent: Vec<Entity> = Vec::new();

    for (entity, bullet, start) in bullets {
        if match_state.is_over() {
            break;
        }

        let end = start + bullet.direction * bullet.speed * dt;
        moved.push((entity, end));

        let hit = match bullet.owner {
            BulletOwner::Player => {
                let mut hit = false;
                let mut eliminated = false;

                for bot in bots.iter_mut().filter(|b| b.health > 0) {
                    if segment_hits_sphere(start, end, bot.center, bot.radius).is_none() {
                        continue;
                    }
                    hit = true;
                    bot.health = bot.health.saturating_sub(bullet.damage);
                    events.push(GameEvent::BotHit {
                        bot_id: bot.id,
                        health: bot.health,
                    });

                    if bot.health == 0 {
                        player_stats.score += 1;
                        eliminated = true;
                        events.push(GameEvent::BotEliminated { bot_id: bot.id });
                        debug!(bot_id = bot.id, score = player_stats.score, "bot eliminated");
                    }
                }

                if eliminated && bots.iter().all(|b| b.health == 0) {
                    events.extend(match_state.end(EndReason::AllBotsEliminated, player_stats.score));
                }
                hit
            }
            BulletOwner::Bot => {
                if segment_hits_sphere(start, end, player_pos, tuning.player_hit_radius).is_some() {
                    player_stats.health = player_stats.health.saturating_sub(bullet.damage);
                    match_state.start_damage_flash();
                    events.push(GameEvent::PlayerHit {
                        health: player_stats.health,
                    });

                    if player_stats.health == 0 {
                        events.extend(match_state.end(EndReason::PlayerKilled, player_stats.score));
                    }
                    true
                } else {
                    false
                }
            }
        };

        if hit || out_of_bounds(end, tuning) {
            spent.push(entity);
        }
    }

    // Write back
    for (entity, end) in moved {
        if let Ok(mut pos) = world.get::<&mut Position>(entity) {
            pos.0 = end;
        }
    }
    for bot in &bots {
        if let Ok(mut health) = world.get::<&mut Health>(bot.entity) {
            health.0 = bot.health;
        }
    }
    if let Ok(mut stats) = world.get::<&mut Player>(player) {
        *stats = player_stats;
    }
    for entity in spent {
        let _ = world.insert_one(entity, Spent);
    }
}
