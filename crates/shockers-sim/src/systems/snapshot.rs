//! Snapshot system: queries the ECS world and builds a `MatchSnapshot`.
//!
//! Read-only: it never modifies the world.

use hecs::{Entity, World};

use shockers_core::components::*;
use shockers_core::events::GameEvent;
use shockers_core::state::*;
use shockers_core::types::{Position, SimTime};
use shockers_core::weapons::get_profile;

use crate::match_state::{MatchState, TIMER_EPSILON};

/// Build a complete snapshot from the current world and match state.
pub fn build_snapshot(
    world: &World,
    player: Entity,
    time: &SimTime,
    match_state: &MatchState,
    events: Vec<GameEvent>,
) -> MatchSnapshot {
    MatchSnapshot {
        time: *time,
        phase: match_state.phase,
        countdown: match_state.countdown,
        banner: match_state.banner.clone(),
        player: build_player(world, player, match_state),
        bots: build_bots(world),
        bullets: build_bullets(world),
        events,
        result: match_state.result,
    }
}

fn build_player(world: &World, player: Entity, match_state: &MatchState) -> PlayerView {
    let Ok(mut query) = world.query_one::<(&Player, &Position, &Look, &PlayerBody, &Weapon)>(player)
    else {
        return PlayerView::default();
    };
    let Some((stats, pos, look, body, weapon)) = query.get() else {
        return PlayerView::default();
    };

    PlayerView {
        position: pos.0,
        yaw: look.yaw,
        pitch: look.pitch,
        health: stats.health,
        score: stats.score,
        weapon: weapon.kind,
        on_ground: body.on_ground,
        damage_flash: match_state.damage_flash_remaining_secs > TIMER_EPSILON,
        recoil: if match_state.recoil_remaining_secs > TIMER_EPSILON {
            get_profile(weapon.kind).recoil
        } else {
            0.0
        },
    }
}

/// Bots in id order.
fn build_bots(world: &World) -> Vec<BotView> {
    let mut bots: Vec<BotView> = world
        .query::<(&Bot, &Health, &Position, &BotBrain)>()
        .iter()
        .map(|(_, (bot, health, pos, brain))| BotView {
            id: bot.id,
            position: pos.0,
            color: bot.color.clone(),
            size: bot.size,
            health: health.0,
            alive: health.0 > 0,
            look_at: brain.look_at,
        })
        .collect();
    bots.sort_by_key(|b| b.id);
    bots
}

/// Live bullets in spawn order.
fn build_bullets(world: &World) -> Vec<BulletView> {
    let mut bullets: Vec<(u64, BulletView)> = world
        .query::<(&Bullet, &Position, Option<&Spent>)>()
        .iter()
        .filter(|(_, (_, _, spent))| spent.is_none())
        .map(|(_, (bullet, pos, _))| {
            (
                bullet.sequence,
                BulletView {
                    position: pos.0,
                    owner: bullet.owner,
                },
            )
        })
        .collect();
    bullets.sort_by_key(|(sequence, _)| *sequence);
    bullets.into_iter().map(|(_, view)| view).collect()
}
