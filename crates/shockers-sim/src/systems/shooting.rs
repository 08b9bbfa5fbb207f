//! Player fire: spawns a bullet from just in front of the camera along the
//! look direction, gated by the equipped weapon's cooldown.

use hecs::{Entity, World};
use tracing::debug;

use shockers_core::components::{Look, Weapon};
use shockers_core::constants::PLAYER_MUZZLE_OFFSET;
use shockers_core::enums::BulletOwner;
use shockers_core::events::GameEvent;
use shockers_core::types::{look_direction, Position};
use shockers_core::weapons::get_profile;

use crate::match_state::{MatchState, TIMER_EPSILON};
use crate::world_setup;

/// Fire the player's weapon if it is ready. Returns true when a bullet
/// was spawned.
pub fn try_fire(
    world: &mut World,
    player: Entity,
    match_state: &mut MatchState,
    next_bullet_sequence: &mut u64,
    events: &mut Vec<GameEvent>,
) -> bool {
    let Ok((pos, look, weapon)) = world.query_one_mut::<(&Position, &Look, &mut Weapon)>(player)
    else {
        return false;
    };

    if weapon.cooldown_remaining_secs > TIMER_EPSILON {
        return false;
    }

    let profile = get_profile(weapon.kind);
    weapon.cooldown_remaining_secs = profile.fire_interval_secs;

    let direction = look_direction(look.yaw, look.pitch);
    let origin = pos.0 + direction * PLAYER_MUZZLE_OFFSET;
    let kind = weapon.kind;

    world_setup::spawn_bullet(
        world,
        next_bullet_sequence,
        BulletOwner::Player,
        origin,
        direction,
        profile.bullet_speed,
        profile.damage,
    );
    match_state.start_recoil();
    events.push(GameEvent::ShotFired {
        owner: BulletOwner::Player,
    });
    debug!(weapon = %kind, "player fired");
    true
}
