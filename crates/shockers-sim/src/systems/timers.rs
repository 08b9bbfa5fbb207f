//! Countdown timers that run on simulation time: banner, damage flash,
//! recoil and the weapon cooldown.

use hecs::{Entity, World};

use shockers_core::components::Weapon;

use crate::match_state::MatchState;

pub fn run(world: &mut World, player: Entity, match_state: &mut MatchState, dt: f64) {
    match_state.tick_timers(dt);

    if let Ok(weapon) = world.query_one_mut::<&mut Weapon>(player) {
        weapon.cooldown_remaining_secs = (weapon.cooldown_remaining_secs - dt).max(0.0);
    }
}
