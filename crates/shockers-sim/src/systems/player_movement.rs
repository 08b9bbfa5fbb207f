//! Player movement: WASD walking relative to the camera yaw, plus the
//! jump/gravity integrator.

use glam::DVec3;
use hecs::World;

use shockers_core::components::{Look, PlayerBody};
use shockers_core::constants::PLAYER_EYE_HEIGHT;
use shockers_core::enums::Key;
use shockers_core::tuning::Tuning;
use shockers_core::types::{rotate_about_up, Position};

use crate::match_state::InputState;

/// Ground-plane intent from the held keys, before normalisation.
pub fn movement_intent(input: &InputState) -> DVec3 {
    let held = |key: Key| if input.is_held(key) { 1.0 } else { 0.0 };
    DVec3::new(
        held(Key::D) - held(Key::A),
        0.0,
        held(Key::S) - held(Key::W),
    )
}

/// Move the player for one tick. Consumes any pending jump request.
pub fn run(
    world: &mut World,
    player: hecs::Entity,
    input: &mut InputState,
    tuning: &Tuning,
    dt: f64,
) {
    let jump_requested = std::mem::take(&mut input.jump_requested);
    let intent = movement_intent(input);

    let Ok((pos, look, body)) =
        world.query_one_mut::<(&mut Position, &Look, &mut PlayerBody)>(player)
    else {
        return;
    };

    // Walk
    if intent != DVec3::ZERO {
        let step = rotate_about_up(intent.normalize() * tuning.player_move_speed * dt, look.yaw);
        pos.0.x += step.x;
        pos.0.z += step.z;
    }
    pos.clamp_horizontal(tuning.play_area_half_extent());

    // Jump
    if jump_requested && body.on_ground {
        body.vertical_velocity = tuning.player_jump_speed;
        body.on_ground = false;
    }

    // Gravity
    if !body.on_ground || body.vertical_velocity > 0.0 {
        body.vertical_velocity -= tuning.gravity * dt;
        pos.0.y += body.vertical_velocity * dt;

        if pos.0.y <= PLAYER_EYE_HEIGHT {
            pos.0.y = PLAYER_EYE_HEIGHT;
            body.vertical_velocity = 0.0;
            body.on_ground = true;
        }
    }
}
