//! Cleanup system: removes spent bullets.

use hecs::{Entity, World};

use shockers_core::components::{Bullet, Spent};

/// Despawn every bullet marked `Spent` this tick.
/// Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, (_bullet, _spent)) in world.query_mut::<(&Bullet, &Spent)>() {
        despawn_buffer.push(entity);
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
