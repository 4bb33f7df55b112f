use bevy_ecs::prelude::*;

use crate::components::bob::Bob;
use crate::components::mapposition::MapPosition;
use crate::resources::worldtime::WorldTime;

/// Move bobbing entities along their scripted vertical oscillation.
pub fn bob_system(time: Res<WorldTime>, mut query: Query<(&Bob, &mut MapPosition)>) {
    for (bob, mut position) in query.iter_mut() {
        position.pos.y = bob.y_at(time.elapsed);
    }
}
