//! System for handling entities stuck to other entities.
//!
//! Updates the position of entities with the [`StuckTo`] component to follow
//! their target entity's position. Runs after the physics step so a held
//! item sits on the player's final position for the tick.
//!
//! # Related
//!
//! - [`StuckTo`](crate::components::stuckto::StuckTo) – the attachment component
//! - [`Player`](crate::components::player::Player) – its facing mirrors the offset

use bevy_ecs::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::components::stuckto::StuckTo;

/// Updates positions of entities with `StuckTo` to follow their targets.
///
/// For each entity with a `StuckTo` component:
/// - Gets the target entity's `MapPosition`
/// - Mirrors the offset by the target's facing when it is a [`Player`]
/// - Writes target position plus offset
pub fn stuck_to_entity_system(
    mut followers: Query<(&StuckTo, &mut MapPosition)>,
    targets: Query<(&MapPosition, Option<&Player>), Without<StuckTo>>,
) {
    for (stuck_to, mut follower_pos) in followers.iter_mut() {
        if let Ok((target_pos, player)) = targets.get(stuck_to.target) {
            let facing_sign = player.map(|p| p.facing.sign()).unwrap_or(1.0);
            follower_pos.pos = target_pos.pos + stuck_to.resolved_offset(facing_sign);
        }
    }
}
