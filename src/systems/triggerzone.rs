//! Overlap trigger system.
//!
//! Once per running tick, tests the player's bounds against every
//! [`TriggerZone`] whose precondition holds. The qualifying zone with the
//! lowest priority opens its overlay; at most one overlay opens per tick.
use bevy_ecs::prelude::*;
use log::debug;

use crate::components::boxcollider::BoxCollider;
use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::components::triggerzone::TriggerZone;
use crate::events::overlay::OpenOverlayEvent;
use crate::resources::carryslot::CarrySlot;
use crate::resources::overlay::OverlayState;
use crate::resources::worldtime::WorldTime;

pub fn trigger_zone_system(
    time: Res<WorldTime>,
    slot: Res<CarrySlot>,
    overlay: Res<OverlayState>,
    player: Query<(&MapPosition, &BoxCollider), With<Player>>,
    zones: Query<(&TriggerZone, &MapPosition, &BoxCollider)>,
    mut commands: Commands,
) {
    if !overlay.can_trigger(time.elapsed) {
        return;
    }
    let Ok((player_pos, player_collider)) = player.single() else {
        return;
    };
    let player_bounds = player_collider.aabb(player_pos.pos);

    let fired = zones
        .iter()
        .filter(|(zone, _, _)| zone.condition.holds(*slot))
        .filter(|(zone, pos, collider)| {
            collider
                .aabb(pos.pos)
                .inflate(zone.inflate, zone.inflate)
                .intersects(&player_bounds)
        })
        .min_by_key(|(zone, _, _)| zone.priority);

    if let Some((zone, _, _)) = fired {
        let mode = zone.overlay_mode(overlay.is_unlocked());
        debug!("trigger zone {:?} fired -> {}", zone.kind, mode.as_str());
        commands.trigger(OpenOverlayEvent { mode });
    }
}
