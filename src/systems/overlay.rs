//! Overlay/pause coordinator systems and run conditions.
//!
//! While the world is paused the only gameplay system that runs is
//! [`overlay_escape_system`]; everything else in the tick is gated on
//! [`world_is_running`]. The opacity tweens keep running so fades progress.
use bevy_ecs::prelude::*;
use log::debug;

use crate::events::overlay::CloseOverlayEvent;
use crate::resources::input::{InputAction, InputState};
use crate::resources::overlay::OverlayState;
use crate::resources::physicsworld::PhysicsWorld;

/// Run condition: no overlay is showing.
pub fn world_is_running(overlay: Res<OverlayState>) -> bool {
    !overlay.is_paused()
}

/// Run condition: an overlay is showing (including while it fades out).
pub fn world_is_paused(overlay: Res<OverlayState>) -> bool {
    overlay.is_paused()
}

/// Run condition: the physics collaborator has not been paused.
pub fn physics_is_running(physics: Res<PhysicsWorld>) -> bool {
    !physics.is_paused()
}

/// Close the overlay on an escape edge. A second escape while the fade-out
/// is in flight is consumed and ignored.
pub fn overlay_escape_system(
    mut input: ResMut<InputState>,
    overlay: Res<OverlayState>,
    mut commands: Commands,
) {
    if !input.consume_just_pressed(InputAction::Escape) {
        return;
    }
    if overlay.is_closing() {
        debug!("escape ignored: overlay already closing");
        return;
    }
    commands.trigger(CloseOverlayEvent {});
}
