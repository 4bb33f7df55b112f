//! Time update system.
//!
//! Advances the shared [`WorldTime`](crate::resources::worldtime::WorldTime)
//! resource once per frame.
use bevy_ecs::prelude::*;

use crate::resources::worldtime::WorldTime;

/// Longest step the simulation takes in one tick. A stalled frame (window
/// drag, breakpoint) advances the world by this much instead of teleporting
/// bodies through the ground line.
pub const MAX_FRAME_DELTA: f32 = 0.25;

/// Update elapsed and delta seconds on the `WorldTime` resource.
///
/// `dt` is the frame delta in seconds, clamped to `[0, MAX_FRAME_DELTA]`.
pub fn update_world_time(world: &mut World, dt: f32) {
    let mut wt = world.resource_mut::<WorldTime>();
    let step = dt.clamp(0.0, MAX_FRAME_DELTA);
    wt.elapsed += step;
    wt.delta = step;
}
