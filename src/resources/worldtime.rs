use bevy_ecs::prelude::Resource;

/// Simulation clock in seconds, advanced once per tick by the frame clock.
///
/// `elapsed` keeps running while the world is paused; the overlay cooldown
/// and fades are measured against it.
#[derive(Resource, Clone, Copy, Debug, Default)]
pub struct WorldTime {
    pub elapsed: f32,
    pub delta: f32,
}
