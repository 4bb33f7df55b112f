use bevy_ecs::prelude::Component;

/// Scripted vertical oscillation around `base_y`:
/// `y = base_y + sin(elapsed * speed) * amplitude`.
#[derive(Component, Debug, Clone, Copy)]
pub struct Bob {
    pub base_y: f32,
    pub amplitude: f32,
    /// Angular speed in radians per second.
    pub speed: f32,
}

impl Bob {
    pub fn new(base_y: f32, amplitude: f32, speed: f32) -> Self {
        Self {
            base_y,
            amplitude,
            speed,
        }
    }

    pub fn y_at(&self, elapsed: f32) -> f32 {
        self.base_y + (elapsed * self.speed).sin() * self.amplitude
    }
}
