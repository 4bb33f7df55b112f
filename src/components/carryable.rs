//! World objects the player can carry: the balloon and the key.
//!
//! Both share the player's single carry slot (see
//! [`CarrySlot`](crate::resources::carryslot::CarrySlot)). The balloon moves
//! on its own scripted timeline when not held; the key is a regular physics
//! body when not held.

use bevy_ecs::prelude::Component;
use glam::Vec2;
use log::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BalloonState {
    /// Bobbing at its home anchor, available to grab.
    #[default]
    Floating,
    /// Slaved to the player; the player floats with it.
    Held,
    /// Drifting back to its home height after a release.
    Returning,
}

impl BalloonState {
    pub fn as_str(self) -> &'static str {
        match self {
            BalloonState::Floating => "float",
            BalloonState::Held => "held",
            BalloonState::Returning => "returning",
        }
    }
}

/// Vertical float direction while carried: -1 ascends, +1 descends.
pub const FLOAT_UP: f32 = -1.0;
pub const FLOAT_DOWN: f32 = 1.0;

#[derive(Component, Debug, Clone)]
pub struct Balloon {
    /// Anchor the balloon returns to. The x follows the balloon while held.
    pub home: Vec2,
    pub state: BalloonState,
    pub float_dir: f32,
}

impl Balloon {
    pub fn new(home: Vec2) -> Self {
        Self {
            home,
            state: BalloonState::Floating,
            float_dir: FLOAT_UP,
        }
    }

    pub fn set_state(&mut self, state: BalloonState) {
        if self.state != state {
            self.state = state;
            info!("balloon -> {}", state.as_str());
        }
    }

    /// One step of the return drift along the vertical axis. Returns the new
    /// y and whether home was reached (at or past it).
    pub fn step_toward_home(&self, y: f32, speed: f32, dt: f32) -> (f32, bool) {
        let dy = self.home.y - y;
        let step = speed * dt;
        if dy.abs() <= step {
            (self.home.y, true)
        } else {
            (y + step * dy.signum(), false)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyState {
    /// Physics-driven and settled (or settling) where it lies.
    #[default]
    Resting,
    /// Slaved to the player, physics body frozen.
    Held,
    /// Just let go: physics re-enabled, still moving.
    Dropped,
}

impl KeyState {
    pub fn as_str(self) -> &'static str {
        match self {
            KeyState::Resting => "resting",
            KeyState::Held => "held",
            KeyState::Dropped => "dropped",
        }
    }
}

#[derive(Component, Debug, Clone, Default)]
pub struct CarryKey {
    pub state: KeyState,
}

impl CarryKey {
    pub fn set_state(&mut self, state: KeyState) {
        if self.state != state {
            self.state = state;
            info!("key -> {}", state.as_str());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_balloon_starts_floating_going_up() {
        let b = Balloon::new(Vec2::new(160.0, 122.0));
        assert_eq!(b.state, BalloonState::Floating);
        assert!(approx_eq(b.float_dir, FLOAT_UP));
    }

    #[test]
    fn test_step_toward_home_from_above() {
        let b = Balloon::new(Vec2::new(0.0, 100.0));
        let (y, done) = b.step_toward_home(50.0, 80.0, 0.5);
        assert!(approx_eq(y, 90.0));
        assert!(!done);
        let (y, done) = b.step_toward_home(y, 80.0, 0.5);
        assert!(approx_eq(y, 100.0));
        assert!(done);
    }

    #[test]
    fn test_step_toward_home_from_below_clamps() {
        let b = Balloon::new(Vec2::new(0.0, 100.0));
        let (y, done) = b.step_toward_home(103.0, 80.0, 0.1);
        assert!(approx_eq(y, 100.0));
        assert!(done);
    }

    #[test]
    fn test_key_set_state() {
        let mut k = CarryKey::default();
        assert_eq!(k.state, KeyState::Resting);
        k.set_state(KeyState::Held);
        assert_eq!(k.state, KeyState::Held);
    }
}
