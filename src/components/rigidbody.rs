//! Kinematic body handed to the physics collaborator.
//!
//! [`RigidBody`] is the only channel through which gameplay code talks to
//! physics: it writes velocities, toggles named acceleration forces (the
//! carry mechanic switches [`GRAVITY`] off and on), and freezes bodies whose
//! position is driven elsewhere (a held key). The physics step writes back
//! `grounded` so motion rules can query ground contact.
//!
//! # Example
//! ```ignore
//! let mut rb = RigidBody::with_physics(6.0, 0.3);
//! rb.add_force(GRAVITY, Vec2::new(0.0, 900.0));
//!
//! // Float with the balloon
//! rb.set_force_enabled(GRAVITY, false);
//!
//! // Slave the key to the player
//! rb.freeze();
//! ```

use bevy_ecs::prelude::Component;
use glam::Vec2;
use rustc_hash::FxHashMap;

/// Name of the gravity force every falling body carries.
pub const GRAVITY: &str = "gravity";

/// Constant acceleration (units/s²) that can be switched off without losing
/// its value.
#[derive(Clone, Copy, Debug)]
pub struct AccelerationForce {
    pub value: Vec2,
    pub enabled: bool,
}

impl AccelerationForce {
    pub fn new(value: Vec2) -> Self {
        Self {
            value,
            enabled: true,
        }
    }
}

/// Velocity plus the forces acting on a body.
///
/// - `friction` - Horizontal damping applied while grounded
/// - `bounce` - Fraction of downward speed reflected on landing
/// - `frozen` - When true, the physics step leaves the body alone
/// - `grounded` - Written by the physics step: resting on the ground line
#[derive(Component, Clone, Debug)]
pub struct RigidBody {
    pub velocity: Vec2,
    /// Keyed by name so gameplay can toggle one force (e.g. [`GRAVITY`]).
    pub forces: FxHashMap<String, AccelerationForce>,
    /// Applied as: velocity.x *= (1 - friction * delta).
    pub friction: f32,
    /// Restitution on landing, 0.0 sticks, 1.0 bounces back at full speed.
    pub bounce: f32,
    pub frozen: bool,
    pub grounded: bool,
}

impl Default for RigidBody {
    fn default() -> Self {
        Self::new()
    }
}

impl RigidBody {
    /// At rest, airborne, no forces.
    pub fn new() -> Self {
        Self {
            velocity: Vec2::ZERO,
            forces: FxHashMap::default(),
            friction: 0.0,
            bounce: 0.0,
            frozen: false,
            grounded: false,
        }
    }

    /// Create a RigidBody with ground friction and landing bounce configured.
    pub fn with_physics(friction: f32, bounce: f32) -> Self {
        Self {
            friction,
            bounce,
            ..Self::new()
        }
    }

    /// Builder variant of [`RigidBody::add_force`].
    pub fn with_force(mut self, name: &str, value: Vec2) -> Self {
        self.add_force(name, value);
        self
    }

    /// Insert `name`, or replace its value; the force starts enabled.
    pub fn add_force(&mut self, name: &str, value: Vec2) {
        self.forces
            .insert(name.to_owned(), AccelerationForce::new(value));
    }

    /// Returns false when no force is called `name`.
    pub fn set_force_enabled(&mut self, name: &str, enabled: bool) -> bool {
        match self.forces.get_mut(name) {
            Some(force) => {
                force.enabled = enabled;
                true
            }
            None => false,
        }
    }

    pub fn is_force_enabled(&self, name: &str) -> bool {
        self.forces.get(name).is_some_and(|f| f.enabled)
    }

    /// Sum of the enabled forces.
    pub fn total_acceleration(&self) -> Vec2 {
        self.forces
            .values()
            .filter(|f| f.enabled)
            .fold(Vec2::ZERO, |acc, f| acc + f.value)
    }

    pub fn freeze(&mut self) {
        self.frozen = true;
    }

    pub fn unfreeze(&mut self) {
        self.frozen = false;
    }
}
