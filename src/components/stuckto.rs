//! Component for slaving an entity's position to another entity.
//!
//! A held balloon or key carries [`StuckTo`] pointing at the player; the
//! stuck-to system copies the player's position plus the offset each tick.
//! With `mirror_x` the horizontal offset flips when the target faces left.

use bevy_ecs::prelude::{Component, Entity};
use glam::Vec2;

#[derive(Debug, Clone, Component)]
pub struct StuckTo {
    /// The entity to follow.
    pub target: Entity,
    /// Offset from the target's position, authored for a right-facing target.
    pub offset: Vec2,
    /// Mirror `offset.x` by the target's facing.
    pub mirror_x: bool,
}

impl StuckTo {
    /// Create a new StuckTo component with no offset.
    pub fn new(target: Entity) -> Self {
        Self {
            target,
            offset: Vec2::ZERO,
            mirror_x: false,
        }
    }

    /// Set the offset from the target's position.
    pub fn with_offset(mut self, offset: Vec2) -> Self {
        self.offset = offset;
        self
    }

    /// Flip the horizontal offset when the target faces left.
    pub fn mirrored(mut self) -> Self {
        self.mirror_x = true;
        self
    }

    /// Offset to apply for a target whose facing sign is `facing_sign`.
    pub fn resolved_offset(&self, facing_sign: f32) -> Vec2 {
        if self.mirror_x {
            Vec2::new(self.offset.x * facing_sign, self.offset.y)
        } else {
            self.offset
        }
    }
}
