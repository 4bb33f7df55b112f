//! Axis-aligned box collider used for every overlap test in the scene.

use bevy_ecs::prelude::Component;
use glam::Vec2;

/// An axis-aligned rectangle in world space, expressed as min/max corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    /// Grow the rectangle by `dx` on both horizontal sides and `dy` on both
    /// vertical sides.
    pub fn inflate(self, dx: f32, dy: f32) -> Self {
        let d = Vec2::new(dx, dy);
        Self {
            min: self.min - d,
            max: self.max + d,
        }
    }

    /// Strict AABB overlap: touching edges do not count.
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }
}

/// Box centred on the entity's [`MapPosition`](super::mapposition::MapPosition).
#[derive(Debug, Clone, Copy, PartialEq, Component)]
pub struct BoxCollider {
    pub size: Vec2,
}

impl BoxCollider {
    /// Negative extents are folded to their absolute value.
    pub fn centered(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height).abs(),
        }
    }

    pub fn half_height(&self) -> f32 {
        self.size.y * 0.5
    }

    pub fn half_width(&self) -> f32 {
        self.size.x * 0.5
    }

    /// The collider rectangle for an entity standing at `position`.
    pub fn aabb(&self, position: Vec2) -> Aabb {
        let half = self.size * 0.5;
        Aabb {
            min: position - half,
            max: position + half,
        }
    }

    /// Strict overlap against another collider at a different position.
    pub fn overlaps(&self, position: Vec2, other: &Self, other_position: Vec2) -> bool {
        self.aabb(position).intersects(&other.aabb(other_position))
    }
}
