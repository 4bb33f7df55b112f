//! Minimal arcade physics step.
//!
//! Integrates every unfrozen [`RigidBody`]: enabled forces into velocity,
//! ground friction, velocity into position, then resolves the body against
//! the ground line and the play-area walls. Writes `grounded` back so motion
//! rules can ask for ground contact. Gated on the
//! [`PhysicsWorld`](crate::resources::physicsworld::PhysicsWorld) pause
//! directive by the schedule.
use bevy_ecs::prelude::*;

use crate::components::boxcollider::BoxCollider;
use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::resources::playarea::PlayArea;
use crate::resources::worldtime::WorldTime;

/// Landing speeds below this (after restitution) stop the body dead.
pub const BOUNCE_REST_SPEED: f32 = 10.0;

pub fn movement(
    mut query: Query<(&mut MapPosition, &mut RigidBody, &BoxCollider)>,
    time: Res<WorldTime>,
    area: Res<PlayArea>,
) {
    let dt = time.delta;
    for (mut position, mut rigidbody, collider) in query.iter_mut() {
        if rigidbody.frozen {
            continue;
        }
        let acceleration = rigidbody.total_acceleration();
        rigidbody.velocity += acceleration * dt;

        if rigidbody.grounded && rigidbody.friction > 0.0 {
            let damping = (1.0 - rigidbody.friction * dt).max(0.0);
            rigidbody.velocity.x *= damping;
        }

        position.pos += rigidbody.velocity * dt;

        let half_w = collider.half_width();
        let half_h = collider.half_height();

        // ground line
        let floor = area.ground_top - half_h;
        if position.pos.y >= floor && rigidbody.velocity.y >= 0.0 {
            position.pos.y = floor;
            let rebound = rigidbody.velocity.y * rigidbody.bounce;
            if rebound > BOUNCE_REST_SPEED {
                rigidbody.velocity.y = -rebound;
                rigidbody.grounded = false;
            } else {
                rigidbody.velocity.y = 0.0;
                rigidbody.grounded = true;
            }
        } else {
            rigidbody.grounded = false;
        }

        // ceiling
        if position.pos.y < half_h {
            position.pos.y = half_h;
            rigidbody.velocity.y = rigidbody.velocity.y.max(0.0);
        }

        // walls
        if position.pos.x < half_w {
            position.pos.x = half_w;
            rigidbody.velocity.x = rigidbody.velocity.x.max(0.0);
        } else if position.pos.x > area.width - half_w {
            position.pos.x = area.width - half_w;
            rigidbody.velocity.x = rigidbody.velocity.x.min(0.0);
        }
    }
}
