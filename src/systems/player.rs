//! Player motion and animation.
//!
//! [`player_motion_system`] turns the held movement keys into a horizontal
//! velocity, updates facing and applies the jump impulse.
//! [`player_animation_system`] runs after the physics step and derives the
//! animation tag from the resulting velocity.
use bevy_ecs::prelude::*;

use crate::components::player::{Facing, Player, PlayerAnim};
use crate::components::rigidbody::RigidBody;
use crate::resources::carryslot::CarrySlot;
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::{InputAction, InputState};

/// Speed multiplier while the balloon is carried.
pub const ENCUMBERED_FACTOR: f32 = 0.5;

/// Horizontal direction from the two movement keys: -1, 0 or +1.
/// Neither or both held means standing still.
pub fn horizontal_direction(left: bool, right: bool) -> f32 {
    match (left, right) {
        (true, false) => -1.0,
        (false, true) => 1.0,
        _ => 0.0,
    }
}

pub fn player_motion_system(
    input: Res<InputState>,
    slot: Res<CarrySlot>,
    config: Res<GameConfig>,
    mut query: Query<(&mut Player, &mut RigidBody)>,
) {
    let Ok((mut player, mut body)) = query.single_mut() else {
        return;
    };
    let carrying_balloon = *slot == CarrySlot::Balloon;

    let mut speed = config.player.speed;
    if carrying_balloon {
        speed *= ENCUMBERED_FACTOR;
    }
    body.velocity.x = horizontal_direction(input.left_held(), input.right_held()) * speed;

    if let Some(facing) = Facing::from_velocity(body.velocity.x) {
        player.facing = facing;
    }

    if !carrying_balloon && body.grounded && input.held(InputAction::Jump) {
        body.velocity.y = -config.player.jump_velocity;
        body.grounded = false;
    }
}

pub fn player_animation_system(
    input: Res<InputState>,
    slot: Res<CarrySlot>,
    mut query: Query<(&mut Player, &RigidBody)>,
) {
    let Ok((mut player, body)) = query.single_mut() else {
        return;
    };
    let moving = input.left_held() || input.right_held();
    let anim = PlayerAnim::derive(*slot == CarrySlot::Balloon, body.velocity.y, moving);
    player.set_anim(anim);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_horizontal_direction() {
        assert_eq!(horizontal_direction(false, false), 0.0);
        assert_eq!(horizontal_direction(true, true), 0.0);
        assert_eq!(horizontal_direction(true, false), -1.0);
        assert_eq!(horizontal_direction(false, true), 1.0);
    }
}
