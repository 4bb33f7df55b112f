//! Balloon and key carry mechanics.
//!
//! The player has one carry slot ([`CarrySlot`]). Interact toggles whatever
//! is held, or grabs an overlapping item when the slot is empty (the key is
//! checked before the balloon).
//!
//! Balloon: `floating → held` on grab, `held → returning` on release
//! (manual or on reaching the floor while floating down), `returning →
//! floating` once back at its home height. While held the player floats on
//! a scripted up/down timeline with gravity off.
//!
//! Key: `resting/dropped → held` on grab (body frozen, slaved to the
//! player), `held → dropped` on release (physics back on, inherits part of
//! the player's horizontal speed), `dropped → resting` once it settles.
use bevy_ecs::prelude::*;
use glam::Vec2;
use log::debug;

use crate::components::boxcollider::BoxCollider;
use crate::components::carryable::{
    Balloon, BalloonState, CarryKey, FLOAT_DOWN, FLOAT_UP, KeyState,
};
use crate::components::mapposition::MapPosition;
use crate::components::player::{Player, PlayerAnim};
use crate::components::rigidbody::{GRAVITY, RigidBody};
use crate::components::stuckto::StuckTo;
use crate::resources::carryslot::CarrySlot;
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::{InputAction, InputState};
use crate::resources::playarea::PlayArea;
use crate::resources::worldtime::WorldTime;

#[allow(clippy::too_many_arguments)]
fn grab_balloon(
    commands: &mut Commands,
    player_entity: Entity,
    player: &mut Player,
    player_body: &mut RigidBody,
    balloon_entity: Entity,
    balloon: &mut Balloon,
    slot: &mut CarrySlot,
    held_offset: Vec2,
) {
    if !slot.take(CarrySlot::Balloon) {
        return;
    }
    balloon.set_state(BalloonState::Held);
    balloon.float_dir = FLOAT_UP;
    player_body.set_force_enabled(GRAVITY, false);
    player_body.velocity.y = 0.0;
    player.set_anim(PlayerAnim::Held);
    commands.entity(balloon_entity).insert(
        StuckTo::new(player_entity)
            .with_offset(held_offset)
            .mirrored(),
    );
}

/// End the carry: the balloon heads home and the player falls under gravity
/// again. Shared by the manual release and the floor auto-release.
fn release_balloon(
    commands: &mut Commands,
    player_body: &mut RigidBody,
    balloon_entity: Entity,
    balloon: &mut Balloon,
    slot: &mut CarrySlot,
) {
    if !slot.release(CarrySlot::Balloon) {
        return;
    }
    balloon.set_state(BalloonState::Returning);
    balloon.float_dir = FLOAT_UP;
    player_body.set_force_enabled(GRAVITY, true);
    commands.entity(balloon_entity).remove::<StuckTo>();
}

fn grab_key(
    commands: &mut Commands,
    player_entity: Entity,
    key_entity: Entity,
    key: &mut CarryKey,
    key_body: &mut RigidBody,
    slot: &mut CarrySlot,
    held_offset: Vec2,
) {
    if !slot.take(CarrySlot::Key) {
        return;
    }
    key.set_state(KeyState::Held);
    key_body.velocity = Vec2::ZERO;
    key_body.freeze();
    commands.entity(key_entity).insert(
        StuckTo::new(player_entity)
            .with_offset(held_offset)
            .mirrored(),
    );
}

fn drop_key(
    commands: &mut Commands,
    key_entity: Entity,
    key: &mut CarryKey,
    key_body: &mut RigidBody,
    slot: &mut CarrySlot,
    player_vx: f32,
    inherit: f32,
) {
    if !slot.release(CarrySlot::Key) {
        return;
    }
    key.set_state(KeyState::Dropped);
    key_body.unfreeze();
    key_body.velocity = Vec2::new(player_vx * inherit, 0.0);
    key_body.grounded = false;
    key_body.set_force_enabled(GRAVITY, true);
    commands.entity(key_entity).remove::<StuckTo>();
}

/// Dispatch an interact edge to the carry slot.
pub fn carry_interact_system(
    mut commands: Commands,
    mut input: ResMut<InputState>,
    mut slot: ResMut<CarrySlot>,
    config: Res<GameConfig>,
    mut players: Query<
        (Entity, &mut Player, &MapPosition, &BoxCollider, &mut RigidBody),
        Without<CarryKey>,
    >,
    mut balloons: Query<(Entity, &mut Balloon, &MapPosition, &BoxCollider)>,
    mut keys: Query<
        (Entity, &mut CarryKey, &MapPosition, &BoxCollider, &mut RigidBody),
        Without<Player>,
    >,
) {
    if !input.consume_just_pressed(InputAction::Interact) {
        return;
    }
    let Ok((player_entity, mut player, player_pos, player_collider, mut player_body)) =
        players.single_mut()
    else {
        return;
    };
    let mut balloon = balloons.single_mut().ok();
    let mut key = keys.single_mut().ok();

    let held = *slot;
    match held {
        CarrySlot::Balloon => {
            if let Some((entity, balloon, _, _)) = balloon.as_mut() {
                release_balloon(&mut commands, &mut player_body, *entity, balloon, &mut slot);
            }
        }
        CarrySlot::Key => {
            if let Some((entity, key, _, _, key_body)) = key.as_mut() {
                drop_key(
                    &mut commands,
                    *entity,
                    key,
                    key_body,
                    &mut slot,
                    player_body.velocity.x,
                    config.key.inherit_velocity,
                );
            }
        }
        CarrySlot::Empty => {
            if let Some((entity, key, key_pos, key_collider, key_body)) = key.as_mut()
                && key.state != KeyState::Held
                && player_collider.overlaps(player_pos.pos, key_collider, key_pos.pos)
            {
                grab_key(
                    &mut commands,
                    player_entity,
                    *entity,
                    key,
                    key_body,
                    &mut slot,
                    config.key.held_offset,
                );
                return;
            }
            if let Some((entity, balloon, balloon_pos, balloon_collider)) = balloon.as_mut()
                && balloon.state == BalloonState::Floating
                && player_collider.overlaps(player_pos.pos, balloon_collider, balloon_pos.pos)
            {
                grab_balloon(
                    &mut commands,
                    player_entity,
                    &mut player,
                    &mut player_body,
                    *entity,
                    balloon,
                    &mut slot,
                    config.balloon.held_offset,
                );
                return;
            }
            debug!("interact ignored: nothing in reach");
        }
    }
}

/// Scripted float while the balloon is carried: rise to the top bound, then
/// sink until the floor bound ends the carry.
pub fn balloon_float_system(
    mut commands: Commands,
    time: Res<WorldTime>,
    config: Res<GameConfig>,
    area: Res<PlayArea>,
    mut slot: ResMut<CarrySlot>,
    mut players: Query<(&mut Player, &mut MapPosition, &BoxCollider, &mut RigidBody)>,
    mut balloons: Query<(Entity, &mut Balloon), Without<Player>>,
) {
    if *slot != CarrySlot::Balloon {
        return;
    }
    let Ok((mut player, mut position, collider, mut body)) = players.single_mut() else {
        return;
    };
    let Ok((balloon_entity, mut balloon)) = balloons.single_mut() else {
        return;
    };

    body.velocity.y = 0.0;
    let top = config.balloon.top_margin + collider.half_height();
    let bottom = area.ground_top - collider.half_height();
    position.pos.y += balloon.float_dir * config.balloon.float_speed * time.delta;

    if position.pos.y <= top {
        position.pos.y = top;
        balloon.float_dir = FLOAT_DOWN;
    } else if position.pos.y >= bottom {
        position.pos.y = bottom;
        // only a descent ends the carry; a fresh grab starts on the floor
        if balloon.float_dir == FLOAT_DOWN {
            release_balloon(
                &mut commands,
                &mut body,
                balloon_entity,
                &mut balloon,
                &mut slot,
            );
            player.set_anim(PlayerAnim::Idle);
        }
    }
}

/// Drift a released balloon back to its home height; track home x while held.
pub fn balloon_return_system(
    time: Res<WorldTime>,
    config: Res<GameConfig>,
    mut balloons: Query<(&mut Balloon, &mut MapPosition)>,
) {
    for (mut balloon, mut position) in balloons.iter_mut() {
        match balloon.state {
            BalloonState::Held => balloon.home.x = position.pos.x,
            BalloonState::Returning => {
                let (y, reached) =
                    balloon.step_toward_home(position.pos.y, config.balloon.return_speed, time.delta);
                position.pos = Vec2::new(balloon.home.x, y);
                if reached {
                    balloon.set_state(BalloonState::Floating);
                }
            }
            BalloonState::Floating => {}
        }
    }
}

/// A dropped key that lies on the ground and has slowed down is at rest.
pub fn key_settle_system(
    config: Res<GameConfig>,
    mut keys: Query<(&mut CarryKey, &mut RigidBody)>,
) {
    for (mut key, mut body) in keys.iter_mut() {
        if key.state == KeyState::Dropped
            && body.grounded
            && body.velocity.x.abs() < config.key.rest_epsilon
        {
            body.velocity.x = 0.0;
            key.set_state(KeyState::Resting);
        }
    }
}
