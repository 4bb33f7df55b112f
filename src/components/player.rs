//! The controllable character.
//!
//! [`Player`] holds the render-facing state of the character: which way it
//! faces and which animation tag is showing. Velocity and ground contact live
//! on the entity's [`RigidBody`](super::rigidbody::RigidBody); what it carries
//! lives in [`CarrySlot`](crate::resources::carryslot::CarrySlot).

use bevy_ecs::prelude::Component;
use log::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    /// Facing implied by a horizontal velocity; `None` keeps the last value.
    pub fn from_velocity(vx: f32) -> Option<Facing> {
        if vx > 0.0 {
            Some(Facing::Right)
        } else if vx < 0.0 {
            Some(Facing::Left)
        } else {
            None
        }
    }

    /// +1 facing right, -1 facing left. Used to mirror carry offsets.
    pub fn sign(self) -> f32 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }
}

/// Animation tag requested from the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayerAnim {
    #[default]
    Idle,
    Walk,
    Jump,
    Fall,
    Held,
}

impl PlayerAnim {
    pub fn as_str(self) -> &'static str {
        match self {
            PlayerAnim::Idle => "idle",
            PlayerAnim::Walk => "walk",
            PlayerAnim::Jump => "jump",
            PlayerAnim::Fall => "fall",
            PlayerAnim::Held => "held",
        }
    }

    /// Derive the animation from motion. Carrying the balloon overrides
    /// everything; otherwise vertical velocity wins over walking (y grows
    /// downward, so negative vy is a rise).
    pub fn derive(carrying_balloon: bool, vy: f32, moving: bool) -> PlayerAnim {
        if carrying_balloon {
            PlayerAnim::Held
        } else if vy < 0.0 {
            PlayerAnim::Jump
        } else if vy > 0.0 {
            PlayerAnim::Fall
        } else if moving {
            PlayerAnim::Walk
        } else {
            PlayerAnim::Idle
        }
    }
}

#[derive(Component, Debug, Clone, Default)]
pub struct Player {
    pub facing: Facing,
    pub anim: PlayerAnim,
}

impl Player {
    /// Switch the animation tag, logging only on change.
    /// Returns true if the tag changed.
    pub fn set_anim(&mut self, anim: PlayerAnim) -> bool {
        if self.anim == anim {
            return false;
        }
        self.anim = anim;
        info!("player -> {}", anim.as_str());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_held_overrides_velocity() {
        assert_eq!(PlayerAnim::derive(true, -300.0, true), PlayerAnim::Held);
        assert_eq!(PlayerAnim::derive(true, 0.0, false), PlayerAnim::Held);
    }

    #[test]
    fn test_derive_vertical_before_walk() {
        assert_eq!(PlayerAnim::derive(false, -1.0, true), PlayerAnim::Jump);
        assert_eq!(PlayerAnim::derive(false, 1.0, true), PlayerAnim::Fall);
        assert_eq!(PlayerAnim::derive(false, 0.0, true), PlayerAnim::Walk);
        assert_eq!(PlayerAnim::derive(false, 0.0, false), PlayerAnim::Idle);
    }

    #[test]
    fn test_facing_holds_on_zero_velocity() {
        assert_eq!(Facing::from_velocity(10.0), Some(Facing::Right));
        assert_eq!(Facing::from_velocity(-10.0), Some(Facing::Left));
        assert_eq!(Facing::from_velocity(0.0), None);
        assert_eq!(Facing::Left.sign(), -1.0);
    }

    #[test]
    fn test_set_anim_reports_change_once() {
        let mut p = Player::default();
        assert!(!p.set_anim(PlayerAnim::Idle));
        assert!(p.set_anim(PlayerAnim::Walk));
        assert!(!p.set_anim(PlayerAnim::Walk));
        assert_eq!(p.anim, PlayerAnim::Walk);
    }
}
