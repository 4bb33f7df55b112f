//! ECS components for entities.
//!
//! This module groups all component types that can be attached to entities in
//! the scene.
//!
//! Submodules overview:
//! - [`bob`] – scripted vertical oscillation (the floating envelope)
//! - [`boxcollider`] – axis-aligned rectangular collider for overlap tests
//! - [`carryable`] – balloon and key state machines
//! - [`mapposition`] – world-space position (centre) for an entity
//! - [`overlayelement`] – layers of the modal overlay and their opacity
//! - [`player`] – facing and animation tag of the character
//! - [`rigidbody`] – velocity, named forces and ground contact
//! - [`stuckto`] – slave an entity's position to another entity
//! - [`triggerzone`] – zones that pause the world and open an overlay
//! - [`tween`] – opacity fades with a one-shot completion signal

pub mod bob;
pub mod boxcollider;
pub mod carryable;
pub mod mapposition;
pub mod overlayelement;
pub mod player;
pub mod rigidbody;
pub mod stuckto;
pub mod triggerzone;
pub mod tween;
