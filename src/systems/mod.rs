//! Per-tick systems.
//!
//! Tick order (see [`crate::game::build_schedule`]):
//! input latch, overlay escape (paused only), trigger zones, bob, player
//! motion, carry interact, balloon float, physics step, stuck-to, balloon
//! return, key settle, player animation, opacity tweens.
//!
//! Submodules overview
//! - [`bob`] – scripted vertical oscillation of the envelope
//! - [`carry`] – balloon and key carry state machines
//! - [`input`] – latch raw key presses into per-tick edges
//! - [`movement`] – minimal physics step (forces, friction, ground, walls)
//! - [`overlay`] – escape-to-close and the running/paused run conditions
//! - [`player`] – player velocity, facing, jump and animation tag
//! - [`stuckto`] – slave held items to the player
//! - [`time`] – update simulation time and delta
//! - [`triggerzone`] – open overlays when the player reaches a trigger zone
//! - [`tween`] – opacity fades and their completion signals

pub mod bob;
pub mod carry;
pub mod input;
pub mod movement;
pub mod overlay;
pub mod player;
pub mod stuckto;
pub mod time;
pub mod triggerzone;
pub mod tween;
