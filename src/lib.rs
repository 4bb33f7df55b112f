//! Heartfloat library.
//!
//! The gameplay state machine of a small side-view scene: walking and
//! jumping, floating with a carried balloon, a key that unlocks a
//! password-gated chest, and trigger zones that pause the world behind a
//! modal overlay. Exposes the ECS components, resources, systems, and
//! events for use in integration tests and by the windowed frontend.

pub mod components;
pub mod events;
#[cfg(feature = "window")]
pub mod frontend;
pub mod game;
pub mod resources;
pub mod systems;
