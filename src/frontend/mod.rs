//! Raylib window frontend (feature `window`).
//!
//! - [`keyboard`] – poll raylib keys, characters and focus into the [`Game`](crate::game::Game)
//! - [`render`] – draw the scene and overlays with primitive shapes
//!
//! The frontend only exercises the in-process boundary of the game; it owns
//! no gameplay state of its own.
pub mod keyboard;
pub mod render;
