//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution: input state, timing, tuning,
//! and the world-wide state machines.
//!
//! Overview
//! - `carryslot` – the player's single carry slot (empty, balloon or key)
//! - `debugmode` – presence toggles debug outlines in the frontend
//! - `gameconfig` – tuning values loaded from an INI file
//! - `input` – per-tick held levels and just-pressed edges
//! - `overlay` – running/paused state, overlay mode, unlock flag, cooldown
//! - `physicsworld` – global pause directive for the physics step
//! - `playarea` – play-area size and ground line
//! - `scenelayout` – entity placement, optionally loaded from JSON
//! - `textentry` – password text-entry surface
//! - `worldtime` – simulation time and delta
pub mod carryslot;
pub mod debugmode;
pub mod gameconfig;
pub mod input;
pub mod overlay;
pub mod physicsworld;
pub mod playarea;
pub mod scenelayout;
pub mod textentry;
pub mod worldtime;
