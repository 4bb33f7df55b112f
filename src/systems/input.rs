//! Input latch system.
//!
//! The raw key source (the window frontend, or a test) reports key levels
//! into [`InputState`] between ticks. [`latch_input`] runs first in every tick
//! and turns the presses recorded since the previous tick into this tick's
//! just-pressed edges.
use bevy_ecs::prelude::*;

use crate::resources::input::InputState;

pub fn latch_input(mut input: ResMut<InputState>) {
    input.latch();
}
