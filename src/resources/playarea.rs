//! Play-area bounds shared by the physics step and the carry mechanic.

use bevy_ecs::prelude::Resource;

use crate::resources::gameconfig::GameConfig;

#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct PlayArea {
    pub width: f32,
    pub height: f32,
    /// y of the ground line; everything stands on it.
    pub ground_top: f32,
}

impl PlayArea {
    pub fn from_config(config: &GameConfig) -> Self {
        Self {
            width: config.scene.width,
            height: config.scene.height,
            ground_top: config.ground_top(),
        }
    }
}
