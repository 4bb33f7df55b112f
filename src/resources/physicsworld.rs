//! Global pause directive for the physics collaborator.

use bevy_ecs::prelude::Resource;
use log::info;

#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct PhysicsWorld {
    paused: bool,
}

impl PhysicsWorld {
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn pause(&mut self) {
        if !self.paused {
            self.paused = true;
            info!("physics paused");
        }
    }

    pub fn resume(&mut self) {
        if self.paused {
            self.paused = false;
            info!("physics resumed");
        }
    }
}
