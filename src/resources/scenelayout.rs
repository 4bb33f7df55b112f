//! Placement of the scene's entities.
//!
//! The layout is plain data: one centred box per entity. The default is
//! derived from [`GameConfig`] the way the reference scene places things;
//! a JSON file can override it.
//!
//! ```json
//! {
//!   "player":   { "x": 80,  "y": 136, "w": 16, "h": 24 },
//!   "balloon":  { "x": 160, "y": 122, "w": 16, "h": 20 },
//!   "key":      { "x": 120, "y": 145, "w": 8,  "h": 6 },
//!   "chest":    { "x": 300, "y": 140, "w": 20, "h": 16 },
//!   "envelope": { "x": 160, "y": 100, "w": 20, "h": 14 }
//! }
//! ```

use bevy_ecs::prelude::Resource;
use glam::Vec2;
use log::info;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::resources::gameconfig::GameConfig;

const BALLOON_SIZE: (f32, f32) = (16.0, 20.0);
const KEY_SIZE: (f32, f32) = (8.0, 6.0);
const CHEST_SIZE: (f32, f32) = (20.0, 16.0);
const ENVELOPE_SIZE: (f32, f32) = (20.0, 14.0);
const ENVELOPE_Y: f32 = 100.0;

/// A box given by its centre and size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlacedBox {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl PlacedBox {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// A box of the given size standing on `ground_top`.
    pub fn standing(x: f32, ground_top: f32, w: f32, h: f32) -> Self {
        Self::new(x, ground_top - h * 0.5, w, h)
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneLayout {
    pub player: PlacedBox,
    pub balloon: PlacedBox,
    pub envelope: PlacedBox,
    /// Present only in the extended configuration.
    #[serde(default)]
    pub key: Option<PlacedBox>,
    /// Present only in the extended configuration.
    #[serde(default)]
    pub chest: Option<PlacedBox>,
}

impl SceneLayout {
    /// Reference placement for the configured play area.
    pub fn from_config(config: &GameConfig) -> Self {
        let ground_top = config.ground_top();
        let mid_x = config.scene.width * 0.5;
        let player = PlacedBox::standing(
            config.player.start_x,
            ground_top,
            config.player.width,
            config.player.height,
        );
        let balloon = PlacedBox::new(
            mid_x,
            ground_top - config.balloon.rest_height,
            BALLOON_SIZE.0,
            BALLOON_SIZE.1,
        );
        let envelope = PlacedBox::new(mid_x, ENVELOPE_Y, ENVELOPE_SIZE.0, ENVELOPE_SIZE.1);

        let (key, chest) = if config.scene.extended {
            let key_x = (config.player.start_x + mid_x) * 0.5;
            let chest_x = config.scene.width - config.chest_offset - CHEST_SIZE.0 * 0.5;
            (
                Some(PlacedBox::standing(key_x, ground_top, KEY_SIZE.0, KEY_SIZE.1)),
                Some(PlacedBox::standing(
                    chest_x,
                    ground_top,
                    CHEST_SIZE.0,
                    CHEST_SIZE.1,
                )),
            )
        } else {
            (None, None)
        };

        Self {
            player,
            balloon,
            envelope,
            key,
            chest,
        }
    }

    /// Drop the key and chest, leaving the basic balloon-and-envelope scene.
    pub fn without_extended(mut self) -> Self {
        self.key = None;
        self.chest = None;
        self
    }

    pub fn is_extended(&self) -> bool {
        self.key.is_some() && self.chest.is_some()
    }

    pub fn from_json(text: &str) -> Result<Self, String> {
        serde_json::from_str(text).map_err(|e| format!("Failed to parse scene layout: {}", e))
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read scene layout {:?}: {}", path, e))?;
        let layout = Self::from_json(&text)?;
        info!(
            "Loaded scene layout from {:?} (extended={})",
            path,
            layout.is_extended()
        );
        Ok(layout)
    }

    pub fn to_json(&self) -> Result<String, String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize scene layout: {}", e))
    }
}
