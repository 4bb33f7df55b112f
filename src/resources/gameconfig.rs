//! Game configuration resource.
//!
//! Tuning values for the scene, loaded from an INI file. Every key is
//! optional; anything missing keeps the default, which reproduces the
//! reference scene.
//!
//! # Configuration File Format
//!
//! ```ini
//! [scene]
//! width = 320
//! height = 180
//! ground_height = 32
//! extended = true
//!
//! [player]
//! speed = 125
//! gravity = 900
//! jump_velocity = 380
//!
//! [balloon]
//! float_speed = 96
//! return_speed = 80
//!
//! [overlay]
//! fade_in = 0.4
//! fade_out = 0.3
//! cooldown = 5.0
//! trigger_inflate = 12
//!
//! [chest]
//! secret = be mine
//!
//! [window]
//! width = 1280
//! height = 720
//! target_fps = 120
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use glam::Vec2;
use log::{info, warn};
use std::path::PathBuf;

use crate::resources::textentry::TEXT_ENTRY_CAPACITY;

const DEFAULT_CONFIG_PATH: &str = "./config.ini";

#[derive(Debug, Clone, PartialEq)]
pub struct SceneTuning {
    pub width: f32,
    pub height: f32,
    pub ground_height: f32,
    /// Key and chest are present.
    pub extended: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlayerTuning {
    pub speed: f32,
    pub gravity: f32,
    pub jump_velocity: f32,
    pub width: f32,
    pub height: f32,
    pub start_x: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BalloonTuning {
    pub float_speed: f32,
    pub return_speed: f32,
    pub held_offset: Vec2,
    /// Height of the home anchor above the ground line.
    pub rest_height: f32,
    /// Gap between the top of the play area and the highest the player floats.
    pub top_margin: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct KeyTuning {
    /// Fraction of the player's horizontal velocity a dropped key inherits.
    pub inherit_velocity: f32,
    pub friction: f32,
    pub bounce: f32,
    /// Horizontal speed under which a grounded key counts as resting.
    pub rest_epsilon: f32,
    pub held_offset: Vec2,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OverlayTuning {
    pub fade_in: f32,
    pub fade_out: f32,
    pub cooldown: f32,
    pub trigger_inflate: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WindowTuning {
    pub width: u32,
    pub height: u32,
    pub target_fps: u32,
}

/// Game configuration resource.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub scene: SceneTuning,
    pub player: PlayerTuning,
    pub balloon: BalloonTuning,
    pub key: KeyTuning,
    pub overlay: OverlayTuning,
    pub secret: String,
    /// Gap between the chest and the right edge of the play area.
    pub chest_offset: f32,
    pub window: WindowTuning,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with the reference scene's values.
    pub fn new() -> Self {
        Self {
            scene: SceneTuning {
                width: 320.0,
                height: 180.0,
                ground_height: 32.0,
                extended: true,
            },
            player: PlayerTuning {
                speed: 125.0,
                gravity: 900.0,
                jump_velocity: 380.0,
                width: 16.0,
                height: 24.0,
                start_x: 80.0,
            },
            balloon: BalloonTuning {
                float_speed: 96.0,
                return_speed: 80.0,
                held_offset: Vec2::new(7.0, -10.0),
                rest_height: 26.0,
                top_margin: 0.0,
            },
            key: KeyTuning {
                inherit_velocity: 0.5,
                friction: 6.0,
                bounce: 0.3,
                rest_epsilon: 2.0,
                held_offset: Vec2::new(6.0, 2.0),
            },
            overlay: OverlayTuning {
                fade_in: 0.4,
                fade_out: 0.3,
                cooldown: 5.0,
                trigger_inflate: 12.0,
            },
            secret: "be mine".to_string(),
            chest_offset: 10.0,
            window: WindowTuning {
                width: 1280,
                height: 720,
                target_fps: 120,
            },
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Ground line: the y where standing bodies rest their feet.
    pub fn ground_top(&self) -> f32 {
        self.scene.height - self.scene.ground_height
    }

    /// A secret must be typeable into the text entry: non-empty, at most
    /// [`TEXT_ENTRY_CAPACITY`] bytes, no control characters.
    pub fn check_secret(secret: &str) -> Result<(), String> {
        if secret.is_empty() {
            return Err("Secret must not be empty".to_string());
        }
        if secret.len() > TEXT_ENTRY_CAPACITY {
            return Err(format!(
                "Secret is {} bytes, the password field holds at most {}",
                secret.len(),
                TEXT_ENTRY_CAPACITY
            ));
        }
        if secret.chars().any(char::is_control) {
            return Err("Secret must not contain control characters".to_string());
        }
        Ok(())
    }

    /// Replace the secret; an untypeable one is rejected and the current
    /// secret kept.
    pub fn set_secret(&mut self, secret: &str) -> Result<(), String> {
        Self::check_secret(secret)?;
        self.secret = secret.to_string();
        Ok(())
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;
        self.apply(&config);

        info!(
            "Loaded config from {:?}: {}x{} scene, extended={}, speed={}, cooldown={}s",
            self.config_path,
            self.scene.width,
            self.scene.height,
            self.scene.extended,
            self.player.speed,
            self.overlay.cooldown
        );
        Ok(())
    }

    /// Load configuration from INI text.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .read(text.to_string())
            .map_err(|e| format!("Failed to parse config: {}", e))?;
        self.apply(&config);
        Ok(())
    }

    fn apply(&mut self, config: &Ini) {
        let float = |section: &str, key: &str, target: &mut f32| {
            if let Some(v) = config.getfloat(section, key).ok().flatten() {
                *target = v as f32;
            }
        };

        // [scene] section
        float("scene", "width", &mut self.scene.width);
        float("scene", "height", &mut self.scene.height);
        float("scene", "ground_height", &mut self.scene.ground_height);
        if let Some(extended) = config.getbool("scene", "extended").ok().flatten() {
            self.scene.extended = extended;
        }

        // [player] section
        float("player", "speed", &mut self.player.speed);
        float("player", "gravity", &mut self.player.gravity);
        float("player", "jump_velocity", &mut self.player.jump_velocity);
        float("player", "width", &mut self.player.width);
        float("player", "height", &mut self.player.height);
        float("player", "start_x", &mut self.player.start_x);

        // [balloon] section
        float("balloon", "float_speed", &mut self.balloon.float_speed);
        float("balloon", "return_speed", &mut self.balloon.return_speed);
        float("balloon", "held_offset_x", &mut self.balloon.held_offset.x);
        float("balloon", "held_offset_y", &mut self.balloon.held_offset.y);
        float("balloon", "rest_height", &mut self.balloon.rest_height);
        float("balloon", "top_margin", &mut self.balloon.top_margin);

        // [key] section
        float("key", "inherit_velocity", &mut self.key.inherit_velocity);
        float("key", "friction", &mut self.key.friction);
        float("key", "bounce", &mut self.key.bounce);
        float("key", "rest_epsilon", &mut self.key.rest_epsilon);
        float("key", "held_offset_x", &mut self.key.held_offset.x);
        float("key", "held_offset_y", &mut self.key.held_offset.y);

        // [overlay] section
        float("overlay", "fade_in", &mut self.overlay.fade_in);
        float("overlay", "fade_out", &mut self.overlay.fade_out);
        float("overlay", "cooldown", &mut self.overlay.cooldown);
        float("overlay", "trigger_inflate", &mut self.overlay.trigger_inflate);

        // [chest] section
        if let Some(secret) = config.get("chest", "secret") {
            let secret = secret.trim().trim_matches('"');
            if let Err(e) = self.set_secret(secret) {
                warn!("Ignoring [chest] secret: {}", e);
            }
        }
        float("chest", "offset", &mut self.chest_offset);

        // [window] section
        if let Some(width) = config.getuint("window", "width").ok().flatten() {
            self.window.width = width as u32;
        }
        if let Some(height) = config.getuint("window", "height").ok().flatten() {
            self.window.height = height as u32;
        }
        if let Some(fps) = config.getuint("window", "target_fps").ok().flatten() {
            self.window.target_fps = fps as u32;
        }
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();
        let mut set = |section: &str, key: &str, value: String| {
            config.set(section, key, Some(value));
        };

        set("scene", "width", self.scene.width.to_string());
        set("scene", "height", self.scene.height.to_string());
        set("scene", "ground_height", self.scene.ground_height.to_string());
        set("scene", "extended", self.scene.extended.to_string());

        set("player", "speed", self.player.speed.to_string());
        set("player", "gravity", self.player.gravity.to_string());
        set("player", "jump_velocity", self.player.jump_velocity.to_string());
        set("player", "width", self.player.width.to_string());
        set("player", "height", self.player.height.to_string());
        set("player", "start_x", self.player.start_x.to_string());

        set("balloon", "float_speed", self.balloon.float_speed.to_string());
        set("balloon", "return_speed", self.balloon.return_speed.to_string());
        set("balloon", "held_offset_x", self.balloon.held_offset.x.to_string());
        set("balloon", "held_offset_y", self.balloon.held_offset.y.to_string());
        set("balloon", "rest_height", self.balloon.rest_height.to_string());
        set("balloon", "top_margin", self.balloon.top_margin.to_string());

        set("key", "inherit_velocity", self.key.inherit_velocity.to_string());
        set("key", "friction", self.key.friction.to_string());
        set("key", "bounce", self.key.bounce.to_string());
        set("key", "rest_epsilon", self.key.rest_epsilon.to_string());
        set("key", "held_offset_x", self.key.held_offset.x.to_string());
        set("key", "held_offset_y", self.key.held_offset.y.to_string());

        set("overlay", "fade_in", self.overlay.fade_in.to_string());
        set("overlay", "fade_out", self.overlay.fade_out.to_string());
        set("overlay", "cooldown", self.overlay.cooldown.to_string());
        set(
            "overlay",
            "trigger_inflate",
            self.overlay.trigger_inflate.to_string(),
        );

        set("chest", "secret", self.secret.clone());
        set("chest", "offset", self.chest_offset.to_string());

        set("window", "width", self.window.width.to_string());
        set("window", "height", self.window.height.to_string());
        set("window", "target_fps", self.window.target_fps.to_string());

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_defaults_match_reference_scene() {
        let c = GameConfig::new();
        assert!(approx_eq(c.ground_top(), 148.0));
        assert!(approx_eq(c.player.speed, 125.0));
        assert!(approx_eq(c.overlay.cooldown, 5.0));
        assert!(c.scene.extended);
        assert_eq!(c.secret, "be mine");
    }

    #[test]
    fn test_load_from_str_overrides_only_present_keys() {
        let mut c = GameConfig::new();
        c.load_from_str(
            "[player]\nspeed = 200\n[overlay]\ncooldown = 1.5\n[scene]\nextended = false\n[chest]\nsecret = \"open sesame\"\n",
        )
        .unwrap();
        assert!(approx_eq(c.player.speed, 200.0));
        assert!(approx_eq(c.overlay.cooldown, 1.5));
        assert!(!c.scene.extended);
        assert_eq!(c.secret, "open sesame");
        // untouched
        assert!(approx_eq(c.player.gravity, 900.0));
        assert!(approx_eq(c.balloon.held_offset.y, -10.0));
    }

    #[test]
    fn test_untypeable_secret_in_file_keeps_previous() {
        let mut c = GameConfig::new();
        let long = "x".repeat(TEXT_ENTRY_CAPACITY + 2);
        c.load_from_str(&format!("[chest]\nsecret = {}\n[player]\nspeed = 200\n", long))
            .unwrap();
        assert_eq!(c.secret, "be mine");
        // the rest of the file still applies
        assert!(approx_eq(c.player.speed, 200.0));
    }

    #[test]
    fn test_secret_must_fit_the_password_field() {
        let mut c = GameConfig::new();
        assert!(c.set_secret(&"a".repeat(TEXT_ENTRY_CAPACITY + 1)).is_err());
        assert!(c.set_secret("").is_err());
        assert!(c.set_secret("be\tmine").is_err());
        assert_eq!(c.secret, "be mine");

        let exact = "a".repeat(TEXT_ENTRY_CAPACITY);
        assert!(c.set_secret(&exact).is_ok());
        assert_eq!(c.secret, exact);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let mut c = GameConfig::with_path("/definitely/not/here/config.ini");
        assert!(c.load_from_file().is_err());
        assert_eq!(c.player, GameConfig::new().player);
    }

    #[test]
    fn test_save_then_load_file() {
        let path = std::env::temp_dir().join(format!(
            "heartfloat-config-{}.ini",
            std::process::id()
        ));
        let mut original = GameConfig::with_path(&path);
        original.player.speed = 111.0;
        original.secret = "hello there".to_string();
        original.save_to_file().unwrap();

        let mut loaded = GameConfig::with_path(&path);
        loaded.load_from_file().unwrap();
        let _ = std::fs::remove_file(&path);

        assert!(approx_eq(loaded.player.speed, 111.0));
        assert_eq!(loaded.secret, "hello there");
        assert_eq!(loaded.overlay, original.overlay);
    }
}
