//! Heartfloat main entry point.
//!
//! A small side-view scene built with:
//! - **raylib** for windowing, input and drawing
//! - **bevy_ecs** for the entity-component-system simulation
//!
//! Walk with A/D, jump with W, grab the balloon with E to float up to the
//! envelope, or carry the key to the chest and enter the password.
//!
//! # Main Loop
//!
//! 1. Parse the CLI, load `config.ini` and the optional scene layout
//! 2. Build the [`Game`](heartfloat::game::Game) and open the window
//! 3. Every frame: poll the keyboard, tick the game, draw
//!
//! # Running
//!
//! ```sh
//! cargo run --release --features window -- --config ./config.ini
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use clap::Parser;
use log::{error, info, warn};
use raylib::prelude::*;
use std::path::PathBuf;

use heartfloat::frontend::keyboard::KeyboardPoller;
use heartfloat::frontend::render::{fit_camera, render_overlay, render_scene};
use heartfloat::game::Game;
use heartfloat::resources::gameconfig::GameConfig;
use heartfloat::resources::playarea::PlayArea;
use heartfloat::resources::scenelayout::SceneLayout;

/// Heartfloat: walk, float with a balloon, unlock the chest.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// INI file with tuning values (missing keys keep their defaults).
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// JSON file placing the scene's entities.
    #[arg(long, value_name = "PATH")]
    layout: Option<PathBuf>,

    /// Basic scene: balloon and envelope only, no key or chest.
    #[arg(long)]
    basic: bool,

    /// Override the chest password.
    #[arg(long, value_name = "TEXT")]
    secret: Option<String>,

    /// Write the effective configuration to the config path and exit.
    #[arg(long)]
    write_config: bool,

    /// Write the effective scene layout as JSON to PATH and exit.
    #[arg(long, value_name = "PATH")]
    write_layout: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = GameConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        warn!("{}; using defaults", e);
    }
    if cli.basic {
        config.scene.extended = false;
    }
    if let Some(secret) = cli.secret
        && let Err(e) = config.set_secret(&secret)
    {
        error!("--secret: {}", e);
        std::process::exit(1);
    }

    // Early-exit: write the config and quit (no window needed)
    if cli.write_config {
        if let Err(e) = config.save_to_file() {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
        println!("Config written to {}", config.config_path.display());
        return;
    }

    let mut layout = match cli.layout {
        Some(path) => SceneLayout::load_from_file(&path).unwrap_or_else(|e| {
            warn!("{}; using the default layout", e);
            SceneLayout::from_config(&config)
        }),
        None => SceneLayout::from_config(&config),
    };
    if !config.scene.extended {
        layout = layout.without_extended();
    }

    if let Some(path) = cli.write_layout {
        let written = layout
            .to_json()
            .and_then(|json| std::fs::write(&path, json).map_err(|e| e.to_string()));
        if let Err(e) = written {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
        println!("Layout written to {}", path.display());
        return;
    }

    let window = config.window.clone();
    let mut game = match Game::new(config, layout) {
        Ok(game) => game,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    // --------------- Raylib window ---------------
    let (mut rl, thread) = raylib::init()
        .size(window.width as i32, window.height as i32)
        .resizable()
        .title("Heartfloat")
        .build();
    rl.set_target_fps(window.target_fps);
    // Escape closes overlays, not the window
    rl.set_exit_key(None);
    info!("Window open: {}x{}", window.width, window.height);

    let mut keyboard = KeyboardPoller::default();

    // --------------- Main loop ---------------
    while !rl.window_should_close() {
        keyboard.poll(&mut rl, &mut game);

        let dt = rl.get_frame_time();
        game.tick(dt);

        let area = *game.world().resource::<PlayArea>();
        let camera = fit_camera(
            &area,
            rl.get_screen_width() as f32,
            rl.get_screen_height() as f32,
        );
        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::BLACK);
        {
            let mut d2 = d.begin_mode2D(camera);
            render_scene(game.world_mut(), &mut d2);
            render_overlay(game.world_mut(), &mut d2);
        }
    }
    info!("Bye");
}
