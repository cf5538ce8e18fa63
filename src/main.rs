//! Pocket Arena host loop
//!
//! Opens the window, builds the `GameMode`, and pumps one
//! input / update / draw frame per vsync until the window closes.
//!
//! Usage: `pocket-arena [config.ron]`. Without an argument the per-user
//! config file is used if present, otherwise built-in defaults.

use std::path::PathBuf;

use log::info;
use macroquad::prelude::{
    get_fps, is_key_pressed, is_quit_requested, next_frame, prevent_quit, Color, Conf, KeyCode, DARKGRAY,
};

use pocket_arena::platform::Canvas;
use pocket_arena::{GameConfig, GameMode, MacroquadPlatform, Platform};

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

const BACKGROUND: Color = Color::new(0.96, 0.96, 0.96, 1.0);

fn window_conf(config: &GameConfig) -> Conf {
    Conf {
        window_title: format!("{} v{}", config.window.title, VERSION),
        // Sides are capped at MAX_WINDOW_SIZE by validation
        window_width: config.window.width as i32,
        window_height: config.window.height as i32,
        // Play area is the window; resizing would desync the bounds
        window_resizable: false,
        ..Default::default()
    }
}

fn config_path() -> Option<PathBuf> {
    if let Some(arg) = std::env::args_os().nth(1) {
        return Some(PathBuf::from(arg));
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let path = dirs::config_dir()?.join("pocket-arena").join("config.ron");
        if path.exists() {
            return Some(path);
        }
    }

    None
}

fn main() {
    // Crash logging and the logger come up before anything else
    #[cfg(not(target_arch = "wasm32"))]
    {
        crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);
        pretty_env_logger::init();
    }

    let config = GameConfig::load_or_default(config_path().as_deref());
    macroquad::Window::from_config(window_conf(&config), run(config));
}

async fn run(config: GameConfig) {
    // Close requests come back to us so actors are torn down in order
    prevent_quit();

    let mut game = GameMode::new(MacroquadPlatform::new(), config);
    game.spawn_default_actors();

    info!("=== Pocket Arena v{} ===", VERSION);

    loop {
        if is_quit_requested() || is_key_pressed(KeyCode::Escape) {
            break;
        }

        game.platform_mut().clear(BACKGROUND);
        game.frame();

        let fps = format!("FPS: {}", get_fps());
        game.platform_mut().draw_text(&fps, 10.0, 10.0, 20.0, DARKGRAY);

        next_frame().await;
    }

    game.clear_actors();
    info!("shutting down");
}
