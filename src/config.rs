//! Game configuration
//!
//! Tunables live in a RON file so they can be tweaked without a rebuild.
//! Every section has defaults, so a file only needs the values it changes:
//!
//! ```ron
//! (
//!     window: (title: "Arena", width: 1024, height: 768),
//!     enemy: (count: 12, draw_target_lines: true),
//! )
//! ```

use std::fs;
use std::path::Path;

use log::{info, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Largest accepted window side, in pixels
pub const MAX_WINDOW_SIZE: u32 = 16_384;

/// Error type for config loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("Validation error: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowSettings,
    pub player: PlayerSettings,
    pub enemy: EnemySettings,
}

/// Window size doubles as the play area: `[0, width] x [0, height]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerSettings {
    pub name: String,
    /// Units per second along each held axis
    pub speed: f32,
    pub max_health: f32,
    /// Applied by the debug damage key
    pub debug_damage: f32,
    /// Applied by the debug heal key
    pub debug_heal: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemySettings {
    pub name: String,
    /// How many enemies the default scene spawns
    pub count: u32,
    pub speed: f32,
    pub max_health: f32,
    /// Keep-out band along the play-area edges for spawn placement
    pub spawn_margin: f32,
    /// Closer than this to the target counts as "in range"
    pub attack_range: f32,
    /// Invincibility granted after a non-lethal hit, in seconds
    pub hit_invincibility: f32,
    /// Debug line from each enemy to its target
    pub draw_target_lines: bool,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: "Pocket Arena".to_string(),
            width: 800,
            height: 600,
        }
    }
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            name: "Player".to_string(),
            speed: 200.0,
            max_health: 150.0,
            debug_damage: 20.0,
            debug_heal: 20.0,
        }
    }
}

impl Default for EnemySettings {
    fn default() -> Self {
        Self {
            name: "Enemy".to_string(),
            count: 5,
            speed: 50.0,
            max_health: 50.0,
            spawn_margin: 50.0,
            attack_range: 5.0,
            hit_invincibility: 0.5,
            draw_target_lines: false,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window: WindowSettings::default(),
            player: PlayerSettings::default(),
            enemy: EnemySettings::default(),
        }
    }
}

impl GameConfig {
    /// Read, parse and validate a RON config file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path.as_ref())?;
        Self::from_ron(&contents)
    }

    pub fn from_ron(contents: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = ron::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Like `load`, but any failure falls back to defaults with a warning.
    /// `None` means "no config file", which is not an error.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };

        match Self::load(path) {
            Ok(config) => {
                info!("loaded config from {}", path.display());
                config
            }
            Err(e) => {
                warn!("failed to load config {}: {}, using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let window = &self.window;
        if window.width == 0 || window.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "window size must be positive ({}x{})",
                window.width, window.height
            )));
        }
        if window.width > MAX_WINDOW_SIZE || window.height > MAX_WINDOW_SIZE {
            return Err(ConfigError::Invalid(format!(
                "window size {}x{} exceeds {} per side",
                window.width, window.height, MAX_WINDOW_SIZE
            )));
        }

        let player = &self.player;
        check_positive("player.speed", player.speed)?;
        check_positive("player.max_health", player.max_health)?;
        check_non_negative("player.debug_damage", player.debug_damage)?;
        check_non_negative("player.debug_heal", player.debug_heal)?;

        let enemy = &self.enemy;
        check_positive("enemy.speed", enemy.speed)?;
        check_positive("enemy.max_health", enemy.max_health)?;
        check_non_negative("enemy.spawn_margin", enemy.spawn_margin)?;
        check_non_negative("enemy.attack_range", enemy.attack_range)?;
        check_non_negative("enemy.hit_invincibility", enemy.hit_invincibility)?;

        let smallest_side = window.width.min(window.height) as f32;
        if enemy.spawn_margin * 2.0 >= smallest_side {
            return Err(ConfigError::Invalid(format!(
                "enemy.spawn_margin {} leaves no room to spawn in a {}x{} area",
                enemy.spawn_margin, window.width, window.height
            )));
        }

        Ok(())
    }

    pub fn play_area(&self) -> PlayArea {
        PlayArea {
            width: self.window.width as f32,
            height: self.window.height as f32,
        }
    }
}

fn check_positive(field: &str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid(format!("{} must be positive, got {}", field, value)))
    }
}

fn check_non_negative(field: &str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid(format!("{} must not be negative, got {}", field, value)))
    }
}

/// The rectangle actors live in, anchored at the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayArea {
    pub width: f32,
    pub height: f32,
}

impl PlayArea {
    pub fn center(&self) -> macroquad::math::Vec2 {
        macroquad::math::Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}
