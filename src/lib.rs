//! Pocket Arena: a minimal real-time 2D game loop
//!
//! A player, a handful of enemies, health and movement components, and a
//! `GameMode` that ticks and draws them once per frame. Windowing, input,
//! drawing and randomness come from macroquad through the `platform` seam.

pub mod config;
pub mod game;
pub mod platform;

pub use config::{ConfigError, GameConfig};
pub use game::{ActorId, GameMode};
pub use platform::{MacroquadPlatform, Platform};
