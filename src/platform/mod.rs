//! Platform seam
//!
//! The game core never calls macroquad's immediate-mode functions
//! directly. It sees the window, keyboard, renderer and RNG through three
//! small capability traits:
//! - `Input`: held / just-pressed actions
//! - `Canvas`: shapes and text
//! - `Random`: inclusive integer ranges (enemy placement)
//!
//! `MacroquadPlatform` is the real thing. Tests use `RecordingPlatform`,
//! which scripts input and records every draw call.

mod actions;
mod native;
#[cfg(test)]
mod recording;

pub use actions::Action;
pub use native::MacroquadPlatform;
#[cfg(test)]
pub use recording::{capture_logs, DrawCall, RecordingPlatform};

use macroquad::color::Color;
use macroquad::math::Vec2;

/// Discrete key state, already mapped to game actions.
pub trait Input {
    /// Held this frame
    fn action_down(&self, action: Action) -> bool;
    /// Went down this frame
    fn action_pressed(&self, action: Action) -> bool;
}

/// Immediate-mode draw calls. Coordinates are play-area pixels.
pub trait Canvas {
    fn draw_rectangle(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color);
    fn draw_circle(&mut self, x: f32, y: f32, radius: f32, color: Color);
    fn draw_circle_lines(&mut self, x: f32, y: f32, radius: f32, thickness: f32, color: Color);
    fn draw_line(&mut self, from: Vec2, to: Vec2, thickness: f32, color: Color);
    fn draw_text(&mut self, text: &str, x: f32, y: f32, font_size: f32, color: Color);
}

pub trait Random {
    /// Uniform integer in `low..=high`.
    fn range_i32(&mut self, low: i32, high: i32) -> i32;
}

/// Everything the frame loop needs from the host.
pub trait Platform: Input + Canvas + Random {
    /// Seconds elapsed since the previous frame
    fn frame_time(&self) -> f32;
    fn clear(&mut self, color: Color);
}
