//! macroquad-backed platform
//!
//! Thin forwarding layer. Only valid inside a running macroquad window.

use macroquad::color::Color;
use macroquad::input::{is_key_down, is_key_pressed};
use macroquad::math::Vec2;
use macroquad::shapes;
use macroquad::text;
use macroquad::time::get_frame_time;
use macroquad::window::clear_background;

use super::{Action, Canvas, Input, Platform, Random};

/// The live window, keyboard and RNG.
pub struct MacroquadPlatform {
    _private: (),
}

impl MacroquadPlatform {
    /// Seeds macroquad's RNG from the wall clock so enemy placement
    /// differs between runs.
    pub fn new() -> Self {
        macroquad::rand::srand(macroquad::miniquad::date::now() as u64);
        Self { _private: () }
    }
}

impl Default for MacroquadPlatform {
    fn default() -> Self {
        Self::new()
    }
}

impl Input for MacroquadPlatform {
    fn action_down(&self, action: Action) -> bool {
        action.keys().iter().any(|&key| is_key_down(key))
    }

    fn action_pressed(&self, action: Action) -> bool {
        action.keys().iter().any(|&key| is_key_pressed(key))
    }
}

impl Canvas for MacroquadPlatform {
    fn draw_rectangle(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        shapes::draw_rectangle(x, y, w, h, color);
    }

    fn draw_circle(&mut self, x: f32, y: f32, radius: f32, color: Color) {
        shapes::draw_circle(x, y, radius, color);
    }

    fn draw_circle_lines(&mut self, x: f32, y: f32, radius: f32, thickness: f32, color: Color) {
        shapes::draw_circle_lines(x, y, radius, thickness, color);
    }

    fn draw_line(&mut self, from: Vec2, to: Vec2, thickness: f32, color: Color) {
        shapes::draw_line(from.x, from.y, to.x, to.y, thickness, color);
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, font_size: f32, color: Color) {
        // Callers pass the top edge; macroquad wants the baseline
        text::draw_text(text, x, y + font_size * 0.75, font_size, color);
    }
}

impl Random for MacroquadPlatform {
    fn range_i32(&mut self, low: i32, high: i32) -> i32 {
        if high <= low {
            return low;
        }
        // gen_range excludes the upper bound for integers
        macroquad::rand::gen_range(low, high + 1)
    }
}

impl Platform for MacroquadPlatform {
    fn frame_time(&self) -> f32 {
        get_frame_time()
    }

    fn clear(&mut self, color: Color) {
        clear_background(color);
    }
}
