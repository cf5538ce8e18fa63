//! Headless platform for tests
//!
//! Input is scripted, draw calls are recorded, and the RNG is seeded so
//! spawn placement is reproducible. `capture_logs` collects the log lines
//! emitted on the calling thread, for asserting on lifecycle traces.

use std::cell::RefCell;
use std::sync::Once;

use macroquad::color::Color;
use macroquad::math::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{Action, Canvas, Input, Platform, Random};

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Rectangle { x: f32, y: f32, w: f32, h: f32, color: Color },
    Circle { x: f32, y: f32, radius: f32, color: Color },
    CircleLines { x: f32, y: f32, radius: f32, color: Color },
    Line { from: Vec2, to: Vec2, color: Color },
    Text { text: String, x: f32, y: f32, font_size: f32, color: Color },
    Clear { color: Color },
}

pub struct RecordingPlatform {
    held: Vec<Action>,
    pressed: Vec<Action>,
    pub frame_time: f32,
    pub calls: Vec<DrawCall>,
    rng: StdRng,
}

impl RecordingPlatform {
    pub fn new() -> Self {
        Self::with_seed(7)
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            held: Vec::new(),
            pressed: Vec::new(),
            frame_time: 1.0 / 60.0,
            calls: Vec::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn hold(&mut self, action: Action) {
        if !self.held.contains(&action) {
            self.held.push(action);
        }
    }

    pub fn release_all(&mut self) {
        self.held.clear();
        self.pressed.clear();
    }

    /// Press for exactly one query window; call `end_frame` to clear.
    pub fn press(&mut self, action: Action) {
        if !self.pressed.contains(&action) {
            self.pressed.push(action);
        }
    }

    /// Drop edge-triggered presses, as a real keyboard would after a frame.
    pub fn end_frame(&mut self) {
        self.pressed.clear();
    }

    pub fn take_calls(&mut self) -> Vec<DrawCall> {
        std::mem::take(&mut self.calls)
    }

    pub fn texts(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Default for RecordingPlatform {
    fn default() -> Self {
        Self::new()
    }
}

impl Input for RecordingPlatform {
    fn action_down(&self, action: Action) -> bool {
        self.held.contains(&action)
    }

    fn action_pressed(&self, action: Action) -> bool {
        self.pressed.contains(&action)
    }
}

impl Canvas for RecordingPlatform {
    fn draw_rectangle(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        self.calls.push(DrawCall::Rectangle { x, y, w, h, color });
    }

    fn draw_circle(&mut self, x: f32, y: f32, radius: f32, color: Color) {
        self.calls.push(DrawCall::Circle { x, y, radius, color });
    }

    fn draw_circle_lines(&mut self, x: f32, y: f32, radius: f32, _thickness: f32, color: Color) {
        self.calls.push(DrawCall::CircleLines { x, y, radius, color });
    }

    fn draw_line(&mut self, from: Vec2, to: Vec2, _thickness: f32, color: Color) {
        self.calls.push(DrawCall::Line { from, to, color });
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, font_size: f32, color: Color) {
        self.calls.push(DrawCall::Text {
            text: text.to_string(),
            x,
            y,
            font_size,
            color,
        });
    }
}

impl Random for RecordingPlatform {
    fn range_i32(&mut self, low: i32, high: i32) -> i32 {
        if high <= low {
            return low;
        }
        self.rng.gen_range(low..=high)
    }
}

impl Platform for RecordingPlatform {
    fn frame_time(&self) -> f32 {
        self.frame_time
    }

    fn clear(&mut self, color: Color) {
        self.calls.push(DrawCall::Clear { color });
    }
}

thread_local! {
    static CAPTURED: RefCell<Option<Vec<String>>> = RefCell::new(None);
}

struct CaptureLogger;

impl log::Log for CaptureLogger {
    fn enabled(&self, _metadata: &log::Metadata) -> bool {
        true
    }

    fn log(&self, record: &log::Record) {
        CAPTURED.with(|captured| {
            if let Some(lines) = captured.borrow_mut().as_mut() {
                lines.push(record.args().to_string());
            }
        });
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger;

/// Run `f` and return every log message it emitted on this thread.
pub fn capture_logs(f: impl FnOnce()) -> Vec<String> {
    static INSTALL: Once = Once::new();
    INSTALL.call_once(|| {
        if log::set_logger(&LOGGER).is_ok() {
            log::set_max_level(log::LevelFilter::Info);
        }
    });

    CAPTURED.with(|captured| *captured.borrow_mut() = Some(Vec::new()));
    f();
    CAPTURED.with(|captured| captured.borrow_mut().take().unwrap_or_default())
}
