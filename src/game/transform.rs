//! 2D Transform
//!
//! Every actor carries one. Rotation is part of the contract but none of
//! the current actors read it.

use macroquad::math::Vec2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec2,
    /// Radians
    pub rotation: f32,
    pub scale: Vec2,
}

impl Transform {
    /// Origin, no rotation, unit scale
    pub const IDENTITY: Transform = Transform {
        position: Vec2::ZERO,
        rotation: 0.0,
        scale: Vec2::ONE,
    };

    pub fn from_position(position: Vec2) -> Self {
        Self {
            position,
            ..Self::IDENTITY
        }
    }

    pub fn translate(&mut self, offset: Vec2) {
        self.position += offset;
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}
