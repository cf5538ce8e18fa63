//! Game action definitions
//!
//! Gameplay code asks about actions, never about physical keys. The
//! native platform owns the key bindings.

use macroquad::input::KeyCode;

/// Every logical input the game reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // Movement (held)
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,

    // System (edge-triggered)
    TogglePause,

    // Debug triggers (edge-triggered)
    DebugDamage,
    DebugHeal,
}

impl Action {
    pub const ALL: [Action; 7] = [
        Action::MoveUp,
        Action::MoveDown,
        Action::MoveLeft,
        Action::MoveRight,
        Action::TogglePause,
        Action::DebugDamage,
        Action::DebugHeal,
    ];

    /// Keyboard bindings. Movement answers to both arrows and WASD.
    pub fn keys(&self) -> &'static [KeyCode] {
        match self {
            Action::MoveUp => &[KeyCode::Up, KeyCode::W],
            Action::MoveDown => &[KeyCode::Down, KeyCode::S],
            Action::MoveLeft => &[KeyCode::Left, KeyCode::A],
            Action::MoveRight => &[KeyCode::Right, KeyCode::D],
            Action::TogglePause => &[KeyCode::P],
            Action::DebugDamage => &[KeyCode::H],
            Action::DebugHeal => &[KeyCode::R],
        }
    }
}
