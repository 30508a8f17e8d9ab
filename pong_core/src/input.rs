//! Input intents
//!
//! The host captures devices; the engine only sees intents. Key names follow
//! the DOM `KeyboardEvent.key` values.

use serde::{Deserialize, Serialize};

/// Which device drives the player's paddle target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlMode {
    /// Mouse or touch position sets a target Y
    #[default]
    Pointer,
    /// Up/down keys or on-screen buttons only
    Discrete,
}

/// Held up/down movement intents
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveIntent {
    pub up: bool,
    pub down: bool,
}

impl MoveIntent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.up || self.down
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Direction bound to a key, if any
fn key_direction(key: &str) -> Option<Direction> {
    match key {
        "ArrowUp" | "w" | "W" => Some(Direction::Up),
        "ArrowDown" | "s" | "S" => Some(Direction::Down),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Up,
    Down,
}

/// Apply a key press or release. Returns false for unbound keys.
pub fn handle_key(key: &str, pressed: bool, intent: &mut MoveIntent) -> bool {
    match key_direction(key) {
        Some(Direction::Up) => {
            intent.up = pressed;
            true
        }
        Some(Direction::Down) => {
            intent.down = pressed;
            true
        }
        None => false,
    }
}
