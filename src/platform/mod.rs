//! Platform abstraction layer
//!
//! Host input events (mouse, touch, keyboard) land in an [`InputState`],
//! which the simulation reads synchronously through [`InputProvider`].

use serde::{Deserialize, Serialize};

/// Which device is steering the net
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InputMode {
    /// Net follows the pointer (mouse or touch)
    #[default]
    Pointer,
    /// Net moves while arrow/A/D keys are held
    Keyboard,
}

/// Read-only view of the current input, sampled once per tick
pub trait InputProvider {
    /// Pointer x in canvas coordinates; `None` until the pointer first moves
    fn pointer_x(&self) -> Option<f32>;
    /// Active input mode
    fn mode(&self) -> InputMode;
    /// Left key held
    fn left_held(&self) -> bool;
    /// Right key held
    fn right_held(&self) -> bool;
}

/// Logical direction keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectionKey {
    Left,
    Right,
}

impl DirectionKey {
    /// Map a DOM `KeyboardEvent.key` value
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" | "a" | "A" => Some(DirectionKey::Left),
            "ArrowRight" | "d" | "D" => Some(DirectionKey::Right),
            _ => None,
        }
    }
}

/// Input state written by host events
#[derive(Debug, Clone, Default)]
pub struct InputState {
    pointer_x: Option<f32>,
    mode: InputMode,
    left: bool,
    right: bool,
}

impl InputState {
    pub fn new(mode: InputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Pointer moved (mouse move, touch move/start); switches to pointer mode
    pub fn pointer_moved(&mut self, x: f32) {
        self.pointer_x = Some(x);
        self.mode = InputMode::Pointer;
    }

    /// Key pressed or released; direction keys switch to keyboard mode
    pub fn key_changed(&mut self, key: DirectionKey, down: bool) {
        match key {
            DirectionKey::Left => self.left = down,
            DirectionKey::Right => self.right = down,
        }
        if down {
            self.mode = InputMode::Keyboard;
        }
    }

    /// Drop held keys (window blur never delivers keyup)
    pub fn release_all(&mut self) {
        self.left = false;
        self.right = false;
    }
}

impl InputProvider for InputState {
    fn pointer_x(&self) -> Option<f32> {
        self.pointer_x
    }

    fn mode(&self) -> InputMode {
        self.mode
    }

    fn left_held(&self) -> bool {
        self.left
    }

    fn right_held(&self) -> bool {
        self.right
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_mapping() {
        assert_eq!(DirectionKey::from_key("ArrowLeft"), Some(DirectionKey::Left));
        assert_eq!(DirectionKey::from_key("d"), Some(DirectionKey::Right));
        assert_eq!(DirectionKey::from_key(" "), None);
    }

    #[test]
    fn test_mode_follows_last_device() {
        let mut input = InputState::new(InputMode::Pointer);
        input.key_changed(DirectionKey::Left, true);
        assert_eq!(input.mode(), InputMode::Keyboard);
        assert!(input.left_held());

        // Releasing a key does not switch modes
        input.key_changed(DirectionKey::Left, false);
        assert_eq!(input.mode(), InputMode::Keyboard);
        assert!(!input.left_held());

        input.pointer_moved(320.0);
        assert_eq!(input.mode(), InputMode::Pointer);
        assert_eq!(input.pointer_x(), Some(320.0));
    }

    #[test]
    fn test_no_pointer_position_before_first_move() {
        let input = InputState::default();
        assert_eq!(input.mode(), InputMode::Pointer);
        assert_eq!(input.pointer_x(), None);
    }

    #[test]
    fn test_release_all() {
        let mut input = InputState::default();
        input.key_changed(DirectionKey::Left, true);
        input.key_changed(DirectionKey::Right, true);
        input.release_all();
        assert!(!input.left_held());
        assert!(!input.right_held());
    }
}
