//! Keyboard state to paddle intent
//!
//! Platforms forward key-down/key-up events by key name; the simulation
//! only ever sees the resulting [`PaddleIntent`].

use serde::{Deserialize, Serialize};

use crate::sim::{PaddleIntent, TickInput};

/// Keys that steer the paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    Left,
    Right,
}

impl Key {
    /// Map a DOM-style key name; unrelated keys give `None`
    pub fn from_key_name(name: &str) -> Option<Self> {
        match name {
            "ArrowLeft" | "Left" => Some(Key::Left),
            "ArrowRight" | "Right" => Some(Key::Right),
            _ => None,
        }
    }
}

/// Which steering keys are currently held
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyState {
    pub left_pressed: bool,
    pub right_pressed: bool,
}

impl KeyState {
    pub fn press(&mut self, key: Key) {
        match key {
            Key::Left => self.left_pressed = true,
            Key::Right => self.right_pressed = true,
        }
    }

    pub fn release(&mut self, key: Key) {
        match key {
            Key::Left => self.left_pressed = false,
            Key::Right => self.right_pressed = false,
        }
    }

    /// Handle a raw key-down event. Returns false for keys that don't steer.
    pub fn key_down(&mut self, name: &str) -> bool {
        match Key::from_key_name(name) {
            Some(key) => {
                self.press(key);
                true
            }
            None => false,
        }
    }

    /// Handle a raw key-up event. Returns false for keys that don't steer.
    pub fn key_up(&mut self, name: &str) -> bool {
        match Key::from_key_name(name) {
            Some(key) => {
                self.release(key);
                true
            }
            None => false,
        }
    }

    /// Right wins when both keys are held
    pub fn intent(&self) -> PaddleIntent {
        if self.right_pressed {
            PaddleIntent::Right
        } else if self.left_pressed {
            PaddleIntent::Left
        } else {
            PaddleIntent::None
        }
    }

    pub fn tick_input(&self) -> TickInput {
        TickInput::new(self.intent())
    }
}
