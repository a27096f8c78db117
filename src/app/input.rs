//! Keyboard input state
//!
//! Translates winit key events into an engine-side key set queried by the
//! demo's update callback. `just_pressed` edges are cleared at the end of
//! each frame.

use std::collections::HashSet;

use winit::keyboard::{KeyCode, PhysicalKey};

/// Keyboard key enumeration (platform-agnostic).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    A,
    B,
    C,
    D,
    G,
    Q,
    R,
    S,
    Key1,
    Key2,
    Key3,
    Space,
    Escape,
}

/// Maps a winit physical key to the engine key set.
#[must_use]
pub fn translate_key(physical_key: PhysicalKey) -> Option<Key> {
    let PhysicalKey::Code(code) = physical_key else {
        return None;
    };

    match code {
        KeyCode::KeyA => Some(Key::A),
        KeyCode::KeyB => Some(Key::B),
        KeyCode::KeyC => Some(Key::C),
        KeyCode::KeyD => Some(Key::D),
        KeyCode::KeyG => Some(Key::G),
        KeyCode::KeyQ => Some(Key::Q),
        KeyCode::KeyR => Some(Key::R),
        KeyCode::KeyS => Some(Key::S),
        KeyCode::Digit1 => Some(Key::Key1),
        KeyCode::Digit2 => Some(Key::Key2),
        KeyCode::Digit3 => Some(Key::Key3),
        KeyCode::Space => Some(Key::Space),
        KeyCode::Escape => Some(Key::Escape),
        _ => None,
    }
}

#[derive(Debug, Default)]
pub struct Input {
    pressed_keys: HashSet<Key>,
    just_pressed_keys: HashSet<Key>,
}

impl Input {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a key state change from the windowing layer.
    pub fn inject_key(&mut self, key: Key, pressed: bool) {
        if pressed {
            if self.pressed_keys.insert(key) {
                self.just_pressed_keys.insert(key);
            }
        } else {
            self.pressed_keys.remove(&key);
        }
    }

    /// Frame-end cleanup: clears the just-pressed edge set.
    pub fn start_frame(&mut self) {
        self.just_pressed_keys.clear();
    }

    #[must_use]
    pub fn is_pressed(&self, key: Key) -> bool {
        self.pressed_keys.contains(&key)
    }

    /// True only on the frame the key went down.
    #[must_use]
    pub fn just_pressed(&self, key: Key) -> bool {
        self.just_pressed_keys.contains(&key)
    }
}
