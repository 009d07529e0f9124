// Input manager - routes window key events to player actions

use super::action::Action;
use super::config::{default_config, InputConfig};
use super::player::PlayerInput;
use std::collections::HashSet;
use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Turns raw key events into the player's action state
pub struct InputManager {
    config: InputConfig,

    /// Physical keys currently held
    held_keys: HashSet<KeyCode>,

    player: PlayerInput,
}

impl InputManager {
    pub fn new(config: InputConfig) -> Self {
        Self {
            config,
            held_keys: HashSet::new(),
            player: PlayerInput::new(),
        }
    }

    /// Process a keyboard event from winit
    pub fn process_keyboard_event(&mut self, event: &KeyEvent) {
        if let PhysicalKey::Code(key_code) = event.physical_key {
            self.process_key(key_code, event.state, event.repeat);
        }
    }

    /// Apply one key transition. OS auto-repeat is ignored.
    pub fn process_key(&mut self, key: KeyCode, state: ElementState, repeat: bool) {
        if repeat {
            return;
        }

        match state {
            ElementState::Pressed => {
                self.held_keys.insert(key);
            }
            ElementState::Released => {
                self.held_keys.remove(&key);
            }
        }

        let Some(action) = self.config.get_action(key) else {
            return;
        };

        match state {
            ElementState::Pressed => self.player.press(action),
            // Another key bound to the same action keeps it held
            ElementState::Released if !self.any_key_held(action) => self.player.release(action),
            ElementState::Released => {}
        }
    }

    fn any_key_held(&self, action: Action) -> bool {
        self.config
            .get_keys(action)
            .iter()
            .any(|key| self.held_keys.contains(key))
    }

    /// Close out a simulation tick. Call once after every game update.
    pub fn update(&mut self) {
        self.player.update();
    }

    /// Forget every held key, e.g. on focus loss when releases would be missed
    pub fn reset(&mut self) {
        self.held_keys.clear();
        self.player.reset();
    }

    /// Get the player's action state
    pub fn player(&self) -> &PlayerInput {
        &self.player
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new(default_config())
    }
}
