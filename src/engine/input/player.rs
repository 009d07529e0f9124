// Per-tick action state for the player

use super::action::Action;
use std::collections::HashSet;

/// Which actions are held, and which changed since the last tick
#[derive(Debug, Default)]
pub struct PlayerInput {
    /// Actions currently held
    pressed: HashSet<Action>,

    /// Actions that went down since the last tick
    just_pressed: HashSet<Action>,

    /// Actions that went up since the last tick
    just_released: HashSet<Action>,
}

impl PlayerInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if an action is currently held
    pub fn is_pressed(&self, action: Action) -> bool {
        self.pressed.contains(&action)
    }

    /// Check if an action went down since the last tick (edge-triggered)
    pub fn just_pressed(&self, action: Action) -> bool {
        self.just_pressed.contains(&action)
    }

    /// Check if an action went up since the last tick
    #[cfg(test)]
    pub fn just_released(&self, action: Action) -> bool {
        self.just_released.contains(&action)
    }

    /// Register an action press. Pressing an already held action is not an edge.
    pub fn press(&mut self, action: Action) {
        if self.pressed.insert(action) {
            self.just_pressed.insert(action);
        }
    }

    /// Register an action release
    pub fn release(&mut self, action: Action) {
        if self.pressed.remove(&action) {
            self.just_released.insert(action);
        }
    }

    /// Close out a tick: edges have been seen, only held state carries over
    pub fn update(&mut self) {
        self.just_pressed.clear();
        self.just_released.clear();
    }

    /// Drop all input state (e.g. when the window loses focus)
    pub fn reset(&mut self) {
        self.pressed.clear();
        self.just_pressed.clear();
        self.just_released.clear();
    }

    /// Horizontal direction from held actions: -1, 0 or 1.
    /// Left wins when both directions are held.
    pub fn horizontal(&self) -> f32 {
        if self.is_pressed(Action::MoveLeft) {
            -1.0
        } else if self.is_pressed(Action::MoveRight) {
            1.0
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_action() {
        let mut input = PlayerInput::new();
        input.press(Action::Jump);
        assert!(input.is_pressed(Action::Jump));
        assert!(input.just_pressed(Action::Jump));
    }

    #[test]
    fn test_release_action() {
        let mut input = PlayerInput::new();
        input.press(Action::Jump);
        input.update();
        input.release(Action::Jump);
        assert!(!input.is_pressed(Action::Jump));
        assert!(input.just_released(Action::Jump));
    }

    #[test]
    fn test_just_pressed_cleared_on_update() {
        let mut input = PlayerInput::new();
        input.press(Action::Jump);
        input.update();
        assert!(input.is_pressed(Action::Jump));
        assert!(!input.just_pressed(Action::Jump));
    }

    #[test]
    fn test_repeat_press_is_not_an_edge() {
        let mut input = PlayerInput::new();
        input.press(Action::Jump);
        input.update();
        input.press(Action::Jump);
        assert!(!input.just_pressed(Action::Jump));
    }

    #[test]
    fn test_release_unpressed_action() {
        let mut input = PlayerInput::new();
        input.release(Action::Jump);
        assert!(!input.just_released(Action::Jump));
    }

    #[test]
    fn test_horizontal() {
        let mut input = PlayerInput::new();
        assert_eq!(input.horizontal(), 0.0);

        input.press(Action::MoveRight);
        assert_eq!(input.horizontal(), 1.0);

        input.press(Action::MoveLeft);
        assert_eq!(input.horizontal(), -1.0);

        input.release(Action::MoveLeft);
        assert_eq!(input.horizontal(), 1.0);
    }

    #[test]
    fn test_reset() {
        let mut input = PlayerInput::new();
        input.press(Action::MoveLeft);
        input.press(Action::Jump);
        input.reset();

        assert!(!input.is_pressed(Action::MoveLeft));
        assert!(!input.just_pressed(Action::Jump));
    }
}
