// Game action definitions and default key bindings

use winit::keyboard::KeyCode;

/// Everything the player can ask the character to do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    MoveLeft,
    MoveRight,
    Jump,
}

impl Action {
    #[cfg(test)]
    pub const ALL: [Action; 3] = [Action::MoveLeft, Action::MoveRight, Action::Jump];
}

/// Default keyboard bindings: WASD-style letters plus arrow keys, space to jump
pub fn default_bindings() -> Vec<(KeyCode, Action)> {
    vec![
        (KeyCode::KeyA, Action::MoveLeft),
        (KeyCode::ArrowLeft, Action::MoveLeft),
        (KeyCode::KeyD, Action::MoveRight),
        (KeyCode::ArrowRight, Action::MoveRight),
        (KeyCode::Space, Action::Jump),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_action_has_a_binding() {
        let bindings = default_bindings();
        for action in Action::ALL {
            assert!(
                bindings.iter().any(|(_, a)| *a == action),
                "{:?} has no default key",
                action
            );
        }
    }

    #[test]
    fn test_arrow_and_letter_keys_share_actions() {
        let bindings = default_bindings();
        let left: Vec<_> = bindings
            .iter()
            .filter(|(_, a)| *a == Action::MoveLeft)
            .map(|(k, _)| *k)
            .collect();
        assert_eq!(left, vec![KeyCode::KeyA, KeyCode::ArrowLeft]);
    }

    #[test]
    fn test_no_duplicate_keys() {
        let mut seen = HashSet::new();
        for (key, _) in default_bindings() {
            assert!(seen.insert(key), "Duplicate key {:?} in default bindings", key);
        }
    }
}
