// Key binding table with reverse lookups

use super::action::{default_bindings, Action};
use std::collections::HashMap;
use winit::keyboard::KeyCode;

/// Maps keys to actions; one action may have several keys
#[derive(Debug, Clone, Default)]
pub struct InputConfig {
    bindings: HashMap<KeyCode, Action>,

    /// Reverse mapping (action -> all keys)
    action_to_keys: HashMap<Action, Vec<KeyCode>>,
}

impl InputConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration from a list of bindings
    pub fn from_bindings(bindings: Vec<(KeyCode, Action)>) -> Self {
        let mut config = Self::new();
        for (key, action) in bindings {
            config.bind(key, action);
        }
        config
    }

    /// Bind a key to an action, replacing whatever it was bound to before
    pub fn bind(&mut self, key: KeyCode, action: Action) {
        self.unbind_key(key);

        self.bindings.insert(key, action);
        self.action_to_keys.entry(action).or_default().push(key);
    }

    /// Remove a key's binding
    pub fn unbind_key(&mut self, key: KeyCode) {
        if let Some(action) = self.bindings.remove(&key) {
            if let Some(keys) = self.action_to_keys.get_mut(&action) {
                keys.retain(|k| *k != key);
                if keys.is_empty() {
                    self.action_to_keys.remove(&action);
                }
            }
        }
    }

    /// Get the action bound to a key
    pub fn get_action(&self, key: KeyCode) -> Option<Action> {
        self.bindings.get(&key).copied()
    }

    /// Get all keys bound to an action
    pub fn get_keys(&self, action: Action) -> &[KeyCode] {
        self.action_to_keys
            .get(&action)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

impl From<Vec<(KeyCode, Action)>> for InputConfig {
    fn from(bindings: Vec<(KeyCode, Action)>) -> Self {
        Self::from_bindings(bindings)
    }
}

/// The bindings the game starts with
pub fn default_config() -> InputConfig {
    default_bindings().into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_lookup() {
        let config = default_config();
        assert_eq!(config.get_action(KeyCode::KeyA), Some(Action::MoveLeft));
        assert_eq!(config.get_action(KeyCode::ArrowRight), Some(Action::MoveRight));
        assert_eq!(config.get_action(KeyCode::Space), Some(Action::Jump));
        assert_eq!(config.get_action(KeyCode::KeyQ), None);
    }

    #[test]
    fn test_reverse_lookup() {
        let config = default_config();
        let keys = config.get_keys(Action::MoveRight);
        assert!(keys.contains(&KeyCode::KeyD));
        assert!(keys.contains(&KeyCode::ArrowRight));
    }

    #[test]
    fn test_rebind_moves_key() {
        let mut config = default_config();
        config.bind(KeyCode::Space, Action::MoveLeft);

        assert_eq!(config.get_action(KeyCode::Space), Some(Action::MoveLeft));
        assert!(config.get_keys(Action::Jump).is_empty());
        assert_eq!(config.get_keys(Action::MoveLeft).len(), 3);
    }

    #[test]
    fn test_unbind_key() {
        let mut config = default_config();
        config.unbind_key(KeyCode::KeyA);

        assert_eq!(config.get_action(KeyCode::KeyA), None);
        assert_eq!(config.get_keys(Action::MoveLeft), &[KeyCode::ArrowLeft]);
    }
}
