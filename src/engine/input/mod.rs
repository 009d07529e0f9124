// Input handling system
//
// Keyboard events from the window are mapped to game actions and exposed as
// a per-tick action state.
//
// ## Architecture
//
// - `action`: game actions and default key bindings
// - `config`: key binding table
// - `player`: held / just-pressed / just-released action sets
// - `manager`: routes winit key events into the player state
//
// ## Usage Example
//
// ```rust
// use engine::input::{InputManager, Action};
//
// let mut input = InputManager::default();
//
// // In the event loop
// input.process_keyboard_event(&key_event);
//
// // Once per simulation tick
// if input.player().just_pressed(Action::Jump) {
//     // jump
// }
// input.update();
// ```

pub mod action;
pub mod config;
pub mod manager;
pub mod player;

pub use action::Action;
pub use manager::InputManager;
pub use player::PlayerInput;
