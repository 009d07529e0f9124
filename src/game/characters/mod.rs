// Character system
//
// - `character`: position/velocity integration and pose selection
// - `animation`: frame cycling and the per-pose animation table
// - `pose`: the discrete sprite poses
// - `stats`: movement tuning and playfield bounds

pub mod animation;
pub mod character;
pub mod pose;
pub mod stats;

pub use animation::{AnimationError, AnimationSet};
pub use character::Character;
pub use stats::CharacterStats;
