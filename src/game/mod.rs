// Game logic built on the engine layer

pub mod assets;
pub mod characters;
pub mod config;
pub mod session;

pub use assets::GameAssets;
pub use config::GameConfig;
pub use session::Game;
