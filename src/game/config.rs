// Window, asset and presentation settings

use super::characters::CharacterStats;
use super::characters::stats::BASE_STATS;

#[derive(Debug, Clone)]
pub struct GameConfig {
    pub title: &'static str,

    /// Logical screen size; the window opens at this size
    pub screen_width: u32,
    pub screen_height: u32,

    /// Asset root, relative to the working directory
    pub asset_dir: &'static str,
    pub background_file: &'static str,
    pub sprite_sheet_file: &'static str,

    /// Scale applied when drawing the background and the character
    pub background_scale: f32,
    pub sprite_scale: f32,

    pub character: CharacterStats,
}

pub const GAME_CONFIG: GameConfig = GameConfig {
    title: "Mario Game",

    screen_width: 1500,
    screen_height: 400,

    asset_dir: "assets",
    background_file: "world.png",
    sprite_sheet_file: "mario.png",

    background_scale: 2.0,
    sprite_scale: 2.0,

    character: BASE_STATS,
};

impl Default for GameConfig {
    fn default() -> Self {
        GAME_CONFIG
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_character_fits_on_screen() {
        let config = GameConfig::default();
        assert!(config.character.wall_right < config.screen_width as f32);
        assert!(config.character.ground_y < config.screen_height as f32);
    }
}
