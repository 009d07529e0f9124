// The game's images, loaded once before the loop starts

use super::characters::animation::add_standard_regions;
use super::config::GameConfig;
use crate::engine::assets::{AssetError, AssetManager, AtlasRegion, TextureAtlas, TextureHandle};
use log::debug;

/// Handles to everything the game draws
#[derive(Debug, Clone)]
pub struct GameAssets {
    pub background: TextureHandle,
    pub background_region: AtlasRegion,
    pub sprite_sheet: TextureAtlas,
}

impl GameAssets {
    /// Load the background and sprite sheet named in `config` from disk
    pub fn load(manager: &mut AssetManager, config: &GameConfig) -> Result<Self, AssetError> {
        let background = manager.load_texture(config.background_file)?;
        let sheet = manager.load_texture(config.sprite_sheet_file)?;
        Self::from_handles(manager, background, sheet)
    }

    /// Build from images already decoded in memory
    #[cfg(test)]
    pub fn from_images(
        manager: &mut AssetManager,
        config: &GameConfig,
        background: image::RgbaImage,
        sprite_sheet: image::RgbaImage,
    ) -> Result<Self, AssetError> {
        let background = manager.insert_texture(config.background_file, background)?;
        let sheet = manager.insert_texture(config.sprite_sheet_file, sprite_sheet)?;
        Self::from_handles(manager, background, sheet)
    }

    fn from_handles(
        manager: &AssetManager,
        background: TextureHandle,
        sheet: TextureHandle,
    ) -> Result<Self, AssetError> {
        let (bg_width, bg_height) = dimensions(manager, background)?;
        let (sheet_width, sheet_height) = dimensions(manager, sheet)?;

        let mut sprite_sheet = TextureAtlas::new(sheet, sheet_width, sheet_height);
        add_standard_regions(&mut sprite_sheet);
        debug!(
            "Sprite sheet {}x{} with {} regions",
            sheet_width,
            sheet_height,
            sprite_sheet.region_count()
        );

        Ok(Self {
            background,
            background_region: AtlasRegion::full("background", bg_width, bg_height),
            sprite_sheet,
        })
    }
}

fn dimensions(manager: &AssetManager, handle: TextureHandle) -> Result<(u32, u32), AssetError> {
    manager
        .dimensions(handle)
        .ok_or_else(|| AssetError::NotFound(format!("{:?}", handle.id())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    #[test]
    fn test_from_images() {
        let mut manager = AssetManager::new("assets");
        let config = GameConfig::default();
        let assets = GameAssets::from_images(
            &mut manager,
            &config,
            RgbaImage::from_pixel(750, 200, Rgba([90, 140, 255, 255])),
            RgbaImage::from_pixel(400, 100, Rgba([0, 0, 0, 0])),
        )
        .unwrap();

        assert_eq!(assets.background_region.size(), glam::Vec2::new(750.0, 200.0));
        assert_eq!(assets.sprite_sheet.width, 400);
        assert!(assets.sprite_sheet.get_region("idle").is_some());
        assert_eq!(manager.stats().texture_count, 2);
    }

    #[test]
    fn test_load_missing_files_fails() {
        let mut manager = AssetManager::new("/no/such/assets");
        let err = GameAssets::load(&mut manager, &GameConfig::default()).unwrap_err();
        assert!(matches!(err, AssetError::NotFound(_)));
    }
}
