// Central store of decoded images

use super::{AssetError, AssetHandle, AssetId, AssetLoader, TextureHandle};
use image::RgbaImage;
use std::collections::HashMap;
use std::path::Path;

/// Owns every image decoded at startup
///
/// Images are loaded once and never unloaded; the renderer uploads them
/// to the GPU by walking `textures()`.
pub struct AssetManager {
    loader: AssetLoader,

    /// Decoded bitmaps
    textures: HashMap<AssetId, RgbaImage>,

    /// Name to ID mapping
    texture_names: HashMap<String, AssetId>,
}

impl AssetManager {
    /// Create a new asset manager rooted at `asset_path`
    pub fn new<P: AsRef<Path>>(asset_path: P) -> Self {
        Self {
            loader: AssetLoader::new(asset_path),
            textures: HashMap::new(),
            texture_names: HashMap::new(),
        }
    }

    /// Load and decode an image from disk, returning the cached handle
    /// when it was loaded before
    pub fn load_texture(&mut self, name: &str) -> Result<TextureHandle, AssetError> {
        if let Some(&id) = self.texture_names.get(name) {
            return Ok(AssetHandle::new(id));
        }

        let image = self.loader.load_image(name)?;
        self.insert_texture(name, image)
    }

    /// Register an already decoded image under `name`
    pub fn insert_texture(
        &mut self,
        name: &str,
        image: RgbaImage,
    ) -> Result<TextureHandle, AssetError> {
        if self.texture_names.contains_key(name) {
            return Err(AssetError::AlreadyLoaded(name.to_string()));
        }

        let id = AssetId::from_path(name);
        self.textures.insert(id, image);
        self.texture_names.insert(name.to_string(), id);
        Ok(AssetHandle::new(id))
    }

    /// Get a decoded image by handle
    pub fn get_texture(&self, handle: TextureHandle) -> Option<&RgbaImage> {
        self.textures.get(&handle.id())
    }

    /// Width and height of a loaded image
    pub fn dimensions(&self, handle: TextureHandle) -> Option<(u32, u32)> {
        self.get_texture(handle).map(|img| img.dimensions())
    }

    /// Iterate over every loaded image
    pub fn textures(&self) -> impl Iterator<Item = (TextureHandle, &RgbaImage)> {
        self.textures
            .iter()
            .map(|(&id, image)| (AssetHandle::new(id), image))
    }

    /// Get statistics about loaded assets
    pub fn stats(&self) -> AssetStats {
        AssetStats {
            texture_count: self.textures.len(),
        }
    }

    /// Get the asset loader
    pub fn loader(&self) -> &AssetLoader {
        &self.loader
    }
}

/// Statistics about loaded assets
#[derive(Debug, Clone, Copy)]
pub struct AssetStats {
    pub texture_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn image(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_pixel(width, height, Rgba([0, 0, 0, 255]))
    }

    #[test]
    fn test_insert_and_lookup() {
        let mut manager = AssetManager::new("assets");
        let handle = manager.insert_texture("world.png", image(8, 4)).unwrap();

        assert_eq!(manager.dimensions(handle), Some((8, 4)));
        assert_eq!(manager.stats().texture_count, 1);
        assert_eq!(handle.id(), AssetId::from_path("world.png"));
    }

    #[test]
    fn test_insert_twice_fails() {
        let mut manager = AssetManager::new("assets");
        manager.insert_texture("mario.png", image(1, 1)).unwrap();

        let err = manager.insert_texture("mario.png", image(1, 1)).unwrap_err();
        assert!(matches!(err, AssetError::AlreadyLoaded(_)));
    }

    #[test]
    fn test_load_texture_returns_cached_handle() {
        let mut manager = AssetManager::new("/nowhere");
        let inserted = manager.insert_texture("mario.png", image(2, 2)).unwrap();

        // Already registered, so the loader never touches the disk
        let loaded = manager.load_texture("mario.png").unwrap();
        assert_eq!(inserted, loaded);
    }

    #[test]
    fn test_load_texture_from_disk_registers_once() {
        let dir = std::env::temp_dir().join(format!("mario-sprint-manager-{}", std::process::id()));
        std::fs::create_dir_all(dir.join("textures")).unwrap();
        let mut bytes = Vec::new();
        image::DynamicImage::ImageRgba8(image(3, 2))
            .write_to(&mut std::io::Cursor::new(&mut bytes), image::ImageOutputFormat::Png)
            .unwrap();
        std::fs::write(dir.join("textures").join("world.png"), bytes).unwrap();

        let mut manager = AssetManager::new(&dir);
        let first = manager.load_texture("world.png").unwrap();
        let second = manager.load_texture("world.png").unwrap();

        assert_eq!(first, second);
        assert_eq!(manager.dimensions(first), Some((3, 2)));
        assert_eq!(manager.stats().texture_count, 1);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_load_missing_texture() {
        let mut manager = AssetManager::new("/nowhere");
        assert!(manager.load_texture("world.png").is_err());
        assert_eq!(manager.stats().texture_count, 0);
    }

    #[test]
    fn test_textures_iter() {
        let mut manager = AssetManager::new("assets");
        manager.insert_texture("a.png", image(1, 1)).unwrap();
        manager.insert_texture("b.png", image(2, 2)).unwrap();

        assert_eq!(manager.textures().count(), 2);
    }
}
