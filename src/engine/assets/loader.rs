// Asset loading: finds image files on disk and decodes them

use super::AssetError;
use image::RgbaImage;
use log::info;
use std::path::{Path, PathBuf};

/// Directory (under the asset root) holding image files
const TEXTURE_DIRECTORY: &str = "textures";

/// Asset loader responsible for finding and decoding asset files
pub struct AssetLoader {
    base_path: PathBuf,
}

impl AssetLoader {
    /// Create a new asset loader with the given base path
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// Get the full path for an image
    pub fn resolve_path(&self, name: &str) -> PathBuf {
        self.base_path.join(TEXTURE_DIRECTORY).join(name)
    }

    /// Read an image file and decode it into an RGBA bitmap
    pub fn load_image(&self, name: &str) -> Result<RgbaImage, AssetError> {
        let path = self.resolve_path(name);

        if !path.exists() {
            return Err(AssetError::NotFound(path.to_string_lossy().to_string()));
        }

        let bytes = std::fs::read(&path)?;
        let image = decode_image(name, &bytes)?;
        info!(
            "Loaded image {} ({}x{})",
            path.display(),
            image.width(),
            image.height()
        );
        Ok(image)
    }

    /// Get the base path
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }
}

/// Decode in-memory image bytes into an RGBA bitmap
pub fn decode_image(name: &str, bytes: &[u8]) -> Result<RgbaImage, AssetError> {
    image::load_from_memory(bytes)
        .map(|img| img.to_rgba8())
        .map_err(|source| AssetError::Decode {
            name: name.to_string(),
            source,
        })
}
