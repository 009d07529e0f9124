// Asset management system
//
// Loads and decodes images once at startup and hands out typed handles.

mod atlas;
mod handle;
mod loader;
mod manager;

pub use atlas::{AtlasRegion, TextureAtlas};
pub use handle::{AssetHandle, AssetId, TextureHandle};
pub use loader::AssetLoader;
pub use manager::AssetManager;

/// Asset loading errors
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("Asset not found: {0}")]
    NotFound(String),

    #[error("Asset already loaded: {0}")]
    AlreadyLoaded(String),

    #[error("Failed to decode {name}: {source}")]
    Decode {
        name: String,
        #[source]
        source: image::ImageError,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_error_display() {
        let err = AssetError::NotFound("world.png".to_string());
        assert_eq!(err.to_string(), "Asset not found: world.png");
    }
}
