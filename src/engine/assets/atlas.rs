// Named sub-regions of a sprite sheet

use super::TextureHandle;
use glam::Vec2;

/// A rectangular region within a sprite sheet
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AtlasRegion {
    /// Name/ID of the sprite
    pub name: &'static str,

    /// Position in the sheet (pixels)
    pub x: u32,
    pub y: u32,

    /// Size of the region (pixels)
    pub width: u32,
    pub height: u32,

    /// UV coordinates (0.0 to 1.0)
    pub uv_min: Vec2,
    pub uv_max: Vec2,
}

impl AtlasRegion {
    /// Create a new region with calculated UV coordinates
    pub fn new(
        name: &'static str,
        x: u32,
        y: u32,
        width: u32,
        height: u32,
        atlas_width: u32,
        atlas_height: u32,
    ) -> Self {
        let uv_min = Vec2::new(
            x as f32 / atlas_width as f32,
            y as f32 / atlas_height as f32,
        );
        let uv_max = Vec2::new(
            (x + width) as f32 / atlas_width as f32,
            (y + height) as f32 / atlas_height as f32,
        );

        Self {
            name,
            x,
            y,
            width,
            height,
            uv_min,
            uv_max,
        }
    }

    /// A region covering a whole image
    pub fn full(name: &'static str, width: u32, height: u32) -> Self {
        Self::new(name, 0, 0, width, height, width, height)
    }

    /// Size of the region in pixels
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }
}

/// A sprite sheet image plus the named regions cut from it
#[derive(Debug, Clone)]
pub struct TextureAtlas {
    /// Image the regions refer to
    pub texture: TextureHandle,

    /// Width of the sheet
    pub width: u32,

    /// Height of the sheet
    pub height: u32,

    regions: Vec<AtlasRegion>,
}

impl TextureAtlas {
    pub fn new(texture: TextureHandle, width: u32, height: u32) -> Self {
        Self {
            texture,
            width,
            height,
            regions: Vec::new(),
        }
    }

    /// Cut a region given by its corners `(x0, y0)`-`(x1, y1)`, max exclusive.
    /// Corners are clipped to the sheet.
    pub fn add_rect(&mut self, name: &'static str, x0: u32, y0: u32, x1: u32, y1: u32) {
        let x1 = x1.min(self.width);
        let y1 = y1.min(self.height);
        let x0 = x0.min(x1);
        let y0 = y0.min(y1);
        let region = AtlasRegion::new(name, x0, y0, x1 - x0, y1 - y0, self.width, self.height);
        self.add_region(region);
    }

    /// Add a region, replacing any previous region of the same name
    pub fn add_region(&mut self, region: AtlasRegion) {
        self.regions.retain(|r| r.name != region.name);
        self.regions.push(region);
    }

    /// Get a region by name
    pub fn get_region(&self, name: &str) -> Option<&AtlasRegion> {
        self.regions.iter().find(|r| r.name == name)
    }

    /// Get the number of regions
    pub fn region_count(&self) -> usize {
        self.regions.len()
    }
}
