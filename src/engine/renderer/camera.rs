// Fixed logical screen projection

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec2};

/// Projects a fixed-size logical screen onto the window
///
/// Origin is the top-left corner with y growing downward. The logical size
/// never changes when the window is resized; the picture is stretched instead.
#[derive(Debug, Clone)]
pub struct Camera {
    logical_width: f32,
    logical_height: f32,
    view_proj: Mat4,
}

impl Camera {
    pub fn new(logical_width: f32, logical_height: f32) -> Self {
        let view_proj =
            Mat4::orthographic_rh(0.0, logical_width, logical_height, 0.0, -1.0, 1.0);
        Self {
            logical_width,
            logical_height,
            view_proj,
        }
    }

    /// Get the view-projection matrix
    pub fn view_proj_matrix(&self) -> Mat4 {
        self.view_proj
    }

    /// Logical screen size in pixels
    pub fn logical_size(&self) -> Vec2 {
        Vec2::new(self.logical_width, self.logical_height)
    }
}

/// Camera uniform for GPU
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
}

impl CameraUniform {
    pub fn new(camera: &Camera) -> Self {
        Self {
            view_proj: camera.view_proj_matrix().to_cols_array_2d(),
        }
    }
}
