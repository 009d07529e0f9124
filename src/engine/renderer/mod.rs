// Rendering system using wgpu

mod camera;
mod sprite;
mod texture;
mod vertex;

pub use sprite::{DrawCommand, DrawQueue};

use camera::{Camera, CameraUniform};
use sprite::SpriteRenderer;
use texture::TextureManager;
use vertex::Vertex;

use crate::engine::assets::AssetManager;
use anyhow::Result;
use log::{info, warn};
use std::sync::Arc;
use winit::window::Window;

/// Owns the GPU device and presents one `DrawQueue` per frame
pub struct Renderer {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    size: winit::dpi::PhysicalSize<u32>,
    sprite_renderer: SpriteRenderer,
    texture_manager: TextureManager,
}

impl Renderer {
    /// Create a renderer for `window` showing a `logical_width` x
    /// `logical_height` screen, and upload every loaded image
    pub async fn new(
        window: Arc<Window>,
        logical_width: u32,
        logical_height: u32,
        assets: &AssetManager,
    ) -> Result<Self> {
        let size = window.inner_size();

        let instance = wgpu::Instance::new(wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance.create_surface(window.clone())?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("Failed to find suitable GPU adapter"))?;

        info!("Using GPU: {}", adapter.get_info().name);

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: Some("Main Device"),
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                },
                None,
            )
            .await?;

        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = choose_surface_format(&surface_caps.formats)?;
        let alpha_mode = surface_caps
            .alpha_modes
            .first()
            .copied()
            .ok_or_else(|| anyhow::anyhow!("Surface reports no alpha modes"))?;

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };

        surface.configure(&device, &config);

        let camera = Camera::new(logical_width as f32, logical_height as f32);
        let sprite_renderer = SpriteRenderer::new(&device, surface_format, &camera);

        let mut texture_manager = TextureManager::new();
        texture_manager.upload_all(
            &device,
            &queue,
            sprite_renderer.texture_bind_group_layout(),
            assets,
        );

        info!(
            "Renderer initialized: {}x{} window, {} logical screen, {} textures",
            size.width,
            size.height,
            camera.logical_size(),
            texture_manager.texture_count()
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            size,
            sprite_renderer,
            texture_manager,
        })
    }

    /// Resize the surface; the logical screen is stretched to fit
    pub fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width > 0 && new_size.height > 0 {
            self.size = new_size;
            self.config.width = new_size.width;
            self.config.height = new_size.height;
            self.surface.configure(&self.device, &self.config);
            info!("Renderer resized to {}x{}", new_size.width, new_size.height);
        }
    }

    /// Composite the queued commands, in order, and present the frame
    pub fn render(&mut self, draw_queue: &DrawQueue) -> Result<()> {
        let output = match self.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                warn!("Surface lost, reconfiguring");
                self.resize(self.size);
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        self.sprite_renderer.render(
            &self.device,
            &mut encoder,
            &view,
            draw_queue,
            &self.texture_manager,
        )?;

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }
}

/// Prefer an sRGB surface format, else whatever the surface lists first
fn choose_surface_format(formats: &[wgpu::TextureFormat]) -> Result<wgpu::TextureFormat> {
    formats
        .iter()
        .find(|f| f.is_srgb())
        .or_else(|| formats.first())
        .copied()
        .ok_or_else(|| anyhow::anyhow!("Surface reports no supported formats"))
}
