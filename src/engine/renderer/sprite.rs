// Sprite draw queue and the wgpu pipeline that composites it

use super::{Camera, CameraUniform, TextureManager, Vertex};
use crate::engine::assets::{AtlasRegion, TextureHandle};
use anyhow::{anyhow, Result};
use glam::{Affine2, Vec2};
use wgpu::util::DeviceExt;

/// One image to draw: a region of a texture placed by an affine transform
///
/// The transform maps region-local pixels (origin at the region's top-left)
/// to logical screen pixels.
#[derive(Debug, Clone, Copy)]
pub struct DrawCommand {
    pub texture: TextureHandle,
    pub region: AtlasRegion,
    pub transform: Affine2,
}

impl DrawCommand {
    pub fn new(texture: TextureHandle, region: AtlasRegion, transform: Affine2) -> Self {
        Self {
            texture,
            region,
            transform,
        }
    }

    /// Screen-space quad corners, clockwise from the region's top-left
    pub fn vertices(&self) -> [Vertex; 4] {
        let size = self.region.size();
        let (uv_min, uv_max) = (self.region.uv_min, self.region.uv_max);
        let corners = [
            (Vec2::ZERO, uv_min),
            (Vec2::new(size.x, 0.0), Vec2::new(uv_max.x, uv_min.y)),
            (size, uv_max),
            (Vec2::new(0.0, size.y), Vec2::new(uv_min.x, uv_max.y)),
        ];
        corners.map(|(local, uv)| Vertex::new(self.transform.transform_point2(local), uv))
    }
}

/// Draw commands for one frame, composited in submission order
#[derive(Debug, Default)]
pub struct DrawQueue {
    commands: Vec<DrawCommand>,
}

impl DrawQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an image; later commands are drawn over earlier ones
    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Vertex and index data for every queued quad, in order
    fn geometry(&self) -> (Vec<Vertex>, Vec<u32>) {
        let mut vertices = Vec::with_capacity(self.len() * 4);
        let mut indices = Vec::with_capacity(self.len() * 6);

        for command in &self.commands {
            let base = vertices.len() as u32;
            vertices.extend_from_slice(&command.vertices());
            indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
        }

        (vertices, indices)
    }
}

/// Sprite renderer: one textured quad per draw command
pub struct SpriteRenderer {
    render_pipeline: wgpu::RenderPipeline,
    camera_bind_group: wgpu::BindGroup,
    texture_bind_group_layout: wgpu::BindGroupLayout,
}

impl SpriteRenderer {
    pub fn new(device: &wgpu::Device, format: wgpu::TextureFormat, camera: &Camera) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Sprite Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/sprite.wgsl").into()),
        });

        let camera_bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Camera Bind Group Layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
            });

        let texture_bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Texture Bind Group Layout"),
                entries: &[
                    wgpu::BindGroupLayoutEntry {
                        binding: 0,
                        visibility: wgpu::ShaderStages::FRAGMENT,
                        ty: wgpu::BindingType::Texture {
                            multisampled: false,
                            view_dimension: wgpu::TextureViewDimension::D2,
                            sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        },
                        count: None,
                    },
                    wgpu::BindGroupLayoutEntry {
                        binding: 1,
                        visibility: wgpu::ShaderStages::FRAGMENT,
                        ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                        count: None,
                    },
                ],
            });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Sprite Pipeline Layout"),
            bind_group_layouts: &[&camera_bind_group_layout, &texture_bind_group_layout],
            push_constant_ranges: &[],
        });

        let render_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Sprite Render Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: "vs_main",
                buffers: &[Vertex::desc()],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: "fs_main",
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                // Flipped sprites reverse the winding
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState {
                count: 1,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
            multiview: None,
        });

        // The logical screen never changes, so the camera is written once
        let camera_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Camera Buffer"),
            contents: bytemuck::cast_slice(&[CameraUniform::new(camera)]),
            usage: wgpu::BufferUsages::UNIFORM,
        });

        let camera_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Camera Bind Group"),
            layout: &camera_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: camera_buffer.as_entire_binding(),
            }],
        });

        Self {
            render_pipeline,
            camera_bind_group,
            texture_bind_group_layout,
        }
    }

    /// Layout every sprite texture bind group must follow
    pub fn texture_bind_group_layout(&self) -> &wgpu::BindGroupLayout {
        &self.texture_bind_group_layout
    }

    /// Encode a render pass that clears the target and draws the queue in order
    pub fn render(
        &self,
        device: &wgpu::Device,
        encoder: &mut wgpu::CommandEncoder,
        target: &wgpu::TextureView,
        queue: &DrawQueue,
        textures: &TextureManager,
    ) -> Result<()> {
        // Resolve every texture up front so a missing one fails before encoding
        let bind_groups = queue
            .commands()
            .iter()
            .map(|command| {
                textures
                    .get(command.texture)
                    .map(|texture| &texture.bind_group)
                    .ok_or_else(|| anyhow!("Texture {:?} was never uploaded", command.texture.id()))
            })
            .collect::<Result<Vec<_>>>()?;

        let (vertices, indices) = queue.geometry();
        let buffers = (!queue.is_empty()).then(|| {
            let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Sprite Vertex Buffer"),
                contents: bytemuck::cast_slice(&vertices),
                usage: wgpu::BufferUsages::VERTEX,
            });
            let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Sprite Index Buffer"),
                contents: bytemuck::cast_slice(&indices),
                usage: wgpu::BufferUsages::INDEX,
            });
            (vertex_buffer, index_buffer)
        });

        let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Sprite Render Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        let Some((vertex_buffer, index_buffer)) = &buffers else {
            return Ok(());
        };

        render_pass.set_pipeline(&self.render_pipeline);
        render_pass.set_bind_group(0, &self.camera_bind_group, &[]);
        render_pass.set_vertex_buffer(0, vertex_buffer.slice(..));
        render_pass.set_index_buffer(index_buffer.slice(..), wgpu::IndexFormat::Uint32);

        for (i, bind_group) in bind_groups.into_iter().enumerate() {
            let first = (i * 6) as u32;
            render_pass.set_bind_group(1, bind_group, &[]);
            render_pass.draw_indexed(first..first + 6, 0, 0..1);
        }

        Ok(())
    }
}
