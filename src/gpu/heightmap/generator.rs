// ============================================
// Heightmap Texture Generator
// ============================================
// Владеет render target'ом, сценой (камера + плоскость) и пайплайном.
// render() обновляет offset и перерисовывает текстуру целиком.

use ultraviolet::{Mat4, Vec2};
use wgpu::util::DeviceExt;

use crate::gpu::core::RenderContext;
use crate::gpu::error::{HeightmapError, HeightmapResult};
use crate::gpu::render::pipelines::HeightmapPipeline;
use crate::gpu::render::render_target::{RenderTarget, RENDER_TARGET_FORMAT};
use crate::gpu::render::HeightmapPixels;

use super::camera::OrthographicCamera;
use super::material::PlaneMaterial;
use super::plane::{PlaneGeometry, PlaneMesh};
use super::shader::{ShaderProgram, ShaderSource};
use super::size::HeightmapSize;

/// Сцена фиксирована после создания: ровно камера и одна плоскость
pub struct HeightmapScene {
    pub camera: OrthographicCamera,
    pub plane: PlaneMesh,
}

impl HeightmapScene {
    pub fn model_view_projection(&self) -> Mat4 {
        self.camera.view_projection_matrix() * self.plane.model_matrix()
    }
}

pub struct HeightmapTextureGenerator {
    size: HeightmapSize,
    render_target: RenderTarget,
    scene: HeightmapScene,
    material: PlaneMaterial,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    pipeline: HeightmapPipeline,
}

impl HeightmapTextureGenerator {
    pub fn new(
        ctx: &RenderContext,
        width: i32,
        height: i32,
        seed: f32,
        shader: &ShaderSource,
    ) -> HeightmapResult<Self> {
        // Размеры проверяются до любых аллокаций
        let size = HeightmapSize::new(width, height)?.check_limit(ctx.max_texture_dimension())?;

        let program = ShaderProgram::compile(ctx, shader)?;
        let pipeline = HeightmapPipeline::new(ctx, &program, RENDER_TARGET_FORMAT)?;

        let material = PlaneMaterial::new(seed, size.width, size.height);

        let (render_target, scene, uniform_buffer, bind_group) = ctx
            .scoped(|device| {
                let render_target = RenderTarget::new(device, size);

                let scene = HeightmapScene {
                    camera: OrthographicCamera::framing(size.width as f32, size.height as f32),
                    plane: PlaneMesh::new(
                        device,
                        &PlaneGeometry::new(size.width as f32, size.height as f32),
                    ),
                };

                let uniforms = material.to_uniforms(scene.model_view_projection());
                let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some("Heightmap Uniforms"),
                    contents: bytemuck::cast_slice(&[uniforms]),
                    usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
                });

                let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
                    label: Some("Heightmap Uniform BG"),
                    layout: &pipeline.uniform_layout,
                    entries: &[wgpu::BindGroupEntry {
                        binding: 0,
                        resource: uniform_buffer.as_entire_binding(),
                    }],
                });

                (render_target, scene, uniform_buffer, bind_group)
            })
            .map_err(|e| HeightmapError::render(format!("allocating heightmap resources: {}", e)))?;

        log::debug!(
            "Heightmap generator: {}x{} seed={}",
            size.width,
            size.height,
            seed
        );

        Ok(Self {
            size,
            render_target,
            scene,
            material,
            uniform_buffer,
            bind_group,
            pipeline,
        })
    }

    pub fn width(&self) -> u32 {
        self.size.width
    }

    pub fn height(&self) -> u32 {
        self.size.height
    }

    pub fn seed(&self) -> f32 {
        self.material.seed()
    }

    pub fn material(&self) -> &PlaneMaterial {
        &self.material
    }

    pub fn camera(&self) -> &OrthographicCamera {
        &self.scene.camera
    }

    /// Текстура с последним результатом. До первого render содержимое не определено
    pub fn texture(&self) -> &RenderTarget {
        &self.render_target
    }

    /// Нарисовать карту высот со сдвигом (offset_x, offset_y), полностью перезаписав текстуру
    pub fn render(&mut self, ctx: &RenderContext, offset_x: f32, offset_y: f32) -> HeightmapResult<()> {
        self.material.set_offset(Vec2::new(offset_x, offset_y));
        let uniforms = self.material.to_uniforms(self.scene.model_view_projection());

        ctx.scoped(|device| {
            ctx.queue
                .write_buffer(&self.uniform_buffer, 0, bytemuck::cast_slice(&[uniforms]));

            let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Heightmap Encoder"),
            });

            {
                let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("Heightmap Pass"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: self.render_target.view(),
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

                let plane = &self.scene.plane;
                pass.set_pipeline(&self.pipeline.pipeline);
                pass.set_bind_group(0, &self.bind_group, &[]);
                pass.set_vertex_buffer(0, plane.vertex_buffer.slice(..));
                pass.set_index_buffer(plane.index_buffer.slice(..), wgpu::IndexFormat::Uint16);
                pass.draw_indexed(0..plane.index_count, 0, 0..1);
            }

            ctx.queue.submit(std::iter::once(encoder.finish()));
        })
        .map_err(HeightmapError::render)?;

        log::trace!("Heightmap rendered at offset ({}, {})", offset_x, offset_y);
        Ok(())
    }

    /// Прочитать текущую текстуру на CPU
    pub fn read_pixels(&self, ctx: &RenderContext) -> HeightmapResult<HeightmapPixels> {
        self.render_target.read_pixels(ctx)
    }
}
