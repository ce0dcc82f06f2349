use crate::gpu::core::RenderContext;
use crate::gpu::error::{HeightmapError, HeightmapResult};
use crate::gpu::heightmap::shader::{ShaderProgram, FRAGMENT_ENTRY, VERTEX_ENTRY};
use crate::gpu::heightmap::{HeightmapUniforms, PlaneVertex};

pub struct HeightmapPipeline {
    pub pipeline: wgpu::RenderPipeline,
    pub uniform_layout: wgpu::BindGroupLayout,
}

impl HeightmapPipeline {
    /// Линковка программ в пайплайн. Несовместимые программы -> ShaderCompilation
    pub fn new(
        ctx: &RenderContext,
        program: &ShaderProgram,
        target_format: wgpu::TextureFormat,
    ) -> HeightmapResult<Self> {
        ctx.scoped(|device| {
            let uniform_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Heightmap Uniform Layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        // шейдер с другим размером блока не слинкуется
                        min_binding_size: wgpu::BufferSize::new(
                            std::mem::size_of::<HeightmapUniforms>() as u64,
                        ),
                    },
                    count: None,
                }],
            });

            let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("Heightmap Pipeline Layout"),
                bind_group_layouts: &[&uniform_layout],
                push_constant_ranges: &[],
            });

            let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some("Heightmap Pipeline"),
                layout: Some(&layout),
                vertex: wgpu::VertexState {
                    module: &program.vertex,
                    entry_point: Some(VERTEX_ENTRY),
                    buffers: &[PlaneVertex::desc()],
                    compilation_options: Default::default(),
                },
                fragment: Some(wgpu::FragmentState {
                    module: &program.fragment,
                    entry_point: Some(FRAGMENT_ENTRY),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: target_format,
                        blend: Some(wgpu::BlendState::REPLACE),
                        // alpha не пишем: карта высот только RGB
                        write_mask: wgpu::ColorWrites::COLOR,
                    })],
                    compilation_options: Default::default(),
                }),
                primitive: wgpu::PrimitiveState {
                    topology: wgpu::PrimitiveTopology::TriangleList,
                    front_face: wgpu::FrontFace::Ccw,
                    cull_mode: None,
                    ..Default::default()
                },
                depth_stencil: None,
                multisample: wgpu::MultisampleState {
                    count: 1,
                    mask: !0,
                    alpha_to_coverage_enabled: false,
                },
                multiview: None,
                cache: None,
            });

            Self {
                pipeline,
                uniform_layout,
            }
        })
        .map_err(|e| HeightmapError::shader(format!("pipeline link: {}", e)))
    }
}
