// ============================================
// Plane - Полноэкранная плоскость для шейдера
// ============================================

use ultraviolet::{Mat4, Vec3};
use wgpu::util::DeviceExt;

/// Плоскость стоит за камерой на фиксированной глубине
pub const PLANE_DEPTH: f32 = -100.0;

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable, Default, PartialEq)]
pub struct PlaneVertex {
    pub position: [f32; 3],
    pub uv: [f32; 2],
}

impl PlaneVertex {
    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<PlaneVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x2,
                },
            ],
        }
    }
}

/// CPU геометрия: один сегмент, 4 вершины, 2 треугольника (CCW)
#[derive(Debug, Clone, PartialEq)]
pub struct PlaneGeometry {
    pub vertices: [PlaneVertex; 4],
    pub indices: [u16; 6],
}

impl PlaneGeometry {
    /// Плоскость width x height в XY с центром в начале координат.
    /// UV: (0,1) слева сверху, (1,0) справа снизу.
    pub fn new(width: f32, height: f32) -> Self {
        let hw = width / 2.0;
        let hh = height / 2.0;
        Self {
            vertices: [
                PlaneVertex { position: [-hw, hh, 0.0], uv: [0.0, 1.0] },
                PlaneVertex { position: [hw, hh, 0.0], uv: [1.0, 1.0] },
                PlaneVertex { position: [-hw, -hh, 0.0], uv: [0.0, 0.0] },
                PlaneVertex { position: [hw, -hh, 0.0], uv: [1.0, 0.0] },
            ],
            indices: [0, 2, 1, 2, 3, 1],
        }
    }
}

/// GPU буферы плоскости + её положение в сцене
pub struct PlaneMesh {
    pub vertex_buffer: wgpu::Buffer,
    pub index_buffer: wgpu::Buffer,
    pub index_count: u32,
    pub position: Vec3,
}

impl PlaneMesh {
    pub fn new(device: &wgpu::Device, geometry: &PlaneGeometry) -> Self {
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Heightmap Plane Vertices"),
            contents: bytemuck::cast_slice(&geometry.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        // 6 u16 = 12 байт, кратно COPY_BUFFER_ALIGNMENT
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Heightmap Plane Indices"),
            contents: bytemuck::cast_slice(&geometry.indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        Self {
            vertex_buffer,
            index_buffer,
            index_count: geometry.indices.len() as u32,
            position: Vec3::new(0.0, 0.0, PLANE_DEPTH),
        }
    }

    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.position)
    }
}
