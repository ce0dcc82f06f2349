// ============================================
// Plane Material - Типизированные uniform'ы шейдера
// ============================================
// seed и uv_scale задаются один раз при создании, сеттеров нет.
// offset перезаписывается перед каждым render.

use bytemuck::{Pod, Zeroable};
use ultraviolet::{Mat4, Vec2};

/// Uniform блок на GPU, раскладка совпадает с `HeightmapUniforms` в WGSL
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct HeightmapUniforms {
    pub model_view_proj: [[f32; 4]; 4],
    pub seed: f32,
    pub _pad0: f32,
    pub uv_scale: [f32; 2],
    pub offset: [f32; 2],
    pub _pad1: [f32; 2],
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaneMaterial {
    seed: f32,
    uv_scale: Vec2,
    offset: Vec2,
}

impl PlaneMaterial {
    pub fn new(seed: f32, width: u32, height: u32) -> Self {
        Self {
            seed,
            uv_scale: Vec2::new(1.0 / width as f32, 1.0 / height as f32),
            offset: Vec2::zero(),
        }
    }

    pub fn seed(&self) -> f32 {
        self.seed
    }

    pub fn uv_scale(&self) -> Vec2 {
        self.uv_scale
    }

    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    pub fn set_offset(&mut self, offset: Vec2) {
        self.offset = offset;
    }

    pub fn to_uniforms(&self, model_view_proj: Mat4) -> HeightmapUniforms {
        HeightmapUniforms {
            model_view_proj: model_view_proj.into(),
            seed: self.seed,
            _pad0: 0.0,
            uv_scale: [self.uv_scale.x, self.uv_scale.y],
            offset: [self.offset.x, self.offset.y],
            _pad1: [0.0; 2],
        }
    }
}
