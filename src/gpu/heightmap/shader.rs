// ============================================
// Shader Program - Вершинная и фрагментная программы
// ============================================
// Генератор не знает, откуда берётся текст шейдеров:
// его передают строками или читают из файлов здесь.

use std::borrow::Cow;
use std::fs;
use std::path::Path;

use crate::gpu::core::RenderContext;
use crate::gpu::error::{HeightmapError, HeightmapResult};

pub const VERTEX_ENTRY: &str = "vs_main";
pub const FRAGMENT_ENTRY: &str = "fs_main";

/// WGSL текст вершинной и фрагментной программ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderSource {
    pub vertex: Cow<'static, str>,
    pub fragment: Cow<'static, str>,
}

impl ShaderSource {
    pub fn new(vertex: impl Into<Cow<'static, str>>, fragment: impl Into<Cow<'static, str>>) -> Self {
        Self {
            vertex: vertex.into(),
            fragment: fragment.into(),
        }
    }

    /// Встроенная программа: fBm value noise по seed
    pub fn builtin() -> Self {
        Self::new(
            include_str!("../shaders/heightmap_vertex.wgsl"),
            include_str!("../shaders/heightmap_fragment.wgsl"),
        )
    }

    /// Загрузить программы из файлов
    pub fn from_files<P: AsRef<Path>, Q: AsRef<Path>>(vertex: P, fragment: Q) -> HeightmapResult<Self> {
        let vertex = fs::read_to_string(vertex.as_ref())?;
        let fragment = fs::read_to_string(fragment.as_ref())?;
        Ok(Self::new(vertex, fragment))
    }
}

impl Default for ShaderSource {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Скомпилированные модули
pub struct ShaderProgram {
    pub vertex: wgpu::ShaderModule,
    pub fragment: wgpu::ShaderModule,
}

impl ShaderProgram {
    pub fn compile(ctx: &RenderContext, source: &ShaderSource) -> HeightmapResult<Self> {
        let vertex = ctx
            .scoped(|device| {
                device.create_shader_module(wgpu::ShaderModuleDescriptor {
                    label: Some("Heightmap Vertex Shader"),
                    source: wgpu::ShaderSource::Wgsl(source.vertex.clone()),
                })
            })
            .map_err(|e| HeightmapError::shader(format!("vertex program: {}", e)))?;

        let fragment = ctx
            .scoped(|device| {
                device.create_shader_module(wgpu::ShaderModuleDescriptor {
                    label: Some("Heightmap Fragment Shader"),
                    source: wgpu::ShaderSource::Wgsl(source.fragment.clone()),
                })
            })
            .map_err(|e| HeightmapError::shader(format!("fragment program: {}", e)))?;

        Ok(Self { vertex, fragment })
    }
}
