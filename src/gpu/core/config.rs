// ============================================
// Generator Config - Настройки генератора из JSON
// ============================================

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::gpu::error::{HeightmapError, HeightmapResult};
use crate::gpu::heightmap::ShaderSource;

pub const DEFAULT_SIZE: i32 = 256;
pub const DEFAULT_SEED: f32 = 1.0;

/// Пути к пользовательским программам
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ShaderPaths {
    pub vertex: PathBuf,
    pub fragment: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GeneratorConfig {
    #[serde(default = "default_size")]
    pub width: i32,
    #[serde(default = "default_size")]
    pub height: i32,
    #[serde(default = "default_seed")]
    pub seed: f32,
    /// Без этого поля используется встроенная программа
    #[serde(default)]
    pub shaders: Option<ShaderPaths>,
    /// Смещения, для которых рендерится карта высот
    #[serde(default = "default_tiles")]
    pub tiles: Vec<[f32; 2]>,
}

fn default_size() -> i32 {
    DEFAULT_SIZE
}

fn default_seed() -> f32 {
    DEFAULT_SEED
}

fn default_tiles() -> Vec<[f32; 2]> {
    vec![[0.0, 0.0]]
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_SIZE,
            height: DEFAULT_SIZE,
            seed: DEFAULT_SEED,
            shaders: None,
            tiles: default_tiles(),
        }
    }
}

impl GeneratorConfig {
    pub fn load_from_json(json: &str) -> HeightmapResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| HeightmapError::config(format!("failed to parse JSON: {}", e)))
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> HeightmapResult<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::load_from_json(&content)
    }

    /// Программы из файлов, если заданы, иначе встроенные
    pub fn shader_source(&self) -> HeightmapResult<ShaderSource> {
        match &self.shaders {
            Some(paths) => ShaderSource::from_files(&paths.vertex, &paths.fragment),
            None => Ok(ShaderSource::builtin()),
        }
    }
}
