// ============================================
// GPU Module - Генератор карты высот на шейдерах
// ============================================

pub mod core;
pub mod error;
pub mod heightmap;
pub mod render;

pub use core::{GeneratorConfig, RenderContext};
pub use error::{HeightmapError, HeightmapResult};
pub use heightmap::{HeightmapTextureGenerator, ShaderSource};
pub use render::{ColorFormat, HeightmapPixels, RenderTarget};
