pub mod gpu;

pub use gpu::{
    ColorFormat, GeneratorConfig, HeightmapError, HeightmapPixels, HeightmapResult,
    HeightmapTextureGenerator, RenderContext, RenderTarget, ShaderSource,
};
