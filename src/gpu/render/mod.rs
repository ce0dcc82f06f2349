// ============================================
// GPU Render Module - Render target, пайплайн, readback
// ============================================

pub mod pipelines;
pub mod readback;
pub mod render_target;

pub use readback::{decode_height, HeightmapPixels};
pub use render_target::{ColorFormat, RenderTarget, RENDER_TARGET_FORMAT};
