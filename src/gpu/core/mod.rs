// ============================================
// Core Module - GPU контекст и конфигурация
// ============================================

mod config;
mod context;

pub use config::{GeneratorConfig, ShaderPaths, DEFAULT_SEED, DEFAULT_SIZE};
pub use context::RenderContext;
