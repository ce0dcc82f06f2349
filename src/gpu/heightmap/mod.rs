// ============================================
// Heightmap Module - Процедурная карта высот в текстуру
// ============================================
// Камера + плоскость + материал с seed/uv_scale/offset,
// рендер в offscreen текстуру по запросу.

pub mod camera;
pub mod generator;
pub mod material;
pub mod plane;
pub mod shader;
mod size;

pub use camera::OrthographicCamera;
pub use generator::{HeightmapScene, HeightmapTextureGenerator};
pub use material::{HeightmapUniforms, PlaneMaterial};
pub use plane::{PlaneGeometry, PlaneMesh, PlaneVertex, PLANE_DEPTH};
pub use shader::{ShaderProgram, ShaderSource};
pub use size::HeightmapSize;
