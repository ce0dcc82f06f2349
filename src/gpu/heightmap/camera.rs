// ============================================
// Orthographic Camera - Камера для render-to-texture
// ============================================
// Камера в начале координат смотрит вдоль -Z и кадрирует
// ровно width x height, так что плоскость ложится 1:1 на текстуру.

use ultraviolet::Mat4;

pub const CAMERA_NEAR: f32 = 1.0;
pub const CAMERA_FAR: f32 = 1000.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrthographicCamera {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
    pub near: f32,
    pub far: f32,
}

impl OrthographicCamera {
    /// Камера, кадрирующая прямоугольник width x height с центром в начале координат
    pub fn framing(width: f32, height: f32) -> Self {
        Self {
            left: width / -2.0,
            right: width / 2.0,
            top: height / 2.0,
            bottom: height / -2.0,
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
        }
    }

    pub fn projection_matrix(&self) -> Mat4 {
        ultraviolet::projection::orthographic_wgpu_dx(
            self.left,
            self.right,
            self.bottom,
            self.top,
            self.near,
            self.far,
        )
    }

    /// Камера стоит в начале координат без поворота
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::identity()
    }

    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}
