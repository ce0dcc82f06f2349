use crate::gpu::error::{HeightmapError, HeightmapResult};

/// Проверенные размеры карты высот (обе стороны > 0)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeightmapSize {
    pub width: u32,
    pub height: u32,
}

impl HeightmapSize {
    pub fn new(width: i32, height: i32) -> HeightmapResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(HeightmapError::InvalidDimension {
                width: width as i64,
                height: height as i64,
                reason: "width and height must be positive",
            });
        }
        Ok(Self {
            width: width as u32,
            height: height as u32,
        })
    }

    /// Проверка против лимита устройства
    pub fn check_limit(self, max_dimension: u32) -> HeightmapResult<Self> {
        if self.width > max_dimension || self.height > max_dimension {
            return Err(HeightmapError::InvalidDimension {
                width: self.width as i64,
                height: self.height as i64,
                reason: "exceeds the device texture size limit",
            });
        }
        Ok(self)
    }

    pub fn extent(&self) -> wgpu::Extent3d {
        wgpu::Extent3d {
            width: self.width,
            height: self.height,
            depth_or_array_layers: 1,
        }
    }
}
