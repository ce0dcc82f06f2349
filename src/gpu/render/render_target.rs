// ============================================
// Render Target - Offscreen текстура карты высот
// ============================================
// Linear min / Nearest mag, без мипмапов, только RGB.
// wgpu не умеет рендерить в 3-канальный формат, поэтому хранилище
// Rgba8Unorm, а пайплайн пишет только RGB (alpha всегда 1).

use crate::gpu::core::RenderContext;
use crate::gpu::error::HeightmapResult;
use crate::gpu::heightmap::HeightmapSize;

use super::readback::{read_texture_rgb, HeightmapPixels};

pub const RENDER_TARGET_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8Unorm;

/// Раскладка цвета, которую видит потребитель текстуры
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorFormat {
    Rgb,
}

impl ColorFormat {
    pub fn channels(self) -> u32 {
        match self {
            ColorFormat::Rgb => 3,
        }
    }
}

/// Linear для уменьшения, Nearest для увеличения, мипмапов нет
pub fn sampler_descriptor() -> wgpu::SamplerDescriptor<'static> {
    wgpu::SamplerDescriptor {
        label: Some("Heightmap Sampler"),
        address_mode_u: wgpu::AddressMode::ClampToEdge,
        address_mode_v: wgpu::AddressMode::ClampToEdge,
        address_mode_w: wgpu::AddressMode::ClampToEdge,
        mag_filter: wgpu::FilterMode::Nearest,
        min_filter: wgpu::FilterMode::Linear,
        mipmap_filter: wgpu::FilterMode::Nearest,
        ..Default::default()
    }
}

/// Цветовой буфер, принадлежащий генератору
pub struct RenderTarget {
    texture: wgpu::Texture,
    view: wgpu::TextureView,
    sampler: wgpu::Sampler,
    size: HeightmapSize,
}

impl RenderTarget {
    pub fn new(device: &wgpu::Device, size: HeightmapSize) -> Self {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Heightmap Render Target"),
            size: size.extent(),
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: RENDER_TARGET_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT
                | wgpu::TextureUsages::TEXTURE_BINDING
                | wgpu::TextureUsages::COPY_SRC,
            view_formats: &[],
        });

        let view = texture.create_view(&wgpu::TextureViewDescriptor {
            label: Some("Heightmap Render Target View"),
            ..Default::default()
        });

        let sampler = device.create_sampler(&sampler_descriptor());

        Self {
            texture,
            view,
            sampler,
            size,
        }
    }

    pub fn width(&self) -> u32 {
        self.size.width
    }

    pub fn height(&self) -> u32 {
        self.size.height
    }

    pub fn size(&self) -> HeightmapSize {
        self.size
    }

    pub fn color_format(&self) -> ColorFormat {
        ColorFormat::Rgb
    }

    pub fn channels(&self) -> u32 {
        self.color_format().channels()
    }

    pub fn texture(&self) -> &wgpu::Texture {
        &self.texture
    }

    /// View для сэмплирования в шейдерах потребителей
    pub fn view(&self) -> &wgpu::TextureView {
        &self.view
    }

    pub fn sampler(&self) -> &wgpu::Sampler {
        &self.sampler
    }

    /// Скопировать содержимое на CPU (RGB, без паддинга)
    pub fn read_pixels(&self, ctx: &RenderContext) -> HeightmapResult<HeightmapPixels> {
        read_texture_rgb(ctx, &self.texture, self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_has_three_channels() {
        assert_eq!(ColorFormat::Rgb.channels(), 3);
    }

    #[test]
    fn sampler_filters_linear_down_nearest_up() {
        let desc = sampler_descriptor();
        assert_eq!(desc.min_filter, wgpu::FilterMode::Linear);
        assert_eq!(desc.mag_filter, wgpu::FilterMode::Nearest);
        assert_eq!(desc.compare, None);
    }

    #[test]
    fn storage_format_is_renderable_unorm() {
        assert_eq!(RENDER_TARGET_FORMAT.block_copy_size(None), Some(4));
        assert!(!RENDER_TARGET_FORMAT.is_srgb());
    }
}
