// ============================================
// Readback - Чтение карты высот обратно на CPU
// ============================================

use futures_intrusive::channel::shared::oneshot_channel;

use crate::gpu::core::RenderContext;
use crate::gpu::error::{HeightmapError, HeightmapResult};
use crate::gpu::heightmap::HeightmapSize;

const SOURCE_BYTES_PER_PIXEL: usize = 4;

/// Выровнять строку до COPY_BYTES_PER_ROW_ALIGNMENT (256 байт)
pub fn padded_bytes_per_row(width: u32) -> u32 {
    let unpadded = width * SOURCE_BYTES_PER_PIXEL as u32;
    let align = wgpu::COPY_BYTES_PER_ROW_ALIGNMENT;
    unpadded.div_ceil(align) * align
}

/// RGBA строки с паддингом -> плотный RGB
pub fn strip_padding_to_rgb(data: &[u8], width: u32, height: u32, padded_bpr: u32) -> Vec<u8> {
    let mut rgb = Vec::with_capacity(width as usize * height as usize * 3);
    for row in 0..height as usize {
        let start = row * padded_bpr as usize;
        let row_bytes = &data[start..start + width as usize * SOURCE_BYTES_PER_PIXEL];
        for px in row_bytes.chunks_exact(SOURCE_BYTES_PER_PIXEL) {
            rgb.extend_from_slice(&px[..3]);
        }
    }
    rgb
}

/// Декодировать высоту, упакованную встроенным шейдером в 24 бита RGB
pub fn decode_height(rgb: [u8; 3]) -> f32 {
    rgb[0] as f32 / 255.0 + rgb[1] as f32 / (255.0 * 255.0) + rgb[2] as f32 / (255.0 * 65025.0)
}

/// Плотный RGB снимок render target'а, строка 0 сверху
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeightmapPixels {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl HeightmapPixels {
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y as usize * self.width as usize + x as usize) * 3;
        match self.data.get(idx..idx + 3)? {
            &[r, g, b] => Some([r, g, b]),
            _ => None,
        }
    }

    pub fn height_at(&self, x: u32, y: u32) -> Option<f32> {
        self.pixel(x, y).map(decode_height)
    }

    pub fn min_max_height(&self) -> Option<(f32, f32)> {
        self.data
            .chunks_exact(3)
            .map(|px| decode_height([px[0], px[1], px[2]]))
            .fold(None, |acc, h| match acc {
                None => Some((h, h)),
                Some((lo, hi)) => Some((lo.min(h), hi.max(h))),
            })
    }
}

pub fn read_texture_rgb(
    ctx: &RenderContext,
    texture: &wgpu::Texture,
    size: HeightmapSize,
) -> HeightmapResult<HeightmapPixels> {
    let device = &ctx.device;
    let padded_bpr = padded_bytes_per_row(size.width);
    let buffer_size = padded_bpr as wgpu::BufferAddress * size.height as wgpu::BufferAddress;

    let staging = ctx
        .scoped(|device| {
            let staging = device.create_buffer(&wgpu::BufferDescriptor {
                label: Some("Heightmap Readback Staging"),
                size: buffer_size,
                usage: wgpu::BufferUsages::COPY_DST | wgpu::BufferUsages::MAP_READ,
                mapped_at_creation: false,
            });

            let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Heightmap Readback Encoder"),
            });
            encoder.copy_texture_to_buffer(
                wgpu::TexelCopyTextureInfo {
                    texture,
                    mip_level: 0,
                    origin: wgpu::Origin3d::ZERO,
                    aspect: wgpu::TextureAspect::All,
                },
                wgpu::TexelCopyBufferInfo {
                    buffer: &staging,
                    layout: wgpu::TexelCopyBufferLayout {
                        offset: 0,
                        bytes_per_row: Some(padded_bpr),
                        rows_per_image: Some(size.height),
                    },
                },
                size.extent(),
            );
            ctx.queue.submit(std::iter::once(encoder.finish()));
            staging
        })
        .map_err(HeightmapError::readback)?;

    let slice = staging.slice(..);
    let (sender, receiver) = oneshot_channel();
    slice.map_async(wgpu::MapMode::Read, move |result| {
        let _ = sender.send(result);
    });
    device
        .poll(wgpu::PollType::Wait)
        .map_err(HeightmapError::readback)?;

    pollster::block_on(receiver.receive())
        .ok_or_else(|| HeightmapError::readback("map_async callback dropped"))?
        .map_err(HeightmapError::readback)?;

    let data = slice.get_mapped_range();
    let rgb = strip_padding_to_rgb(&data, size.width, size.height, padded_bpr);
    drop(data);
    staging.unmap();

    Ok(HeightmapPixels {
        width: size.width,
        height: size.height,
        data: rgb,
    })
}
