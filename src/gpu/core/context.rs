// ============================================
// Render Context - GPU устройство и очередь
// ============================================
// Контекст принадлежит вызывающему коду и переживает генератор.
// Генератор только заимствует его на время create/render.

use std::sync::Arc;

use crate::gpu::error::{HeightmapError, HeightmapResult};

/// Устройство + очередь, через которые генератор рендерит
#[derive(Clone)]
pub struct RenderContext {
    pub device: Arc<wgpu::Device>,
    pub queue: Arc<wgpu::Queue>,
}

impl RenderContext {
    /// Обернуть уже существующие устройство и очередь (например, из основного рендерера)
    pub fn from_parts(device: Arc<wgpu::Device>, queue: Arc<wgpu::Queue>) -> Self {
        Self { device, queue }
    }

    /// Headless инициализация без surface
    pub async fn headless() -> HeightmapResult<Self> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: None,
                force_fallback_adapter: false,
            })
            .await
            .map_err(|e| HeightmapError::Adapter(e.to_string()))?;

        let info = adapter.get_info();
        log::info!("GPU adapter: {} ({:?})", info.name, info.backend);

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("Heightmap Device"),
                required_features: wgpu::Features::empty(),
                required_limits: adapter.limits(),
                memory_hints: Default::default(),
                trace: wgpu::Trace::Off,
            })
            .await
            .map_err(|e| HeightmapError::Device(e.to_string()))?;

        Ok(Self {
            device: Arc::new(device),
            queue: Arc::new(queue),
        })
    }

    /// Блокирующая версия [`RenderContext::headless`]
    pub fn headless_blocking() -> HeightmapResult<Self> {
        pollster::block_on(Self::headless())
    }

    /// Максимальная сторона 2D текстуры для этого устройства
    pub fn max_texture_dimension(&self) -> u32 {
        self.device.limits().max_texture_dimension_2d
    }

    /// Выполнить GPU вызовы под error scope'ами.
    /// Ошибки валидации и нехватки памяти возвращаются, а не уходят в uncaptured handler.
    pub fn scoped<T>(&self, f: impl FnOnce(&wgpu::Device) -> T) -> Result<T, wgpu::Error> {
        self.device.push_error_scope(wgpu::ErrorFilter::OutOfMemory);
        self.device.push_error_scope(wgpu::ErrorFilter::Validation);

        let value = f(&self.device);

        let validation = pollster::block_on(self.device.pop_error_scope());
        let out_of_memory = pollster::block_on(self.device.pop_error_scope());

        match validation.or(out_of_memory) {
            Some(err) => {
                log::warn!("GPU error captured: {}", err);
                Err(err)
            }
            None => Ok(value),
        }
    }
}
