// Интеграционные тесты генератора. Нужен GPU адаптер (подойдёт и программный);
// без него тесты пропускаются.

use heightgen::gpu::render::RENDER_TARGET_FORMAT;
use heightgen::{ColorFormat, HeightmapError, HeightmapTextureGenerator, RenderContext, ShaderSource};
use ultraviolet::Vec2;

fn gpu() -> Option<RenderContext> {
    match RenderContext::headless_blocking() {
        Ok(ctx) => Some(ctx),
        Err(e) => {
            eprintln!("skipping GPU test: {}", e);
            None
        }
    }
}

fn generator(ctx: &RenderContext, width: i32, height: i32, seed: f32) -> HeightmapTextureGenerator {
    HeightmapTextureGenerator::new(ctx, width, height, seed, &ShaderSource::builtin()).unwrap()
}

#[test]
fn end_to_end_256() {
    let Some(ctx) = gpu() else { return };
    let mut gen = generator(&ctx, 256, 256, 1.0);

    gen.render(&ctx, 10.0, -5.0).unwrap();

    let texture = gen.texture();
    assert_eq!((texture.width(), texture.height()), (256, 256));
    assert_eq!(texture.color_format(), ColorFormat::Rgb);
    assert_eq!(texture.channels(), 3);

    let pixels = gen.read_pixels(&ctx).unwrap();
    assert_eq!(pixels.data.len(), 256 * 256 * 3);
    let (lo, hi) = pixels.min_max_height().unwrap();
    assert!(lo >= 0.0 && hi <= 1.0 && lo < hi);
}

#[test]
fn texture_is_valid_before_first_render() {
    let Some(ctx) = gpu() else { return };
    let gen = generator(&ctx, 64, 32, 3.0);

    let texture = gen.texture();
    assert_eq!(texture.width(), 64);
    assert_eq!(texture.height(), 32);
    assert_eq!(texture.texture().width(), 64);
    assert_eq!(texture.texture().height(), 32);
    assert_eq!(texture.texture().mip_level_count(), 1);
    assert_eq!(texture.texture().format(), RENDER_TARGET_FORMAT);
}

#[test]
fn identical_offsets_give_identical_pixels() {
    let Some(ctx) = gpu() else { return };
    let mut gen = generator(&ctx, 128, 64, 5.0);

    gen.render(&ctx, 12.5, -40.0).unwrap();
    let first = gen.read_pixels(&ctx).unwrap();
    gen.render(&ctx, 12.5, -40.0).unwrap();
    let second = gen.read_pixels(&ctx).unwrap();

    assert_eq!(first, second);
}

#[test]
fn offsets_are_applied_in_call_order() {
    let Some(ctx) = gpu() else { return };
    let mut gen = generator(&ctx, 64, 64, 2.0);

    gen.render(&ctx, 0.0, 0.0).unwrap();
    assert_eq!(gen.material().offset(), Vec2::new(0.0, 0.0));
    let origin = gen.read_pixels(&ctx).unwrap();

    gen.render(&ctx, 300.0, 170.0).unwrap();
    assert_eq!(gen.material().offset(), Vec2::new(300.0, 170.0));
    let moved = gen.read_pixels(&ctx).unwrap();
    assert_ne!(origin, moved);

    gen.render(&ctx, 0.0, 0.0).unwrap();
    assert_eq!(gen.read_pixels(&ctx).unwrap(), origin);
}

#[test]
fn seed_and_uv_scale_stay_fixed() {
    let Some(ctx) = gpu() else { return };
    let mut gen = generator(&ctx, 200, 50, 9.0);
    let scale = gen.material().uv_scale();
    assert_eq!(scale, Vec2::new(1.0 / 200.0, 1.0 / 50.0));

    for i in 0..4 {
        gen.render(&ctx, i as f32 * 17.0, -(i as f32)).unwrap();
    }

    assert_eq!(gen.material().seed(), 9.0);
    assert_eq!(gen.material().uv_scale(), scale);
}

#[test]
fn horizontal_offset_shifts_the_pattern() {
    let Some(ctx) = gpu() else { return };
    let mut gen = generator(&ctx, 64, 16, 4.0);

    gen.render(&ctx, 0.0, 0.0).unwrap();
    let base = gen.read_pixels(&ctx).unwrap();
    gen.render(&ctx, 16.0, 0.0).unwrap();
    let shifted = gen.read_pixels(&ctx).unwrap();

    for y in 0..16 {
        for x in 0..48 {
            let a = base.height_at(x + 16, y).unwrap();
            let b = shifted.height_at(x, y).unwrap();
            assert!((a - b).abs() < 2e-3, "({}, {}): {} vs {}", x, y, a, b);
        }
    }
}

#[test]
fn different_seeds_differ() {
    let Some(ctx) = gpu() else { return };
    let mut a = generator(&ctx, 32, 32, 1.0);
    let mut b = generator(&ctx, 32, 32, 2.0);

    a.render(&ctx, 0.0, 0.0).unwrap();
    b.render(&ctx, 0.0, 0.0).unwrap();

    assert_ne!(a.read_pixels(&ctx).unwrap(), b.read_pixels(&ctx).unwrap());
}

#[test]
fn non_positive_size_is_rejected() {
    let Some(ctx) = gpu() else { return };
    for (w, h) in [(0, 256), (256, -5)] {
        let err = HeightmapTextureGenerator::new(&ctx, w, h, 1.0, &ShaderSource::builtin())
            .err()
            .unwrap();
        assert!(matches!(err, HeightmapError::InvalidDimension { .. }), "{}", err);
    }
}

#[test]
fn broken_shader_fails_to_compile() {
    let Some(ctx) = gpu() else { return };
    let builtin = ShaderSource::builtin();
    let broken = ShaderSource::new(builtin.vertex.clone(), "@fragment fn fs_main( {");

    let err = HeightmapTextureGenerator::new(&ctx, 16, 16, 1.0, &broken).err().unwrap();
    assert!(matches!(err, HeightmapError::ShaderCompilation(_)), "{}", err);
}

#[test]
fn missing_entry_point_fails_to_link() {
    let Some(ctx) = gpu() else { return };
    let builtin = ShaderSource::builtin();
    let fragment = "@fragment fn other() -> @location(0) vec4<f32> { return vec4<f32>(1.0); }";
    let source = ShaderSource::new(builtin.vertex.clone(), fragment);

    let err = HeightmapTextureGenerator::new(&ctx, 16, 16, 1.0, &source).err().unwrap();
    assert!(matches!(err, HeightmapError::ShaderCompilation(_)), "{}", err);
}

#[test]
fn oversized_uniform_block_fails_to_link() {
    let Some(ctx) = gpu() else { return };
    let builtin = ShaderSource::builtin();
    let fragment = r#"
struct HeightmapUniforms {
    model_view_proj: mat4x4<f32>,
    seed: f32,
    uv_scale: vec2<f32>,
    offset: vec2<f32>,
    extra: vec4<f32>,
};

@group(0) @binding(0)
var<uniform> uniforms: HeightmapUniforms;

@fragment
fn fs_main(@location(0) uv: vec2<f32>) -> @location(0) vec4<f32> {
    return vec4<f32>(uv, uniforms.extra.x, 1.0);
}
"#;
    let source = ShaderSource::new(builtin.vertex.clone(), fragment);

    let err = HeightmapTextureGenerator::new(&ctx, 16, 16, 1.0, &source).err().unwrap();
    assert!(matches!(err, HeightmapError::ShaderCompilation(_)), "{}", err);
}

#[test]
fn context_exposes_adapter_texture_limit() {
    let Some(ctx) = gpu() else { return };
    let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
        backends: wgpu::Backends::all(),
        ..Default::default()
    });
    let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
        power_preference: wgpu::PowerPreference::HighPerformance,
        compatible_surface: None,
        force_fallback_adapter: false,
    }))
    .unwrap();

    let adapter_max = adapter.limits().max_texture_dimension_2d;
    assert!(ctx.max_texture_dimension() >= adapter_max);

    // 4096 выходит за downlevel лимит 2048
    if ctx.max_texture_dimension() >= 4096 {
        let gen = generator(&ctx, 4096, 4096, 1.0);
        assert_eq!((gen.width(), gen.height()), (4096, 4096));
    }
}
