// ============================================
// heightgen - headless рендер карт высот
// ============================================
// Использование: heightgen [config.json]

use heightgen::{GeneratorConfig, HeightmapResult, HeightmapTextureGenerator, RenderContext};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run() -> HeightmapResult<()> {
    let config = match std::env::args().nth(1) {
        Some(path) => GeneratorConfig::load_from_file(&path)?,
        None => GeneratorConfig::default(),
    };
    let shader = config.shader_source()?;

    let ctx = RenderContext::headless_blocking()?;
    let mut generator =
        HeightmapTextureGenerator::new(&ctx, config.width, config.height, config.seed, &shader)?;

    log::info!(
        "Heightmap {}x{} seed={} tiles={}",
        generator.width(),
        generator.height(),
        generator.seed(),
        config.tiles.len()
    );

    for [x, y] in &config.tiles {
        generator.render(&ctx, *x, *y)?;
        let pixels = generator.read_pixels(&ctx)?;
        match pixels.min_max_height() {
            Some((lo, hi)) => log::info!("offset ({}, {}): height {:.4}..{:.4}", x, y, lo, hi),
            None => log::warn!("offset ({}, {}): empty texture", x, y),
        }
    }

    Ok(())
}
