//! Recolor a satellite-style raster so the gold hue band stays lit against a
//! dimmed grayscale background.
//!
//! Usage: gold-presence-map <input-image> [output-image]
use std::path::PathBuf;

use anyhow::Context;
use landmask::prelude::*;
use landmask_examples::init_tracing;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let mut args = std::env::args().skip(1);
    let input = PathBuf::from(
        args.next()
            .context("usage: gold-presence-map <input-image> [output-image]")?,
    );
    let output = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("assets/gold-presence-map.png"));

    if let Some(dir) = output.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("creating output directory '{}'", dir.display()))?;
    }

    recolor_image(&input, &output, &CompositorConfig::default())?;
    println!("Processed image saved to {}", output.display());
    Ok(())
}
