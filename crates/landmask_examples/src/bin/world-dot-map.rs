//! Generate the stylized dotted world map as an SVG document.
//!
//! Usage: world-dot-map [output-svg]
use std::path::PathBuf;

use anyhow::Context;
use landmask::prelude::*;
use landmask_examples::init_tracing;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let output = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("assets/world-map.svg"));

    if let Some(dir) = output.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("creating output directory '{}'", dir.display()))?;
    }

    let config = DotMapConfig::new(continents());
    let mut rng = StdRng::from_os_rng();
    let dots = write_dot_map(&config, &mut rng, &output)?;
    println!("Generated {} ({dots} dots)", output.display());
    Ok(())
}
