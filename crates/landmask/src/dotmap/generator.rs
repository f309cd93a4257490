//! The dot-map pipeline: grid scan, landmass classification, styling, SVG.
use std::path::Path;

use rand::RngCore;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::dotmap::grid::SampleGrid;
use crate::dotmap::polygon::Polygon;
use crate::dotmap::style::{DotStyle, DotStyleConfig};
use crate::dotmap::svg::SvgDocument;
use crate::error::{Error, Result};

/// A renderable dot. Immutable once created; positions come from the grid,
/// the style from the injected RNG.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dot {
    pub x: u32,
    pub y: u32,
    pub radius: f32,
    pub style: DotStyle,
}

/// Configuration for generating a polygon dot map.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug)]
#[non_exhaustive]
pub struct DotMapConfig {
    /// Output canvas size and sampling lattice.
    pub grid: SampleGrid,
    /// Dot radius in pixels.
    pub radius: f32,
    /// Landmass polygons in canvas-percentage coordinates. Overlap is
    /// harmless: classification is an OR across the list.
    pub polygons: Vec<Polygon>,
    /// Per-dot styling.
    pub style: DotStyleConfig,
}

impl Default for DotMapConfig {
    /// The canvas and dot geometry of the original asset run; polygons are
    /// left empty so callers choose their dataset explicitly.
    fn default() -> Self {
        Self {
            grid: SampleGrid::new(1000, 500, 8),
            radius: 1.5,
            polygons: Vec::new(),
            style: DotStyleConfig::default(),
        }
    }
}

impl DotMapConfig {
    /// Creates a new [`DotMapConfig`] for the given polygon set.
    pub fn new(polygons: Vec<Polygon>) -> Self {
        Self {
            polygons,
            ..Default::default()
        }
    }

    /// Sets the canvas size and sampling step.
    pub fn with_grid(mut self, grid: SampleGrid) -> Self {
        self.grid = grid;
        self
    }

    /// Sets the dot radius.
    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    /// Sets the dot styling.
    pub fn with_style(mut self, style: DotStyleConfig) -> Self {
        self.style = style;
        self
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        self.grid.validate()?;
        self.style.validate()?;
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(Error::InvalidConfig(format!(
                "radius ({}) must be finite and > 0",
                self.radius
            )));
        }
        Ok(())
    }
}

/// Scan the sample grid and produce one styled [`Dot`] per land point.
///
/// A point is land if it lies inside any polygon, first match wins. Positions
/// and count are deterministic for a fixed config; only styling draws from
/// `rng`. An empty polygon list yields no dots, which is a valid result.
pub fn generate(config: &DotMapConfig, rng: &mut impl RngCore) -> Result<Vec<Dot>> {
    config.validate()?;

    let mut dots = Vec::new();
    for (x, y) in config.grid.points() {
        let percent = config.grid.to_percent((x, y));
        if config.polygons.iter().any(|p| p.contains(percent)) {
            dots.push(Dot {
                x,
                y,
                radius: config.radius,
                style: config.style.sample(rng),
            });
        }
    }

    debug!(
        candidates = config.grid.len(),
        land = dots.len(),
        "classified sample grid"
    );
    Ok(dots)
}

/// Assemble the dots into an SVG document in grid-scan order.
pub fn render(config: &DotMapConfig, dots: &[Dot]) -> SvgDocument {
    let mut doc = SvgDocument::new(config.grid.width, config.grid.height);
    for dot in dots {
        doc.circle(dot.x, dot.y, dot.radius, dot.style.color, dot.style.opacity);
    }
    doc
}

/// Generate, render, and write a dot map to `path`. Returns the number of
/// land dots emitted.
pub fn write_dot_map(
    config: &DotMapConfig,
    rng: &mut impl RngCore,
    path: &Path,
) -> Result<usize> {
    let dots = generate(config, rng)?;
    render(config, &dots).write_to(path)?;
    info!(
        dots = dots.len(),
        output = %path.display(),
        "dot map written"
    );
    Ok(dots.len())
}
