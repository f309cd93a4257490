//! Polygon dot-map generation: sample a fixed-step grid over a canvas, keep
//! the points that land inside any landmass polygon, and emit them as styled
//! circles in an SVG document.
use rand::RngCore;

pub mod continents;
pub mod generator;
pub mod grid;
pub mod polygon;
pub mod style;
pub mod svg;

pub use continents::continents;
pub use generator::{generate, render, write_dot_map, Dot, DotMapConfig};
pub use grid::SampleGrid;
pub use polygon::Polygon;
pub use style::{DotStyle, DotStyleConfig, Rgb};
pub use svg::SvgDocument;

/// Generate a random float in the range [0, 1].
#[inline]
pub(crate) fn rand01(rng: &mut dyn RngCore) -> f32 {
    (rng.next_u32() as f32) / ((u32::MAX as f32) + 1.0)
}
