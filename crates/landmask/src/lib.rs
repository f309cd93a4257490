#![forbid(unsafe_code)]
//! landmask: hue-band raster recoloring and polygon dot-map generation.
//!
//! Modules:
//! - color: HSV samples and grayscale conversion on the 8-bit pipeline scale
//! - band: hue/saturation/value band masking and the grayscale blend compositor
//! - dotmap: polygon containment, grid sampling, dot styling, and SVG assembly
//!
//! Both pipelines are single-pass batch operations: the compositor derives a
//! recolored raster from one input raster, the dot-map generator derives a
//! vector document from a polygon set and a sampling grid.
pub mod band;
pub mod color;
pub mod dotmap;
pub mod error;

/// Convenient re-exports for common types. Import with `use landmask::prelude::*;`.
pub mod prelude {
    pub use crate::band::{
        band_mask, composite, recolor_image, smooth_mask, CompositorConfig, HueBand,
    };
    pub use crate::color::{luma, Hsv};
    pub use crate::dotmap::continents::continents;
    pub use crate::dotmap::generator::{generate, render, write_dot_map, Dot, DotMapConfig};
    pub use crate::dotmap::grid::SampleGrid;
    pub use crate::dotmap::polygon::Polygon;
    pub use crate::dotmap::style::{DotStyle, DotStyleConfig, Rgb};
    pub use crate::dotmap::svg::SvgDocument;
    pub use crate::error::{Error, Result};
}
