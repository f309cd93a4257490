//! Hue-band compositing: keep pixels inside a target HSV band at full color
//! and cross-fade everything else into a dimmed grayscale background.
//!
//! The pipeline is: binary band mask, box smoothing, masked in-band layer,
//! dimmed grayscale layer, per-pixel linear blend.
pub mod compositor;
pub mod mask;

pub use compositor::{composite, dimmed_grayscale, recolor_image, CompositorConfig};
pub use mask::{band_mask, smooth_mask, HueBand};
