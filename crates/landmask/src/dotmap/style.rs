//! Per-dot styling: palette colors, opacity ranges, and accent overrides.
use std::fmt;

use rand::RngCore;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::dotmap::rand01;
use crate::error::{Error, Result};

/// A palette color, formatted as lowercase `#rrggbb` for SVG fills.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub [u8; 3]);

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0[0], self.0[1], self.0[2])
    }
}

/// Resolved style of a single dot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DotStyle {
    pub color: Rgb,
    pub opacity: f32,
}

/// Styling configuration for land dots.
///
/// Most dots use the primary color with an opacity drawn uniformly from
/// `opacity_range`; with probability `accent_probability` a dot is overridden
/// to the accent color at `accent_opacity`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
#[non_exhaustive]
pub struct DotStyleConfig {
    pub primary: Rgb,
    pub accent: Rgb,
    pub opacity_range: (f32, f32),
    pub accent_probability: f32,
    pub accent_opacity: f32,
}

impl Default for DotStyleConfig {
    /// The styling of the original asset run: dark gray dots with a sparse
    /// bright-blue accent.
    fn default() -> Self {
        Self {
            primary: Rgb([0x44, 0x44, 0x44]),
            accent: Rgb([0x00, 0x99, 0xff]),
            opacity_range: (0.3, 0.7),
            accent_probability: 0.02,
            accent_opacity: 0.8,
        }
    }
}

impl DotStyleConfig {
    /// Validates the styling configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        let (lo, hi) = self.opacity_range;
        if !(0.0..=1.0).contains(&lo) || !(0.0..=1.0).contains(&hi) || lo > hi {
            return Err(Error::InvalidConfig(format!(
                "opacity_range ({lo}, {hi}) must be ordered and within [0, 1]"
            )));
        }
        if !(0.0..=1.0).contains(&self.accent_probability) {
            return Err(Error::InvalidConfig(format!(
                "accent_probability ({}) must be in [0, 1]",
                self.accent_probability
            )));
        }
        if !(0.0..=1.0).contains(&self.accent_opacity) {
            return Err(Error::InvalidConfig(format!(
                "accent_opacity ({}) must be in [0, 1]",
                self.accent_opacity
            )));
        }
        Ok(())
    }

    /// Draw the style for one dot. The opacity draw happens before the
    /// accent check, so count and positions stay independent of styling.
    pub fn sample(&self, rng: &mut dyn RngCore) -> DotStyle {
        let (lo, hi) = self.opacity_range;
        let opacity = lo + rand01(rng) * (hi - lo);
        if rand01(rng) < self.accent_probability {
            DotStyle {
                color: self.accent,
                opacity: self.accent_opacity,
            }
        } else {
            DotStyle {
                color: self.primary,
                opacity,
            }
        }
    }
}
