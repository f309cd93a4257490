//! Band membership masks and mask smoothing.
use image::{GrayImage, Luma, RgbImage};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::color::Hsv;
use crate::error::{Error, Result};

/// A target HSV band. A pixel is in-band iff its hue lies in
/// `[hue_lo, hue_hi]` and its saturation and value meet the minimums.
///
/// Thresholds use the pipeline scale: hue 0..180, saturation/value 0..=255.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub struct HueBand {
    pub hue_lo: u8,
    pub hue_hi: u8,
    pub sat_min: u8,
    pub val_min: u8,
}

impl Default for HueBand {
    /// The gold/yellow band the original asset run used.
    fn default() -> Self {
        Self {
            hue_lo: 10,
            hue_hi: 40,
            sat_min: 50,
            val_min: 50,
        }
    }
}

impl HueBand {
    pub fn new(hue_lo: u8, hue_hi: u8, sat_min: u8, val_min: u8) -> Self {
        Self {
            hue_lo,
            hue_hi,
            sat_min,
            val_min,
        }
    }

    /// Validates the band, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if self.hue_lo > self.hue_hi {
            return Err(Error::InvalidConfig(format!(
                "hue_lo ({}) must be <= hue_hi ({})",
                self.hue_lo, self.hue_hi
            )));
        }
        if self.hue_hi > 180 {
            return Err(Error::InvalidConfig(format!(
                "hue_hi ({}) exceeds the 0..=180 hue scale",
                self.hue_hi
            )));
        }
        Ok(())
    }

    /// Whether a sample falls inside the band.
    #[inline]
    pub fn contains(&self, hsv: Hsv) -> bool {
        (self.hue_lo..=self.hue_hi).contains(&hsv.h)
            && hsv.s >= self.sat_min
            && hsv.v >= self.val_min
    }
}

/// Compute the binary band mask of an image: 255 where the pixel is in-band,
/// 0 elsewhere. Same dimensions as the source.
pub fn band_mask(image: &RgbImage, band: &HueBand) -> GrayImage {
    GrayImage::from_fn(image.width(), image.height(), |x, y| {
        let hsv = Hsv::from_rgb(image.get_pixel(x, y).0);
        if band.contains(hsv) {
            Luma([255u8])
        } else {
            Luma([0u8])
        }
    })
}

/// Smooth a mask with a normalized box blur of odd `kernel` size.
///
/// Windows that fall off the image are renormalized over the in-bounds
/// samples, so a uniformly saturated mask stays saturated up to the border.
/// Output values are continuous in [0, 255].
pub fn smooth_mask(mask: &GrayImage, kernel: u32) -> GrayImage {
    if kernel <= 1 {
        return mask.clone();
    }
    let radius = (kernel / 2) as i64;
    let (w, h) = (mask.width() as i64, mask.height() as i64);

    GrayImage::from_fn(mask.width(), mask.height(), |x, y| {
        let mut sum = 0u32;
        let mut count = 0u32;
        for dy in -radius..=radius {
            let ny = y as i64 + dy;
            if ny < 0 || ny >= h {
                continue;
            }
            for dx in -radius..=radius {
                let nx = x as i64 + dx;
                if nx < 0 || nx >= w {
                    continue;
                }
                sum += mask.get_pixel(nx as u32, ny as u32).0[0] as u32;
                count += 1;
            }
        }
        Luma([((sum as f32 / count as f32).round()) as u8])
    })
}
