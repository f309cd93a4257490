//! Compositing of the in-band layer over a dimmed grayscale background.
use std::path::Path;

use image::{Rgb, RgbImage};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::band::mask::{band_mask, smooth_mask, HueBand};
use crate::color::luma;
use crate::error::{Error, Result};

/// Configuration for the hue-band compositor.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug)]
#[non_exhaustive]
pub struct CompositorConfig {
    /// Target band kept at full color.
    pub band: HueBand,
    /// Odd box-blur kernel size applied to the binary mask.
    pub blur_kernel: u32,
    /// Brightness factor for the grayscale background, in [0, 1].
    pub background_dim: f32,
}

impl Default for CompositorConfig {
    fn default() -> Self {
        Self {
            band: HueBand::default(),
            blur_kernel: 5,
            background_dim: 0.35,
        }
    }
}

impl CompositorConfig {
    /// Creates a new [`CompositorConfig`] for the given band.
    pub fn new(band: HueBand) -> Self {
        Self {
            band,
            ..Default::default()
        }
    }

    /// Sets the mask blur kernel size.
    pub fn with_blur_kernel(mut self, blur_kernel: u32) -> Self {
        self.blur_kernel = blur_kernel;
        self
    }

    /// Sets the background dim factor.
    pub fn with_background_dim(mut self, background_dim: f32) -> Self {
        self.background_dim = background_dim;
        self
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        self.band.validate()?;
        if self.blur_kernel == 0 || self.blur_kernel % 2 == 0 {
            return Err(Error::InvalidConfig(format!(
                "blur_kernel ({}) must be odd and >= 1",
                self.blur_kernel
            )));
        }
        if !(0.0..=1.0).contains(&self.background_dim) {
            return Err(Error::InvalidConfig(format!(
                "background_dim ({}) must be in [0, 1]",
                self.background_dim
            )));
        }
        Ok(())
    }
}

/// The background layer: the source reduced to grayscale, replicated across
/// all three channels, and scaled by `dim`.
pub fn dimmed_grayscale(source: &RgbImage, dim: f32) -> RgbImage {
    RgbImage::from_fn(source.width(), source.height(), |x, y| {
        let gray = luma(source.get_pixel(x, y).0) as f32;
        let dimmed = (gray * dim).round().clamp(0.0, 255.0) as u8;
        Rgb([dimmed, dimmed, dimmed])
    })
}

/// Composite a source image against its own dimmed grayscale rendering,
/// keeping full color only where the smoothed band mask is strong.
///
/// Per pixel, with the smoothed mask normalized to `m` in [0, 1]:
/// `out = source * m * m + background * (1 - m)`. The extra `m` factor comes
/// from the in-band layer being extracted through the smoothed mask, so band
/// edges are already soft before the final blend.
pub fn composite(source: &RgbImage, config: &CompositorConfig) -> Result<RgbImage> {
    config.validate()?;

    let mask = band_mask(source, &config.band);
    let mask = smooth_mask(&mask, config.blur_kernel);
    let background = dimmed_grayscale(source, config.background_dim);

    let in_band = mask.pixels().filter(|p| p.0[0] > 0).count();
    debug!(
        width = source.width(),
        height = source.height(),
        in_band,
        "compositing hue-band image"
    );

    let out = RgbImage::from_fn(source.width(), source.height(), |x, y| {
        let m = mask.get_pixel(x, y).0[0] as f32 / 255.0;
        let src = source.get_pixel(x, y).0;
        let bg = background.get_pixel(x, y).0;
        let mut px = [0u8; 3];
        for c in 0..3 {
            let masked = src[c] as f32 * m;
            let blended = masked * m + bg[c] as f32 * (1.0 - m);
            px[c] = blended.round().clamp(0.0, 255.0) as u8;
        }
        Rgb(px)
    });

    Ok(out)
}

/// Decode `input`, composite it with `config`, and encode the result to
/// `output`. Single shot: any failure aborts the run with nothing retried.
pub fn recolor_image(input: &Path, output: &Path, config: &CompositorConfig) -> Result<()> {
    config.validate()?;

    let source = image::open(input)
        .map_err(|source| Error::Decode {
            path: input.to_path_buf(),
            source,
        })?
        .to_rgb8();

    let result = composite(&source, config)?;

    result.save(output).map_err(|err| Error::Write {
        path: output.to_path_buf(),
        source: match err {
            image::ImageError::IoError(io) => io,
            other => std::io::Error::other(other),
        },
    })?;

    info!(
        input = %input.display(),
        output = %output.display(),
        "recolored image written"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uniform(w: u32, h: u32, rgb: [u8; 3]) -> RgbImage {
        RgbImage::from_pixel(w, h, image::Rgb(rgb))
    }

    #[test]
    fn validate_rejects_even_kernel_and_bad_dim() {
        let config = CompositorConfig::default().with_blur_kernel(4);
        assert!(config.validate().is_err());
        let config = CompositorConfig::default().with_background_dim(1.5);
        assert!(config.validate().is_err());
        assert!(CompositorConfig::default().validate().is_ok());
    }

    #[test]
    fn out_of_band_image_becomes_the_dimmed_grayscale_layer() {
        // Pure blue never enters the gold band, so the blend must reduce to
        // the background layer exactly, independent of band parameters.
        let source = uniform(8, 8, [0, 0, 255]);
        let config = CompositorConfig::default();
        let out = composite(&source, &config).unwrap();
        let expected = dimmed_grayscale(&source, config.background_dim);
        assert_eq!(out, expected);
    }

    #[test]
    fn in_band_image_round_trips_to_the_source() {
        let source = uniform(8, 8, [255, 200, 0]);
        let out = composite(&source, &CompositorConfig::default()).unwrap();
        assert_eq!(out, source);
    }

    #[test]
    fn dimming_scales_uniform_gray_exactly() {
        let source = uniform(4, 4, [200, 200, 200]);
        let background = dimmed_grayscale(&source, 0.35);
        for p in background.pixels() {
            assert_eq!(p.0, [70, 70, 70]);
        }
    }

    #[test]
    fn interior_in_band_mask_beats_out_of_band_mask() {
        // Left half gold, right half blue; compare interior pixels away
        // from the band edge after smoothing.
        let mut source = uniform(16, 8, [0, 0, 255]);
        for y in 0..8 {
            for x in 0..8 {
                source.put_pixel(x, y, image::Rgb([255, 200, 0]));
            }
        }
        let config = CompositorConfig::default();
        let mask = smooth_mask(&band_mask(&source, &config.band), config.blur_kernel);
        assert!(mask.get_pixel(2, 4).0[0] > mask.get_pixel(13, 4).0[0]);
        assert_eq!(mask.get_pixel(2, 4).0[0], 255);
        assert_eq!(mask.get_pixel(13, 4).0[0], 0);
    }

    #[test]
    fn output_keeps_source_dimensions() {
        let source = uniform(13, 7, [10, 20, 30]);
        let out = composite(&source, &CompositorConfig::default()).unwrap();
        assert_eq!(out.dimensions(), source.dimensions());
    }

    #[test]
    fn recolor_reports_decode_failure_for_missing_input() {
        let err = recolor_image(
            Path::new("/definitely/missing.png"),
            Path::new("/tmp/out.png"),
            &CompositorConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(err, Error::Decode { .. }));
    }
}
