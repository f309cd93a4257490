//! Per-pixel color conversions on the 8-bit pipeline scale.
//!
//! Hue is encoded in 0..180 and saturation/value in 0..=255, the scale the
//! band thresholds in [`crate::band::HueBand`] are expressed in. Conversions
//! are deterministic and allocation-free; they exist only as intermediates
//! for thresholding and are never persisted.

/// A hue/saturation/value sample. Hue 0..180 (two degrees per step),
/// saturation and value 0..=255.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hsv {
    pub h: u8,
    pub s: u8,
    pub v: u8,
}

impl Hsv {
    /// Convert an RGB triplet to its HSV sample.
    pub fn from_rgb(rgb: [u8; 3]) -> Self {
        let r = rgb[0] as f32 / 255.0;
        let g = rgb[1] as f32 / 255.0;
        let b = rgb[2] as f32 / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let h_deg = if delta == 0.0 {
            0.0
        } else if max == r {
            60.0 * ((g - b) / delta).rem_euclid(6.0)
        } else if max == g {
            60.0 * ((b - r) / delta + 2.0)
        } else {
            60.0 * ((r - g) / delta + 4.0)
        };

        let s = if max > 0.0 { delta / max } else { 0.0 };

        Self {
            h: ((h_deg * 0.5).round() as u16 % 180) as u8,
            s: (s * 255.0).round() as u8,
            v: (max * 255.0).round() as u8,
        }
    }
}

/// Rec. 601 luma of an RGB triplet, rounded to u8.
pub fn luma(rgb: [u8; 3]) -> u8 {
    let y = 0.299 * rgb[0] as f32 + 0.587 * rgb[1] as f32 + 0.114 * rgb[2] as f32;
    y.round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primaries_map_to_expected_hues() {
        assert_eq!(Hsv::from_rgb([255, 0, 0]), Hsv { h: 0, s: 255, v: 255 });
        assert_eq!(Hsv::from_rgb([0, 255, 0]), Hsv { h: 60, s: 255, v: 255 });
        assert_eq!(Hsv::from_rgb([0, 0, 255]), Hsv { h: 120, s: 255, v: 255 });
    }

    #[test]
    fn gray_has_zero_saturation() {
        let hsv = Hsv::from_rgb([77, 77, 77]);
        assert_eq!(hsv.s, 0);
        assert_eq!(hsv.v, 77);
    }

    #[test]
    fn gold_falls_in_the_warm_hue_range() {
        // A typical gold tone sits between hue 10 and 40 on this scale.
        let hsv = Hsv::from_rgb([255, 200, 0]);
        assert!((10..=40).contains(&hsv.h), "unexpected hue {}", hsv.h);
        assert_eq!(hsv.s, 255);
        assert_eq!(hsv.v, 255);
    }

    #[test]
    fn luma_weights_sum_to_the_input_for_gray() {
        assert_eq!(luma([200, 200, 200]), 200);
        assert_eq!(luma([0, 0, 0]), 0);
        assert_eq!(luma([255, 255, 255]), 255);
    }

    #[test]
    fn luma_prefers_green() {
        assert!(luma([0, 255, 0]) > luma([255, 0, 0]));
        assert!(luma([255, 0, 0]) > luma([0, 0, 255]));
    }
}
