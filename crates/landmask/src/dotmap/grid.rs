//! Fixed-step sample lattice over the output canvas.
use glam::Vec2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A fixed-step pixel lattice over `[0, width) x [0, height)`.
///
/// Points are visited x-major, y-minor: all y values for the first column,
/// then the next column. Generation is fully deterministic; only the dot
/// styling downstream consumes randomness.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SampleGrid {
    pub width: u32,
    pub height: u32,
    pub step: u32,
}

impl SampleGrid {
    pub fn new(width: u32, height: u32, step: u32) -> Self {
        Self {
            width,
            height,
            step,
        }
    }

    /// Validates the grid, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidConfig(
                "canvas width and height must be > 0".into(),
            ));
        }
        if self.step == 0 {
            return Err(Error::InvalidConfig("step must be > 0".into()));
        }
        Ok(())
    }

    /// Number of columns: `ceil(width / step)`.
    pub fn cols(&self) -> u32 {
        self.width.div_ceil(self.step)
    }

    /// Number of rows: `ceil(height / step)`.
    pub fn rows(&self) -> u32 {
        self.height.div_ceil(self.step)
    }

    /// Total candidate count before any polygon filtering.
    pub fn len(&self) -> usize {
        self.cols() as usize * self.rows() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All lattice points in scan order.
    pub fn points(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        let step = self.step as usize;
        let height = self.height;
        (0..self.width)
            .step_by(step)
            .flat_map(move |x| (0..height).step_by(step).map(move |y| (x, y)))
    }

    /// Convert a pixel coordinate to canvas-percentage coordinates.
    pub fn to_percent(&self, point: (u32, u32)) -> Vec2 {
        Vec2::new(
            100.0 * point.0 as f32 / self.width as f32,
            100.0 * point.1 as f32 / self.height as f32,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidate_count_matches_the_stepping_rule() {
        let grid = SampleGrid::new(1000, 500, 8);
        assert_eq!(grid.cols(), 125);
        assert_eq!(grid.rows(), 63);
        assert_eq!(grid.len(), 125 * 63);
        assert_eq!(grid.points().count(), grid.len());
    }

    #[test]
    fn points_are_x_major_and_start_at_origin() {
        let grid = SampleGrid::new(10, 10, 4);
        let points: Vec<_> = grid.points().collect();
        assert_eq!(
            points,
            vec![
                (0, 0),
                (0, 4),
                (0, 8),
                (4, 0),
                (4, 4),
                (4, 8),
                (8, 0),
                (8, 4),
                (8, 8),
            ]
        );
    }

    #[test]
    fn points_stay_inside_the_canvas() {
        let grid = SampleGrid::new(13, 7, 5);
        for (x, y) in grid.points() {
            assert!(x < 13 && y < 7);
        }
    }

    #[test]
    fn percent_conversion_scales_linearly() {
        let grid = SampleGrid::new(1000, 500, 8);
        assert_eq!(grid.to_percent((0, 0)), Vec2::new(0.0, 0.0));
        assert_eq!(grid.to_percent((500, 250)), Vec2::new(50.0, 50.0));
        assert_eq!(grid.to_percent((1000, 500)), Vec2::new(100.0, 100.0));
    }

    #[test]
    fn rerunning_yields_identical_points() {
        let grid = SampleGrid::new(97, 41, 6);
        let a: Vec<_> = grid.points().collect();
        let b: Vec<_> = grid.points().collect();
        assert_eq!(a, b);
    }

    #[test]
    fn validate_rejects_zero_dimensions_and_step() {
        assert!(SampleGrid::new(0, 10, 1).validate().is_err());
        assert!(SampleGrid::new(10, 0, 1).validate().is_err());
        assert!(SampleGrid::new(10, 10, 0).validate().is_err());
        assert!(SampleGrid::new(10, 10, 3).validate().is_ok());
    }
}
