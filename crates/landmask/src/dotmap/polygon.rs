//! Polygons in canvas-percentage coordinates and even-odd containment.
use glam::Vec2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A closed polygon with vertices in canvas-percentage coordinates (0–100).
///
/// Closure is implicit: edges are consecutive vertex pairs, with the last
/// vertex paired back to the first. Winding direction does not matter for
/// containment.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    vertices: Vec<Vec2>,
}

/// Outcome of testing one edge against the rightward horizontal ray from a
/// query point. Horizontal edges can never cross the ray and are classified
/// up front, keeping the interpolation free of division by zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum EdgeCrossing {
    Toggles,
    Misses,
}

impl Polygon {
    /// Creates a polygon from its vertex list. Fails unless there are at
    /// least three vertices.
    pub fn new(vertices: Vec<Vec2>) -> Result<Self> {
        if vertices.len() < 3 {
            return Err(Error::InvalidConfig(format!(
                "polygon needs at least 3 vertices, got {}",
                vertices.len()
            )));
        }
        Ok(Self { vertices })
    }

    /// Creates a polygon from `(x%, y%)` pairs.
    pub fn from_percent(points: &[(f32, f32)]) -> Result<Self> {
        Self::new(points.iter().map(|&(x, y)| Vec2::new(x, y)).collect())
    }

    pub fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }

    /// Even-odd ray-casting containment test.
    ///
    /// Casts a horizontal ray rightward from `p` and toggles on every edge
    /// whose y-span strictly straddles `p.y`. Points exactly on an edge or
    /// vertex may be classified either way.
    pub fn contains(&self, p: Vec2) -> bool {
        let mut inside = false;
        let n = self.vertices.len();
        for i in 0..n {
            let a = self.vertices[i];
            let b = self.vertices[(i + 1) % n];
            if edge_crossing(a, b, p) == EdgeCrossing::Toggles {
                inside = !inside;
            }
        }
        inside
    }
}

fn edge_crossing(a: Vec2, b: Vec2, p: Vec2) -> EdgeCrossing {
    if a.y == b.y {
        // Horizontal edge: parallel to the ray, no crossing.
        return EdgeCrossing::Misses;
    }
    let (min_y, max_y) = if a.y < b.y { (a.y, b.y) } else { (b.y, a.y) };
    if !(min_y < p.y && p.y <= max_y) {
        return EdgeCrossing::Misses;
    }
    let x_inters = a.x + (p.y - a.y) / (b.y - a.y) * (b.x - a.x);
    if p.x <= x_inters {
        EdgeCrossing::Toggles
    } else {
        EdgeCrossing::Misses
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect() -> Polygon {
        Polygon::from_percent(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]).unwrap()
    }

    #[test]
    fn new_rejects_degenerate_vertex_lists() {
        assert!(Polygon::from_percent(&[(0.0, 0.0), (1.0, 1.0)]).is_err());
        assert!(Polygon::from_percent(&[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)]).is_ok());
    }

    #[test]
    fn rectangle_classifies_interior_and_exterior() {
        let poly = rect();
        assert!(poly.contains(Vec2::new(5.0, 5.0)));
        assert!(!poly.contains(Vec2::new(15.0, 15.0)));
        assert!(!poly.contains(Vec2::new(-1.0, 5.0)));
        assert!(!poly.contains(Vec2::new(5.0, 11.0)));
    }

    #[test]
    fn winding_direction_does_not_matter() {
        let cw =
            Polygon::from_percent(&[(0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (10.0, 0.0)]).unwrap();
        assert!(cw.contains(Vec2::new(5.0, 5.0)));
        assert!(!cw.contains(Vec2::new(15.0, 5.0)));
    }

    #[test]
    fn horizontal_edges_are_skipped() {
        // Top and bottom edges of the rectangle are horizontal; a query
        // level with an interior row must still resolve without panicking.
        let poly = rect();
        assert!(poly.contains(Vec2::new(5.0, 9.999)));
        assert!(!poly.contains(Vec2::new(10.001, 5.0)));
    }

    #[test]
    fn concave_polygon_handles_the_notch() {
        // A "U" shape: the gap between the prongs is outside.
        let poly = Polygon::from_percent(&[
            (0.0, 0.0),
            (10.0, 0.0),
            (10.0, 10.0),
            (7.0, 10.0),
            (7.0, 3.0),
            (3.0, 3.0),
            (3.0, 10.0),
            (0.0, 10.0),
        ])
        .unwrap();
        assert!(poly.contains(Vec2::new(1.5, 8.0)));
        assert!(poly.contains(Vec2::new(8.5, 8.0)));
        assert!(!poly.contains(Vec2::new(5.0, 8.0)));
        assert!(poly.contains(Vec2::new(5.0, 1.5)));
    }

    #[test]
    fn triangle_covering_the_canvas_contains_its_centroid() {
        let poly = Polygon::from_percent(&[(0.0, 0.0), (100.0, 0.0), (50.0, 100.0)]).unwrap();
        assert!(poly.contains(Vec2::new(50.0, 33.0)));
        assert!(!poly.contains(Vec2::new(2.0, 90.0)));
    }
}
