//! Built-in coarse landmass polygons for the world dot map.
//!
//! Vertices are in canvas-percentage coordinates under the equirectangular
//! mapping `x% = (lon + 180) / 360 * 100`, `y% = (90 - lat) / 180 * 100`.
//! The shapes are intentionally rough: good enough for a stylized dot map,
//! nowhere near projection-accurate coastlines.
use crate::dotmap::polygon::Polygon;

const NORTH_AMERICA: &[(f32, f32)] = &[
    (4.2, 12.2),
    (16.7, 10.0),
    (26.4, 10.0),
    (34.7, 16.7),
    (29.2, 25.0),
    (27.8, 32.2),
    (23.1, 35.6),
    (20.8, 38.9),
    (18.1, 32.2),
    (15.3, 26.7),
    (8.3, 17.8),
    (3.3, 16.7),
];

const SOUTH_AMERICA: &[(f32, f32)] = &[
    (27.8, 44.4),
    (32.8, 45.0),
    (36.1, 50.0),
    (38.6, 54.4),
    (36.7, 63.9),
    (33.9, 71.1),
    (31.9, 80.0),
    (30.0, 77.8),
    (30.3, 66.7),
    (28.1, 52.8),
];

const EUROPE: &[(f32, f32)] = &[
    (47.2, 29.4),
    (47.8, 25.6),
    (50.0, 22.2),
    (51.4, 17.8),
    (54.7, 15.0),
    (58.3, 11.1),
    (61.1, 13.3),
    (61.1, 23.3),
    (57.8, 27.2),
    (54.2, 28.9),
    (50.8, 30.0),
];

const AFRICA: &[(f32, f32)] = &[
    (45.3, 41.7),
    (48.3, 30.6),
    (52.8, 29.4),
    (58.9, 32.8),
    (61.9, 43.3),
    (64.2, 43.9),
    (61.1, 58.3),
    (58.9, 66.1),
    (55.6, 69.4),
    (53.3, 60.0),
    (52.2, 47.8),
];

const ASIA: &[(f32, f32)] = &[
    (61.1, 12.2),
    (69.4, 8.3),
    (80.6, 7.2),
    (88.9, 10.0),
    (94.4, 13.3),
    (89.4, 22.2),
    (85.6, 30.6),
    (83.9, 37.8),
    (79.2, 44.4),
    (77.8, 48.9),
    (72.2, 45.6),
    (70.0, 38.9),
    (66.1, 36.7),
    (62.2, 42.8),
    (59.7, 33.3),
    (61.1, 23.3),
];

const AUSTRALIA: &[(f32, f32)] = &[
    (81.7, 62.2),
    (83.9, 57.8),
    (88.1, 56.1),
    (90.6, 60.6),
    (92.5, 65.6),
    (90.6, 71.7),
    (87.5, 69.4),
    (82.8, 69.4),
    (81.4, 64.4),
];

/// The six landmass polygons, one per continent, in canvas-percentage
/// coordinates. Returned as plain data so callers (and tests) can swap in
/// their own polygon sets.
pub fn continents() -> Vec<Polygon> {
    [
        NORTH_AMERICA,
        SOUTH_AMERICA,
        EUROPE,
        AFRICA,
        ASIA,
        AUSTRALIA,
    ]
    .iter()
    .map(|points| Polygon::from_percent(points).expect("continent polygons have >= 3 vertices"))
    .collect()
}
