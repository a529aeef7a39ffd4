//! Hand-authored reference levels.
//!
//! Small layouts that exercise the matching rules: a lone triangle, a
//! square and triangle sharing a boundary, and a fan of five polygons
//! around a shared hub point.

use super::LevelDescription;

/// One triangle: points 0, 1, 2.
#[must_use]
pub fn single_triangle() -> LevelDescription {
    LevelDescription::default()
        .with_point(0, -1.0, -1.0)
        .with_point(1, 1.0, -1.0)
        .with_point(2, 0.0, 1.0)
        .with_polygon(0, &[0, 1, 2])
}

/// Square 0-1-2-3 (polygon 0) with triangle 3-4-2 (polygon 1) on top.
///
/// The two polygons share points 2 and 3 and the edge between them.
#[must_use]
pub fn square_with_roof() -> LevelDescription {
    LevelDescription::default()
        .with_point(0, -1.0, -1.0)
        .with_point(1, 1.0, -1.0)
        .with_point(2, 1.0, 1.0)
        .with_point(3, -1.0, 1.0)
        .with_point(4, 0.0, 2.0)
        .with_polygon(0, &[0, 1, 2, 3])
        .with_polygon(1, &[3, 4, 2])
}

/// Five polygons fanned around hub point 2.
///
/// Triangles 0-1-2, 1-3-2, 2-3-4 and 2-4-5 plus quad 0-2-5-6.
#[must_use]
pub fn hub_fan() -> LevelDescription {
    LevelDescription::default()
        .with_point(0, -2.0, 0.0)
        .with_point(1, -1.0, -1.0)
        .with_point(2, 0.0, 0.0)
        .with_point(3, 1.0, -1.0)
        .with_point(4, 2.0, 0.0)
        .with_point(5, 1.0, 1.0)
        .with_point(6, -1.0, 1.0)
        .with_polygon(0, &[0, 1, 2])
        .with_polygon(1, &[1, 3, 2])
        .with_polygon(2, &[2, 3, 4])
        .with_polygon(3, &[0, 2, 5, 6])
        .with_polygon(4, &[2, 4, 5])
}
