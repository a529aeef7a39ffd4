use super::{Point2, Vector2, TOLERANCE};

/// Computes the signed area of a closed ring (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Computes the area-weighted centroid of a closed ring.
///
/// Rings whose area vanishes (collinear or fewer than three points) fall
/// back to the arithmetic mean of the vertices. An empty slice yields the
/// origin.
#[must_use]
pub fn centroid_2d(points: &[Point2]) -> Point2 {
    if points.is_empty() {
        return Point2::origin();
    }

    let area = signed_area_2d(points);
    if area.abs() < TOLERANCE {
        return vertex_mean(points);
    }

    let n = points.len();
    let mut acc = Vector2::zeros();
    for i in 0..n {
        let a = points[i];
        let b = points[(i + 1) % n];
        let cross = a.x * b.y - b.x * a.y;
        acc += (a.coords + b.coords) * cross;
    }
    Point2::from(acc / (6.0 * area))
}

/// Arithmetic mean of a set of points.
fn vertex_mean(points: &[Point2]) -> Point2 {
    #[allow(clippy::cast_precision_loss)]
    let n = points.len() as f64;
    let sum = points
        .iter()
        .fold(Vector2::zeros(), |acc, p| acc + p.coords);
    Point2::from(sum / n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn signed_area_ccw_square() {
        let pts = [p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0), p(0.0, 1.0)];
        assert_relative_eq!(signed_area_2d(&pts), 1.0);
    }

    #[test]
    fn signed_area_cw_square() {
        let pts = [p(0.0, 0.0), p(0.0, 1.0), p(1.0, 1.0), p(1.0, 0.0)];
        assert_relative_eq!(signed_area_2d(&pts), -1.0);
    }

    #[test]
    fn signed_area_degenerate() {
        assert!(signed_area_2d(&[p(0.0, 0.0)]).abs() < TOLERANCE);
        assert!(signed_area_2d(&[]).abs() < TOLERANCE);
    }

    #[test]
    fn centroid_of_square() {
        let pts = [p(-1.0, -1.0), p(1.0, -1.0), p(1.0, 1.0), p(-1.0, 1.0)];
        let c = centroid_2d(&pts);
        assert_relative_eq!(c.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(c.y, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn centroid_independent_of_winding() {
        let ccw = [p(-1.0, -1.0), p(1.0, -1.0), p(0.0, 1.0)];
        let cw = [p(0.0, 1.0), p(1.0, -1.0), p(-1.0, -1.0)];
        let a = centroid_2d(&ccw);
        let b = centroid_2d(&cw);
        assert_relative_eq!(a.x, b.x, epsilon = 1e-12);
        assert_relative_eq!(a.y, b.y, epsilon = 1e-12);
        assert_relative_eq!(a.y, -1.0 / 3.0, epsilon = 1e-12);
    }

    #[test]
    fn centroid_is_area_weighted() {
        // L-shape: a 2x1 bar plus a 1x1 block on its left end.
        let pts = [
            p(0.0, 0.0),
            p(2.0, 0.0),
            p(2.0, 1.0),
            p(1.0, 1.0),
            p(1.0, 2.0),
            p(0.0, 2.0),
        ];
        let c = centroid_2d(&pts);
        // Bar centroid (1.0, 0.5) area 2, block centroid (0.5, 1.5) area 1.
        assert_relative_eq!(c.x, 2.5 / 3.0, epsilon = 1e-12);
        assert_relative_eq!(c.y, 2.5 / 3.0, epsilon = 1e-12);
    }

    #[test]
    fn centroid_collinear_falls_back_to_mean() {
        let pts = [p(0.0, 0.0), p(1.0, 0.0), p(2.0, 0.0)];
        let c = centroid_2d(&pts);
        assert_relative_eq!(c.x, 1.0);
        assert_relative_eq!(c.y, 0.0);
    }

    #[test]
    fn centroid_empty_is_origin() {
        assert_eq!(centroid_2d(&[]), Point2::origin());
    }
}
