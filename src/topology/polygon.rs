use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::edge::Edge;
use super::point::PointId;
use crate::error::MalformedLevelError;
use crate::math::Point2;

/// Identifier of a polygon, as assigned by the level data.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct PolygonId(pub u32);

impl fmt::Display for PolygonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A matchable face of a level.
///
/// The boundary is a cycle: `point_ids[i]` connects to
/// `point_ids[(i + 1) % n]`, and `edges[i]` is that connection.
#[derive(Debug, Clone)]
pub struct PolygonData {
    /// The level-assigned identifier.
    pub id: PolygonId,
    /// Boundary points in cyclic order.
    pub point_ids: Vec<PointId>,
    /// Boundary edges, one per consecutive pair including the wraparound.
    pub edges: Vec<Edge>,
    /// Area-weighted centroid of the boundary. Not used by matching.
    pub center: Point2,
}

impl PolygonData {
    /// Number of sides of the polygon.
    #[must_use]
    pub fn side_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` if `edge` lies on this polygon's boundary.
    #[must_use]
    pub fn contains_edge(&self, edge: Edge) -> bool {
        self.edges.contains(&edge)
    }

    /// Index of `point` in the boundary cycle, if present.
    #[must_use]
    pub fn position_of(&self, point: PointId) -> Option<usize> {
        self.point_ids.iter().position(|&p| p == point)
    }
}

/// Derives the boundary edges of a ring of points, including the closing
/// edge from the last point back to the first.
///
/// A point repeated consecutively or an edge walked twice is a data defect.
/// With `dedupe` set, the ring is repaired instead: the point that closes
/// each defective edge is removed from `point_ids` with a warning, so the
/// returned edges always line up one to one with the remaining points.
///
/// # Errors
///
/// Returns [`MalformedLevelError::DegenerateEdge`] or
/// [`MalformedLevelError::DuplicateEdge`] when `dedupe` is `false` and the
/// ring contains such a defect, and [`MalformedLevelError::TooFewPoints`]
/// when repairing leaves fewer than three points.
pub fn ring_edges(
    polygon: PolygonId,
    point_ids: &mut Vec<PointId>,
    dedupe: bool,
) -> Result<Vec<Edge>, MalformedLevelError> {
    while point_ids.len() >= 3 {
        let Some((index, err)) = first_defect(polygon, point_ids) else {
            break;
        };
        if !dedupe {
            return Err(err);
        }
        tracing::warn!(%polygon, point = %point_ids[index], "dropping point: {err}");
        point_ids.remove(index);
    }

    if point_ids.len() < 3 {
        return Err(MalformedLevelError::TooFewPoints {
            polygon,
            count: point_ids.len(),
        });
    }

    let n = point_ids.len();
    Ok((0..n)
        .map(|i| Edge::new(point_ids[i], point_ids[(i + 1) % n]))
        .collect())
}

/// Finds the first degenerate or repeated edge of the ring, returning the
/// index of the point that closes it.
fn first_defect(
    polygon: PolygonId,
    point_ids: &[PointId],
) -> Option<(usize, MalformedLevelError)> {
    let n = point_ids.len();
    let mut seen = HashSet::with_capacity(n);

    for (i, &p) in point_ids.iter().enumerate() {
        let next = (i + 1) % n;
        let edge = Edge::new(p, point_ids[next]);
        if edge.is_degenerate() {
            return Some((next, MalformedLevelError::DegenerateEdge { polygon, point: p }));
        }
        if !seen.insert(edge) {
            return Some((next, MalformedLevelError::DuplicateEdge { polygon, edge }));
        }
    }
    None
}
