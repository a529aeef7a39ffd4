use std::collections::{BTreeMap, HashMap};

use super::{PointRecord, PolygonRecord};
use crate::error::MalformedLevelError;
use crate::math::polygon_2d::centroid_2d;
use crate::math::Point2;
use crate::topology::{ring_edges, PointData, PointId, PolygonData, TopologyModel};

/// Builds a [`TopologyModel`] from raw level records.
///
/// Validates the records, derives every polygon's edges and centroid, links
/// points to the polygons passing through them, and indexes edges.
pub struct BuildTopology {
    points: Vec<PointRecord>,
    polygons: Vec<PolygonRecord>,
    allow_duplicate_edges: bool,
}

impl BuildTopology {
    /// Creates a new `BuildTopology` operation.
    #[must_use]
    pub fn new(points: Vec<PointRecord>, polygons: Vec<PolygonRecord>) -> Self {
        Self {
            points,
            polygons,
            allow_duplicate_edges: false,
        }
    }

    /// Drops repeated or degenerate polygon edges with a warning instead of
    /// rejecting the level.
    #[must_use]
    pub fn allow_duplicate_edges(mut self, allow: bool) -> Self {
        self.allow_duplicate_edges = allow;
        self
    }

    /// Executes the build.
    ///
    /// # Errors
    ///
    /// Returns a [`MalformedLevelError`] if a point or polygon id is defined
    /// twice, a position is not finite, a polygon has fewer than three
    /// points or references an unknown point, or (unless duplicates are
    /// allowed) a polygon repeats an edge.
    pub fn execute(self) -> Result<TopologyModel, MalformedLevelError> {
        let mut points = HashMap::with_capacity(self.points.len());
        for record in &self.points {
            if !(record.x.is_finite() && record.y.is_finite()) {
                return Err(MalformedLevelError::NonFinitePosition(record.id));
            }
            let data = PointData::new(record.id, Point2::new(record.x, record.y));
            if points.insert(record.id, data).is_some() {
                return Err(MalformedLevelError::DuplicatePointId(record.id));
            }
        }

        let mut polygons = BTreeMap::new();
        for record in self.polygons {
            if polygons.contains_key(&record.id) {
                return Err(MalformedLevelError::DuplicatePolygonId(record.id));
            }
            let polygon = build_polygon(record, &points, self.allow_duplicate_edges)?;
            polygons.insert(polygon.id, polygon);
        }

        Ok(TopologyModel::assemble(points, polygons))
    }
}

fn build_polygon(
    record: PolygonRecord,
    points: &HashMap<PointId, PointData>,
    dedupe: bool,
) -> Result<PolygonData, MalformedLevelError> {
    let PolygonRecord { id, mut point_ids } = record;

    if point_ids.len() < 3 {
        return Err(MalformedLevelError::TooFewPoints {
            polygon: id,
            count: point_ids.len(),
        });
    }

    let edges = ring_edges(id, &mut point_ids, dedupe)?;

    let mut ring = Vec::with_capacity(point_ids.len());
    for &point in &point_ids {
        let data = points
            .get(&point)
            .ok_or(MalformedLevelError::UnknownPoint { polygon: id, point })?;
        ring.push(data.position);
    }

    Ok(PolygonData {
        id,
        point_ids,
        edges,
        center: centroid_2d(&ring),
    })
}
