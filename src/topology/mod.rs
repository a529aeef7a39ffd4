pub mod edge;
pub mod point;
pub mod polygon;

pub use edge::Edge;
pub use point::{PointData, PointId};
pub use polygon::{ring_edges, PolygonData, PolygonId};

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

/// Immutable, precomputed topology of a level.
///
/// Holds the points, the polygons, and the derived edge set with the
/// polygons each edge bounds. Built once per level via
/// [`BuildTopology`](crate::level::BuildTopology) and shared read-only by
/// every board playing that level.
#[derive(Debug, Default)]
pub struct TopologyModel {
    points: HashMap<PointId, PointData>,
    polygons: BTreeMap<PolygonId, PolygonData>,
    edge_to_polygons: HashMap<Edge, Vec<PolygonId>>,
    all_edges: HashSet<Edge>,
}

impl TopologyModel {
    /// Assembles a model from already validated points and polygons.
    ///
    /// Links every point to the polygons passing through it and indexes
    /// every polygon edge.
    pub(crate) fn assemble(
        points: HashMap<PointId, PointData>,
        polygons: BTreeMap<PolygonId, PolygonData>,
    ) -> Self {
        let mut model = Self {
            points,
            polygons,
            edge_to_polygons: HashMap::new(),
            all_edges: HashSet::new(),
        };

        for polygon in model.polygons.values() {
            for point_id in &polygon.point_ids {
                if let Some(point) = model.points.get_mut(point_id) {
                    point.member_polygons.insert(polygon.id);
                }
            }

            for &edge in &polygon.edges {
                model.all_edges.insert(edge);
                let owners = model.edge_to_polygons.entry(edge).or_default();
                if !owners.contains(&polygon.id) {
                    owners.push(polygon.id);
                }
            }
        }

        // Polygons are visited in id order, so owner lists are already sorted.
        tracing::debug!(
            points = model.points.len(),
            polygons = model.polygons.len(),
            edges = model.all_edges.len(),
            "topology built"
        );

        model
    }

    // --- Point queries ---

    /// Returns the point with the given id.
    #[must_use]
    pub fn point(&self, id: PointId) -> Option<&PointData> {
        self.points.get(&id)
    }

    /// Iterates over all points in unspecified order.
    pub fn points(&self) -> impl Iterator<Item = &PointData> {
        self.points.values()
    }

    /// Number of points in the level.
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Returns the static set of polygons passing through `id`.
    #[must_use]
    pub fn point_member_polygons(&self, id: PointId) -> Option<&BTreeSet<PolygonId>> {
        self.points.get(&id).map(|p| &p.member_polygons)
    }

    // --- Polygon queries ---

    /// Returns the polygon with the given id.
    #[must_use]
    pub fn polygon(&self, id: PolygonId) -> Option<&PolygonData> {
        self.polygons.get(&id)
    }

    /// Iterates over all polygons in ascending id order.
    pub fn polygons(&self) -> impl Iterator<Item = &PolygonData> {
        self.polygons.values()
    }

    /// Number of polygons in the level.
    #[must_use]
    pub fn polygon_count(&self) -> usize {
        self.polygons.len()
    }

    // --- Edge queries ---

    /// Looks up the edge between `a` and `b`.
    ///
    /// Returns the ids of every polygon bounded by that edge, in ascending
    /// order, or `None` if the two points are not connected by any polygon
    /// edge. The slice borrows from the model, so the lookup never
    /// allocates.
    #[must_use]
    pub fn is_valid_edge(&self, a: PointId, b: PointId) -> Option<&[PolygonId]> {
        let edge = Edge::new(a, b);
        let found = self.edge_to_polygons.get(&edge).map(Vec::as_slice);
        tracing::trace!(%edge, ?found, "edge lookup");
        found
    }

    /// Returns the polygons bounded by `edge`, or an empty slice.
    #[must_use]
    pub fn polygons_on_edge(&self, edge: Edge) -> &[PolygonId] {
        self.edge_to_polygons
            .get(&edge)
            .map_or(&[][..], Vec::as_slice)
    }

    /// Every edge used by at least one polygon.
    #[must_use]
    pub fn all_edges(&self) -> &HashSet<Edge> {
        &self.all_edges
    }
}
