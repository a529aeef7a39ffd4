use crate::topology::{Edge, PointId, PolygonId};

/// The in-progress record of one connect-the-dots attempt.
///
/// Buffers are cleared rather than dropped between attempts, so a board
/// reuses their capacity for the whole playthrough.
#[derive(Debug, Default)]
pub(crate) struct SelectionSession {
    points: Vec<PointId>,
    walked: Vec<Edge>,
    /// Candidate polygons consistent with every walked edge, sorted.
    possible: Vec<PolygonId>,
}

impl SelectionSession {
    /// Returns `true` if no point is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of selected points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Selected points in selection order.
    #[must_use]
    pub fn points(&self) -> &[PointId] {
        &self.points
    }

    /// Edges between consecutive selected points.
    #[must_use]
    pub fn walked_edges(&self) -> &[Edge] {
        &self.walked
    }

    /// Polygons still consistent with the selection, in ascending order.
    #[must_use]
    pub fn possible_polygons(&self) -> &[PolygonId] {
        &self.possible
    }

    /// The point the selection started at.
    #[must_use]
    pub fn first(&self) -> Option<PointId> {
        self.points.first().copied()
    }

    /// The most recently selected point.
    #[must_use]
    pub fn last(&self) -> Option<PointId> {
        self.points.last().copied()
    }

    /// Returns `true` if `point` is already part of the selection.
    #[must_use]
    pub fn contains(&self, point: PointId) -> bool {
        self.points.contains(&point)
    }

    /// Returns `true` if selecting `point` now would close the loop: it is
    /// the first point and at least three points are selected.
    #[must_use]
    pub fn is_closing_move(&self, point: PointId) -> bool {
        self.points.len() >= 3 && self.first() == Some(point)
    }

    /// Starts a new selection at `point` with the given candidates.
    pub(crate) fn seed<I>(&mut self, point: PointId, candidates: I)
    where
        I: IntoIterator<Item = PolygonId>,
    {
        self.reset();
        self.possible.extend(candidates);
        self.possible.sort_unstable();
        self.possible.dedup();
        self.points.push(point);
    }

    /// Keeps only the candidates also bounded by the next edge.
    ///
    /// Returns `false`, leaving the candidates untouched, if no candidate
    /// survives.
    pub(crate) fn narrow(&mut self, edge_polygons: &[PolygonId]) -> bool {
        if !self.possible.iter().any(|p| edge_polygons.contains(p)) {
            return false;
        }
        self.possible.retain(|p| edge_polygons.contains(p));
        true
    }

    /// Appends `point`, recording the edge from the previous point.
    pub(crate) fn push(&mut self, point: PointId) {
        if let Some(last) = self.last() {
            self.walked.push(Edge::new(last, point));
        }
        self.points.push(point);
    }

    /// Empties the session, returning the points that were selected.
    pub(crate) fn take_points(&mut self) -> Vec<PointId> {
        let points = self.points.clone();
        self.reset();
        points
    }

    fn reset(&mut self) {
        self.points.clear();
        self.walked.clear();
        self.possible.clear();
    }
}
