use crate::math::Point2;
use crate::topology::{Edge, PointId, PolygonId};

/// Result of feeding one point into a board.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectionOutcome {
    /// The point extends the selection; some candidate polygon is still
    /// possible.
    Continued,
    /// The point repeats the previous point, or revisits a selected point
    /// without closing the loop. Nothing changed.
    RejectedDuplicate,
    /// The point is unknown or has no polygons left to complete. Nothing
    /// changed.
    RejectedInactive,
    /// The walked edges can no longer complete any polygon. The selection
    /// was reset; `aborted` lists the points it held, in selection order.
    Invalidated { aborted: Vec<PointId> },
    /// The selection completed a polygon and was reset.
    PolygonCompleted(Completion),
}

/// Everything a collaborator needs to react to a completed polygon.
#[derive(Debug, Clone, PartialEq)]
pub struct Completion {
    pub polygon: PolygonId,
    /// The polygon's boundary as a closed loop (first point repeated at the
    /// end), oriented along the completing selection.
    pub point_ids: Vec<PointId>,
    /// Positions of `point_ids`, index for index.
    pub positions: Vec<Point2>,
    /// Boundary edges of the polygon, now recorded as drawn.
    pub edges: Vec<Edge>,
    /// How each boundary point was affected.
    pub released: Vec<PointRelease>,
    /// `true` if this was the last incomplete polygon of the level.
    pub level_complete: bool,
}

/// Effect of a completion on one boundary point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointRelease {
    pub point: PointId,
    /// The point has no polygons left and is no longer interactable.
    pub exhausted: bool,
}
