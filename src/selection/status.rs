use std::collections::{BTreeSet, HashSet};

use crate::topology::{Edge, PolygonId};

/// Interaction state of a point during a playthrough.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PointState {
    /// Selectable and not part of the current selection.
    #[default]
    Idle,
    /// Part of the current selection.
    Selected,
    /// Every polygon through this point is complete.
    Done,
}

/// Per-playthrough projection of a point.
#[derive(Debug, Clone)]
pub(crate) struct PointStatus {
    /// Polygons through this point that are not complete yet.
    pub remaining: BTreeSet<PolygonId>,
    pub state: PointState,
}

impl PointStatus {
    pub(crate) fn new(members: &BTreeSet<PolygonId>) -> Self {
        let state = if members.is_empty() {
            PointState::Done
        } else {
            PointState::Idle
        };
        Self {
            remaining: members.clone(),
            state,
        }
    }

    /// A point accepts selections while it still has polygons to complete.
    #[must_use]
    pub fn can_interact(&self) -> bool {
        self.state != PointState::Done && !self.remaining.is_empty()
    }
}

/// Per-playthrough projection of a polygon.
#[derive(Debug, Clone, Default)]
pub(crate) struct PolygonStatus {
    pub completed: bool,
    /// Edges of this polygon already drawn by a completion, either of this
    /// polygon or of a neighbour sharing the edge.
    pub completed_edges: HashSet<Edge>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_point_is_idle_when_it_has_polygons() {
        let members: BTreeSet<_> = [PolygonId(0), PolygonId(2)].into();
        let status = PointStatus::new(&members);
        assert_eq!(status.state, PointState::Idle);
        assert!(status.can_interact());
    }

    #[test]
    fn orphan_point_is_never_interactable() {
        let status = PointStatus::new(&BTreeSet::new());
        assert_eq!(status.state, PointState::Done);
        assert!(!status.can_interact());
    }
}
