use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::polygon::PolygonId;
use crate::math::Point2;

/// Identifier of a point, as assigned by the level data.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct PointId(pub u32);

impl fmt::Display for PointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A selectable point of a level.
#[derive(Debug, Clone)]
pub struct PointData {
    /// The level-assigned identifier.
    pub id: PointId,
    /// Position in level space.
    pub position: Point2,
    /// Every polygon whose boundary passes through this point.
    pub member_polygons: BTreeSet<PolygonId>,
}

impl PointData {
    /// Creates a point that does not belong to any polygon yet.
    #[must_use]
    pub fn new(id: PointId, position: Point2) -> Self {
        Self {
            id,
            position,
            member_polygons: BTreeSet::new(),
        }
    }
}
