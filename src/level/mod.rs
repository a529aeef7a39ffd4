mod build;
pub mod reference;

pub use build::BuildTopology;

use serde::{Deserialize, Serialize};

use crate::error::{LevelFormatError, MalformedLevelError};
use crate::topology::{PointId, PolygonId, TopologyModel};

/// A point as it appears in level data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointRecord {
    pub id: PointId,
    pub x: f64,
    pub y: f64,
}

/// A polygon as it appears in level data: its boundary points in cyclic
/// order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolygonRecord {
    pub id: PolygonId,
    pub point_ids: Vec<PointId>,
}

/// Serializable description of a level, as produced by a level loader.
///
/// ```json
/// {
///   "points": [{ "id": 0, "x": -1.0, "y": -1.0 }, ...],
///   "polygons": [{ "id": 0, "pointIds": [0, 1, 2] }, ...]
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LevelDescription {
    pub points: Vec<PointRecord>,
    pub polygons: Vec<PolygonRecord>,
}

/// A polygon in the grouped level shape: no id, only its points. Any other
/// field (such as a fill color) is ignored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GroupRecord {
    point_ids: Vec<PointId>,
}

/// Level files written as `{ "points": [...], "groups": [...] }`, where a
/// polygon's id is its position in `groups`.
#[derive(Debug, Deserialize)]
struct GroupedLevel {
    points: Vec<PointRecord>,
    groups: Vec<GroupRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum LevelFile {
    Polygons(LevelDescription),
    Groups(GroupedLevel),
}

impl From<GroupedLevel> for LevelDescription {
    fn from(level: GroupedLevel) -> Self {
        let polygons = (0u32..)
            .zip(level.groups)
            .map(|(id, group)| PolygonRecord {
                id: PolygonId(id),
                point_ids: group.point_ids,
            })
            .collect();
        Self {
            points: level.points,
            polygons,
        }
    }
}

impl LevelDescription {
    /// Parses a level description from JSON.
    ///
    /// Accepts polygons listed with explicit ids under `polygons`, or
    /// listed under `groups` and numbered by position.
    ///
    /// # Errors
    ///
    /// Returns [`LevelFormatError::Json`] if the input is not a valid
    /// level description.
    pub fn from_json(json: &str) -> Result<Self, LevelFormatError> {
        Ok(match serde_json::from_str(json)? {
            LevelFile::Polygons(level) => level,
            LevelFile::Groups(level) => level.into(),
        })
    }

    /// Adds a point to the description.
    #[must_use]
    pub fn with_point(mut self, id: u32, x: f64, y: f64) -> Self {
        self.points.push(PointRecord {
            id: PointId(id),
            x,
            y,
        });
        self
    }

    /// Adds a polygon to the description.
    #[must_use]
    pub fn with_polygon(mut self, id: u32, point_ids: &[u32]) -> Self {
        self.polygons.push(PolygonRecord {
            id: PolygonId(id),
            point_ids: point_ids.iter().copied().map(PointId).collect(),
        });
        self
    }

    /// Builds the topology model for this level.
    ///
    /// # Errors
    ///
    /// Returns a [`MalformedLevelError`] if the level data is inconsistent.
    pub fn build(self) -> Result<TopologyModel, MalformedLevelError> {
        BuildTopology::new(self.points, self.polygons).execute()
    }
}

/// Parses a JSON level description and builds its topology.
///
/// # Errors
///
/// Returns [`DotloopError::LevelFormat`](crate::DotloopError::LevelFormat)
/// for unreadable input and
/// [`DotloopError::MalformedLevel`](crate::DotloopError::MalformedLevel)
/// for inconsistent level data.
pub fn load_topology(json: &str) -> crate::Result<TopologyModel> {
    Ok(LevelDescription::from_json(json)?.build()?)
}
