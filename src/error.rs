use thiserror::Error;

use crate::topology::{Edge, PointId, PolygonId};

/// Top-level error type for the dotloop engine.
#[derive(Debug, Error)]
pub enum DotloopError {
    #[error(transparent)]
    MalformedLevel(#[from] MalformedLevelError),

    #[error(transparent)]
    LevelFormat(#[from] LevelFormatError),
}

/// Defects in level data detected while building a topology model.
///
/// Any of these is fatal to the level load: gameplay must not start on a
/// level that failed to build.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MalformedLevelError {
    #[error("polygon {polygon} references unknown point {point}")]
    UnknownPoint { polygon: PolygonId, point: PointId },

    #[error("polygon {polygon} has {count} points, at least 3 are required")]
    TooFewPoints { polygon: PolygonId, count: usize },

    #[error("polygon {polygon} visits point {point} twice in a row")]
    DegenerateEdge { polygon: PolygonId, point: PointId },

    #[error("polygon {polygon} repeats edge {edge}")]
    DuplicateEdge { polygon: PolygonId, edge: Edge },

    #[error("point id {0} is defined more than once")]
    DuplicatePointId(PointId),

    #[error("polygon id {0} is defined more than once")]
    DuplicatePolygonId(PolygonId),

    #[error("point {0} has a non-finite position")]
    NonFinitePosition(PointId),
}

/// Errors raised while decoding a serialized level description.
#[derive(Debug, Error)]
pub enum LevelFormatError {
    #[error("invalid level json: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for results using [`DotloopError`].
pub type Result<T> = std::result::Result<T, DotloopError>;
