use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::Arc;

use super::config::{CompletionCheck, CompletionPolicy, SelectionConfig};
use super::matching::{boundary_loop, covers_all_edges, is_cyclic_match};
use super::outcome::{Completion, PointRelease, SelectionOutcome};
use super::session::SelectionSession;
use super::status::{PointState, PointStatus, PolygonStatus};
use crate::topology::{Edge, PointId, PolygonId, TopologyModel};

/// One playthrough of a level.
///
/// Owns the mutable state of a game in progress (per-point remaining
/// polygons, per-polygon completion and drawn edges, and the current
/// selection) on top of a shared, immutable [`TopologyModel`]. Boards for
/// the same level share the model through an [`Arc`] and never share
/// anything else.
#[derive(Debug)]
pub struct Board {
    topology: Arc<TopologyModel>,
    config: SelectionConfig,
    points: HashMap<PointId, PointStatus>,
    polygons: BTreeMap<PolygonId, PolygonStatus>,
    session: SelectionSession,
}

impl Board {
    /// Creates a board with the default configuration.
    #[must_use]
    pub fn new(topology: Arc<TopologyModel>) -> Self {
        Self::with_config(topology, SelectionConfig::default())
    }

    /// Creates a board with a custom configuration.
    #[must_use]
    pub fn with_config(topology: Arc<TopologyModel>, config: SelectionConfig) -> Self {
        let mut board = Self {
            topology,
            config,
            points: HashMap::new(),
            polygons: BTreeMap::new(),
            session: SelectionSession::default(),
        };
        board.reset();
        board
    }

    /// Restarts the playthrough: every polygon becomes incomplete again and
    /// the selection is dropped.
    pub fn reset(&mut self) {
        self.points = self
            .topology
            .points()
            .map(|p| (p.id, PointStatus::new(&p.member_polygons)))
            .collect();
        self.polygons = self
            .topology
            .polygons()
            .map(|p| (p.id, PolygonStatus::default()))
            .collect();
        self.session.take_points();
    }

    /// The level this board plays.
    #[must_use]
    pub fn topology(&self) -> &Arc<TopologyModel> {
        &self.topology
    }

    /// The selection rules in effect.
    #[must_use]
    pub fn config(&self) -> SelectionConfig {
        self.config
    }

    // --- Point queries ---

    /// Returns `true` if `point` exists and still has polygons to complete.
    #[must_use]
    pub fn can_interact(&self, point: PointId) -> bool {
        self.points.get(&point).is_some_and(PointStatus::can_interact)
    }

    /// Interaction state of `point`, or `None` if it is unknown.
    #[must_use]
    pub fn point_state(&self, point: PointId) -> Option<PointState> {
        self.points.get(&point).map(|s| s.state)
    }

    /// Polygons through `point` that are not complete yet.
    #[must_use]
    pub fn remaining_polygons(&self, point: PointId) -> Option<&BTreeSet<PolygonId>> {
        self.points.get(&point).map(|s| &s.remaining)
    }

    // --- Polygon queries ---

    /// Returns `true` if `polygon` has been completed.
    #[must_use]
    pub fn is_polygon_completed(&self, polygon: PolygonId) -> bool {
        self.polygons.get(&polygon).is_some_and(|s| s.completed)
    }

    /// Returns `true` if `edge` of `polygon` has been drawn by a completion.
    #[must_use]
    pub fn is_edge_completed(&self, polygon: PolygonId, edge: Edge) -> bool {
        self.polygons
            .get(&polygon)
            .is_some_and(|s| s.completed_edges.contains(&edge))
    }

    /// Completed polygons in ascending id order.
    pub fn completed_polygons(&self) -> impl Iterator<Item = PolygonId> + '_ {
        self.polygons
            .iter()
            .filter(|(_, s)| s.completed)
            .map(|(&id, _)| id)
    }

    /// Number of polygons still to complete.
    #[must_use]
    pub fn remaining_polygon_count(&self) -> usize {
        self.polygons.values().filter(|s| !s.completed).count()
    }

    /// Returns `true` once every polygon of the level is complete.
    #[must_use]
    pub fn is_level_complete(&self) -> bool {
        self.polygons.values().all(|s| s.completed)
    }

    // --- Selection ---

    /// Points of the current selection, in selection order.
    #[must_use]
    pub fn selection(&self) -> &[PointId] {
        self.session.points()
    }

    /// Polygons still consistent with the current selection.
    #[must_use]
    pub fn possible_polygons(&self) -> &[PolygonId] {
        self.session.possible_polygons()
    }

    /// Feeds the next selected point into the current selection.
    pub fn add_point(&mut self, point: PointId) -> SelectionOutcome {
        if !self.can_interact(point) {
            tracing::warn!(%point, "point is not interactable");
            return SelectionOutcome::RejectedInactive;
        }

        let Some(last) = self.session.last() else {
            self.start_session(point);
            return SelectionOutcome::Continued;
        };

        if point == last {
            tracing::warn!(%point, "cannot connect a point to itself");
            return SelectionOutcome::RejectedDuplicate;
        }
        if self.session.contains(point) && !self.session.is_closing_move(point) {
            tracing::warn!(%point, "point already selected");
            return SelectionOutcome::RejectedDuplicate;
        }

        let narrowed = match self.topology.is_valid_edge(last, point) {
            Some(edge_polygons) => self.session.narrow(edge_polygons),
            None => false,
        };
        if !narrowed {
            tracing::warn!(from = %last, to = %point, "edge fits no candidate polygon");
            return SelectionOutcome::Invalidated {
                aborted: self.clear(),
            };
        }

        self.session.push(point);
        self.set_state(point, PointState::Selected);
        tracing::debug!(
            %point,
            selected = self.session.len(),
            possible = ?self.session.possible_polygons(),
            "point added"
        );

        if self.config.completion_check == CompletionCheck::EveryPoint {
            if let Some(completion) = self
                .find_completed_polygon()
                .and_then(|polygon| self.complete_polygon(polygon))
            {
                return SelectionOutcome::PolygonCompleted(completion);
            }
        }

        SelectionOutcome::Continued
    }

    /// Returns `true` if the current selection completes `polygon` under the
    /// configured [`CompletionPolicy`].
    #[must_use]
    pub fn is_valid_polygon_completion(&self, polygon: PolygonId) -> bool {
        let (Some(data), Some(status)) =
            (self.topology.polygon(polygon), self.polygons.get(&polygon))
        else {
            return false;
        };

        match self.config.policy {
            CompletionPolicy::ExactLoop => {
                is_cyclic_match(&data.point_ids, self.session.points())
            }
            CompletionPolicy::EdgeCoverage => {
                let walked = self.session.walked_edges();
                !walked.is_empty()
                    && covers_all_edges(&data.edges, &status.completed_edges, walked)
            }
        }
    }

    /// Marks `polygon` complete and resets the selection.
    ///
    /// Removes the polygon from every boundary point's remaining set,
    /// records its edges as drawn on every polygon sharing them, and
    /// reports the polygon's boundary as a closed loop. A selection that
    /// traced the whole boundary is reported as walked; otherwise the loop
    /// starts at the first selected point and follows the selection's
    /// direction.
    ///
    /// Returns `None` if the polygon is unknown or already complete.
    pub fn complete_polygon(&mut self, polygon: PolygonId) -> Option<Completion> {
        let topology = Arc::clone(&self.topology);
        let data = topology.polygon(polygon)?;
        let status = self.polygons.get_mut(&polygon)?;
        if status.completed {
            tracing::warn!(%polygon, "polygon already completed");
            return None;
        }
        status.completed = true;

        for &edge in &data.edges {
            for owner in topology.polygons_on_edge(edge) {
                if let Some(neighbour) = self.polygons.get_mut(owner) {
                    neighbour.completed_edges.insert(edge);
                }
            }
        }

        let walk = self.clear();
        let point_ids = if is_cyclic_match(&data.point_ids, &walk) {
            walk
        } else {
            boundary_loop(&data.point_ids, &walk)
        };
        let positions = point_ids
            .iter()
            .filter_map(|id| topology.point(*id).map(|p| p.position))
            .collect();

        let mut released = Vec::with_capacity(data.point_ids.len());
        for &point in &data.point_ids {
            let Some(status) = self.points.get_mut(&point) else {
                continue;
            };
            status.remaining.remove(&polygon);
            let exhausted = status.remaining.is_empty();
            status.state = if exhausted {
                PointState::Done
            } else {
                PointState::Idle
            };
            released.push(PointRelease { point, exhausted });
        }

        let level_complete = self.is_level_complete();
        tracing::info!(%polygon, boundary = ?point_ids, "polygon completed");
        if level_complete {
            tracing::info!("level complete");
        }

        Some(Completion {
            polygon,
            point_ids,
            positions,
            edges: data.edges.clone(),
            released,
            level_complete,
        })
    }

    /// Abandons the current selection without completing anything.
    ///
    /// Returns the points that were selected, in selection order, after
    /// putting them back to [`PointState::Idle`]. Clearing an empty
    /// selection returns an empty list.
    pub fn clear(&mut self) -> Vec<PointId> {
        let aborted = self.session.take_points();
        for &point in &aborted {
            if self.point_state(point) == Some(PointState::Selected) {
                self.set_state(point, PointState::Idle);
            }
        }
        if !aborted.is_empty() {
            tracing::debug!(?aborted, "selection cleared");
        }
        aborted
    }

    /// Finalizes the selection when the input gesture ends.
    ///
    /// Completes the first candidate polygon the selection satisfies, or
    /// abandons the selection if there is none. Returns `None` if nothing
    /// was selected.
    pub fn validate_and_complete(&mut self) -> Option<SelectionOutcome> {
        if self.session.is_empty() {
            return None;
        }

        if let Some(completion) = self
            .find_completed_polygon()
            .and_then(|polygon| self.complete_polygon(polygon))
        {
            return Some(SelectionOutcome::PolygonCompleted(completion));
        }

        tracing::debug!(
            selected = self.session.len(),
            "selection completes no polygon"
        );
        Some(SelectionOutcome::Invalidated {
            aborted: self.clear(),
        })
    }

    fn start_session(&mut self, point: PointId) {
        let Some(status) = self.points.get(&point) else {
            return;
        };
        self.session.seed(point, status.remaining.iter().copied());
        self.set_state(point, PointState::Selected);
        tracing::debug!(
            %point,
            possible = ?self.session.possible_polygons(),
            "selection started"
        );
    }

    fn find_completed_polygon(&self) -> Option<PolygonId> {
        self.session
            .possible_polygons()
            .iter()
            .copied()
            .filter(|&id| !self.is_polygon_completed(id))
            .find(|&id| self.is_valid_polygon_completion(id))
    }

    fn set_state(&mut self, point: PointId, state: PointState) {
        if let Some(status) = self.points.get_mut(&point) {
            status.state = state;
        }
    }
}
