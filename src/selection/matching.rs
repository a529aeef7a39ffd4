//! Completion tests for a selection walk against a polygon boundary.

use std::collections::HashSet;

use crate::topology::{Edge, PointId};

/// Returns `true` if `walk` ends where it started and has at least one
/// step.
#[must_use]
pub fn is_closed_loop(walk: &[PointId]) -> bool {
    walk.len() > 1 && walk.first() == walk.last()
}

/// Returns `true` if `walk` traces the boundary `cycle` exactly once.
///
/// `walk` must be closed (its last point repeats its first) and, with the
/// closing point dropped, visit every point of `cycle` in cyclic order. The
/// walk may start anywhere on the boundary and run in either direction.
#[must_use]
pub fn is_cyclic_match(cycle: &[PointId], walk: &[PointId]) -> bool {
    let n = cycle.len();
    if walk.len() <= n || !is_closed_loop(walk) {
        return false;
    }
    // Drop the closing point; what remains must be the whole boundary.
    if walk.len() - 1 != n {
        return false;
    }

    let open = &walk[..n];
    let Some(start) = cycle.iter().position(|&p| p == open[0]) else {
        return false;
    };

    matches_from(cycle, open, start, Direction::Forward)
        || matches_from(cycle, open, start, Direction::Backward)
}

#[derive(Clone, Copy)]
enum Direction {
    Forward,
    Backward,
}

fn matches_from(cycle: &[PointId], open: &[PointId], start: usize, dir: Direction) -> bool {
    let n = cycle.len();
    open.iter().enumerate().all(|(i, &p)| {
        let idx = match dir {
            Direction::Forward => (start + i) % n,
            Direction::Backward => (start + n - i % n) % n,
        };
        cycle[idx] == p
    })
}

/// Traces `cycle` as a closed loop, oriented to follow `walk`.
///
/// The loop starts at the first walked point and runs in the direction of
/// the walk's first step. A walk that does not start on the boundary, or
/// is empty, yields the boundary from its first point in stored order.
#[must_use]
pub fn boundary_loop(cycle: &[PointId], walk: &[PointId]) -> Vec<PointId> {
    let n = cycle.len();
    let mut closed = Vec::with_capacity(n + 1);
    if n == 0 {
        return closed;
    }

    let start = walk
        .first()
        .and_then(|&p| cycle.iter().position(|&q| q == p))
        .unwrap_or(0);
    let backward = walk.get(1) == Some(&cycle[(start + n - 1) % n]);

    closed.extend((0..n).map(|i| {
        if backward {
            cycle[(start + n - i) % n]
        } else {
            cycle[(start + i) % n]
        }
    }));
    closed.push(cycle[start]);
    closed
}

/// Returns `true` if every edge of `boundary` is either already drawn
/// (`drawn`) or walked in the current selection (`walked`).
#[must_use]
pub fn covers_all_edges(boundary: &[Edge], drawn: &HashSet<Edge>, walked: &[Edge]) -> bool {
    boundary
        .iter()
        .all(|edge| drawn.contains(edge) || walked.contains(edge))
}
