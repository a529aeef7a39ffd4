use std::fmt;

use super::point::PointId;

/// An undirected edge between two points.
///
/// Endpoints are normalized so that `a <= b`, which makes equality and
/// hashing independent of the order the endpoints were given in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge {
    a: PointId,
    b: PointId,
}

impl Edge {
    /// Creates a normalized edge between `p` and `q`.
    #[must_use]
    pub fn new(p: PointId, q: PointId) -> Self {
        if p <= q {
            Self { a: p, b: q }
        } else {
            Self { a: q, b: p }
        }
    }

    /// Returns the endpoints as `(low, high)`.
    #[must_use]
    pub fn endpoints(self) -> (PointId, PointId) {
        (self.a, self.b)
    }

    /// Returns `true` if `point` is one of the endpoints.
    #[must_use]
    pub fn contains(self, point: PointId) -> bool {
        self.a == point || self.b == point
    }

    /// Returns the endpoint opposite to `point`, or `None` if `point` is not
    /// on this edge.
    #[must_use]
    pub fn other(self, point: PointId) -> Option<PointId> {
        if self.a == point {
            Some(self.b)
        } else if self.b == point {
            Some(self.a)
        } else {
            None
        }
    }

    /// Returns `true` if both endpoints are the same point.
    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.a == self.b
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.a, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of(edge: Edge) -> u64 {
        let mut h = DefaultHasher::new();
        edge.hash(&mut h);
        h.finish()
    }

    #[test]
    fn order_independent_equality() {
        for (a, b) in [(0, 1), (7, 3), (5, 5), (u32::MAX, 0)] {
            let fwd = Edge::new(PointId(a), PointId(b));
            let rev = Edge::new(PointId(b), PointId(a));
            assert_eq!(fwd, rev);
            assert_eq!(hash_of(fwd), hash_of(rev));
        }
    }

    #[test]
    fn endpoints_are_sorted() {
        let e = Edge::new(PointId(9), PointId(2));
        assert_eq!(e.endpoints(), (PointId(2), PointId(9)));
    }

    #[test]
    fn distinct_pairs_differ() {
        assert_ne!(
            Edge::new(PointId(1), PointId(2)),
            Edge::new(PointId(1), PointId(3))
        );
    }

    #[test]
    fn other_endpoint() {
        let e = Edge::new(PointId(4), PointId(1));
        assert_eq!(e.other(PointId(4)), Some(PointId(1)));
        assert_eq!(e.other(PointId(1)), Some(PointId(4)));
        assert_eq!(e.other(PointId(2)), None);
        assert!(e.contains(PointId(1)));
        assert!(!e.contains(PointId(3)));
    }

    #[test]
    fn degenerate_edge() {
        assert!(Edge::new(PointId(3), PointId(3)).is_degenerate());
        assert!(!Edge::new(PointId(3), PointId(4)).is_degenerate());
    }

    #[test]
    fn display_uses_normalized_order() {
        assert_eq!(Edge::new(PointId(5), PointId(2)).to_string(), "(2, 5)");
    }
}
