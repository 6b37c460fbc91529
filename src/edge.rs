use std::fmt::{Debug, Display};

use crate::{Node, NumNodes};

/// An edge is defined by two nodes/endpoints.
/// All edges produced by this crate are directed: `Edge(u, v)` points from `u` to `v`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge(pub Node, pub Node);

/// Edge counts are only bounded by what fits into a file, hence `u64`.
pub type NumEdges = u64;

impl Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.0, self.1)
    }
}

impl Debug for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl Edge {
    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.0 == self.1
    }

    /// Reverses the edge by switching the endpoints
    pub fn reverse(&self) -> Self {
        Edge(self.1, self.0)
    }

    /// Returns true if both endpoints are smaller than `n`
    pub fn is_within(&self, n: NumNodes) -> bool {
        self.0 < n && self.1 < n
    }

    /// Number of loop-free directed edges on `n` nodes, i.e. `n * (n - 1)`.
    pub fn num_loop_free(n: NumNodes) -> u64 {
        let n = n as u64;
        n * n.saturating_sub(1)
    }

    /// Simple bijection from `0..n(n-1)` to all loop-free directed edges of `n` nodes.
    ///
    /// The source is `x / (n - 1)`; the remainder indexes the `n - 1` remaining targets,
    /// skipping the source itself. Hence a uniform `x` yields a uniform source and a
    /// uniform target among all other nodes.
    pub fn from_u64_no_loop(x: u64, n: u64) -> Self {
        debug_assert!(n >= 2);
        debug_assert!(x < n * (n - 1));

        let u = x / (n - 1);
        let mut v = x % (n - 1);
        if v >= u {
            v += 1;
        }

        Edge(u as Node, v as Node)
    }
}

impl From<(Node, Node)> for Edge {
    fn from(value: (Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<&(Node, Node)> for Edge {
    fn from(value: &(Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<&Edge> for Edge {
    fn from(value: &Edge) -> Self {
        *value
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn from_u64_no_loop_is_bijective() {
        for n in 2..20u64 {
            let edges = (0..n * (n - 1))
                .map(|x| Edge::from_u64_no_loop(x, n))
                .collect_vec();

            assert!(edges.iter().all(|e| !e.is_loop()));
            assert!(edges.iter().all(|e| e.is_within(n as NumNodes)));
            assert_eq!(edges.iter().unique().count() as u64, n * (n - 1));
            assert_eq!(edges.len() as u64, Edge::num_loop_free(n as NumNodes));
        }
    }

    #[test]
    fn from_u64_no_loop_two_nodes() {
        assert_eq!(Edge::from_u64_no_loop(0, 2), Edge(0, 1));
        assert_eq!(Edge::from_u64_no_loop(1, 2), Edge(1, 0));
    }

    #[test]
    fn num_loop_free_degenerate() {
        assert_eq!(Edge::num_loop_free(0), 0);
        assert_eq!(Edge::num_loop_free(1), 0);
        assert_eq!(Edge::num_loop_free(5), 20);
    }

    #[test]
    fn loops_and_reversal() {
        assert!(Edge(3, 3).is_loop());
        assert!(!Edge(3, 4).is_loop());
        assert_eq!(Edge(3, 4).reverse(), Edge(4, 3));
        assert_eq!(Edge::from((1, 2)), Edge(1, 2));
        assert_eq!(format!("{:?}", Edge(1, 2)), "(1,2)");
    }
}
