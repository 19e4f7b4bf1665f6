//! Testing utilities and fixtures for hypernet-core.
//!
//! Provides the standard edge lists used across the test suites, plus a
//! chainable assertion helper for hypergraph structure.

use crate::hypergraph::{HyperKey, Hypergraph};

/// `[[1, 2, 3], [4], [5, 6], [6, 7, 8]]`: one singleton edge, node 6 shared.
pub fn edgelist1() -> Vec<Vec<u64>> {
    vec![vec![1, 2, 3], vec![4], vec![5, 6], vec![6, 7, 8]]
}

/// `[[1, 2], [3, 4], [4, 5, 6]]`: no singleton edges.
pub fn edgelist2() -> Vec<Vec<u64>> {
    vec![vec![1, 2], vec![3, 4], vec![4, 5, 6]]
}

/// `[[1, 2, 3], [3, 4], [4, 5, 6]]`: a chain through nodes 3 and 4.
pub fn edgelist3() -> Vec<Vec<u64>> {
    vec![vec![1, 2, 3], vec![3, 4], vec![4, 5, 6]]
}

/// `[[1, 2, 3], [2, 3, 4, 5], [3, 4, 5]]`: maximum order 3.
pub fn edgelist4() -> Vec<Vec<u64>> {
    vec![vec![1, 2, 3], vec![2, 3, 4, 5], vec![3, 4, 5]]
}

/// `[[0, 1, 2, 3], [4], [5, 6], [6, 7, 8]]`: includes node 0.
pub fn edgelist5() -> Vec<Vec<u64>> {
    vec![vec![0, 1, 2, 3], vec![4], vec![5, 6], vec![6, 7, 8]]
}

/// `[[0, 1, 2], [1, 2, 3], [2, 3, 4]]`: 2-uniform.
pub fn edgelist6() -> Vec<Vec<u64>> {
    vec![vec![0, 1, 2], vec![1, 2, 3], vec![2, 3, 4]]
}

/// `[[0, 1, 2], [1, 2, 3], [2, 3, 4], [4]]`: 2-uniform plus a singleton.
pub fn edgelist7() -> Vec<Vec<u64>> {
    vec![vec![0, 1, 2], vec![1, 2, 3], vec![2, 3, 4], vec![4]]
}

/// Build a `u64` hypergraph from one of the edge lists above.
///
/// # Panics
/// Panics if the edge list contains an empty edge.
pub fn hypergraph_from(edges: Vec<Vec<u64>>) -> Hypergraph<u64> {
    Hypergraph::from_edge_list(edges).expect("fixture edge lists are non-empty")
}

/// Assertion helpers for testing hypergraphs.
pub struct HypergraphAssertions<'a, K: HyperKey> {
    hypergraph: &'a Hypergraph<K>,
}

impl<'a, K: HyperKey> HypergraphAssertions<'a, K> {
    /// Create new assertions for a hypergraph.
    pub const fn new(hypergraph: &'a Hypergraph<K>) -> Self {
        Self { hypergraph }
    }

    /// Assert that the hypergraph has the expected number of nodes.
    #[must_use]
    pub fn assert_node_count(self, expected: usize) -> Self {
        assert_eq!(
            self.hypergraph.num_nodes(),
            expected,
            "Expected {} nodes, found {}",
            expected,
            self.hypergraph.num_nodes()
        );
        self
    }

    /// Assert that the hypergraph has the expected number of edges.
    #[must_use]
    pub fn assert_edge_count(self, expected: usize) -> Self {
        assert_eq!(
            self.hypergraph.num_edges(),
            expected,
            "Expected {} edges, found {}",
            expected,
            self.hypergraph.num_edges()
        );
        self
    }

    /// Assert that edge `e` has exactly the given members, in order.
    #[must_use]
    pub fn assert_members(self, e: &K, expected: &[K]) -> Self {
        let members = self
            .hypergraph
            .members(e)
            .unwrap_or_else(|err| panic!("Edge {e:?} should exist: {err}"));
        assert_eq!(members, expected, "Unexpected members for edge {e:?}");
        self
    }

    /// Assert that node `n` belongs to exactly the given edges, in order.
    #[must_use]
    pub fn assert_memberships(self, n: &K, expected: &[K]) -> Self {
        let memberships = self
            .hypergraph
            .memberships(n)
            .unwrap_or_else(|err| panic!("Node {n:?} should exist: {err}"));
        assert_eq!(memberships, expected, "Unexpected memberships for node {n:?}");
        self
    }

    /// Assert that the incidence tables are consistent.
    pub fn assert_valid(self) -> Self {
        if let Err(err) = self.hypergraph.validate() {
            panic!("Hypergraph should be valid: {err}");
        }
        self
    }
}
