//! Property-based tests for hypernet-core.
//!
//! Random sequences of public mutations must always leave the incidence
//! tables consistent, and structural derivations must agree with the
//! edge table they were computed from.

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use proptest::prelude::*;

    use crate::hypergraph::{AttrMap, EdgeBatch, Hypergraph};
    use crate::types::Value;

    // =========================================================================
    // Strategies
    // =========================================================================

    /// Simple (non-recursive) values that roundtrip through JSON.
    fn arb_simple_value() -> impl Strategy<Value = Value> {
        prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
            any::<i64>().prop_map(Value::Int64),
            // Integer-valued floats avoid JSON precision issues
            any::<i32>().prop_map(|i| Value::Float64(f64::from(i))),
            "[a-zA-Z0-9]{0,50}".prop_map(Value::String),
        ]
    }

    /// Non-empty member lists over a small node pool, so edges overlap and
    /// repeat members.
    fn arb_members() -> impl Strategy<Value = Vec<u64>> {
        prop::collection::vec(0u64..12, 1..5)
    }

    fn arb_edge_list() -> impl Strategy<Value = Vec<Vec<u64>>> {
        prop::collection::vec(arb_members(), 0..12)
    }

    #[derive(Debug, Clone)]
    enum Op {
        AddNode(u64),
        AddEdge(Vec<u64>),
        AddEdgeWithId(Vec<u64>, u64),
        AddNodeToEdge(u64, u64),
        RemoveNode(u64),
        RemoveNodes(Vec<u64>),
        RemoveEdge(u64),
        RemoveNodeFromEdge(u64, u64),
        RemoveSingletons,
        RemoveIsolates(bool),
        ClearEdges,
    }

    fn arb_op() -> impl Strategy<Value = Op> {
        prop_oneof![
            (0u64..12).prop_map(Op::AddNode),
            arb_members().prop_map(Op::AddEdge),
            (arb_members(), 0u64..16).prop_map(|(m, e)| Op::AddEdgeWithId(m, e)),
            (0u64..16, 0u64..12).prop_map(|(e, n)| Op::AddNodeToEdge(e, n)),
            (0u64..12).prop_map(Op::RemoveNode),
            prop::collection::vec(0u64..12, 0..4).prop_map(Op::RemoveNodes),
            (0u64..16).prop_map(Op::RemoveEdge),
            (0u64..16, 0u64..12).prop_map(|(e, n)| Op::RemoveNodeFromEdge(e, n)),
            Just(Op::RemoveSingletons),
            any::<bool>().prop_map(Op::RemoveIsolates),
            Just(Op::ClearEdges),
        ]
    }

    /// Apply one operation, ignoring expected `NotFound` failures.
    fn apply(h: &mut Hypergraph<u64>, op: Op) {
        let result = match op {
            Op::AddNode(n) => h.add_node(n, AttrMap::new()),
            Op::AddEdge(m) => h.add_edge(m, None, AttrMap::new()).map(|_| ()),
            Op::AddEdgeWithId(m, e) => h.add_edge(m, Some(e), AttrMap::new()).map(|_| ()),
            Op::AddNodeToEdge(e, n) => h.add_node_to_edge(e, n),
            Op::RemoveNode(n) => h.remove_node(&n),
            Op::RemoveNodes(ns) => h.remove_nodes_from(ns).map(|_| ()),
            Op::RemoveEdge(e) => h.remove_edge(&e),
            Op::RemoveNodeFromEdge(e, n) => h.remove_node_from_edge(&e, &n),
            Op::RemoveSingletons => h.remove_singleton_edges().map(|_| ()),
            Op::RemoveIsolates(ignore) => h.remove_isolates(ignore).map(|_| ()),
            Op::ClearEdges => {
                h.clear_edges();
                Ok(())
            }
        };
        if let Err(err) = result {
            assert!(err.is_not_found(), "unexpected error: {err}");
        }
    }

    // =========================================================================
    // Property Tests
    // =========================================================================

    proptest! {
        /// Test that Value serialization roundtrips correctly.
        #[test]
        fn value_serde_roundtrip(value in arb_simple_value()) {
            let serialized = serde_json::to_string(&value).unwrap();
            let deserialized: Value = serde_json::from_str(&serialized).unwrap();
            prop_assert_eq!(value, deserialized);
        }

        /// Test that any sequence of mutations keeps the tables consistent.
        #[test]
        fn mutations_keep_incidence_consistent(ops in prop::collection::vec(arb_op(), 0..40)) {
            let mut h: Hypergraph<u64> = Hypergraph::new();
            for op in ops {
                apply(&mut h, op);
                prop_assert!(h.validate().is_ok(), "{:?}", h.validate());
            }
        }

        /// Test that membership counts sum to member counts.
        #[test]
        fn degrees_sum_to_sizes(edges in arb_edge_list()) {
            let h = Hypergraph::from_edge_list(edges.clone()).unwrap();
            let degree_total: f64 = h.degree(None, None, None).unwrap().iter().map(|(_, d)| d).sum();
            let size_total: usize = edges.iter().map(Vec::len).sum();
            prop_assert_eq!(degree_total, size_total as f64);
        }

        /// Test that every added edge is found again by has_edge.
        #[test]
        fn added_edges_are_found(edges in arb_edge_list()) {
            let h = Hypergraph::from_edges(EdgeBatch::Members(edges.clone())).unwrap();
            for members in edges {
                let mut shuffled = members.clone();
                shuffled.reverse();
                prop_assert!(h.has_edge(shuffled));
            }
        }

        /// Test that the dual of the dual restores every edge's members
        /// (as a multiset; member order follows node insertion order).
        #[test]
        fn dual_roundtrip(edges in arb_edge_list()) {
            let h = Hypergraph::from_edge_list(edges).unwrap();
            let dd = h.dual().unwrap().dual().unwrap();

            let sorted = |g: &Hypergraph<u64>| {
                g.edge_dict()
                    .into_iter()
                    .map(|(e, mut members)| {
                        members.sort_unstable();
                        (e, members)
                    })
                    .collect::<Vec<_>>()
            };
            prop_assert_eq!(sorted(&dd), sorted(&h));
            let nodes: HashSet<&u64> = dd.nodes().collect();
            prop_assert_eq!(nodes, h.nodes().collect::<HashSet<_>>());
        }

        /// Test that neighbors are exactly the co-members.
        #[test]
        fn neighbors_match_egonet(edges in arb_edge_list(), n in 0u64..12) {
            let h = Hypergraph::from_edge_list(edges).unwrap();
            prop_assume!(h.contains(&n));

            let from_egonet: HashSet<u64> = h.egonet(&n, false).unwrap().into_iter().flatten().collect();
            let neighbors: HashSet<u64> = h.neighbors(&n).unwrap().into_iter().collect();
            prop_assert_eq!(neighbors, from_egonet);
        }
    }
}
