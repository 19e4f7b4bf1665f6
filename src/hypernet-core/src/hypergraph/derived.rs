//! Structural queries and derivations over a hypergraph.

use std::collections::{HashMap, HashSet};

use common_error::HypernetResult;
use indexmap::{IndexMap, IndexSet};
use log::debug;

use super::{DegreeView, EdgeSizeView, HyperKey, Hypergraph};

impl<K: HyperKey> Hypergraph<K> {
    /// Check if some edge has exactly the member set of `candidate`.
    ///
    /// Order and multiplicity are ignored on both sides.
    pub fn has_edge<I>(&self, candidate: I) -> bool
    where
        I: IntoIterator<Item = K>,
    {
        let candidate: HashSet<K> = candidate.into_iter().collect();
        self.incidence().edges().values().any(|members| {
            let members: HashSet<&K> = members.iter().collect();
            members.len() == candidate.len() && members.iter().all(|n| candidate.contains(*n))
        })
    }

    /// Nodes sharing at least one edge with `n`, excluding `n` itself.
    pub fn neighbors(&self, n: &K) -> HypernetResult<IndexSet<K>> {
        let mut neighbors = IndexSet::new();
        for e in self.memberships(n)? {
            for m in self.members(e)? {
                if m != n {
                    neighbors.insert(m.clone());
                }
            }
        }
        Ok(neighbors)
    }

    /// Member lists of the edges containing `n`, in membership order.
    ///
    /// Unless `include_self` is set, `n` is left out of each list.
    pub fn egonet(&self, n: &K, include_self: bool) -> HypernetResult<Vec<Vec<K>>> {
        self.memberships(n)?
            .iter()
            .map(|e| {
                let members = self.members(e)?;
                Ok(members
                    .iter()
                    .filter(|m| include_self || *m != n)
                    .cloned()
                    .collect())
            })
            .collect()
    }

    /// Largest edge order (size - 1).
    ///
    /// `Some(0)` if there are nodes but no edges, `None` if the hypergraph is
    /// empty.
    pub fn max_edge_order(&self) -> Option<usize> {
        if self.num_edges() > 0 {
            self.incidence()
                .edges()
                .values()
                .map(|members| members.len() - 1)
                .max()
        } else if self.num_nodes() > 0 {
            Some(0)
        } else {
            None
        }
    }

    /// Check if `order` lies between 1 and [`Hypergraph::max_edge_order`].
    pub fn is_possible_order(&self, order: i64) -> bool {
        match self.max_edge_order() {
            Some(max) => order >= 1 && order <= max as i64,
            None => false,
        }
    }

    /// IDs of the edges of the given order, in insertion order.
    pub fn edges_of_order(&self, order: usize) -> Vec<K> {
        self.incidence()
            .edges()
            .iter()
            .filter(|(_, members)| members.len().checked_sub(1) == Some(order))
            .map(|(e, _)| e.clone())
            .collect()
    }

    /// IDs of the edges with exactly one member.
    pub fn singleton_edges(&self) -> Vec<K> {
        self.edges_of_order(0)
    }

    /// Remove every singleton edge, returning how many were removed.
    pub fn remove_singleton_edges(&mut self) -> HypernetResult<usize> {
        let singletons = self.singleton_edges();
        let count = singletons.len();
        self.remove_edges_from(singletons)?;
        Ok(count)
    }

    /// Nodes that belong to no edge of size 2 or more.
    ///
    /// With `ignore_singletons` unset, only nodes in no edge at all qualify.
    pub fn isolates(&self, ignore_singletons: bool) -> IndexSet<K> {
        self.incidence()
            .nodes()
            .iter()
            .filter(|(_, memberships)| {
                !memberships.iter().any(|e| {
                    !ignore_singletons
                        || self.members(e).map(|m| m.len() >= 2).unwrap_or(false)
                })
            })
            .map(|(n, _)| n.clone())
            .collect()
    }

    /// Remove the nodes reported by [`Hypergraph::isolates`].
    pub fn remove_isolates(&mut self, ignore_singletons: bool) -> HypernetResult<usize> {
        let isolates = self.isolates(ignore_singletons);
        self.remove_nodes_from(isolates)
    }

    /// Member lists occurring identically (same order) in more than one edge.
    ///
    /// Each duplicated list is reported once, in order of first occurrence.
    pub fn duplicate_edges(&self) -> Vec<Vec<K>> {
        let mut counts: IndexMap<&[K], usize> = IndexMap::new();
        for members in self.incidence().edges().values() {
            *counts.entry(members.as_slice()).or_default() += 1;
        }
        counts
            .into_iter()
            .filter(|(_, count)| *count > 1)
            .map(|(members, _)| members.to_vec())
            .collect()
    }

    /// The common order of all non-singleton edges, if there is exactly one.
    pub fn is_uniform(&self) -> Option<usize> {
        let sizes: HashSet<usize> = self
            .incidence()
            .edges()
            .values()
            .map(Vec::len)
            .filter(|&size| size != 1)
            .collect();
        match sizes.len() {
            1 => sizes.into_iter().next().map(|size| size - 1),
            _ => None,
        }
    }

    /// The dual hypergraph: nodes become edges and edges become nodes.
    ///
    /// IDs and attributes carry over. Nodes belonging to no edge would become
    /// empty edges and are left out.
    pub fn dual(&self) -> HypernetResult<Self> {
        let mut dual = Self::with_config(self.config().clone());
        for e in self.edges() {
            dual.add_node(e.clone(), self.edge_attrs(e)?.clone())?;
        }
        for (n, memberships) in self.incidence().nodes() {
            if memberships.is_empty() {
                debug!("Node {n:?} belongs to no edge, leaving it out of the dual");
                continue;
            }
            dual.insert_edge(
                Some(n.clone()),
                memberships.clone(),
                self.node_attrs(n)?.clone(),
            )?;
        }
        *dual.attributes_mut().hypergraph_mut() = self.attributes().hypergraph().clone();
        Ok(dual)
    }

    /// Degrees of `nbunch` (all nodes if `None`).
    ///
    /// `weight` names an edge attribute summed instead of counting edges;
    /// `order` restricts the count to edges of that order.
    pub fn degree(
        &self,
        nbunch: Option<&[K]>,
        weight: Option<&str>,
        order: Option<usize>,
    ) -> HypernetResult<DegreeView<K>> {
        DegreeView::new(self, nbunch, weight, order)
    }

    /// Degree of a single node.
    pub fn degree_of(
        &self,
        n: &K,
        weight: Option<&str>,
        order: Option<usize>,
    ) -> HypernetResult<f64> {
        DegreeView::new(self, Some(std::slice::from_ref(n)), weight, order)?.get(n)
    }

    /// Sizes of `ebunch` (all edges if `None`), optionally summing a node
    /// attribute instead of counting members.
    pub fn edge_size(
        &self,
        ebunch: Option<&[K]>,
        weight: Option<&str>,
    ) -> HypernetResult<EdgeSizeView<K>> {
        EdgeSizeView::new(self, ebunch, weight)
    }

    /// Size of a single edge.
    pub fn edge_size_of(&self, e: &K, weight: Option<&str>) -> HypernetResult<f64> {
        EdgeSizeView::new(self, Some(std::slice::from_ref(e)), weight)?.get(e)
    }

    /// Number of edges of each order, sorted by order.
    pub fn order_distribution(&self) -> Vec<(usize, usize)> {
        let mut counts: HashMap<usize, usize> = HashMap::new();
        for members in self.incidence().edges().values() {
            *counts.entry(members.len() - 1).or_default() += 1;
        }
        let mut counts: Vec<(usize, usize)> = counts.into_iter().collect();
        counts.sort_unstable();
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hypergraph::{AttrMap, attr_map};
    use crate::types::Value;

    fn scenario() -> Hypergraph<u64> {
        Hypergraph::from_edge_list([vec![1, 2, 3], vec![4], vec![5, 6], vec![6, 7, 8]]).unwrap()
    }

    #[test]
    fn test_neighbors() {
        let h = scenario();
        assert_eq!(h.neighbors(&1).unwrap(), IndexSet::from([2, 3]));
        assert!(h.neighbors(&4).unwrap().is_empty());
        assert_eq!(h.neighbors(&6).unwrap(), IndexSet::from([5, 7, 8]));
        assert!(h.neighbors(&42).unwrap_err().is_not_found());
    }

    #[test]
    fn test_egonet() {
        let h: Hypergraph<u64> =
            Hypergraph::from_edge_list([vec![1, 2, 3], vec![3, 4], vec![4, 5, 6]]).unwrap();
        assert_eq!(h.egonet(&3, false).unwrap(), vec![vec![1, 2], vec![4]]);
        assert_eq!(
            h.egonet(&3, true).unwrap(),
            vec![vec![1, 2, 3], vec![3, 4]]
        );
        assert!(h.egonet(&9, false).unwrap_err().is_not_found());
    }

    #[test]
    fn test_has_edge_ignores_order_and_multiplicity() {
        let mut h: Hypergraph<u64> = Hypergraph::new();
        h.add_edge([1, 2, 3], None, AttrMap::new()).unwrap();

        assert!(h.has_edge([1, 2, 3]));
        assert!(h.has_edge(HashSet::from([3, 2, 1])));
        assert!(h.has_edge([3, 3, 1, 2]));
        assert!(!h.has_edge([1, 2]));
    }

    #[test]
    fn test_max_edge_order() {
        let mut h: Hypergraph<u64> = Hypergraph::new();
        assert_eq!(h.max_edge_order(), None);
        assert!(!h.is_possible_order(1));

        h.add_nodes_from([1, 2], AttrMap::new()).unwrap();
        assert_eq!(h.max_edge_order(), Some(0));
        assert!(!h.is_possible_order(1));

        let h = scenario();
        assert_eq!(h.max_edge_order(), Some(2));
        assert!(h.is_possible_order(2));
        assert!(!h.is_possible_order(0));
        assert!(!h.is_possible_order(-1));
        assert!(!h.is_possible_order(3));
    }

    #[test]
    fn test_singletons_and_isolates() {
        let mut h = scenario();
        assert_eq!(h.singleton_edges(), vec![1]);
        assert!(h.isolates(false).is_empty());
        assert_eq!(h.isolates(true), IndexSet::from([4]));

        assert_eq!(h.remove_singleton_edges().unwrap(), 1);
        assert_eq!(h.isolates(false), IndexSet::from([4]));
        assert_eq!(h.remove_isolates(false).unwrap(), 1);
        assert!(!h.contains(&4));
        h.validate().unwrap();
    }

    #[test]
    fn test_edges_of_order() {
        let h = scenario();
        assert_eq!(h.edges_of_order(2), vec![0, 3]);
        assert_eq!(h.edges_of_order(1), vec![2]);
        assert!(h.edges_of_order(5).is_empty());
        assert!(h.edges_of_order(usize::MAX).is_empty());
        assert_eq!(h.order_distribution(), vec![(0, 1), (1, 1), (2, 2)]);
    }

    #[test]
    fn test_duplicate_edges() {
        let h: Hypergraph<u64> = Hypergraph::from_edge_list([
            vec![1, 2],
            vec![2, 1],
            vec![1, 2],
            vec![3],
            vec![3],
            vec![1, 2],
        ])
        .unwrap();
        assert_eq!(h.duplicate_edges(), vec![vec![1, 2], vec![3]]);
    }

    #[test]
    fn test_is_uniform() {
        let h: Hypergraph<u64> =
            Hypergraph::from_edge_list([vec![0, 1, 2], vec![1, 2, 3], vec![2, 3, 4]]).unwrap();
        assert_eq!(h.is_uniform(), Some(2));

        let h: Hypergraph<u64> =
            Hypergraph::from_edge_list([vec![0, 1], vec![1, 2, 3], vec![4]]).unwrap();
        assert_eq!(h.is_uniform(), None);

        let h: Hypergraph<u64> = Hypergraph::from_edge_list([vec![0, 1], vec![4]]).unwrap();
        assert_eq!(h.is_uniform(), Some(1));

        let h: Hypergraph<u64> = Hypergraph::from_edge_list([vec![4]]).unwrap();
        assert_eq!(h.is_uniform(), None);
    }

    #[test]
    fn test_dual() {
        let mut h = scenario();
        h.set_attr("name", "scenario");
        h.set_node_attr(&1, "color", "red").unwrap();
        h.set_edge_attr(&0, "weight", 2.0).unwrap();

        let d = h.dual().unwrap();
        assert_eq!(d.num_nodes(), 4);
        assert_eq!(d.num_edges(), 8);
        assert_eq!(d.members(&6).unwrap(), &[2, 3]);
        assert_eq!(d.memberships(&0).unwrap(), &[1, 2, 3]);
        assert_eq!(d.edge_attr(&1, "color").unwrap(), &Value::from("red"));
        assert_eq!(d.node_attr(&0, "weight").unwrap(), &Value::from(2.0));
        assert_eq!(d.attr("name").unwrap(), &Value::from("scenario"));
        d.validate().unwrap();

        let dd = d.dual().unwrap();
        assert_eq!(dd.edge_dict(), h.edge_dict());
        assert_eq!(
            dd.nodes().collect::<HashSet<_>>(),
            h.nodes().collect::<HashSet<_>>()
        );
    }

    #[test]
    fn test_dual_skips_isolated_nodes() {
        let mut h: Hypergraph<u64> = Hypergraph::from_edge_list([vec![1, 2]]).unwrap();
        h.add_node(9, attr_map([("a", 1)])).unwrap();

        let d = h.dual().unwrap();
        assert!(!d.contains_edge(&9));
        assert_eq!(d.num_edges(), 2);
    }

    #[test]
    fn test_degree_and_edge_size() {
        let mut h = scenario();
        h.add_node(10, AttrMap::new()).unwrap();

        assert_eq!(h.degree_of(&10, None, None).unwrap(), 0.0);
        assert_eq!(h.degree_of(&6, None, None).unwrap(), 2.0);
        assert_eq!(h.degree_of(&6, None, Some(2)).unwrap(), 1.0);
        assert!(h.degree_of(&42, None, None).unwrap_err().is_not_found());

        let degrees = h.degree(None, None, None).unwrap();
        assert_eq!(degrees.len(), 9);

        assert_eq!(h.edge_size_of(&3, None).unwrap(), 3.0);
        let sizes = h.edge_size(Some(&[0, 1]), None).unwrap();
        assert_eq!(sizes.into_map().into_values().collect::<Vec<_>>(), vec![3.0, 1.0]);
    }
}
