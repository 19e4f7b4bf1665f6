//! Dual incidence index: node → incident edges, edge → member nodes.
//!
//! Both sides keep insertion order and multiplicity. A node that occurs
//! twice in an edge has that edge twice in its membership list, so every
//! operation here updates both sides one occurrence at a time.

use std::collections::HashMap;

use common_error::{HypernetError, HypernetResult};

use super::{HyperKey, ProtectedMap};

/// Node and edge tables of a hypergraph.
#[derive(Debug, Clone, PartialEq)]
pub struct IncidenceStore<K: HyperKey> {
    /// Node → ordered incident edge IDs (one entry per occurrence).
    nodes: ProtectedMap<K, Vec<K>>,
    /// Edge → ordered member node IDs.
    edges: ProtectedMap<K, Vec<K>>,
}

impl<K: HyperKey> IncidenceStore<K> {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            nodes: ProtectedMap::new(),
            edges: ProtectedMap::new(),
        }
    }

    /// Node table.
    pub fn nodes(&self) -> &ProtectedMap<K, Vec<K>> {
        &self.nodes
    }

    /// Edge table.
    pub fn edges(&self) -> &ProtectedMap<K, Vec<K>> {
        &self.edges
    }

    /// Edges incident to node `n`.
    pub fn memberships(&self, n: &K) -> HypernetResult<&[K]> {
        self.nodes.get(n).map(Vec::as_slice)
    }

    /// Members of edge `e`.
    pub fn members(&self, e: &K) -> HypernetResult<&[K]> {
        self.edges.get(e).map(Vec::as_slice)
    }

    /// Add node `n` with no memberships. Returns `true` if it was new.
    pub fn insert_node(&mut self, n: K) -> HypernetResult<bool> {
        if self.nodes.contains(&n) {
            return Ok(false);
        }
        self.nodes.set(n, Vec::new())?;
        Ok(true)
    }

    /// Add edge `e` over `members`, which must all exist already.
    ///
    /// `e` must not be an edge yet.
    pub fn insert_edge(&mut self, e: K, members: Vec<K>) -> HypernetResult<()> {
        if self.edges.contains(&e) {
            return Err(HypernetError::internal(format!(
                "edge {e:?} is already indexed"
            )));
        }
        for n in &members {
            self.nodes.get_mut(n)?.push(e.clone());
        }
        self.edges.set(e, members)?;
        Ok(())
    }

    /// Replace the members of existing edge `e`, keeping its position.
    ///
    /// Members must all exist already. Retained occurrences keep their
    /// place in each node's membership list; added occurrences go last.
    pub fn replace_edge(&mut self, e: &K, members: Vec<K>) -> HypernetResult<()> {
        for n in &members {
            self.nodes.get(n)?;
        }
        let mut delta: HashMap<K, isize> = HashMap::new();
        for n in self.edges.get(e)? {
            *delta.entry(n.clone()).or_default() -= 1;
        }
        for n in &members {
            *delta.entry(n.clone()).or_default() += 1;
        }
        for (n, d) in delta {
            let memberships = self.nodes.get_mut(&n)?;
            if d > 0 {
                memberships.extend(std::iter::repeat_n(e.clone(), d.unsigned_abs()));
            }
            for _ in d..0 {
                if let Some(pos) = memberships.iter().rposition(|x| x == e) {
                    memberships.remove(pos);
                }
            }
        }
        self.edges.set(e.clone(), members)?;
        Ok(())
    }

    /// Add an empty edge `e` if absent. Returns `true` if it was new.
    ///
    /// The caller must link a member before handing control back, since an
    /// empty edge may not outlive the operation that created it.
    pub fn insert_empty_edge(&mut self, e: K) -> HypernetResult<bool> {
        if self.edges.contains(&e) {
            return Ok(false);
        }
        self.edges.set(e, Vec::new())?;
        Ok(true)
    }

    /// Append one occurrence of `n` to `e`, on both sides.
    pub fn link(&mut self, e: &K, n: &K) -> HypernetResult<()> {
        // Resolve both sides before mutating either.
        self.nodes.get(n)?;
        self.edges.get_mut(e)?.push(n.clone());
        self.nodes.get_mut(n)?.push(e.clone());
        Ok(())
    }

    /// Remove one occurrence of `n` from `e`, on both sides.
    ///
    /// Returns `true` if `e` is left empty; the caller then removes it.
    pub fn unlink(&mut self, e: &K, n: &K) -> HypernetResult<bool> {
        let members = self.edges.get(e)?;
        let Some(pos) = members.iter().position(|m| m == n) else {
            return Err(HypernetError::not_found(format!(
                "node {n:?} is not a member of edge {e:?}"
            )));
        };
        let memberships = self.nodes.get_mut(n)?;
        let Some(back) = memberships.iter().position(|x| x == e) else {
            return Err(HypernetError::internal(format!(
                "edge {e:?} lists node {n:?} but the node does not list the edge"
            )));
        };
        memberships.remove(back);

        let members = self.edges.get_mut(e)?;
        members.remove(pos);
        Ok(members.is_empty())
    }

    /// Remove edge `e`, detaching it from every member. Returns its members.
    pub fn remove_edge(&mut self, e: &K) -> HypernetResult<Vec<K>> {
        let members = self.edges.delete(e)?;
        for n in &members {
            let memberships = self.nodes.get_mut(n)?;
            if let Some(pos) = memberships.iter().position(|x| x == e) {
                memberships.remove(pos);
            }
        }
        Ok(members)
    }

    /// Remove node `n`, detaching it from every edge that contains it.
    ///
    /// Returns the edges left empty by the removal, in membership order. They
    /// are already gone from the edge table.
    pub fn remove_node(&mut self, n: &K) -> HypernetResult<Vec<K>> {
        let memberships = self.nodes.delete(n)?;
        let mut emptied = Vec::new();
        for e in memberships {
            let members = self.edges.get_mut(&e)?;
            if let Some(pos) = members.iter().position(|m| m == n) {
                members.remove(pos);
            }
            if members.is_empty() {
                self.edges.delete(&e)?;
                emptied.push(e);
            }
        }
        Ok(emptied)
    }

    /// Remove every node and edge.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.edges.clear();
    }

    /// Remove every edge and reset all memberships, keeping the nodes.
    pub fn clear_edges(&mut self) {
        self.edges.clear();
        for (_, memberships) in self.nodes.iter_mut() {
            memberships.clear();
        }
    }

    /// Validate incidence symmetry (with multiplicity) and non-empty edges.
    pub fn validate(&self) -> HypernetResult<()> {
        let mut from_edges: HashMap<(&K, &K), usize> = HashMap::new();
        for (e, members) in &self.edges {
            if members.is_empty() {
                return Err(HypernetError::internal(format!("edge {e:?} is empty")));
            }
            for n in members {
                if !self.nodes.contains(n) {
                    return Err(HypernetError::internal(format!(
                        "edge {e:?} references missing node {n:?}"
                    )));
                }
                *from_edges.entry((n, e)).or_default() += 1;
            }
        }

        let mut from_nodes: HashMap<(&K, &K), usize> = HashMap::new();
        for (n, memberships) in &self.nodes {
            for e in memberships {
                if !self.edges.contains(e) {
                    return Err(HypernetError::internal(format!(
                        "node {n:?} references missing edge {e:?}"
                    )));
                }
                *from_nodes.entry((n, e)).or_default() += 1;
            }
        }

        if from_edges != from_nodes {
            return Err(HypernetError::internal(
                "inconsistent incidence between node and edge tables",
            ));
        }
        Ok(())
    }
}

impl<K: HyperKey> Default for IncidenceStore<K> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(edges: Vec<(u64, Vec<u64>)>) -> IncidenceStore<u64> {
        let mut store = IncidenceStore::new();
        for (e, members) in edges {
            for n in &members {
                store.insert_node(*n).unwrap();
            }
            store.insert_edge(e, members).unwrap();
        }
        store
    }

    #[test]
    fn test_insert_and_query() {
        let store = store_with(vec![(0, vec![1, 2, 3]), (1, vec![3, 4])]);

        assert_eq!(store.members(&0).unwrap(), &[1, 2, 3]);
        assert_eq!(store.memberships(&3).unwrap(), &[0, 1]);
        assert!(store.members(&9).unwrap_err().is_not_found());
        store.validate().unwrap();
    }

    #[test]
    fn test_duplicate_members_keep_multiplicity() {
        let mut store = store_with(vec![(0, vec![1, 1, 2])]);
        assert_eq!(store.memberships(&1).unwrap(), &[0, 0]);
        store.validate().unwrap();

        assert!(!store.unlink(&0, &1).unwrap());
        assert_eq!(store.members(&0).unwrap(), &[1, 2]);
        assert_eq!(store.memberships(&1).unwrap(), &[0]);
        store.validate().unwrap();
    }

    #[test]
    fn test_remove_node_reports_emptied_edges() {
        let mut store = store_with(vec![(0, vec![1, 2]), (1, vec![1]), (2, vec![1, 1])]);

        let emptied = store.remove_node(&1).unwrap();
        assert_eq!(emptied, vec![1, 2]);
        assert_eq!(store.members(&0).unwrap(), &[2]);
        assert!(!store.edges().contains(&1));
        assert!(!store.edges().contains(&2));
        store.validate().unwrap();
    }

    #[test]
    fn test_remove_edge_detaches_members() {
        let mut store = store_with(vec![(0, vec![1, 2]), (1, vec![2, 3])]);

        assert_eq!(store.remove_edge(&0).unwrap(), vec![1, 2]);
        assert!(store.memberships(&1).unwrap().is_empty());
        assert_eq!(store.memberships(&2).unwrap(), &[1]);
        store.validate().unwrap();
    }

    #[test]
    fn test_unlink_non_member_fails() {
        let mut store = store_with(vec![(0, vec![1, 2])]);
        store.insert_node(7).unwrap();

        assert!(store.unlink(&0, &7).unwrap_err().is_not_found());
        assert!(store.unlink(&5, &1).unwrap_err().is_not_found());
    }

    #[test]
    fn test_clear_edges_keeps_nodes() {
        let mut store = store_with(vec![(0, vec![1, 2])]);
        store.clear_edges();

        assert_eq!(store.nodes().len(), 2);
        assert!(store.edges().is_empty());
        assert!(store.memberships(&1).unwrap().is_empty());
        store.validate().unwrap();
    }

    #[test]
    fn test_validate_catches_empty_edge() {
        let mut store: IncidenceStore<u64> = IncidenceStore::new();
        store.insert_empty_edge(0).unwrap();
        assert!(store.validate().is_err());

        store.insert_node(1).unwrap();
        store.link(&0, &1).unwrap();
        store.validate().unwrap();
    }

    #[test]
    fn test_replace_edge_keeps_positions() {
        let mut store = store_with(vec![(0, vec![1, 2]), (1, vec![2, 3]), (2, vec![1, 3])]);
        store.insert_node(4).unwrap();

        store.replace_edge(&0, vec![2, 4, 4]).unwrap();

        assert_eq!(store.edges().keys().copied().collect::<Vec<_>>(), vec![0, 1, 2]);
        assert_eq!(store.members(&0).unwrap(), &[2, 4, 4]);
        assert_eq!(store.memberships(&1).unwrap(), &[2]);
        assert_eq!(store.memberships(&2).unwrap(), &[0, 1]);
        assert_eq!(store.memberships(&4).unwrap(), &[0, 0]);
        store.validate().unwrap();
    }

    #[test]
    fn test_replace_edge_requires_members() {
        let mut store = store_with(vec![(0, vec![1, 2])]);
        assert!(store.replace_edge(&0, vec![9]).unwrap_err().is_not_found());
        assert_eq!(store.members(&0).unwrap(), &[1, 2]);
    }
}
