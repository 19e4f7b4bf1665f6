//! Batched edge input.
//!
//! `EdgeBatch` names the shape of a batch up front, so every entry of one
//! batch shares the same layout and nothing is inferred at run time.

use indexmap::IndexMap;

use super::{AttrMap, HyperKey};

/// A batch of edges for `Hypergraph::add_edges_from`.
#[derive(Debug, Clone, PartialEq)]
pub enum EdgeBatch<K: HyperKey> {
    /// Edge ID → members.
    Dict(IndexMap<K, Vec<K>>),
    /// Members only; IDs are auto-assigned.
    Members(Vec<Vec<K>>),
    /// `(members, id)` pairs.
    WithIds(Vec<(Vec<K>, K)>),
    /// `(members, attrs)` pairs; IDs are auto-assigned.
    WithAttrs(Vec<(Vec<K>, AttrMap)>),
    /// `(members, id, attrs)` triples.
    Full(Vec<(Vec<K>, K, AttrMap)>),
}

/// One normalized batch entry: optional ID, members, per-edge attributes.
pub(crate) type BatchEntry<K> = (Option<K>, Vec<K>, AttrMap);

impl<K: HyperKey> EdgeBatch<K> {
    /// Build a members-only batch from any nested iterable.
    pub fn members<I, M>(edges: I) -> Self
    where
        I: IntoIterator<Item = M>,
        M: IntoIterator<Item = K>,
    {
        Self::Members(
            edges
                .into_iter()
                .map(|members| members.into_iter().collect())
                .collect(),
        )
    }

    /// Build an edge-dict batch from `(id, members)` pairs.
    pub fn dict<I, M>(edges: I) -> Self
    where
        I: IntoIterator<Item = (K, M)>,
        M: IntoIterator<Item = K>,
    {
        Self::Dict(
            edges
                .into_iter()
                .map(|(id, members)| (id, members.into_iter().collect()))
                .collect(),
        )
    }

    /// Number of edges in the batch.
    pub fn len(&self) -> usize {
        match self {
            Self::Dict(edges) => edges.len(),
            Self::Members(edges) => edges.len(),
            Self::WithIds(edges) => edges.len(),
            Self::WithAttrs(edges) => edges.len(),
            Self::Full(edges) => edges.len(),
        }
    }

    /// Check if the batch holds no edges.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Flatten into `(id, members, attrs)` entries in batch order.
    pub(crate) fn into_entries(self) -> Vec<BatchEntry<K>> {
        match self {
            Self::Dict(edges) => edges
                .into_iter()
                .map(|(id, members)| (Some(id), members, AttrMap::new()))
                .collect(),
            Self::Members(edges) => edges
                .into_iter()
                .map(|members| (None, members, AttrMap::new()))
                .collect(),
            Self::WithIds(edges) => edges
                .into_iter()
                .map(|(members, id)| (Some(id), members, AttrMap::new()))
                .collect(),
            Self::WithAttrs(edges) => edges
                .into_iter()
                .map(|(members, attrs)| (None, members, attrs))
                .collect(),
            Self::Full(edges) => edges
                .into_iter()
                .map(|(members, id, attrs)| (Some(id), members, attrs))
                .collect(),
        }
    }
}

impl<K: HyperKey> From<Vec<Vec<K>>> for EdgeBatch<K> {
    fn from(edges: Vec<Vec<K>>) -> Self {
        Self::Members(edges)
    }
}

impl<K: HyperKey> From<IndexMap<K, Vec<K>>> for EdgeBatch<K> {
    fn from(edges: IndexMap<K, Vec<K>>) -> Self {
        Self::Dict(edges)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hypergraph::attr_map;

    #[test]
    fn test_members_constructor() {
        let batch: EdgeBatch<u64> = EdgeBatch::members([vec![0, 1], vec![1, 2, 3]]);
        assert_eq!(batch.len(), 2);
        assert_eq!(
            batch.into_entries(),
            vec![
                (None, vec![0, 1], AttrMap::new()),
                (None, vec![1, 2, 3], AttrMap::new()),
            ]
        );
    }

    #[test]
    fn test_dict_keeps_order() {
        let batch = EdgeBatch::dict([
            ("one".to_string(), vec!["a".to_string()]),
            ("two".to_string(), vec!["b".to_string()]),
        ]);
        let ids: Vec<Option<String>> = batch.into_entries().into_iter().map(|e| e.0).collect();
        assert_eq!(ids, vec![Some("one".to_string()), Some("two".to_string())]);
    }

    #[test]
    fn test_full_entries() {
        let batch = EdgeBatch::Full(vec![(vec![0u64, 1], 7u64, attr_map([("color", "red")]))]);
        let entries = batch.into_entries();
        assert_eq!(entries[0].0, Some(7));
        assert_eq!(entries[0].2.len(), 1);
    }

    #[test]
    fn test_empty_batch() {
        let batch: EdgeBatch<u64> = EdgeBatch::Members(vec![]);
        assert!(batch.is_empty());
    }
}
