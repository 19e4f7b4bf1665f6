//! Attribute storage for nodes, edges, and the hypergraph itself.
//!
//! Each node and edge owns an independent `AttrMap`. The maps live in
//! `ProtectedMap` tables keyed by entity ID, so an entity's attributes are
//! created and destroyed together with the entity.

use std::collections::HashMap;

use common_error::{HypernetError, HypernetResult};

use super::{HyperKey, ProtectedMap};
use crate::types::Value;

/// Map of attribute names to values.
pub type AttrMap = HashMap<String, Value>;

/// Build an `AttrMap` from key/value pairs.
///
/// ```rust
/// use hypernet_core::{Value, attr_map};
///
/// let attrs = attr_map([("color", Value::from("red")), ("age", Value::from(30))]);
/// assert_eq!(attrs.len(), 2);
/// ```
pub fn attr_map<I, S, V>(items: I) -> AttrMap
where
    I: IntoIterator<Item = (S, V)>,
    S: Into<String>,
    V: Into<Value>,
{
    items
        .into_iter()
        .map(|(key, value)| (key.into(), value.into()))
        .collect()
}

/// Look up `key` in an attribute map, failing with `NotFound` if unset.
pub(crate) fn lookup<'a>(attrs: &'a AttrMap, key: &str) -> HypernetResult<&'a Value> {
    attrs
        .get(key)
        .ok_or_else(|| HypernetError::not_found(format!("attribute '{key}' has not been set")))
}

/// Independent per-node, per-edge, and whole-hypergraph attribute maps.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeStore<K: HyperKey> {
    nodes: ProtectedMap<K, AttrMap>,
    edges: ProtectedMap<K, AttrMap>,
    hypergraph: AttrMap,
}

impl<K: HyperKey> AttributeStore<K> {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            nodes: ProtectedMap::new(),
            edges: ProtectedMap::new(),
            hypergraph: AttrMap::new(),
        }
    }

    /// Attributes of node `n`.
    pub fn node(&self, n: &K) -> HypernetResult<&AttrMap> {
        self.nodes.get(n)
    }

    /// Mutable attributes of node `n`.
    pub fn node_mut(&mut self, n: &K) -> HypernetResult<&mut AttrMap> {
        self.nodes.get_mut(n)
    }

    /// Attributes of edge `e`.
    pub fn edge(&self, e: &K) -> HypernetResult<&AttrMap> {
        self.edges.get(e)
    }

    /// Mutable attributes of edge `e`.
    pub fn edge_mut(&mut self, e: &K) -> HypernetResult<&mut AttrMap> {
        self.edges.get_mut(e)
    }

    /// Hypergraph-level attributes.
    pub fn hypergraph(&self) -> &AttrMap {
        &self.hypergraph
    }

    /// Mutable hypergraph-level attributes.
    pub fn hypergraph_mut(&mut self) -> &mut AttrMap {
        &mut self.hypergraph
    }

    /// Ensure node `n` has an attribute map and merge `attrs` into it.
    pub(crate) fn merge_node(&mut self, n: K, attrs: AttrMap) -> HypernetResult<()> {
        self.nodes.get_or_insert_with(n, AttrMap::new)?.extend(attrs);
        Ok(())
    }

    /// Replace the attribute map of edge `e`.
    pub(crate) fn set_edge(&mut self, e: K, attrs: AttrMap) -> HypernetResult<()> {
        self.edges.set(e, attrs)?;
        Ok(())
    }

    /// Ensure edge `e` has an attribute map.
    pub(crate) fn touch_edge(&mut self, e: K) -> HypernetResult<()> {
        self.edges.get_or_insert_with(e, AttrMap::new)?;
        Ok(())
    }

    pub(crate) fn remove_node(&mut self, n: &K) -> HypernetResult<AttrMap> {
        self.nodes.delete(n)
    }

    pub(crate) fn remove_edge(&mut self, e: &K) -> HypernetResult<AttrMap> {
        self.edges.delete(e)
    }

    /// Drop all node and edge attributes, and optionally hypergraph attributes.
    pub(crate) fn clear(&mut self, hypergraph_attr: bool) {
        self.nodes.clear();
        self.edges.clear();
        if hypergraph_attr {
            self.hypergraph.clear();
        }
    }

    pub(crate) fn clear_edges(&mut self) {
        self.edges.clear();
    }

    /// Number of node attribute maps (equals the number of nodes).
    pub(crate) fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edge attribute maps (equals the number of edges).
    pub(crate) fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

impl<K: HyperKey> Default for AttributeStore<K> {
    fn default() -> Self {
        Self::new()
    }
}
