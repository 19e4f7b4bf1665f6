//! Hypergraph container - the user-facing entity.
//!
//! `Hypergraph` composes the incidence index, the attribute tables, and a
//! per-instance edge ID allocator. Every mutation keeps node and edge tables
//! mutually consistent and never leaves an empty edge behind.

use std::collections::HashSet;
use std::fmt;

use common_config::HypergraphConfig;
use common_error::{HypernetResult, ensure};
use indexmap::IndexMap;
use log::{debug, warn};

use super::properties::lookup;
use super::protected::check_key;
use super::{AttrMap, AttributeStore, EdgeBatch, HyperKey, Id, IdAllocator, IncidenceStore};
use crate::hypergraph::attr_map;
use crate::types::Value;

/// A hypergraph: nodes, edges of any positive size, and their attributes.
///
/// Nodes and edges share the identifier type `K`. Edge IDs left unspecified
/// are drawn from a monotonically increasing counter.
///
/// ## Example
///
/// ```rust
/// use hypernet_core::{AttrMap, Hypergraph};
///
/// let mut h: Hypergraph<u64> = Hypergraph::new();
/// h.add_node(1, [("name", "Alice")]).unwrap();
///
/// let e = h.add_edge([1, 2, 3], None, AttrMap::new()).unwrap();
/// let named = h
///     .new_edge([3, 4])
///     .with_id(10)
///     .with_attr("color", "red")
///     .build()
///     .unwrap();
///
/// assert_eq!(e, 0);
/// assert_eq!(named, 10);
/// assert_eq!(h.num_nodes(), 4);
/// assert_eq!(h.memberships(&3).unwrap(), &[0, 10]);
/// ```
#[derive(Debug, Clone)]
pub struct Hypergraph<K: HyperKey = Id> {
    /// Node and edge incidence tables.
    incidence: IncidenceStore<K>,

    /// Node, edge, and hypergraph attributes.
    attributes: AttributeStore<K>,

    /// Source of auto-assigned edge IDs.
    allocator: IdAllocator,

    config: HypergraphConfig,
}

impl<K: HyperKey> Hypergraph<K> {
    /// Create an empty hypergraph with the default configuration.
    pub fn new() -> Self {
        Self::with_config(HypergraphConfig::default())
    }

    /// Create an empty hypergraph with a specific configuration.
    pub fn with_config(config: HypergraphConfig) -> Self {
        Self {
            incidence: IncidenceStore::new(),
            attributes: AttributeStore::new(),
            allocator: IdAllocator::starting_at(config.first_edge_uid),
            config,
        }
    }

    /// Create a hypergraph from a batch of edges.
    pub fn from_edges(batch: EdgeBatch<K>) -> HypernetResult<Self> {
        let mut h = Self::new();
        h.add_edges_from(batch, AttrMap::new())?;
        Ok(h)
    }

    /// Create a hypergraph from member lists, with auto-assigned edge IDs.
    pub fn from_edge_list<I, M>(edges: I) -> HypernetResult<Self>
    where
        I: IntoIterator<Item = M>,
        M: IntoIterator<Item = K>,
    {
        Self::from_edges(EdgeBatch::members(edges))
    }

    /// Create a hypergraph from `(edge ID, members)` pairs.
    pub fn from_edge_dict<I, M>(edges: I) -> HypernetResult<Self>
    where
        I: IntoIterator<Item = (K, M)>,
        M: IntoIterator<Item = K>,
    {
        Self::from_edges(EdgeBatch::dict(edges))
    }

    /// Get the configuration.
    pub fn config(&self) -> &HypergraphConfig {
        &self.config
    }

    /// Get the incidence tables.
    pub fn incidence(&self) -> &IncidenceStore<K> {
        &self.incidence
    }

    // ---------------------------------------------------------------------
    // Queries
    // ---------------------------------------------------------------------

    /// Number of nodes.
    pub fn num_nodes(&self) -> usize {
        self.incidence.nodes().len()
    }

    /// Number of edges.
    pub fn num_edges(&self) -> usize {
        self.incidence.edges().len()
    }

    /// Check if `n` is a node.
    pub fn contains(&self, n: &K) -> bool {
        self.incidence.nodes().contains(n)
    }

    /// Alias of [`Hypergraph::contains`].
    pub fn has_node(&self, n: &K) -> bool {
        self.contains(n)
    }

    /// Check if `e` is an edge ID.
    pub fn contains_edge(&self, e: &K) -> bool {
        self.incidence.edges().contains(e)
    }

    /// Node IDs in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &K> {
        self.incidence.nodes().keys()
    }

    /// Edge IDs in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = &K> {
        self.incidence.edges().keys()
    }

    /// Member nodes of edge `e`, in order and with duplicates.
    pub fn members(&self, e: &K) -> HypernetResult<&[K]> {
        self.incidence.members(e)
    }

    /// Edges containing node `n`, one entry per occurrence.
    pub fn memberships(&self, n: &K) -> HypernetResult<&[K]> {
        self.incidence.memberships(n)
    }

    /// Copy of the edge table: edge ID → members.
    pub fn edge_dict(&self) -> IndexMap<K, Vec<K>> {
        self.incidence
            .edges()
            .iter()
            .map(|(e, members)| (e.clone(), members.clone()))
            .collect()
    }

    // ---------------------------------------------------------------------
    // Attributes
    // ---------------------------------------------------------------------

    /// Get a hypergraph attribute.
    pub fn attr(&self, key: &str) -> HypernetResult<&Value> {
        lookup(self.attributes.hypergraph(), key)
    }

    /// Set a hypergraph attribute, returning the previous value.
    pub fn set_attr(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.attributes
            .hypergraph_mut()
            .insert(key.into(), value.into())
    }

    /// Hypergraph attributes.
    pub fn attrs(&self) -> &AttrMap {
        self.attributes.hypergraph()
    }

    /// Mutable hypergraph attributes.
    pub fn attrs_mut(&mut self) -> &mut AttrMap {
        self.attributes.hypergraph_mut()
    }

    pub fn node_attrs(&self, n: &K) -> HypernetResult<&AttrMap> {
        self.attributes.node(n)
    }

    pub fn node_attrs_mut(&mut self, n: &K) -> HypernetResult<&mut AttrMap> {
        self.attributes.node_mut(n)
    }

    /// Get one attribute of node `n`.
    pub fn node_attr(&self, n: &K, key: &str) -> HypernetResult<&Value> {
        lookup(self.node_attrs(n)?, key)
    }

    /// Set one attribute of node `n`.
    pub fn set_node_attr(
        &mut self,
        n: &K,
        key: impl Into<String>,
        value: impl Into<Value>,
    ) -> HypernetResult<()> {
        self.node_attrs_mut(n)?.insert(key.into(), value.into());
        Ok(())
    }

    pub fn edge_attrs(&self, e: &K) -> HypernetResult<&AttrMap> {
        self.attributes.edge(e)
    }

    pub fn edge_attrs_mut(&mut self, e: &K) -> HypernetResult<&mut AttrMap> {
        self.attributes.edge_mut(e)
    }

    /// Get one attribute of edge `e`.
    pub fn edge_attr(&self, e: &K, key: &str) -> HypernetResult<&Value> {
        lookup(self.edge_attrs(e)?, key)
    }

    /// Set one attribute of edge `e`.
    pub fn set_edge_attr(
        &mut self,
        e: &K,
        key: impl Into<String>,
        value: impl Into<Value>,
    ) -> HypernetResult<()> {
        self.edge_attrs_mut(e)?.insert(key.into(), value.into());
        Ok(())
    }

    /// Merge attributes into several nodes.
    ///
    /// Every ID is checked first; an unknown ID fails with `NotFound` and
    /// nothing is updated.
    pub fn set_node_attributes<I>(&mut self, values: I) -> HypernetResult<()>
    where
        I: IntoIterator<Item = (K, AttrMap)>,
    {
        let values: Vec<(K, AttrMap)> = values.into_iter().collect();
        for (n, _) in &values {
            self.node_attrs(n)?;
        }
        for (n, attrs) in values {
            self.node_attrs_mut(&n)?.extend(attrs);
        }
        Ok(())
    }

    /// Merge attributes into several edges, with the same checks as
    /// [`Hypergraph::set_node_attributes`].
    pub fn set_edge_attributes<I>(&mut self, values: I) -> HypernetResult<()>
    where
        I: IntoIterator<Item = (K, AttrMap)>,
    {
        let values: Vec<(K, AttrMap)> = values.into_iter().collect();
        for (e, _) in &values {
            self.edge_attrs(e)?;
        }
        for (e, attrs) in values {
            self.edge_attrs_mut(&e)?.extend(attrs);
        }
        Ok(())
    }

    // ---------------------------------------------------------------------
    // Nodes
    // ---------------------------------------------------------------------

    /// Add node `n`, or merge `attrs` into it if it already exists.
    pub fn add_node<I, S, V>(&mut self, n: K, attrs: I) -> HypernetResult<()>
    where
        I: IntoIterator<Item = (S, V)>,
        S: Into<String>,
        V: Into<Value>,
    {
        self.incidence.insert_node(n.clone())?;
        self.attributes.merge_node(n, attr_map(attrs))
    }

    /// Add several nodes sharing the same attributes.
    pub fn add_nodes_from<I>(&mut self, ids: I, attrs: AttrMap) -> HypernetResult<()>
    where
        I: IntoIterator<Item = K>,
    {
        let ids: Vec<K> = ids.into_iter().collect();
        for n in &ids {
            check_key(n)?;
        }
        for n in ids {
            self.add_node(n, attrs.clone())?;
        }
        Ok(())
    }

    /// Add several nodes with per-node attributes.
    ///
    /// Per-node attributes override the shared `attrs`.
    pub fn add_nodes_with_attrs_from<I>(&mut self, items: I, attrs: AttrMap) -> HypernetResult<()>
    where
        I: IntoIterator<Item = (K, AttrMap)>,
    {
        let items: Vec<(K, AttrMap)> = items.into_iter().collect();
        for (n, _) in &items {
            check_key(n)?;
        }
        for (n, own) in items {
            let mut merged = attrs.clone();
            merged.extend(own);
            self.add_node(n, merged)?;
        }
        Ok(())
    }

    /// Remove node `n` from the hypergraph and from every edge containing it.
    ///
    /// Edges left empty are removed with their attributes.
    pub fn remove_node(&mut self, n: &K) -> HypernetResult<()> {
        let emptied = self.incidence.remove_node(n)?;
        for e in &emptied {
            debug!("Removing edge {e:?}: left empty after removing node {n:?}");
            self.attributes.remove_edge(e)?;
        }
        self.attributes.remove_node(n)?;
        Ok(())
    }

    /// Remove several nodes, skipping IDs that are not in the hypergraph.
    ///
    /// Returns the number of nodes removed.
    pub fn remove_nodes_from<I>(&mut self, ids: I) -> HypernetResult<usize>
    where
        I: IntoIterator<Item = K>,
    {
        let mut removed = 0;
        for n in ids {
            if !self.contains(&n) {
                if self.config.warn_on_missing {
                    warn!("Node {n:?} not in the hypergraph, skipping");
                } else {
                    debug!("Node {n:?} not in the hypergraph, skipping");
                }
                continue;
            }
            self.remove_node(&n)?;
            removed += 1;
        }
        Ok(removed)
    }

    // ---------------------------------------------------------------------
    // Edges
    // ---------------------------------------------------------------------

    /// Add an edge over `members`, returning its ID.
    ///
    /// Missing member nodes are created. Without `id` the next unused
    /// numeric ID is assigned. An existing edge with the same ID is replaced.
    ///
    /// # Errors
    /// `EmptyEdge` if `members` is empty, `InvalidKey` if a member or `id`
    /// is null.
    pub fn add_edge<I>(&mut self, members: I, id: Option<K>, attrs: AttrMap) -> HypernetResult<K>
    where
        I: IntoIterator<Item = K>,
    {
        let members: Vec<K> = members.into_iter().collect();
        check_entry(id.as_ref(), &members)?;
        self.insert_edge(id, members, attrs)
    }

    /// Start building an edge over `members`.
    pub fn new_edge<I>(&mut self, members: I) -> EdgeBuilder<'_, K>
    where
        I: IntoIterator<Item = K>,
    {
        EdgeBuilder {
            hypergraph: self,
            members: members.into_iter().collect(),
            id: None,
            attrs: AttrMap::new(),
        }
    }

    /// Add a batch of edges, returning their IDs in batch order.
    ///
    /// `attrs` apply to every edge; per-edge attributes override them. The
    /// whole batch is checked before the first edge is added.
    pub fn add_edges_from(
        &mut self,
        batch: EdgeBatch<K>,
        attrs: AttrMap,
    ) -> HypernetResult<Vec<K>> {
        let entries = batch.into_entries();
        for (id, members, _) in &entries {
            check_entry(id.as_ref(), members)?;
        }

        let mut ids = Vec::with_capacity(entries.len());
        for (id, members, own) in entries {
            let mut merged = attrs.clone();
            merged.extend(own);
            ids.push(self.insert_edge(id, members, merged)?);
        }
        Ok(ids)
    }

    /// Add edges each carrying a weight attribute.
    ///
    /// The weight is stored under `weight`, or under the configured weight
    /// key when `weight` is `None`.
    pub fn add_weighted_edges_from<I, V>(
        &mut self,
        ebunch: I,
        weight: Option<&str>,
        attrs: AttrMap,
    ) -> HypernetResult<Vec<K>>
    where
        I: IntoIterator<Item = (Vec<K>, V)>,
        V: Into<Value>,
    {
        let key = weight.unwrap_or(&self.config.weight_key).to_string();
        let edges = ebunch
            .into_iter()
            .map(|(members, w)| (members, attr_map([(key.clone(), w)])))
            .collect();
        self.add_edges_from(EdgeBatch::WithAttrs(edges), attrs)
    }

    /// Add `node` to `edge`, creating either one if it does not exist.
    pub fn add_node_to_edge(&mut self, edge: K, node: K) -> HypernetResult<()> {
        check_key(&edge)?;
        check_key(&node)?;
        if self.incidence.insert_node(node.clone())? {
            self.attributes.merge_node(node.clone(), AttrMap::new())?;
        }
        if self.incidence.insert_empty_edge(edge.clone())? {
            self.attributes.touch_edge(edge.clone())?;
        }
        self.incidence.link(&edge, &node)
    }

    /// Remove edge `e` and its attributes.
    pub fn remove_edge(&mut self, e: &K) -> HypernetResult<()> {
        self.incidence.remove_edge(e)?;
        self.attributes.remove_edge(e)?;
        Ok(())
    }

    /// Remove several edges.
    ///
    /// Unlike [`Hypergraph::remove_nodes_from`], an unknown or repeated ID
    /// fails with `NotFound` and nothing is removed.
    pub fn remove_edges_from<I>(&mut self, ids: I) -> HypernetResult<()>
    where
        I: IntoIterator<Item = K>,
    {
        let ids: Vec<K> = ids.into_iter().collect();
        let mut seen = HashSet::with_capacity(ids.len());
        for e in &ids {
            ensure!(
                self.contains_edge(e) && seen.insert(e),
                NotFound: "ID {e:?} not found"
            );
        }
        for e in &ids {
            self.remove_edge(e)?;
        }
        Ok(())
    }

    /// Remove one occurrence of `node` from `edge`.
    ///
    /// The edge is removed if it is left empty.
    pub fn remove_node_from_edge(&mut self, edge: &K, node: &K) -> HypernetResult<()> {
        if self.incidence.unlink(edge, node)? {
            debug!("Removing edge {edge:?}: its last member {node:?} was removed");
            self.remove_edge(edge)?;
        }
        Ok(())
    }

    /// Remove all nodes and edges, and the hypergraph attributes if
    /// `hypergraph_attr` is set.
    pub fn clear(&mut self, hypergraph_attr: bool) {
        self.incidence.clear();
        self.attributes.clear(hypergraph_attr);
    }

    /// Remove all edges, keeping the nodes.
    pub fn clear_edges(&mut self) {
        self.incidence.clear_edges();
        self.attributes.clear_edges();
    }

    /// Add nodes, then edges.
    pub fn update(
        &mut self,
        edges: Option<EdgeBatch<K>>,
        nodes: Option<Vec<K>>,
    ) -> HypernetResult<()> {
        if let Some(nodes) = nodes {
            self.add_nodes_from(nodes, AttrMap::new())?;
        }
        if let Some(edges) = edges {
            self.add_edges_from(edges, AttrMap::new())?;
        }
        Ok(())
    }

    /// Check that node and edge tables agree, that no edge is empty, and that
    /// every entity has exactly one attribute map.
    pub fn validate(&self) -> HypernetResult<()> {
        self.incidence.validate()?;
        ensure!(
            self.attributes.node_count() == self.num_nodes(),
            InternalError: "{} node attribute maps for {} nodes",
            self.attributes.node_count(),
            self.num_nodes()
        );
        ensure!(
            self.attributes.edge_count() == self.num_edges(),
            InternalError: "{} edge attribute maps for {} edges",
            self.attributes.edge_count(),
            self.num_edges()
        );
        for n in self.nodes() {
            self.attributes.node(n)?;
        }
        for e in self.edges() {
            self.attributes.edge(e)?;
        }
        Ok(())
    }

    // ---------------------------------------------------------------------
    // Internals
    // ---------------------------------------------------------------------

    /// Next allocator value not already used as an edge ID.
    fn next_edge_id(&mut self) -> HypernetResult<K> {
        loop {
            let id = K::from_uid(self.allocator.next_uid()?)?;
            if !self.contains_edge(&id) {
                return Ok(id);
            }
        }
    }

    /// Insert a pre-checked edge, replacing any edge with the same ID.
    ///
    /// A replaced edge keeps its position in the edge table.
    pub(crate) fn insert_edge(
        &mut self,
        id: Option<K>,
        members: Vec<K>,
        attrs: AttrMap,
    ) -> HypernetResult<K> {
        let id = match id {
            Some(id) => id,
            None => self.next_edge_id()?,
        };
        for n in &members {
            if self.incidence.insert_node(n.clone())? {
                self.attributes.merge_node(n.clone(), AttrMap::new())?;
            }
        }
        if self.contains_edge(&id) {
            debug!("Replacing existing edge {id:?}");
            self.incidence.replace_edge(&id, members)?;
        } else {
            self.incidence.insert_edge(id.clone(), members)?;
        }
        self.attributes.set_edge(id.clone(), attrs)?;
        Ok(id)
    }

    pub(crate) fn attributes(&self) -> &AttributeStore<K> {
        &self.attributes
    }

    pub(crate) fn attributes_mut(&mut self) -> &mut AttributeStore<K> {
        &mut self.attributes
    }
}

impl<K: HyperKey> Default for Hypergraph<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: HyperKey> fmt::Display for Hypergraph<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.attrs().get("name") {
            Some(name) => write!(f, "Hypergraph named {name}")?,
            None => write!(f, "Unnamed Hypergraph")?,
        }
        write!(
            f,
            " with {} nodes and {} hyperedges",
            self.num_nodes(),
            self.num_edges()
        )
    }
}

/// Reject empty member lists and null IDs before anything is mutated.
fn check_entry<K: HyperKey>(id: Option<&K>, members: &[K]) -> HypernetResult<()> {
    ensure!(!members.is_empty(), EmptyEdge: "Cannot add an empty edge");
    if let Some(id) = id {
        check_key(id)?;
    }
    for n in members {
        check_key(n)?;
    }
    Ok(())
}

/// Builder for adding an edge with a fluent API.
pub struct EdgeBuilder<'a, K: HyperKey> {
    hypergraph: &'a mut Hypergraph<K>,
    members: Vec<K>,
    id: Option<K>,
    attrs: AttrMap,
}

impl<K: HyperKey> EdgeBuilder<'_, K> {
    /// Use a specific edge ID instead of an auto-assigned one.
    #[must_use]
    pub fn with_id(mut self, id: K) -> Self {
        self.id = Some(id);
        self
    }

    /// Set one edge attribute.
    #[must_use]
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }

    /// Set several edge attributes.
    #[must_use]
    pub fn with_attrs(
        mut self,
        attrs: impl IntoIterator<Item = (impl Into<String>, impl Into<Value>)>,
    ) -> Self {
        for (key, value) in attrs {
            self.attrs.insert(key.into(), value.into());
        }
        self
    }

    /// Add the edge to the hypergraph, returning its ID.
    pub fn build(self) -> HypernetResult<K> {
        self.hypergraph.add_edge(self.members, self.id, self.attrs)
    }
}
