//! Hypergraph JSON documents.
//!
//! Layout:
//!
//! ```json
//! {
//!   "hypergraph-data": {"name": "example"},
//!   "node-data": {"1": {"color": "red"}, "2": {}},
//!   "edge-data": {"0": {"weight": 2.0}},
//!   "edge-dict": {"0": ["1", "2"]}
//! }
//! ```
//!
//! IDs are written as strings. On read they stay strings unless the caller
//! supplies casts for node and edge IDs.

use std::convert::Infallible;
use std::fmt;
use std::fs;
use std::path::Path;

use common_config::IoConfig;
use common_error::{HypernetError, HypernetResult};
use hypernet_core::{AttrMap, HyperKey, Hypergraph, Id};
use indexmap::IndexMap;
use log::debug;
use serde::{Deserialize, Serialize};

/// On-disk form of a hypergraph.
///
/// Every section is optional when deserializing so that a missing section
/// is reported as a `FormatError` naming it, rather than a parse error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct HypergraphDocument {
    pub hypergraph_data: Option<AttrMap>,
    pub node_data: Option<IndexMap<String, AttrMap>>,
    pub edge_data: Option<IndexMap<String, AttrMap>>,
    pub edge_dict: Option<IndexMap<String, Vec<Id>>>,
}

impl HypergraphDocument {
    /// Capture a hypergraph, stringifying every ID.
    pub fn from_hypergraph<K>(h: &Hypergraph<K>) -> HypernetResult<Self>
    where
        K: HyperKey + fmt::Display,
    {
        let mut node_data = IndexMap::with_capacity(h.num_nodes());
        for n in h.nodes() {
            node_data.insert(n.to_string(), h.node_attrs(n)?.clone());
        }

        let mut edge_data = IndexMap::with_capacity(h.num_edges());
        let mut edge_dict = IndexMap::with_capacity(h.num_edges());
        for e in h.edges() {
            edge_data.insert(e.to_string(), h.edge_attrs(e)?.clone());
            let members = h
                .members(e)?
                .iter()
                .map(|n| Id::from(n.to_string()))
                .collect();
            edge_dict.insert(e.to_string(), members);
        }

        Ok(Self {
            hypergraph_data: Some(h.attrs().clone()),
            node_data: Some(node_data),
            edge_data: Some(edge_data),
            edge_dict: Some(edge_dict),
        })
    }

    /// Build a hypergraph, casting node and edge IDs.
    ///
    /// Nodes are added first (with their attributes), then edges, then edge
    /// attributes.
    ///
    /// # Errors
    /// `FormatError` if a section is missing, `TypeConversion` if a cast
    /// fails, and the usual edge errors (`EmptyEdge`, `NotFound`) for
    /// inconsistent sections.
    pub fn into_hypergraph_with<K, N, E, NE, EE>(
        self,
        node_cast: N,
        edge_cast: E,
    ) -> HypernetResult<Hypergraph<K>>
    where
        K: HyperKey,
        N: Fn(&str) -> Result<K, NE>,
        E: Fn(&str) -> Result<K, EE>,
        NE: fmt::Display,
        EE: fmt::Display,
    {
        let hypergraph_data = section(self.hypergraph_data, "hypergraph data attributes")?;
        let node_data = section(self.node_data, "node attributes")?;
        let edge_dict = section(self.edge_dict, "edge dictionary")?;
        let edge_data = section(self.edge_data, "edge attributes")?;

        let cast_node = |id: &str| {
            node_cast(id).map_err(|err| {
                HypernetError::type_conversion(format!("Failed to convert node ID {id:?}: {err}"))
            })
        };
        let cast_edge = |id: &str| {
            edge_cast(id).map_err(|err| {
                HypernetError::type_conversion(format!("Failed to convert edge ID {id:?}: {err}"))
            })
        };

        let mut h = Hypergraph::new();
        *h.attrs_mut() = hypergraph_data;

        for (id, attrs) in node_data {
            h.add_node(cast_node(&id)?, attrs)?;
        }

        for (id, members) in edge_dict {
            let members = members
                .iter()
                .map(|n| cast_node(&n.to_string()))
                .collect::<HypernetResult<Vec<K>>>()?;
            h.add_edge(members, Some(cast_edge(&id)?), AttrMap::new())?;
        }

        let edge_attrs = edge_data
            .into_iter()
            .map(|(id, attrs)| Ok((cast_edge(&id)?, attrs)))
            .collect::<HypernetResult<Vec<_>>>()?;
        h.set_edge_attributes(edge_attrs)?;

        debug!(
            "Loaded hypergraph with {} nodes and {} edges",
            h.num_nodes(),
            h.num_edges()
        );
        Ok(h)
    }
}

fn section<T>(value: Option<T>, name: &str) -> HypernetResult<T> {
    value.ok_or_else(|| HypernetError::format(format!("Failed to get {name}: section is missing")))
}

/// Keep an ID as a string.
pub fn string_id(id: &str) -> Result<String, Infallible> {
    Ok(id.to_string())
}

/// Read an ID as an integer when it parses as one, else as a string.
pub fn parse_id(id: &str) -> Result<Id, Infallible> {
    Ok(crate::batch::id_from_str(id))
}

/// Serialize a hypergraph to a JSON string.
pub fn to_json<K>(h: &Hypergraph<K>, config: &IoConfig) -> HypernetResult<String>
where
    K: HyperKey + fmt::Display,
{
    let doc = HypergraphDocument::from_hypergraph(h)?;
    let text = if config.pretty {
        serde_json::to_string_pretty(&doc)?
    } else {
        serde_json::to_string(&doc)?
    };
    Ok(text)
}

/// Write a hypergraph to a JSON file.
pub fn write_json<K, P>(h: &Hypergraph<K>, path: P, config: &IoConfig) -> HypernetResult<()>
where
    K: HyperKey + fmt::Display,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    fs::write(path, to_json(h, config)?)?;
    debug!("Wrote {h} to {}", path.display());
    Ok(())
}

/// Parse a hypergraph from a JSON string, keeping IDs as strings.
pub fn from_json(text: &str) -> HypernetResult<Hypergraph<String>> {
    from_json_with(text, string_id, string_id)
}

/// Parse a hypergraph from a JSON string, casting node and edge IDs.
pub fn from_json_with<K, N, E, NE, EE>(
    text: &str,
    node_cast: N,
    edge_cast: E,
) -> HypernetResult<Hypergraph<K>>
where
    K: HyperKey,
    N: Fn(&str) -> Result<K, NE>,
    E: Fn(&str) -> Result<K, EE>,
    NE: fmt::Display,
    EE: fmt::Display,
{
    let doc: HypergraphDocument = serde_json::from_str(text)?;
    doc.into_hypergraph_with(node_cast, edge_cast)
}

/// Read a hypergraph from a JSON file, keeping IDs as strings.
pub fn read_json<P: AsRef<Path>>(path: P) -> HypernetResult<Hypergraph<String>> {
    read_json_with(path, string_id, string_id)
}

/// Read a hypergraph from a JSON file, casting node and edge IDs.
pub fn read_json_with<K, P, N, E, NE, EE>(
    path: P,
    node_cast: N,
    edge_cast: E,
) -> HypernetResult<Hypergraph<K>>
where
    K: HyperKey,
    P: AsRef<Path>,
    N: Fn(&str) -> Result<K, NE>,
    E: Fn(&str) -> Result<K, EE>,
    NE: fmt::Display,
    EE: fmt::Display,
{
    let text = fs::read_to_string(path)?;
    from_json_with(&text, node_cast, edge_cast)
}
