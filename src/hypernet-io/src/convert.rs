//! Conversions from bipartite edge lists and incidence matrices.

use common_error::{HypernetError, HypernetResult};
use hypernet_core::{EdgeBatch, HyperKey, Hypergraph};
use indexmap::IndexMap;
use ndarray::ArrayView2;

/// Group `(node, edge)` rows into an edge dictionary.
///
/// Edges appear in the order their first row appears; members keep row order.
pub fn bipartite_to_edge_dict<K, I>(rows: I) -> IndexMap<K, Vec<K>>
where
    K: HyperKey,
    I: IntoIterator<Item = (K, K)>,
{
    let mut edges: IndexMap<K, Vec<K>> = IndexMap::new();
    for (node, edge) in rows {
        edges.entry(edge).or_default().push(node);
    }
    edges
}

/// Build a hypergraph from `(node, edge)` rows.
pub fn from_bipartite<K, I>(rows: I) -> HypernetResult<Hypergraph<K>>
where
    K: HyperKey,
    I: IntoIterator<Item = (K, K)>,
{
    Hypergraph::from_edges(EdgeBatch::Dict(bipartite_to_edge_dict(rows)))
}

/// Read an incidence matrix (rows are nodes, columns are edges) into an
/// edge dictionary keyed by column index.
///
/// # Errors
/// `ValueError` for any entry other than 0 or 1, `InvalidParameter` when an
/// index does not fit in the key type.
pub fn incidence_to_edge_dict<K, A>(matrix: ArrayView2<'_, A>) -> HypernetResult<IndexMap<K, Vec<K>>>
where
    K: HyperKey,
    A: Copy + Into<f64>,
{
    let mut edges = IndexMap::with_capacity(matrix.ncols());
    for (col, column) in matrix.columns().into_iter().enumerate() {
        let mut members = Vec::new();
        for (row, &entry) in column.iter().enumerate() {
            let value: f64 = entry.into();
            if value == 1.0 {
                members.push(K::from_uid(row as u64)?);
            } else if value != 0.0 {
                return Err(HypernetError::value_error(format!(
                    "incidence entry ({row}, {col}) must be 0 or 1, got {value}"
                )));
            }
        }
        edges.insert(K::from_uid(col as u64)?, members);
    }
    Ok(edges)
}

/// Build a hypergraph from an incidence matrix.
///
/// Every row becomes a node, including rows with no incidences.
///
/// # Errors
/// `ValueError` for entries other than 0 or 1, `EmptyEdge` for an all-zero
/// column. Nothing is built when either check fails.
pub fn from_incidence_matrix<K, A>(matrix: ArrayView2<'_, A>) -> HypernetResult<Hypergraph<K>>
where
    K: HyperKey,
    A: Copy + Into<f64>,
{
    let edges = incidence_to_edge_dict::<K, A>(matrix)?;
    if let Some((e, _)) = edges.iter().find(|(_, members)| members.is_empty()) {
        return Err(HypernetError::empty_edge(format!(
            "column {e:?} of the incidence matrix has no members"
        )));
    }

    let nodes = (0..matrix.nrows() as u64)
        .map(K::from_uid)
        .collect::<HypernetResult<Vec<K>>>()?;

    let mut h = Hypergraph::new();
    h.add_nodes_from(nodes, Default::default())?;
    h.add_edges_from(EdgeBatch::Dict(edges), Default::default())?;
    Ok(h)
}
