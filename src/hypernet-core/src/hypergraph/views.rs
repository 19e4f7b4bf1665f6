//! Degree and edge-size views.
//!
//! Both views are snapshots: values are computed from the incidence tables
//! when the view is created and do not follow later mutations.

use common_error::{HypernetError, HypernetResult};
use indexmap::IndexMap;
use indexmap::map::Iter;

use super::{AttrMap, HyperKey, Hypergraph};

/// Weight contributed by one incidence: the numeric value of `key` in
/// `attrs`, or 1 if no key is given or the attribute is unset.
fn weight_of(attrs: &AttrMap, key: Option<&str>) -> HypernetResult<f64> {
    let Some(key) = key else {
        return Ok(1.0);
    };
    match attrs.get(key) {
        None => Ok(1.0),
        Some(value) => value.as_float64().ok_or_else(|| {
            HypernetError::value_error(format!(
                "weight attribute '{key}' must be numeric, got {}",
                value.type_name()
            ))
        }),
    }
}

macro_rules! impl_snapshot_view {
    ($view:ident) => {
        impl<K: HyperKey> $view<K> {
            /// Value for `id`.
            pub fn get(&self, id: &K) -> HypernetResult<f64> {
                self.values
                    .get(id)
                    .copied()
                    .ok_or_else(|| HypernetError::not_found(format!("ID {id:?} not found")))
            }

            /// Check if `id` is covered by the view.
            pub fn contains(&self, id: &K) -> bool {
                self.values.contains_key(id)
            }

            /// Number of entries.
            pub fn len(&self) -> usize {
                self.values.len()
            }

            /// Check if the view is empty.
            pub fn is_empty(&self) -> bool {
                self.values.is_empty()
            }

            /// Iterate over `(id, value)` pairs in insertion order.
            pub fn iter(&self) -> Iter<'_, K, f64> {
                self.values.iter()
            }

            /// Consume the view, returning the underlying map.
            pub fn into_map(self) -> IndexMap<K, f64> {
                self.values
            }
        }

        impl<'a, K: HyperKey> IntoIterator for &'a $view<K> {
            type Item = (&'a K, &'a f64);
            type IntoIter = Iter<'a, K, f64>;

            fn into_iter(self) -> Self::IntoIter {
                self.values.iter()
            }
        }
    };
}

/// Node degrees: the number of incident edges, or the sum of their weights.
#[derive(Debug, Clone, PartialEq)]
pub struct DegreeView<K: HyperKey> {
    values: IndexMap<K, f64>,
}

impl<K: HyperKey> DegreeView<K> {
    /// Compute degrees for `nbunch` (all nodes if `None`).
    ///
    /// With `order`, only edges of that order (size - 1) are counted. With
    /// `weight`, each incident edge contributes its `weight` attribute.
    pub(crate) fn new(
        h: &Hypergraph<K>,
        nbunch: Option<&[K]>,
        weight: Option<&str>,
        order: Option<usize>,
    ) -> HypernetResult<Self> {
        let ids: Vec<&K> = match nbunch {
            Some(ids) => ids.iter().collect(),
            None => h.nodes().collect(),
        };

        let mut values = IndexMap::with_capacity(ids.len());
        for n in ids {
            let mut degree = 0.0;
            for e in h.memberships(n)? {
                if let Some(d) = order {
                    if h.members(e)?.len().checked_sub(1) != Some(d) {
                        continue;
                    }
                }
                degree += weight_of(h.edge_attrs(e)?, weight)?;
            }
            values.insert(n.clone(), degree);
        }
        Ok(Self { values })
    }
}

/// Edge sizes: the number of members, or the sum of their weights.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeSizeView<K: HyperKey> {
    values: IndexMap<K, f64>,
}

impl<K: HyperKey> EdgeSizeView<K> {
    /// Compute sizes for `ebunch` (all edges if `None`).
    ///
    /// With `weight`, each member contributes its node `weight` attribute.
    pub(crate) fn new(
        h: &Hypergraph<K>,
        ebunch: Option<&[K]>,
        weight: Option<&str>,
    ) -> HypernetResult<Self> {
        let ids: Vec<&K> = match ebunch {
            Some(ids) => ids.iter().collect(),
            None => h.edges().collect(),
        };

        let mut values = IndexMap::with_capacity(ids.len());
        for e in ids {
            let mut size = 0.0;
            for n in h.members(e)? {
                size += weight_of(h.node_attrs(n)?, weight)?;
            }
            values.insert(e.clone(), size);
        }
        Ok(Self { values })
    }
}

impl_snapshot_view!(DegreeView);
impl_snapshot_view!(EdgeSizeView);
