//! Hypergraph data model.
//!
//! This module provides the hypergraph entity and its building blocks:
//! - `ProtectedMap` for ID-keyed tables that reject null keys
//! - `IncidenceStore` for the dual node/edge incidence index
//! - `AttributeStore` for node, edge, and hypergraph attributes
//! - `Hypergraph` for the user-facing container
//! - `DegreeView` and `EdgeSizeView` for degree and size snapshots

mod batch;
mod container;
mod derived;
mod identifiers;
mod incidence;
mod properties;
mod protected;
mod views;

pub use batch::EdgeBatch;
pub use container::{EdgeBuilder, Hypergraph};
pub use identifiers::{HyperKey, Id, IdAllocator};
pub use incidence::IncidenceStore;
pub use properties::{AttrMap, AttributeStore, attr_map};
pub use protected::ProtectedMap;
pub use views::{DegreeView, EdgeSizeView};
