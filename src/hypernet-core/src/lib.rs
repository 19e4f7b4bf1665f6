//! Core data model for hypernet.
//!
//! This crate provides the in-memory hypergraph and its building blocks:
//! - `Value` for dynamically typed attribute values
//! - `HyperKey` and `Id` for node and edge identifiers
//! - `Hypergraph` with its incidence and attribute stores
//! - `DegreeView` and `EdgeSizeView` for degree and size snapshots

pub mod hypergraph;
pub mod testing;
pub mod types;

mod proptest_utils;

// Re-export commonly used types
pub use hypergraph::{
    AttrMap, AttributeStore, DegreeView, EdgeBatch, EdgeBuilder, EdgeSizeView, HyperKey,
    Hypergraph, Id, IdAllocator, IncidenceStore, ProtectedMap, attr_map,
};
pub use types::Value;
