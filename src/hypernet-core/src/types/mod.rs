//! Attribute values for nodes, edges, and whole hypergraphs.
//!
//! Attributes are dynamically typed, so every attribute map stores `Value`s.

mod value;

pub use value::Value;
