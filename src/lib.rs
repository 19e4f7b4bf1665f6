//! Hypernet - in-memory hypergraph data model
//!
//! Hypernet stores nodes, hyperedges, and their incidence in both
//! directions, with attributes on nodes, edges, and the hypergraph itself.
//! Structural queries (degrees, neighbors, edge orders, the dual) are
//! derived from the incidence tables.

#![forbid(unsafe_code)]
#![allow(clippy::module_name_repetitions)]

// Re-export member crates
pub use common_config as config;
pub use common_error as error;
pub use hypernet_core as core;
pub use hypernet_io as io;

pub use hypernet_core::{Hypergraph, Id, Value};

/// Hypernet version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
