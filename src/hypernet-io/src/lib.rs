//! Format adapters for hypernet.
//!
//! - `json`: the hypergraph JSON document (read and write)
//! - `batch`: edge batches from dynamically shaped JSON
//! - `convert`: bipartite edge lists and incidence matrices

pub mod batch;
pub mod convert;
pub mod json;

mod proptest_utils;

pub use batch::parse_edge_batch;
pub use convert::{
    bipartite_to_edge_dict, from_bipartite, from_incidence_matrix, incidence_to_edge_dict,
};
pub use json::{
    HypergraphDocument, from_json, from_json_with, parse_id, read_json, read_json_with,
    string_id, to_json, write_json,
};
