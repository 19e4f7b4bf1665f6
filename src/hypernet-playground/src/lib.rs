//! Hypernet Playground - Experiments and Examples
//!
//! This crate provides executable apps for experimenting with the hypernet
//! hypergraph model.
//!
//! # Available Binaries
//!
//! - **`hypergraph-demo`**: builds (or loads) a hypergraph and prints its
//!   structure: members, edge orders, degrees, and the dual
//!
//! # Usage
//!
//! ```bash
//! # Run the demo on the built-in collaboration network
//! cargo run --package hypernet-playground --bin hypergraph-demo
//!
//! # Run it on a JSON document and write the result back out
//! cargo run --package hypernet-playground --bin hypergraph-demo -- \
//!     --json input.json --write output.json
//! ```

pub mod data;
pub mod utils;

pub use data::{create_collaboration_network, create_sample_hypergraph};
pub use utils::{format_edges, format_order_distribution, print_divider, print_header};
