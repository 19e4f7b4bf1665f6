//! Property-based tests for hypernet-io.
//!
//! Writing a hypergraph as JSON and reading it back with matching ID casts
//! must reproduce its nodes, edges, members, and attributes.
