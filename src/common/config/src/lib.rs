//! Configuration management for hypernet.
//!
//! Provides runtime configuration for hypergraph construction and for the
//! format adapters. Every field has a default, so partial documents in JSON,
//! TOML, or YAML deserialize cleanly.

use serde::{Deserialize, Serialize};

/// Global hypernet configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct HypernetConfig {
    /// Hypergraph configuration.
    pub hypergraph: HypergraphConfig,
    /// Format adapter configuration.
    pub io: IoConfig,
}

/// Per-instance hypergraph configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HypergraphConfig {
    /// First value handed out by the edge ID allocator.
    pub first_edge_uid: u64,
    /// Edge attribute written by `add_weighted_edges_from` when no key is given.
    pub weight_key: String,
    /// Log skipped IDs in `remove_nodes_from` at warn level (debug otherwise).
    pub warn_on_missing: bool,
}

impl Default for HypergraphConfig {
    fn default() -> Self {
        Self {
            first_edge_uid: 0,
            weight_key: "weight".to_string(),
            warn_on_missing: true,
        }
    }
}

impl HypergraphConfig {
    /// Set the first auto-assigned edge ID.
    #[must_use]
    pub fn with_first_edge_uid(mut self, uid: u64) -> Self {
        self.first_edge_uid = uid;
        self
    }

    /// Set the default weight attribute key.
    #[must_use]
    pub fn with_weight_key(mut self, key: impl Into<String>) -> Self {
        self.weight_key = key.into();
        self
    }
}

/// Format adapter configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IoConfig {
    /// Pretty-print JSON output.
    pub pretty: bool,
}
