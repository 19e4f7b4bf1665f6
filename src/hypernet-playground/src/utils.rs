//! Formatting helpers for the playground.

use std::fmt::{Display, Write};

use hypernet_core::{HyperKey, Hypergraph};

/// Print a section header.
pub fn print_header(title: &str) {
    println!();
    println!("{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a divider line.
pub fn print_divider() {
    println!("{}", "-".repeat(60));
}

/// Format each edge as `id | order | members`, one per line.
///
/// Shows at most `limit` edges.
pub fn format_edges<K>(h: &Hypergraph<K>, limit: usize) -> String
where
    K: HyperKey + Display,
{
    let mut output = String::new();
    let _ = writeln!(output, "| {:12} | {:5} | members", "edge", "order");
    let _ = writeln!(output, "|{:-<14}|{:-<7}|{:-<30}", "", "", "");
    for e in h.edges().take(limit) {
        let members = h.members(e).unwrap_or_default();
        let joined = members
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        let order = members.len().saturating_sub(1);
        let _ = writeln!(output, "| {:12} | {order:<5} | {joined}", truncate(&e.to_string(), 12));
    }
    if h.num_edges() > limit {
        let _ = writeln!(output, "... ({} more edges)", h.num_edges() - limit);
    }
    output
}

/// Format the edge-order distribution as a bar chart.
pub fn format_order_distribution<K: HyperKey>(h: &Hypergraph<K>) -> String {
    let mut output = String::new();
    for (order, count) in h.order_distribution() {
        let _ = writeln!(output, "  order {order:2}: {:3} {}", count, "#".repeat(count));
    }
    output
}

/// Truncate a string to a maximum length.
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{head}...")
    }
}
