//! Hypergraph Demo - End-to-end example
//!
//! This binary walks through the hypernet model:
//! 1. Build a hypergraph (or load one from a JSON document)
//! 2. Inspect members, memberships, and edge orders
//! 3. Compute degrees, neighbors, and the dual
//! 4. Optionally write the hypergraph back out as JSON
//!
//! # Usage
//!
//! ```bash
//! cargo run --package hypernet-playground --bin hypergraph-demo
//! cargo run --package hypernet-playground --bin hypergraph-demo -- --json h.json --verbose
//! ```

use std::path::PathBuf;

use clap::Parser;

use common_config::IoConfig;
use common_error::HypernetResult;
use hypernet_core::{Hypergraph, Id};
use hypernet_io::{parse_id, read_json_with, write_json};

use hypernet_playground::{
    create_collaboration_network, format_edges, format_order_distribution, print_divider,
    print_header,
};

/// Hypergraph Demo CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "hypergraph-demo")]
#[command(about = "Walk through the hypernet hypergraph model")]
struct Args {
    /// Verbose output
    #[arg(short, long, default_value_t = false)]
    verbose: bool,

    /// Load the hypergraph from a JSON document instead of the built-in sample
    #[arg(long)]
    json: Option<PathBuf>,

    /// Write the hypergraph to this path as JSON
    #[arg(long)]
    write: Option<PathBuf>,

    /// Maximum number of edges to list
    #[arg(long, default_value_t = 20)]
    limit: usize,
}

fn main() -> HypernetResult<()> {
    let args = Args::parse();

    print_header("Hypernet Hypergraph Demo");

    // Step 1: Build or load
    print_header("Step 1: Build the Hypergraph");
    let h: Hypergraph<Id> = match &args.json {
        Some(path) => {
            println!("Loading {}", path.display());
            read_json_with(path, parse_id, parse_id)?
        }
        None => create_collaboration_network()?,
    };
    println!("{h}");

    if args.verbose {
        print_divider();
        println!("Nodes:");
        for n in h.nodes() {
            println!("  {n}: {:?}", h.node_attrs(n)?);
        }
    }

    // Step 2: Structure
    print_header("Step 2: Edges and Orders");
    print!("{}", format_edges(&h, args.limit));
    print_divider();
    println!("Order distribution:");
    print!("{}", format_order_distribution(&h));
    match h.max_edge_order() {
        Some(max) => {
            println!("Max edge order: {max}");
            for order in 0..=max {
                let edges = h.edges_of_order(order);
                if !edges.is_empty() {
                    println!("  order {order}: {edges:?}");
                }
            }
        }
        None => println!("Max edge order: (no edges)"),
    }
    match h.is_uniform() {
        Some(order) => println!("Uniform of order {order}"),
        None => println!("Not uniform"),
    }
    println!("Singleton edges: {:?}", h.singleton_edges());
    println!("Isolated nodes: {:?}", h.isolates(false));

    // Step 3: Degrees and neighborhoods
    print_header("Step 3: Degrees and Neighbors");
    let degrees = h.degree(None, None, None)?;
    for (n, d) in &degrees {
        let neighbors = h.neighbors(n)?;
        println!("  {n:10} degree {d:3}  neighbors {neighbors:?}");
    }

    // Step 4: Dual
    print_header("Step 4: Dual");
    let dual = h.dual()?;
    println!("{dual}");
    if args.verbose {
        print!("{}", format_edges(&dual, args.limit));
    }

    // Step 5: Write
    if let Some(path) = &args.write {
        print_header("Step 5: Write JSON");
        write_json(&h, path, &IoConfig { pretty: true })?;
        println!("Wrote {}", path.display());
    }

    print_header("Demo Complete!");
    Ok(())
}
