use clap::Parser;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use env_logger::Env;
use log::{info, warn};
use std::path::PathBuf;

use netopt::analysis::{compute_metrics, compute_mst, compute_shortest_paths, path_latency};
use netopt::codec;
use netopt::topology::TopologyStore;

/// Network topology design calculator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the topology JSON file to analyze
    #[arg(short, long)]
    topology: PathBuf,

    /// Compute the minimum-cost spanning topology
    #[arg(long)]
    mst: bool,

    /// Node id to compute shortest paths from
    #[arg(short, long)]
    source: Option<String>,

    /// Re-export the validated topology to this file
    #[arg(short, long)]
    export: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Parse command-line arguments
    let args = Args::parse();

    // Initialize logging with default filter level of "info"
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    info!("Loading topology from {:?}", args.topology);
    let document = codec::load_topology_file(&args.topology)
        .wrap_err_with(|| format!("Failed to load topology file {:?}", args.topology))?;

    let mut store = TopologyStore::new();
    codec::import_document(&mut store, document);

    let metrics = compute_metrics(store.connections());
    println!(
        "Topology: {} nodes, {} connections",
        store.nodes().len(),
        store.connections().len()
    );
    println!("Total cost: ${}", metrics.total_cost);
    println!("Average latency: {} ms", metrics.average_latency);

    if args.mst {
        let mst = compute_mst(store.nodes(), store.connections());
        if mst.is_empty() {
            println!("\nOptimal topology: none (need at least 2 nodes and 1 connection)");
        } else {
            let total: u64 = mst.iter().map(|c| u64::from(c.cost)).sum();
            println!("\nOptimal topology ({} links, total cost ${}):", mst.len(), total);
            for conn in &mst {
                println!(
                    "  {} -- {}  (${}, {} Mbps)",
                    conn.source, conn.target, conn.cost, conn.bandwidth
                );
            }
        }
    }

    if let Some(source) = &args.source {
        if store.node(source).is_none() {
            warn!("Source node '{}' is not in the topology; all destinations will be unreachable", source);
        }
        let paths = compute_shortest_paths(source, store.nodes(), store.connections());
        println!("\nShortest paths from {}:", source);

        // Stable output order for scripting
        let mut destinations: Vec<&String> = paths.keys().collect();
        destinations.sort();
        for dest in destinations {
            let path = &paths[dest];
            if path.is_empty() {
                println!("  {} -> {}: unreachable", source, dest);
            } else {
                let latency = path_latency(path, store.connections()).unwrap_or(f64::INFINITY);
                println!("  {} -> {}: {} ({:.2} ms)", source, dest, path.join(" -> "), latency);
            }
        }
    }

    if let Some(export_path) = &args.export {
        codec::save_topology_file(export_path, &store)
            .wrap_err_with(|| format!("Failed to export topology to {:?}", export_path))?;
        info!("Exported topology to {:?}", export_path);
    }

    Ok(())
}
