//! # Netopt - Network topology design calculator
//!
//! This library models a network of server and client nodes connected by
//! weighted links, and derives three read-only views from that model:
//! aggregate cost/latency metrics, a minimum-cost spanning topology, and
//! per-destination shortest paths.
//!
//! ## Overview
//!
//! A topology is a set of nodes plus a set of undirected connections, each
//! carrying a monetary cost and a bandwidth in Mbps. The library answers
//! two design questions about such a topology: which subset of links
//! connects everything at minimum cost (Kruskal's algorithm), and what is
//! the lowest-latency route between any two nodes (Dijkstra's algorithm
//! over inverse-bandwidth weights).
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - `topology`: canonical node/connection store and its mutation rules
//! - `analysis`: derived views (metrics, spanning topology, shortest paths)
//! - `codec`: JSON interchange import/export with structural validation
//!
//! Data flows one way: the store feeds the analysis functions, which never
//! mutate it. The codec is the only component that bulk-replaces store
//! contents, and only after the imported document validates.
//!
//! ## Example Usage
//!
//! ```rust
//! use netopt::topology::{NodeKind, TopologyStore};
//! use netopt::analysis::{compute_metrics, compute_mst};
//!
//! let mut store = TopologyStore::new();
//! let hub = store.add_node_at(NodeKind::Server, 250.0, 200.0);
//! let edge = store.add_node_at(NodeKind::Client, 400.0, 300.0);
//! store.add_connection(&hub.id, &edge.id, 100, 100)?;
//!
//! let metrics = compute_metrics(store.connections());
//! assert_eq!(metrics.total_cost, 100);
//!
//! let mst = compute_mst(store.nodes(), store.connections());
//! assert_eq!(mst.len(), 1);
//! # Ok::<(), netopt::topology::TopologyError>(())
//! ```
//!
//! ## Error Handling
//!
//! Store mutations return `Result<_, TopologyError>` and codec operations
//! return `Result<_, CodecError>`; a failed operation leaves the store
//! unchanged. The analysis functions never fail on valid input: an empty
//! or disconnected topology degrades to empty results, not errors.

pub mod analysis;
pub mod codec;
pub mod topology;
