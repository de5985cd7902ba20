//! Derived-view analysis for network topologies.
//!
//! This module provides the read-only views computed from a topology:
//! aggregate cost/latency metrics, the minimum-cost spanning topology,
//! and per-destination shortest paths. All functions here are pure
//! projections of the node/connection sets and never mutate the store;
//! callers recompute them after any mutation.

pub mod metrics;
pub mod mst;
pub mod shortest_path;

pub use metrics::{compute_metrics, NetworkMetrics};
pub use mst::{compute_mst, DisjointSet};
pub use shortest_path::{compute_shortest_paths, path_latency};
