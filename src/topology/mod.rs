//! Network topology module.
//!
//! This module contains the canonical topology state: node and connection
//! type definitions, the mutation rules that keep them consistent, and the
//! errors those rules can report.

pub mod store;
pub mod types;

// Re-export key types for easier access
pub use store::TopologyStore;
pub use types::{Connection, Node, NodeKind, TopologyError, LATENCY_SCALE};
