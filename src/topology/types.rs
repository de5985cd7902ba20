//! Topology type definitions.
//!
//! This file contains the node and connection records that make up a
//! topology, plus the error type reported by store mutations. The records
//! serialize to the JSON interchange shapes used by the codec.

use serde::{Deserialize, Serialize};

/// Scaling constant for the inverse-bandwidth latency model: a connection
/// with bandwidth `b` Mbps contributes a latency weight of `100 / b`.
pub const LATENCY_SCALE: f64 = 100.0;

/// Category of a network node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// Infrastructure endpoint (hub-capable)
    Server,
    /// Consumer endpoint
    Client,
}

impl NodeKind {
    /// Label prefix used when generating display labels for new nodes
    pub fn display_prefix(&self) -> &'static str {
        match self {
            Self::Server => "Server",
            Self::Client => "Client",
        }
    }
}

/// A modeled network endpoint
///
/// The `x`/`y` coordinates are canvas positions for presentation only;
/// none of the analysis functions read them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    pub x: f64,
    pub y: f64,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    pub label: String,
}

/// An undirected weighted link between two nodes
///
/// Which endpoint sits in `source` vs `target` carries no meaning; all
/// lookups treat the pair as unordered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connection {
    pub id: String,
    pub source: String,
    pub target: String,
    /// Monetary cost of the link (must be positive)
    pub cost: u32,
    /// Capacity in Mbps (must be positive; used as a divisor)
    pub bandwidth: u32,
}

impl Connection {
    /// Deterministic connection id for an endpoint pair
    pub fn make_id(source: &str, target: &str) -> String {
        format!("conn-{}-{}", source, target)
    }

    /// Returns true if either endpoint is the given node
    pub fn touches(&self, node_id: &str) -> bool {
        self.source == node_id || self.target == node_id
    }

    /// Returns true if this connection links the given unordered pair
    pub fn links(&self, a: &str, b: &str) -> bool {
        (self.source == a && self.target == b) || (self.source == b && self.target == a)
    }

    /// Given one endpoint, returns the other; None if the node is not an
    /// endpoint of this connection
    pub fn other_endpoint(&self, node_id: &str) -> Option<&str> {
        if self.source == node_id {
            Some(&self.target)
        } else if self.target == node_id {
            Some(&self.source)
        } else {
            None
        }
    }

    /// Latency weight of this connection under the inverse-bandwidth model
    pub fn latency(&self) -> f64 {
        LATENCY_SCALE / self.bandwidth as f64
    }
}

/// Errors reported by topology store mutations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TopologyError {
    #[error("No node or connection with id '{0}'")]
    NotFound(String),
    #[error("Invalid connection endpoint: {0}")]
    InvalidEndpoint(String),
    #[error("A connection between '{0}' and '{1}' already exists")]
    DuplicateConnection(String, String),
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}
