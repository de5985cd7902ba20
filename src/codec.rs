//! JSON interchange codec for topology documents.
//!
//! A topology document carries the full node and connection lists in the
//! interchange shape `{"nodes": [...], "connections": [...]}`. Export
//! projects the store verbatim; import validates the document
//! structurally (field shapes, duplicate ids, self-loops, zero weights)
//! and cross-checks that every connection references nodes present in
//! the same document before bulk-replacing the store. A failed import
//! leaves the store untouched.

use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use log::{debug, info, warn};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::topology::{Connection, Node, TopologyStore};

/// Match the numeric counter suffix of store-generated node ids
static NODE_ID_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^node-(\d+)$").expect("Invalid node id regex"));

/// The interchange document shape shared by export and import
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopologyDocument {
    pub nodes: Vec<Node>,
    pub connections: Vec<Connection>,
}

/// Errors reported by import/export operations
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("Malformed topology document: {0}")]
    MalformedDocument(String),
    #[error("Connection '{connection}' references missing node '{node}'")]
    DanglingReference { connection: String, node: String },
    #[error("I/O error on topology file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Project the store's current state into an interchange document
pub fn export_document(store: &TopologyStore) -> TopologyDocument {
    TopologyDocument {
        nodes: store.nodes().to_vec(),
        connections: store.connections().to_vec(),
    }
}

/// Serialize a document as pretty-printed JSON
pub fn to_json_string(document: &TopologyDocument) -> Result<String, CodecError> {
    serde_json::to_string_pretty(document)
        .map_err(|e| CodecError::MalformedDocument(e.to_string()))
}

/// Parse and structurally validate an interchange document
pub fn parse_document(text: &str) -> Result<TopologyDocument, CodecError> {
    let document: TopologyDocument =
        serde_json::from_str(text).map_err(|e| CodecError::MalformedDocument(e.to_string()))?;
    validate_document(&document)?;
    Ok(document)
}

/// Check the invariants a document must satisfy before it may replace
/// store contents
fn validate_document(document: &TopologyDocument) -> Result<(), CodecError> {
    let mut node_ids = HashSet::new();
    for node in &document.nodes {
        if !node_ids.insert(node.id.as_str()) {
            return Err(CodecError::MalformedDocument(format!(
                "duplicate node id '{}'",
                node.id
            )));
        }
    }

    let mut connection_ids = HashSet::new();
    let mut linked_pairs: HashSet<(&str, &str)> = HashSet::new();
    for conn in &document.connections {
        if !connection_ids.insert(conn.id.as_str()) {
            return Err(CodecError::MalformedDocument(format!(
                "duplicate connection id '{}'",
                conn.id
            )));
        }
        if conn.source == conn.target {
            return Err(CodecError::MalformedDocument(format!(
                "connection '{}' links node '{}' to itself",
                conn.id, conn.source
            )));
        }
        if conn.cost == 0 || conn.bandwidth == 0 {
            return Err(CodecError::MalformedDocument(format!(
                "connection '{}' has non-positive cost or bandwidth",
                conn.id
            )));
        }
        for endpoint in [conn.source.as_str(), conn.target.as_str()] {
            if !node_ids.contains(endpoint) {
                return Err(CodecError::DanglingReference {
                    connection: conn.id.clone(),
                    node: endpoint.to_string(),
                });
            }
        }
        let pair = if conn.source < conn.target {
            (conn.source.as_str(), conn.target.as_str())
        } else {
            (conn.target.as_str(), conn.source.as_str())
        };
        if !linked_pairs.insert(pair) {
            return Err(CodecError::MalformedDocument(format!(
                "nodes '{}' and '{}' are linked more than once",
                pair.0, pair.1
            )));
        }
    }

    Ok(())
}

/// Recover the next node id counter from imported node ids
///
/// Takes the maximum numeric suffix over ids of the form `node-<n>` plus
/// one. Foreign id formats are tolerated: when no id matches, the counter
/// falls back to 1 and future ids simply start fresh.
pub fn recover_node_counter(nodes: &[Node]) -> u32 {
    let mut max_seen: u32 = 0;
    let mut matched = false;
    for node in nodes {
        if let Some(caps) = NODE_ID_SUFFIX.captures(&node.id) {
            match caps[1].parse::<u32>() {
                Ok(n) => {
                    matched = true;
                    max_seen = max_seen.max(n);
                }
                Err(_) => {
                    warn!("Ignoring node id '{}': counter suffix out of range", node.id);
                }
            }
        }
    }
    if !matched && !nodes.is_empty() {
        debug!("No node ids carry a counter suffix; counter resets to 1");
    }
    max_seen.saturating_add(1)
}

/// Replace store contents with a validated document
pub fn import_document(store: &mut TopologyStore, document: TopologyDocument) {
    let counter = recover_node_counter(&document.nodes);
    info!(
        "Imported topology: {} nodes, {} connections (next node id {})",
        document.nodes.len(),
        document.connections.len(),
        counter
    );
    store.replace_contents(document.nodes, document.connections, counter);
}

/// Parse, validate, and import a JSON document into the store
pub fn import_json(store: &mut TopologyStore, text: &str) -> Result<(), CodecError> {
    let document = parse_document(text)?;
    import_document(store, document);
    Ok(())
}

/// Load and validate a topology document from a JSON file
pub fn load_topology_file(path: &Path) -> Result<TopologyDocument, CodecError> {
    let text = fs::read_to_string(path).map_err(|e| CodecError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    parse_document(&text)
}

/// Write the store's current state to a JSON file
pub fn save_topology_file(path: &Path, store: &TopologyStore) -> Result<(), CodecError> {
    let json = to_json_string(&export_document(store))?;
    fs::write(path, json).map_err(|e| CodecError::Io {
        path: path.display().to_string(),
        source: e,
    })
}
