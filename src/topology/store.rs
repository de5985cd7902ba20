//! Canonical topology state.
//!
//! `TopologyStore` owns the node and connection sets and enforces their
//! invariants at every mutation: connection endpoints must name existing,
//! distinct nodes; at most one connection per unordered node pair; cost
//! and bandwidth strictly positive; node ids unique for the lifetime of
//! the store. Every mutation is atomic - a failed call leaves the store
//! exactly as it was.

use log::debug;
use rand::Rng;

use super::types::{Connection, Node, NodeKind, TopologyError};

/// Canvas region where freshly added nodes are placed
const PLACEMENT_X: (f64, f64) = (200.0, 500.0);
const PLACEMENT_Y: (f64, f64) = (150.0, 350.0);

/// The canonical set of nodes and connections for one topology session
#[derive(Debug, Clone)]
pub struct TopologyStore {
    nodes: Vec<Node>,
    connections: Vec<Connection>,
    /// Monotonic counter backing node ids; never reused after deletions
    next_node_id: u32,
}

impl Default for TopologyStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TopologyStore {
    /// Create an empty store; node ids start at `node-1`
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            connections: Vec::new(),
            next_node_id: 1,
        }
    }

    /// All nodes, in insertion order
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// All connections, in insertion order
    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    /// Look up a node by id
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Look up a connection by id
    pub fn connection(&self, id: &str) -> Option<&Connection> {
        self.connections.iter().find(|c| c.id == id)
    }

    /// Look up the connection linking an unordered node pair, if any
    pub fn find_connection_between(&self, a: &str, b: &str) -> Option<&Connection> {
        self.connections.iter().find(|c| c.links(a, b))
    }

    /// The id the next added node will receive, as a raw counter value
    pub fn next_node_id(&self) -> u32 {
        self.next_node_id
    }

    /// Add a node with a random canvas position
    ///
    /// The node is labeled `"Server <n>"` or `"Client <n>"` from the
    /// counter value backing its id.
    pub fn add_node<R: Rng>(&mut self, kind: NodeKind, rng: &mut R) -> Node {
        let x = rng.gen_range(PLACEMENT_X.0..PLACEMENT_X.1);
        let y = rng.gen_range(PLACEMENT_Y.0..PLACEMENT_Y.1);
        self.add_node_at(kind, x, y)
    }

    /// Add a node at an explicit canvas position
    pub fn add_node_at(&mut self, kind: NodeKind, x: f64, y: f64) -> Node {
        let counter = self.next_node_id;
        self.next_node_id += 1;
        let node = Node {
            id: format!("node-{}", counter),
            x,
            y,
            kind,
            label: format!("{} {}", kind.display_prefix(), counter),
        };
        debug!("Added node '{}' ({})", node.id, node.label);
        self.nodes.push(node.clone());
        node
    }

    /// Delete a node and every connection touching it
    pub fn delete_node(&mut self, id: &str) -> Result<(), TopologyError> {
        if self.node(id).is_none() {
            return Err(TopologyError::NotFound(id.to_string()));
        }
        self.nodes.retain(|n| n.id != id);
        let before = self.connections.len();
        self.connections.retain(|c| !c.touches(id));
        debug!(
            "Deleted node '{}' and {} connection(s) touching it",
            id,
            before - self.connections.len()
        );
        Ok(())
    }

    /// Add a connection between two existing, distinct nodes
    ///
    /// Fails with `InvalidEndpoint` if either id is absent or the ids are
    /// equal, `DuplicateConnection` if the unordered pair is already
    /// linked, and `InvalidParameter` if cost or bandwidth is zero.
    pub fn add_connection(
        &mut self,
        source: &str,
        target: &str,
        cost: u32,
        bandwidth: u32,
    ) -> Result<Connection, TopologyError> {
        if source == target {
            return Err(TopologyError::InvalidEndpoint(format!(
                "connection from '{}' to itself",
                source
            )));
        }
        for endpoint in [source, target] {
            if self.node(endpoint).is_none() {
                return Err(TopologyError::InvalidEndpoint(format!(
                    "no node with id '{}'",
                    endpoint
                )));
            }
        }
        if self.find_connection_between(source, target).is_some() {
            return Err(TopologyError::DuplicateConnection(
                source.to_string(),
                target.to_string(),
            ));
        }
        validate_weights(cost, bandwidth)?;

        let connection = Connection {
            id: Connection::make_id(source, target),
            source: source.to_string(),
            target: target.to_string(),
            cost,
            bandwidth,
        };
        debug!("Added connection '{}'", connection.id);
        self.connections.push(connection.clone());
        Ok(connection)
    }

    /// Update the cost and bandwidth of an existing connection
    ///
    /// The endpoint pair is the connection's identity and cannot change.
    pub fn update_connection(
        &mut self,
        id: &str,
        cost: u32,
        bandwidth: u32,
    ) -> Result<(), TopologyError> {
        validate_weights(cost, bandwidth)?;
        let connection = self
            .connections
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| TopologyError::NotFound(id.to_string()))?;
        connection.cost = cost;
        connection.bandwidth = bandwidth;
        Ok(())
    }

    /// Delete a connection by id
    pub fn delete_connection(&mut self, id: &str) -> Result<(), TopologyError> {
        if self.connection(id).is_none() {
            return Err(TopologyError::NotFound(id.to_string()));
        }
        self.connections.retain(|c| c.id != id);
        Ok(())
    }

    /// Bulk-replace store contents with already-validated sets
    ///
    /// Only the codec calls this, after an imported document passes
    /// structural validation; `next_node_id` is the recovered counter.
    pub(crate) fn replace_contents(
        &mut self,
        nodes: Vec<Node>,
        connections: Vec<Connection>,
        next_node_id: u32,
    ) {
        self.nodes = nodes;
        self.connections = connections;
        self.next_node_id = next_node_id;
    }
}

fn validate_weights(cost: u32, bandwidth: u32) -> Result<(), TopologyError> {
    if cost == 0 {
        return Err(TopologyError::InvalidParameter(
            "cost must be a positive integer".to_string(),
        ));
    }
    if bandwidth == 0 {
        return Err(TopologyError::InvalidParameter(
            "bandwidth must be a positive integer".to_string(),
        ));
    }
    Ok(())
}
