//! Minimum-cost spanning topology construction.
//!
//! Implements Kruskal's algorithm over the connection set: connections
//! are visited in ascending cost order and accepted whenever they join
//! two partitions that are not yet connected. On a disconnected input
//! the result is a spanning forest (one tree per component), which is a
//! normal outcome rather than an error.

use std::collections::HashMap;

use log::debug;

use crate::topology::{Connection, Node};

/// Disjoint-set (union-find) partition tracker keyed by node id
///
/// `find` uses iterative path compression, so lookup cost stays near
/// constant without risking recursion depth on large node sets.
#[derive(Debug, Default)]
pub struct DisjointSet {
    parent: HashMap<String, String>,
}

impl DisjointSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an id as its own singleton partition (no-op if known)
    pub fn insert(&mut self, id: &str) {
        self.parent
            .entry(id.to_string())
            .or_insert_with(|| id.to_string());
    }

    /// Root of the partition containing `id`, or None for unknown ids
    ///
    /// Compresses the walked chain so every visited entry points at the
    /// root afterwards.
    pub fn find(&mut self, id: &str) -> Option<String> {
        self.parent.get(id)?;

        // Walk to the root, remembering the chain
        let mut chain = Vec::new();
        let mut current = id.to_string();
        loop {
            let parent = self.parent[&current].clone();
            if parent == current {
                break;
            }
            chain.push(current);
            current = parent;
        }

        for visited in chain {
            self.parent.insert(visited, current.clone());
        }
        Some(current)
    }

    /// Merge the partitions containing `a` and `b`
    ///
    /// Returns true if two distinct partitions were merged, false if the
    /// ids were already connected or either id is unknown.
    pub fn union(&mut self, a: &str, b: &str) -> bool {
        let (Some(root_a), Some(root_b)) = (self.find(a), self.find(b)) else {
            return false;
        };
        if root_a == root_b {
            return false;
        }
        self.parent.insert(root_a, root_b);
        true
    }

    /// Returns true if both ids are known and share a partition
    pub fn connected(&mut self, a: &str, b: &str) -> bool {
        match (self.find(a), self.find(b)) {
            (Some(root_a), Some(root_b)) => root_a == root_b,
            _ => false,
        }
    }
}

/// Compute a minimum-cost spanning topology with Kruskal's algorithm
///
/// Connections are sorted by ascending cost with a stable sort, so ties
/// resolve in insertion order and the result is deterministic. Returns an
/// empty sequence when fewer than two nodes or no connections exist. The
/// result size is `|nodes| - components`.
pub fn compute_mst(nodes: &[Node], connections: &[Connection]) -> Vec<Connection> {
    if nodes.len() < 2 || connections.is_empty() {
        return Vec::new();
    }

    let mut sorted: Vec<&Connection> = connections.iter().collect();
    sorted.sort_by_key(|c| c.cost);

    let mut partitions = DisjointSet::new();
    for node in nodes {
        partitions.insert(&node.id);
    }

    let mut result = Vec::new();
    let mut components = nodes.len();

    for conn in sorted {
        if partitions.union(&conn.source, &conn.target) {
            debug!("MST accepted '{}' (cost {})", conn.id, conn.cost);
            result.push(conn.clone());
            components -= 1;
            // All nodes in one partition: remaining edges can only cycle
            if components == 1 {
                break;
            }
        } else {
            debug!("MST rejected '{}' (would create a cycle)", conn.id);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::NodeKind;

    fn node(id: &str) -> Node {
        Node {
            id: id.to_string(),
            x: 0.0,
            y: 0.0,
            kind: NodeKind::Server,
            label: id.to_string(),
        }
    }

    fn conn(source: &str, target: &str, cost: u32) -> Connection {
        Connection {
            id: Connection::make_id(source, target),
            source: source.to_string(),
            target: target.to_string(),
            cost,
            bandwidth: 100,
        }
    }

    #[test]
    fn test_find_compresses_chains() {
        let mut set = DisjointSet::new();
        for id in ["a", "b", "c", "d"] {
            set.insert(id);
        }
        set.union("a", "b");
        set.union("b", "c");
        set.union("c", "d");
        let root = set.find("a").unwrap();
        // After compression every member points directly at the root
        assert_eq!(set.parent["a"], root);
        assert!(set.connected("a", "d"));
    }

    #[test]
    fn test_find_unknown_id() {
        let mut set = DisjointSet::new();
        assert_eq!(set.find("ghost"), None);
        assert!(!set.connected("ghost", "ghost"));
    }

    #[test]
    fn test_mst_worked_example() {
        // A-B(10), B-C(5), A-C(20): the MST is {B-C, A-B} with cost 15
        let nodes = vec![node("A"), node("B"), node("C")];
        let connections = vec![conn("A", "B", 10), conn("B", "C", 5), conn("A", "C", 20)];

        let mst = compute_mst(&nodes, &connections);
        let ids: Vec<&str> = mst.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["conn-B-C", "conn-A-B"]);
        assert_eq!(mst.iter().map(|c| u64::from(c.cost)).sum::<u64>(), 15);
    }

    #[test]
    fn test_mst_empty_inputs() {
        assert!(compute_mst(&[], &[]).is_empty());
        assert!(compute_mst(&[node("A")], &[]).is_empty());
        assert!(compute_mst(&[node("A"), node("B")], &[]).is_empty());
    }

    #[test]
    fn test_mst_disconnected_graph_yields_forest() {
        // Two components: {A,B} and {C,D}; expect one edge per component
        let nodes = vec![node("A"), node("B"), node("C"), node("D")];
        let connections = vec![conn("A", "B", 3), conn("C", "D", 7)];

        let mst = compute_mst(&nodes, &connections);
        assert_eq!(mst.len(), 2);
        // |nodes| - components = 4 - 2
        assert!(mst.len() <= nodes.len() - 2);
    }

    #[test]
    fn test_mst_size_bound_and_membership() {
        let nodes = vec![node("A"), node("B"), node("C"), node("D")];
        let connections = vec![
            conn("A", "B", 1),
            conn("B", "C", 2),
            conn("C", "D", 3),
            conn("A", "D", 4),
            conn("A", "C", 5),
        ];

        let mst = compute_mst(&nodes, &connections);
        assert_eq!(mst.len(), nodes.len() - 1);
        for edge in &mst {
            assert!(connections.contains(edge));
        }
    }

    #[test]
    fn test_mst_cost_ties_resolve_in_insertion_order() {
        // Both 2-cost edges span the same cut; the first inserted wins
        let nodes = vec![node("A"), node("B"), node("C")];
        let connections = vec![conn("A", "B", 2), conn("A", "C", 2), conn("B", "C", 2)];

        let mst = compute_mst(&nodes, &connections);
        let ids: Vec<&str> = mst.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["conn-A-B", "conn-A-C"]);
    }

    #[test]
    fn test_mst_ignores_edges_between_unknown_nodes() {
        let nodes = vec![node("A"), node("B")];
        let connections = vec![conn("X", "Y", 1), conn("A", "B", 9)];

        let mst = compute_mst(&nodes, &connections);
        let ids: Vec<&str> = mst.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["conn-A-B"]);
    }
}
