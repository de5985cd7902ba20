//! Single-source shortest paths over latency weights.
//!
//! Implements Dijkstra's algorithm on the undirected topology graph,
//! where every connection contributes the symmetric weight
//! `100 / bandwidth` in both directions. The node count here is small
//! (interactive topology design), so the minimum-distance selection is a
//! linear scan - the O(V^2) form - rather than a priority queue.

use std::collections::{HashMap, HashSet};

use crate::topology::{Connection, Node};

/// Compute the minimum-latency path from `source` to every other node
///
/// The result maps each node id except the source to its full path
/// `[source, ..., destination]`; a node unreachable from the source maps
/// to an empty path. An unknown source is not an error - every node is
/// simply unreachable.
pub fn compute_shortest_paths(
    source: &str,
    nodes: &[Node],
    connections: &[Connection],
) -> HashMap<String, Vec<String>> {
    // Symmetric adjacency under the inverse-bandwidth latency model
    let mut adjacency: HashMap<&str, Vec<(&str, f64)>> = HashMap::new();
    for node in nodes {
        adjacency.entry(&node.id).or_default();
    }
    for conn in connections {
        // Skip edges naming nodes outside the given set
        if !adjacency.contains_key(conn.source.as_str())
            || !adjacency.contains_key(conn.target.as_str())
        {
            continue;
        }
        let latency = conn.latency();
        adjacency
            .entry(conn.source.as_str())
            .or_default()
            .push((conn.target.as_str(), latency));
        adjacency
            .entry(conn.target.as_str())
            .or_default()
            .push((conn.source.as_str(), latency));
    }

    let mut distances: HashMap<&str, f64> = nodes
        .iter()
        .map(|n| {
            let d = if n.id == source { 0.0 } else { f64::INFINITY };
            (n.id.as_str(), d)
        })
        .collect();
    let mut predecessors: HashMap<&str, &str> = HashMap::new();
    let mut unvisited: HashSet<&str> = nodes.iter().map(|n| n.id.as_str()).collect();

    while !unvisited.is_empty() {
        // Linear scan for the closest unvisited node
        let mut current: Option<&str> = None;
        let mut min_distance = f64::INFINITY;
        for &id in &unvisited {
            if distances[id] < min_distance {
                min_distance = distances[id];
                current = Some(id);
            }
        }

        // Remaining nodes are unreachable
        let Some(current) = current else { break };
        unvisited.remove(current);

        for &(neighbor, weight) in &adjacency[current] {
            if !unvisited.contains(neighbor) {
                continue;
            }
            let candidate = distances[current] + weight;
            if candidate < distances[neighbor] {
                distances.insert(neighbor, candidate);
                predecessors.insert(neighbor, current);
            }
        }
    }

    // Walk predecessor links back to the source for each destination
    let mut paths = HashMap::new();
    for node in nodes {
        if node.id == source {
            continue;
        }
        let mut path = vec![node.id.as_str()];
        let mut current = node.id.as_str();
        while let Some(&prev) = predecessors.get(current) {
            path.push(prev);
            current = prev;
        }
        path.reverse();

        let path = if path.len() > 1 {
            path.into_iter().map(String::from).collect()
        } else {
            Vec::new()
        };
        paths.insert(node.id.clone(), path);
    }

    paths
}

/// Total latency of a path, summing each hop's edge weight
///
/// Returns None if any consecutive pair has no connection. Paths shorter
/// than two nodes have zero latency.
pub fn path_latency(path: &[String], connections: &[Connection]) -> Option<f64> {
    let mut total = 0.0;
    for hop in path.windows(2) {
        let edge = connections.iter().find(|c| c.links(&hop[0], &hop[1]))?;
        total += edge.latency();
    }
    Some(total)
}
