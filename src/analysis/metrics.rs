//! Aggregate topology metrics.

use serde::{Deserialize, Serialize};

use crate::topology::Connection;

/// Aggregate cost and latency figures for a connection set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkMetrics {
    /// Sum of all connection costs
    pub total_cost: u64,
    /// Mean of per-connection latencies (100/bandwidth), two decimals
    pub average_latency: f64,
}

/// Compute aggregate metrics for the given connection set
///
/// An empty set yields zero for both figures. The average is rounded to
/// two decimal places.
pub fn compute_metrics(connections: &[Connection]) -> NetworkMetrics {
    if connections.is_empty() {
        return NetworkMetrics {
            total_cost: 0,
            average_latency: 0.0,
        };
    }

    let total_cost: u64 = connections.iter().map(|c| u64::from(c.cost)).sum();
    let mean_latency =
        connections.iter().map(Connection::latency).sum::<f64>() / connections.len() as f64;

    NetworkMetrics {
        total_cost,
        average_latency: (mean_latency * 100.0).round() / 100.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn conn(cost: u32, bandwidth: u32) -> Connection {
        Connection {
            id: format!("conn-a-b-{}-{}", cost, bandwidth),
            source: "a".to_string(),
            target: "b".to_string(),
            cost,
            bandwidth,
        }
    }

    #[test]
    fn test_empty_set_yields_zeroes() {
        let metrics = compute_metrics(&[]);
        assert_eq!(metrics.total_cost, 0);
        assert_eq!(metrics.average_latency, 0.0);
    }

    #[test]
    fn test_total_cost_is_literal_sum() {
        let metrics = compute_metrics(&[conn(10, 100), conn(25, 100), conn(7, 100)]);
        assert_eq!(metrics.total_cost, 42);
    }

    #[test]
    fn test_average_latency_is_mean_of_inverse_bandwidth() {
        // 100/50 = 2.0 and 100/100 = 1.0, mean 1.5
        let metrics = compute_metrics(&[conn(1, 50), conn(1, 100)]);
        assert_eq!(metrics.average_latency, 1.5);
    }

    #[test]
    fn test_average_latency_rounds_to_two_decimals() {
        // 100/30 = 3.333..., rounded to 3.33
        let metrics = compute_metrics(&[conn(1, 30)]);
        assert_eq!(metrics.average_latency, 3.33);
        // 100/3 = 33.333... and 100/7 = 14.2857..., mean 23.8095... -> 23.81
        let metrics = compute_metrics(&[conn(1, 3), conn(1, 7)]);
        assert_eq!(metrics.average_latency, 23.81);
    }

    #[test]
    fn test_large_sets_do_not_overflow() {
        let connections: Vec<Connection> = (0..1000).map(|_| conn(u32::MAX, 100)).collect();
        let metrics = compute_metrics(&connections);
        assert_eq!(metrics.total_cost, u64::from(u32::MAX) * 1000);
    }
}
