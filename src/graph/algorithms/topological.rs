//! Topological ordering of directed graphs.
//!
//! Two independent algorithms:
//! - [`topological_sort`]: Kahn's indegree peeling. Detects cycles.
//! - [`topological_sort_dfs`]: reversed DFS finish order. Does **not** detect
//!   cycles; on a cyclic graph it still returns every vertex, in an order that
//!   violates at least one edge. Call [`has_circuit`] first if the input may be cyclic.

use std::collections::VecDeque;

use super::dfs::dfs;
use crate::error::{Directedness, GraphError, Result};
use crate::graph::basic::{Graph, VertexKey};
use crate::trace_event;

/// Computes a topological order using Kahn's algorithm.
///
/// Sources are queued in vertex order and dequeued FIFO, so the result is
/// deterministic for a fixed sequence of mutations.
///
/// # Errors
/// - [`GraphError::InvalidGraph`] if `graph` is undirected.
/// - [`GraphError::CircuitDetected`] if some vertex never reaches indegree zero.
pub fn topological_sort<K: VertexKey>(graph: &Graph<K>) -> Result<Vec<K>> {
    GraphError::require(graph.is_directed(), Directedness::Directed, "topological_sort")?;

    let n = graph.vertex_count();
    let mut indeg = vec![0usize; n];
    for (_, v) in graph.edge_slots() {
        indeg[v] += 1;
    }

    let mut queue: VecDeque<usize> = (0..n).filter(|&u| indeg[u] == 0).collect();
    let mut order = Vec::with_capacity(n);
    while let Some(u) = queue.pop_front() {
        order.push(graph.key(u).clone());
        for v in graph.list(u) {
            indeg[v] -= 1;
            if indeg[v] == 0 {
                queue.push_back(v);
            }
        }
    }

    let remaining = indeg.iter().filter(|&&d| d != 0).count();
    if remaining != 0 {
        trace_event!(debug, remaining, "indegree peeling stalled on a circuit");
        return Err(GraphError::CircuitDetected { remaining });
    }
    trace_event!(debug, vertices = n, "topological order computed");
    Ok(order)
}

/// Computes a topological order as the reverse of DFS finish order.
///
/// # Errors
/// [`GraphError::InvalidGraph`] if `graph` is undirected.
pub fn topological_sort_dfs<K: VertexKey>(graph: &Graph<K>) -> Result<Vec<K>> {
    GraphError::require(graph.is_directed(), Directedness::Directed, "topological_sort_dfs")?;
    let mut order = dfs(graph).finish_order;
    order.reverse();
    Ok(order)
}

/// Returns `true` if the directed graph contains a cycle.
///
/// A cycle exists exactly when DFS classifies some edge as a back edge.
///
/// # Errors
/// [`GraphError::InvalidGraph`] if `graph` is undirected.
pub fn has_circuit<K: VertexKey>(graph: &Graph<K>) -> Result<bool> {
    GraphError::require(graph.is_directed(), Directedness::Directed, "has_circuit")?;
    Ok(dfs(graph).has_back_edge())
}
