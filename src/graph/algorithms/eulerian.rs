//! Eulerian circuit existence and construction (Hierholzer).
//!
//! Construction never touches the graph: per-vertex cursors live in an
//! [`EdgeConsumer`] scoped to one call, so the graph can be shared freely and
//! two runs over the same graph are independent.
//!
//! The existence test checks degrees only:
//! - undirected: every neighbor list has even length
//! - directed: out-degree equals in-degree at every vertex
//!
//! It does not check connectivity. [`find_eulerian_circuit`] closes that gap by
//! rejecting a stitched circuit that leaves edges unused.

use super::math_assert::math_assert_msg;
use crate::error::{GraphError, Result};
use crate::graph::basic::{Cursor, Graph, VertexKey};
use crate::trace_event;

/// Returns `true` if every vertex satisfies the Eulerian degree condition.
///
/// A disconnected graph whose components each satisfy the condition is
/// accepted here; see [`find_eulerian_circuit`].
pub fn has_eulerian_circuit<K: VertexKey>(graph: &Graph<K>) -> bool {
    let n = graph.vertex_count();
    if !graph.is_directed() {
        return (0..n).all(|v| graph.list(v).len() % 2 == 0);
    }
    let mut in_degree = vec![0usize; n];
    for (_, v) in graph.edge_slots() {
        in_degree[v] += 1;
    }
    (0..n).all(|v| graph.list(v).len() == in_degree[v])
}

/// Finds a closed walk that uses every edge exactly once.
///
/// The walk starts at the first vertex (in insertion order) that has an edge.
/// An edgeless graph yields its first vertex alone, and an empty graph yields
/// an empty walk.
///
/// # Errors
/// [`GraphError::NoEulerianCircuit`] if the degree condition fails, or if the
/// edges do not all lie in one component.
pub fn find_eulerian_circuit<K: VertexKey>(graph: &Graph<K>) -> Result<Vec<K>> {
    if !has_eulerian_circuit(graph) {
        return Err(GraphError::NoEulerianCircuit);
    }
    let n = graph.vertex_count();
    if n == 0 {
        return Ok(Vec::new());
    }

    let mut consumer = EdgeConsumer::new(graph);
    let start = (0..n).find(|&v| !graph.list(v).is_empty()).unwrap_or(0);
    let mut circuit = consumer.walk(start);

    // Splice sub-circuits in place wherever a visited vertex still has edges.
    let mut current = 0;
    while current < circuit.len() {
        let v = circuit[current];
        if consumer.is_exhausted(v) {
            current += 1;
        } else {
            let detour = consumer.walk(v);
            circuit.splice(current..=current, detour);
        }
    }

    let edges = graph.edge_count();
    if circuit.len() != edges + 1 {
        trace_event!(
            debug,
            covered = circuit.len() - 1,
            edges,
            "edges span several components"
        );
        return Err(GraphError::NoEulerianCircuit);
    }
    math_assert_msg(
        circuit.first() == circuit.last(),
        "an eulerian circuit is closed",
    );
    trace_event!(debug, length = circuit.len(), "eulerian circuit found");
    Ok(circuit.into_iter().map(|v| graph.key(v).clone()).collect())
}

/// Per-call edge consumption state.
///
/// Each vertex has a cursor into its neighbor list. In an undirected graph an
/// edge is stored as two records, so traversing one record also retires its
/// mirror in the other endpoint's list.
struct EdgeConsumer<'g, K> {
    graph: &'g Graph<K>,
    cursors: Vec<Cursor>,
    retired: Option<Vec<Vec<bool>>>,
}

impl<'g, K: VertexKey> EdgeConsumer<'g, K> {
    fn new(graph: &'g Graph<K>) -> Self {
        let n = graph.vertex_count();
        let cursors = (0..n).map(|v| graph.list(v).cursor()).collect();
        let retired = (!graph.is_directed())
            .then(|| (0..n).map(|v| vec![false; graph.list(v).len()]).collect());
        Self {
            graph,
            cursors,
            retired,
        }
    }

    /// Moves `v`'s cursor past records already retired through their mirror.
    fn settle(&mut self, v: usize) {
        let Some(retired) = &self.retired else {
            return;
        };
        let list = self.graph.list(v);
        let cursor = &mut self.cursors[v];
        while !cursor.is_exhausted(list) && retired[v][cursor.slot()] {
            cursor.advance();
        }
    }

    fn is_exhausted(&mut self, v: usize) -> bool {
        self.settle(v);
        self.cursors[v].is_exhausted(self.graph.list(v))
    }

    /// Consumes the next unused edge out of `u`, returning its target.
    fn next_edge(&mut self, u: usize) -> Option<usize> {
        self.settle(u);
        let cursor = &mut self.cursors[u];
        let target = cursor.current(self.graph.list(u))?;
        let slot = cursor.slot();
        cursor.advance();

        if let Some(retired) = &mut self.retired {
            retired[u][slot] = true;
            let mirror = self
                .graph
                .list(target)
                .iter()
                .enumerate()
                .position(|(j, t)| t == u && !retired[target][j]);
            if let Some(j) = mirror {
                retired[target][j] = true;
            }
        }
        Some(target)
    }

    /// Follows unused edges from `start` until stuck; returns the visited vertices.
    ///
    /// Under the degree condition the walk can only get stuck back at `start`.
    fn walk(&mut self, start: usize) -> Vec<usize> {
        let mut path = vec![start];
        let mut v = start;
        while let Some(u) = self.next_edge(v) {
            path.push(u);
            v = u;
        }
        math_assert_msg(v == start, "a balanced walk returns to its start");
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directed_triangle() {
        let g = Graph::from_edges(true, [("a", "b"), ("b", "c"), ("c", "a")]);
        assert!(has_eulerian_circuit(&g));
        assert_eq!(find_eulerian_circuit(&g).unwrap(), vec!["a", "b", "c", "a"]);
    }

    #[test]
    fn directed_detour_is_spliced_in_place() {
        // Main loop 1->2->3->1 with a side loop 2->4->2.
        let g = Graph::from_edges(true, [(1, 2), (2, 3), (3, 1), (2, 4), (4, 2)]);
        assert_eq!(find_eulerian_circuit(&g).unwrap(), vec![1, 2, 4, 2, 3, 1]);
    }

    #[test]
    fn undirected_edges_are_used_once() {
        // Bowtie: two triangles sharing vertex 3.
        let g = Graph::from_edges(false, [(1, 2), (2, 3), (3, 1), (3, 4), (4, 5), (5, 3)]);
        assert!(has_eulerian_circuit(&g));
        let circuit = find_eulerian_circuit(&g).unwrap();
        assert_eq!(circuit.len(), g.edge_count() + 1);
        assert_eq!(circuit.first(), circuit.last());
    }

    #[test]
    fn undirected_self_loop() {
        let g = Graph::from_edges(false, [(1, 2), (2, 1), (1, 1)]);
        let circuit = find_eulerian_circuit(&g).unwrap();
        assert_eq!(circuit.len(), 4);
        assert_eq!(circuit.first(), circuit.last());
    }

    #[test]
    fn odd_degree_is_rejected() {
        let g = Graph::from_edges(false, [(1, 2), (2, 3)]);
        assert!(!has_eulerian_circuit(&g));
        assert_eq!(find_eulerian_circuit(&g), Err(GraphError::NoEulerianCircuit));
    }

    #[test]
    fn unbalanced_directed_is_rejected() {
        let g = Graph::from_edges(true, [(1, 2), (2, 3), (3, 1), (1, 3)]);
        assert!(!has_eulerian_circuit(&g));
    }

    #[test]
    fn disconnected_cycles_pass_degree_test_but_not_construction() {
        let g = Graph::from_edges(true, [(1, 2), (2, 1), (3, 4), (4, 3)]);
        assert!(has_eulerian_circuit(&g));
        assert_eq!(find_eulerian_circuit(&g), Err(GraphError::NoEulerianCircuit));
    }

    #[test]
    fn isolated_vertices_are_tolerated() {
        let mut g = Graph::directed();
        g.add_vertex(0);
        g.add_edge(1, 2);
        g.add_edge(2, 1);
        assert_eq!(find_eulerian_circuit(&g).unwrap(), vec![1, 2, 1]);
    }

    #[test]
    fn trivial_graphs() {
        let empty: Graph<u8> = Graph::directed();
        assert_eq!(find_eulerian_circuit(&empty).unwrap(), Vec::<u8>::new());

        let mut single = Graph::undirected();
        single.add_vertex('z');
        assert_eq!(find_eulerian_circuit(&single).unwrap(), vec!['z']);
    }

    #[test]
    fn repeated_runs_are_independent() {
        let g = Graph::from_edges(true, [(1, 2), (2, 1)]);
        let first = find_eulerian_circuit(&g).unwrap();
        let second = find_eulerian_circuit(&g).unwrap();
        assert_eq!(first, second);
    }
}
