//! Reachability, weak components and strong components.

use super::dfs::{dfs, run};
use crate::error::{Directedness, GraphError, Result};
use crate::graph::basic::{Graph, VertexKey};
use crate::trace_event;

/// Marks every vertex reachable from `start` along edge direction.
fn reachable_from<K: VertexKey>(graph: &Graph<K>, start: usize) -> Vec<bool> {
    let mut visited = vec![false; graph.vertex_count()];
    let mut stack = vec![start];
    visited[start] = true;
    while let Some(u) = stack.pop() {
        for v in graph.list(u) {
            if !visited[v] {
                visited[v] = true;
                stack.push(v);
            }
        }
    }
    visited
}

/// Returns `true` if every vertex is reachable from the first vertex.
///
/// An empty graph is connected. For a directed graph this only tests
/// reachability *from* the first vertex; see [`is_strongly_connected`].
pub fn is_connected<K: VertexKey>(graph: &Graph<K>) -> bool {
    if graph.vertex_count() == 0 {
        return true;
    }
    reachable_from(graph, 0).into_iter().all(|seen| seen)
}

/// Returns `true` if every pair of vertices is mutually reachable.
///
/// **Theorem**: a directed graph is strongly connected iff some vertex reaches
/// every vertex in both `G` and its transpose. Transposition preserves vertex
/// order, so both checks are rooted at the same vertex.
pub fn is_strongly_connected<K: VertexKey>(graph: &Graph<K>) -> bool {
    is_connected(graph) && is_connected(&graph.transpose())
}

/// Splits an undirected graph into connected components.
///
/// Each returned tree is the DFS tree of one component; the trees partition
/// the vertex set.
///
/// # Errors
/// [`GraphError::InvalidGraph`] if `graph` is directed.
pub fn find_components<K: VertexKey>(graph: &Graph<K>) -> Result<Vec<Graph<K>>> {
    GraphError::require(graph.is_directed(), Directedness::Undirected, "find_components")?;
    Ok(dfs(graph).trees)
}

/// Finds strongly connected components with Kosaraju's algorithm.
///
/// The first DFS pass runs over `graph`; the second runs over its transpose,
/// taking roots in reverse finish order of the first. Each tree of the second
/// forest is one component.
pub fn find_strongly_connected_components<K: VertexKey>(graph: &Graph<K>) -> Vec<Graph<K>> {
    let finish_order = dfs(graph).finish_order;
    let transposed = graph.transpose();
    let roots = finish_order
        .iter()
        .rev()
        .filter_map(|v| transposed.slot_of(v));
    let components = run(&transposed, roots).trees;
    trace_event!(
        debug,
        vertices = graph.vertex_count(),
        components = components.len(),
        "strong components found"
    );
    components
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted_vertices<K: VertexKey + Ord>(tree: &Graph<K>) -> Vec<K> {
        let mut v = tree.vertices().to_vec();
        v.sort();
        v
    }

    #[test]
    fn empty_graph_is_connected() {
        let g: Graph<u32> = Graph::undirected();
        assert!(is_connected(&g));
        assert!(is_strongly_connected(&g));
    }

    #[test]
    fn directed_connectivity_follows_edge_direction() {
        let g = Graph::from_edges(true, [(1, 2), (2, 3)]);
        assert!(is_connected(&g));
        assert!(!is_strongly_connected(&g));

        // 1 reaches 2, but nothing leads from 1 to 3.
        let g = Graph::from_edges(true, [(1, 2), (3, 2)]);
        assert!(!is_connected(&g));

        // Reachability is rooted at the first vertex added.
        let g = Graph::from_edges(true, [(2, 1), (2, 3)]);
        assert_eq!(g.vertices(), &[2, 1, 3]);
        assert!(is_connected(&g));
        assert!(!is_strongly_connected(&g));
    }

    #[test]
    fn cycle_is_strongly_connected() {
        let g = Graph::from_edges(true, [(1, 2), (2, 3), (3, 1)]);
        assert!(is_strongly_connected(&g));
    }

    #[test]
    fn isolated_vertex_breaks_connectivity() {
        let mut g = Graph::from_edges(false, [(1, 2)]);
        g.add_vertex(3);
        assert!(!is_connected(&g));
    }

    #[test]
    fn undirected_components() {
        let mut g = Graph::from_edges(false, [(1, 2), (2, 3), (4, 5)]);
        g.add_vertex(6);
        let comps = find_components(&g).unwrap();
        let sets: Vec<_> = comps.iter().map(sorted_vertices).collect();
        assert_eq!(sets, vec![vec![1, 2, 3], vec![4, 5], vec![6]]);
    }

    #[test]
    fn components_reject_directed_graphs() {
        let g = Graph::from_edges(true, [(1, 2)]);
        assert!(matches!(find_components(&g), Err(GraphError::InvalidGraph { .. })));
    }

    #[test]
    fn kosaraju_scenario() {
        let g = Graph::from_edges(true, [("A", "B"), ("B", "C"), ("C", "A"), ("C", "D")]);
        let comps = find_strongly_connected_components(&g);
        let mut sets: Vec<_> = comps.iter().map(sorted_vertices).collect();
        sets.sort();
        assert_eq!(sets, vec![vec!["A", "B", "C"], vec!["D"]]);
    }

    #[test]
    fn kosaraju_on_dag_yields_singletons() {
        let g = Graph::from_edges(true, [(1, 2), (2, 3), (1, 3)]);
        assert_eq!(find_strongly_connected_components(&g).len(), 3);
    }
}
