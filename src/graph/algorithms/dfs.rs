//! Depth-first forest construction with timestamps and edge classification.
//!
//! The traversal is iterative: each stack frame holds a vertex and a detached
//! [`Cursor`] into its neighbor list, which reproduces the discovery/finish
//! order of the textbook recursive visit without growing the call stack.
//!
//! Edge classes are decided by the target's color at the moment the edge is
//! scanned:
//! - white: [`EdgeClass::Tree`]
//! - gray: [`EdgeClass::Back`]
//! - black: [`EdgeClass::Forward`] if the target is already in the tree being
//!   built, else [`EdgeClass::Cross`]
//!
//! The black case only asks "same tree?", not "descendant of the source?", so an
//! edge into a finished sibling subtree of the current tree is reported as
//! `Forward`. Consumers that need exact forward edges should test ancestry with
//! the returned [`Timestamp`]s.

use std::collections::HashMap;

use crate::error::Result;
use crate::graph::basic::{Cursor, Graph, VertexKey};
use crate::trace_event;

/// Classification of a traversed edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeClass {
    /// The edge discovered its target.
    Tree,
    /// The target was on the current DFS path.
    Back,
    /// The target was finished and belongs to the current tree.
    Forward,
    /// The target was finished in an earlier tree.
    Cross,
}

/// Discovery and finish ticks of one vertex.
///
/// Both ticks come from a single counter shared by the whole run, so for any
/// two visited vertices the `[discovery, finish]` intervals nest or are disjoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timestamp {
    /// Tick at which the vertex turned gray.
    pub discovery: usize,
    /// Tick at which the vertex turned black.
    pub finish: usize,
}

impl Timestamp {
    /// Returns `true` if `other`'s interval lies strictly inside this one.
    pub fn encloses(self, other: Timestamp) -> bool {
        self.discovery < other.discovery && other.finish < self.finish
    }

    /// Returns `true` if the two intervals do not overlap.
    pub fn is_disjoint(self, other: Timestamp) -> bool {
        self.finish < other.discovery || other.finish < self.discovery
    }
}

/// One scanned edge record and its class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedEdge<K> {
    /// Vertex whose list holds the record.
    pub source: K,
    /// Vertex the record points at.
    pub target: K,
    /// Index of the record in `source`'s neighbor list.
    pub slot: usize,
    /// Class assigned during this run.
    pub class: EdgeClass,
}

/// Everything a DFS run produces.
#[derive(Debug, Clone)]
pub struct DfsForest<K> {
    /// One directed tree per root, holding the root and every tree edge.
    pub trees: Vec<Graph<K>>,
    /// Ticks for every visited vertex.
    pub timestamps: HashMap<K, Timestamp>,
    /// Vertices in the order they turned gray.
    pub discovery_order: Vec<K>,
    /// Vertices in the order they turned black.
    pub finish_order: Vec<K>,
    /// Every scanned edge record, in scan order.
    pub edges: Vec<ClassifiedEdge<K>>,
}

impl<K: VertexKey> DfsForest<K> {
    fn with_capacity(vertices: usize, records: usize) -> Self {
        Self {
            trees: Vec::new(),
            timestamps: HashMap::with_capacity(vertices),
            discovery_order: Vec::with_capacity(vertices),
            finish_order: Vec::with_capacity(vertices),
            edges: Vec::with_capacity(records),
        }
    }

    /// Ticks recorded for `v`, if it was visited.
    pub fn timestamp(&self, v: &K) -> Option<Timestamp> {
        self.timestamps.get(v).copied()
    }

    /// Class of the record at `slot` in `source`'s list, if it was scanned.
    pub fn class_of(&self, source: &K, slot: usize) -> Option<EdgeClass> {
        self.edges
            .iter()
            .find(|e| e.slot == slot && &e.source == source)
            .map(|e| e.class)
    }

    /// Scanned edges of one class, in scan order.
    pub fn edges_of_class(&self, class: EdgeClass) -> impl Iterator<Item = &ClassifiedEdge<K>> {
        self.edges.iter().filter(move |e| e.class == class)
    }

    /// Returns `true` if any scanned edge closed a cycle on the DFS path.
    pub fn has_back_edge(&self) -> bool {
        self.edges.iter().any(|e| e.class == EdgeClass::Back)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    White,
    Gray,
    Black,
}

struct Frame {
    vertex: usize,
    cursor: Cursor,
}

/// Mutable bookkeeping of one run, indexed by vertex slot.
struct Walk<'g, K> {
    graph: &'g Graph<K>,
    forest: DfsForest<K>,
    color: Vec<Color>,
    tree_of: Vec<Option<usize>>,
    discovered_at: Vec<usize>,
    ticks: usize,
    stack: Vec<Frame>,
}

impl<'g, K: VertexKey> Walk<'g, K> {
    fn new(graph: &'g Graph<K>) -> Self {
        let n = graph.vertex_count();
        Self {
            graph,
            forest: DfsForest::with_capacity(n, graph.edge_slots().count()),
            color: vec![Color::White; n],
            tree_of: vec![None; n],
            discovered_at: vec![0; n],
            ticks: 0,
            stack: Vec::new(),
        }
    }

    fn discover(&mut self, v: usize, tree_id: usize) {
        self.color[v] = Color::Gray;
        self.tree_of[v] = Some(tree_id);
        self.ticks += 1;
        self.discovered_at[v] = self.ticks;
        self.forest.discovery_order.push(self.graph.key(v).clone());
        self.stack.push(Frame {
            vertex: v,
            cursor: self.graph.list(v).cursor(),
        });
    }

    fn finish(&mut self, u: usize) {
        self.color[u] = Color::Black;
        self.ticks += 1;
        let key = self.graph.key(u).clone();
        self.forest.timestamps.insert(
            key.clone(),
            Timestamp {
                discovery: self.discovered_at[u],
                finish: self.ticks,
            },
        );
        self.forest.finish_order.push(key);
    }

    fn classify(&self, target: usize, tree_id: usize) -> EdgeClass {
        match self.color[target] {
            Color::White => EdgeClass::Tree,
            Color::Gray => EdgeClass::Back,
            Color::Black if self.tree_of[target] == Some(tree_id) => EdgeClass::Forward,
            Color::Black => EdgeClass::Cross,
        }
    }

    /// Grows one tree from `root`, which must be white.
    fn grow(&mut self, root: usize) {
        let graph = self.graph;
        let tree_id = self.forest.trees.len();
        let mut tree = Graph::directed();
        tree.add_vertex(graph.key(root).clone());
        self.discover(root, tree_id);

        while let Some(frame) = self.stack.last_mut() {
            let u = frame.vertex;
            let Some(v) = frame.cursor.current(graph.list(u)) else {
                self.stack.pop();
                self.finish(u);
                continue;
            };
            let slot = frame.cursor.slot();
            frame.cursor.advance();

            let class = self.classify(v, tree_id);
            trace_event!(trace, source = ?graph.key(u), target = ?graph.key(v), ?class, "edge classified");
            self.forest.edges.push(ClassifiedEdge {
                source: graph.key(u).clone(),
                target: graph.key(v).clone(),
                slot,
                class,
            });

            if class == EdgeClass::Tree {
                tree.add_edge(graph.key(u).clone(), graph.key(v).clone());
                self.discover(v, tree_id);
            }
        }

        self.forest.trees.push(tree);
    }
}

/// Runs DFS over every vertex, taking roots in insertion order.
pub fn dfs<K: VertexKey>(graph: &Graph<K>) -> DfsForest<K> {
    run(graph, 0..graph.vertex_count())
}

/// Runs DFS taking roots from `order`.
///
/// Vertices that are neither listed nor reachable from a listed root stay
/// unvisited and receive no timestamps.
///
/// # Errors
/// [`GraphError::UnknownVertex`](crate::GraphError::UnknownVertex) if `order`
/// names a key that is not in the graph. Nothing is traversed in that case.
pub fn dfs_with_order<K: VertexKey>(graph: &Graph<K>, order: &[K]) -> Result<DfsForest<K>> {
    let roots = order
        .iter()
        .map(|v| graph.require_slot(v))
        .collect::<Result<Vec<_>>>()?;
    Ok(run(graph, roots))
}

pub(super) fn run<K: VertexKey>(graph: &Graph<K>, roots: impl IntoIterator<Item = usize>) -> DfsForest<K> {
    let mut walk = Walk::new(graph);
    for root in roots {
        if walk.color[root] == Color::White {
            walk.grow(root);
        }
    }

    let forest = walk.forest;
    #[cfg(debug_assertions)]
    {
        use super::math_assert::math_assert_msg;
        let stamps: Vec<Timestamp> = forest.timestamps.values().copied().collect();
        math_assert_msg(
            stamps.iter().all(|t| t.discovery < t.finish),
            "every vertex is discovered before it finishes",
        );
        math_assert_msg(
            intervals_nest(stamps),
            "timestamp intervals nest or are disjoint",
        );
    }
    trace_event!(
        debug,
        vertices = graph.vertex_count(),
        visited = forest.finish_order.len(),
        trees = forest.trees.len(),
        "dfs forest built"
    );
    forest
}

/// Returns `true` if every pair of intervals is either nested or disjoint.
///
/// Intervals are swept in discovery order while a stack holds the chain of
/// currently open intervals; each new interval must close inside the
/// innermost open one.
#[cfg(debug_assertions)]
fn intervals_nest(mut stamps: Vec<Timestamp>) -> bool {
    stamps.sort_unstable_by_key(|t| t.discovery);
    let mut open: Vec<Timestamp> = Vec::with_capacity(stamps.len());
    for t in stamps {
        while open.last().is_some_and(|top| top.finish < t.discovery) {
            open.pop();
        }
        if open.last().is_some_and(|top| !top.encloses(t)) {
            return false;
        }
        open.push(t);
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_chain_forms_one_tree() {
        let g = Graph::from_edges(true, [(1, 2), (2, 3)]);
        let f = dfs(&g);
        assert_eq!(f.trees.len(), 1);
        assert_eq!(f.discovery_order, vec![1, 2, 3]);
        assert_eq!(f.finish_order, vec![3, 2, 1]);
        assert_eq!(f.timestamp(&1), Some(Timestamp { discovery: 1, finish: 6 }));
        assert_eq!(f.timestamp(&3), Some(Timestamp { discovery: 3, finish: 4 }));
        assert_eq!(f.trees[0].edges(), vec![(1, 2), (2, 3)]);
    }

    #[test]
    fn classifies_tree_back_forward_cross() {
        // a -> b -> c -> a (back), a -> c (forward), d -> c (cross)
        let g = Graph::from_edges(
            true,
            [("a", "b"), ("b", "c"), ("c", "a"), ("a", "c"), ("d", "c")],
        );
        let f = dfs(&g);

        assert_eq!(f.class_of(&"a", 0), Some(EdgeClass::Tree));
        assert_eq!(f.class_of(&"b", 0), Some(EdgeClass::Tree));
        assert_eq!(f.class_of(&"c", 0), Some(EdgeClass::Back));
        assert_eq!(f.class_of(&"a", 1), Some(EdgeClass::Forward));
        assert_eq!(f.class_of(&"d", 0), Some(EdgeClass::Cross));
        assert!(f.has_back_edge());
        assert_eq!(f.trees.len(), 2);
    }

    #[test]
    fn finished_sibling_in_same_tree_counts_as_forward() {
        // r -> x, r -> y, y -> x: x is not a descendant of y, but shares the tree.
        let g = Graph::from_edges(true, [("r", "x"), ("r", "y"), ("y", "x")]);
        let f = dfs(&g);
        assert_eq!(f.class_of(&"y", 0), Some(EdgeClass::Forward));
        assert_eq!(f.edges_of_class(EdgeClass::Tree).count(), 2);
    }

    #[test]
    fn custom_order_chooses_roots() {
        let g = Graph::from_edges(true, [(1, 2), (3, 2)]);
        let f = dfs_with_order(&g, &[3, 1]).unwrap();
        assert_eq!(f.discovery_order, vec![3, 2, 1]);
        assert_eq!(f.trees.len(), 2);
        assert_eq!(f.class_of(&1, 0), Some(EdgeClass::Cross));
    }

    #[test]
    fn partial_order_leaves_vertices_unvisited() {
        let g = Graph::from_edges(true, [(1, 2), (3, 4)]);
        let f = dfs_with_order(&g, &[1]).unwrap();
        assert_eq!(f.finish_order, vec![2, 1]);
        assert_eq!(f.timestamp(&3), None);
    }

    #[test]
    fn unknown_root_is_rejected() {
        let g = Graph::from_edges(true, [(1, 2)]);
        assert!(matches!(
            dfs_with_order(&g, &[1, 9]),
            Err(crate::GraphError::UnknownVertex { .. })
        ));
    }

    #[test]
    fn undirected_reverse_records_are_back_edges() {
        let g = Graph::from_edges(false, [(1, 2)]);
        let f = dfs(&g);
        assert_eq!(f.class_of(&1, 0), Some(EdgeClass::Tree));
        assert_eq!(f.class_of(&2, 0), Some(EdgeClass::Back));
    }

    #[test]
    #[cfg(debug_assertions)]
    fn overlapping_intervals_are_not_nested() {
        let ts = |discovery, finish| Timestamp { discovery, finish };
        assert!(intervals_nest(vec![ts(1, 8), ts(2, 3), ts(4, 7), ts(5, 6), ts(9, 10)]));
        assert!(!intervals_nest(vec![ts(1, 4), ts(2, 6)]));
        assert!(!intervals_nest(vec![ts(1, 10), ts(2, 5), ts(3, 7)]));
    }

    #[test]
    fn intervals_nest_or_are_disjoint() {
        let g = Graph::from_edges(true, [(0, 1), (0, 2), (1, 3), (4, 3)]);
        let f = dfs(&g);
        let stamps: Vec<_> = f.timestamps.values().copied().collect();
        for (i, a) in stamps.iter().enumerate() {
            for b in &stamps[i + 1..] {
                assert!(a.is_disjoint(*b) || a.encloses(*b) || b.encloses(*a));
            }
        }
    }
}
