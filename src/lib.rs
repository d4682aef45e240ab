//! # `graphkit` - DFS-Based Graph Toolkit
//!
//! A mutable, keyed adjacency-list graph plus the classical algorithm family
//! built on depth-first search: DFS forests with edge classification,
//! topological sorting, Eulerian circuits, and connectivity / strong
//! component analysis.
//!
//! ## Guarantees
//!
//! ### Determinism
//! - **Insertion order is preserved**: vertices are numbered in the order they
//!   are first seen, and each neighbor list keeps edge insertion order.
//! - **Order-dependent outputs are reproducible**: DFS forests, topological
//!   orders and Eulerian circuits depend only on the sequence of mutations.
//!
//! ### Read-only algorithms
//! - **No scratch state in the graph**: edge classes come back in the
//!   [`DfsForest`], and Eulerian cursors live in per-call storage. Every
//!   algorithm takes `&Graph`, so a graph can be shared across readers.
//! - **No recursion**: DFS uses an explicit frame stack, so traversal depth is
//!   bounded by heap, not call stack.
//!
//! ### Mathematical invariants
//! Debug builds assert Theorem 1 after every DFS run, and check that every
//! Eulerian walk closes on its start vertex.
//!
//! **Theorem 1 (Parenthesis)**: for any vertices `u`, `v` visited in one DFS
//! run, the intervals `[d(u), f(u)]` and `[d(v), f(v)]` are either disjoint or
//! one encloses the other.
//!
//! **Theorem 2 (Acyclicity)**: a directed graph is acyclic iff DFS finds no
//! back edge iff Kahn's algorithm peels every vertex.
//!
//! **Theorem 3 (Kosaraju)**: DFS over the transpose in reverse finish order of
//! a first DFS yields one tree per strongly connected component.
//!
//! ## Example
//!
//! ```rust
//! use graphkit::{find_strongly_connected_components, has_circuit, Graph};
//!
//! let g = Graph::from_edges(true, [("A", "B"), ("B", "C"), ("C", "A"), ("C", "D")]);
//! assert!(has_circuit(&g).unwrap());
//!
//! let components = find_strongly_connected_components(&g);
//! assert_eq!(components.len(), 2);
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod error;
pub mod graph;
mod trace;

pub(crate) use trace::trace_event;

pub use error::{Directedness, GraphError, Result};
pub use graph::{
    dfs, dfs_with_order, find_components, find_eulerian_circuit,
    find_strongly_connected_components, has_circuit, has_eulerian_circuit, is_connected,
    is_strongly_connected, topological_sort, topological_sort_dfs, ClassifiedEdge, Cursor,
    DfsForest, EdgeClass, Graph, NeighborList, Timestamp, VertexKey,
};
