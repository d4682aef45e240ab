//! Graph representation and the algorithms built on it.
//!
//! - `basic`: the mutable keyed adjacency-list graph
//! - `algorithms`: DFS forests, topological sorting, Eulerian circuits and
//!   connectivity

pub mod algorithms;
pub mod basic;

pub use algorithms::{
    dfs, dfs_with_order, find_components, find_eulerian_circuit,
    find_strongly_connected_components, has_circuit, has_eulerian_circuit, is_connected,
    is_strongly_connected, topological_sort, topological_sort_dfs, ClassifiedEdge, DfsForest,
    EdgeClass, Timestamp,
};
pub use basic::{Cursor, Graph, NeighborList, VertexKey};
