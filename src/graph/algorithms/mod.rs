//! DFS-based algorithms over [`Graph`](crate::graph::basic::Graph).
//!
//! Data flows one way: the graph feeds the DFS engine, which in turn feeds
//! topological sorting and connectivity analysis. Eulerian construction reads
//! the graph directly.

pub mod connectivity;
pub mod dfs;
pub mod eulerian;
mod math_assert;
pub mod topological;

pub use connectivity::{
    find_components, find_strongly_connected_components, is_connected, is_strongly_connected,
};
pub use dfs::{dfs, dfs_with_order, ClassifiedEdge, DfsForest, EdgeClass, Timestamp};
pub use eulerian::{find_eulerian_circuit, has_eulerian_circuit};
pub use topological::{has_circuit, topological_sort, topological_sort_dfs};
