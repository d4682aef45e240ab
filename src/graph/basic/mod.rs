//! Basic graph representation.
//!
//! [`Graph`] owns the vertex set and one [`NeighborList`] per vertex; the
//! algorithm modules only ever read it.

pub mod adj_list;
pub mod neighbor_list;

pub use adj_list::{Graph, VertexKey};
pub use neighbor_list::{Cursor, NeighborList};
