//! Error taxonomy for graph operations.
//!
//! Every failure is reported synchronously to the caller; nothing in this crate
//! retries, logs-and-continues, or hands back a partial result.

use thiserror::Error;

/// Which kind of graph an operation requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directedness {
    /// Edges are ordered pairs.
    Directed,
    /// Edges are unordered pairs.
    Undirected,
}

impl Directedness {
    /// Maps a `directed` flag onto the enum.
    pub const fn from_flag(directed: bool) -> Self {
        if directed {
            Self::Directed
        } else {
            Self::Undirected
        }
    }
}

impl core::fmt::Display for Directedness {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Directed => f.write_str("directed"),
            Self::Undirected => f.write_str("undirected"),
        }
    }
}

/// The error type returned by graph queries and algorithms.
///
/// # Error Categories
///
/// - [`GraphError::UnknownVertex`] - a key was never added to the graph
/// - [`GraphError::InvalidGraph`] - the operation needs the other kind of graph
/// - [`GraphError::CircuitDetected`] - indegree peeling left vertices behind
/// - [`GraphError::NoEulerianCircuit`] - the degree condition (or edge coverage) fails
///
/// # Examples
///
/// ```rust
/// use graphkit::{topological_sort, Graph, GraphError};
///
/// let g = Graph::from_edges(true, [("a", "b"), ("b", "a")]);
/// match topological_sort(&g) {
///     Err(GraphError::CircuitDetected { remaining }) => assert_eq!(remaining, 2),
///     other => panic!("unexpected result: {other:?}"),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// An operation referenced a vertex key that was never added.
    #[error("unknown vertex {vertex}")]
    UnknownVertex {
        /// `Debug` rendering of the offending key.
        vertex: String,
    },

    /// The directedness precondition of an operation was violated.
    #[error("{operation} requires a {expected} graph")]
    InvalidGraph {
        /// Name of the rejected operation.
        operation: &'static str,
        /// The kind of graph the operation accepts.
        expected: Directedness,
    },

    /// Indegree-based topological sort could not peel every vertex: a cycle exists.
    #[error("a circuit was found: {remaining} vertices keep a nonzero indegree")]
    CircuitDetected {
        /// Number of vertices whose indegree never reached zero.
        remaining: usize,
    },

    /// The graph has no Eulerian circuit.
    #[error("an eulerian circuit cannot be found in a non-eulerian graph")]
    NoEulerianCircuit,
}

impl GraphError {
    pub(crate) fn unknown_vertex<K: core::fmt::Debug>(vertex: &K) -> Self {
        Self::UnknownVertex {
            vertex: format!("{vertex:?}"),
        }
    }

    pub(crate) fn require(
        directed: bool,
        expected: Directedness,
        operation: &'static str,
    ) -> Result<()> {
        if Directedness::from_flag(directed) == expected {
            Ok(())
        } else {
            Err(Self::InvalidGraph {
                operation,
                expected,
            })
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, GraphError>;
