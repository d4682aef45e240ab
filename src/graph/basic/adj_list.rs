//! Keyed adjacency-list graph.
//!
//! Vertices are identified by caller-supplied keys and stored densely: the first
//! time a key is seen it is assigned the next `usize` slot, and a `HashMap` maps
//! keys back to slots. Each slot owns a [`NeighborList`] in insertion order.
//!
//! Directedness is fixed at construction:
//! - directed: `add_edge(u, v)` appends one record, to `u`'s list only
//! - undirected: `add_edge(u, v)` appends a record to `u`'s list **and** one to
//!   `v`'s list (a self-loop therefore contributes two records to one list)
//!
//! Multi-edges are kept as-is; nothing is deduplicated.

use core::fmt;
use core::hash::Hash;
use std::collections::HashMap;

use super::neighbor_list::NeighborList;
use crate::error::{GraphError, Result};

/// Bounds required of a vertex key.
///
/// Uniqueness is the only semantic requirement; `Debug` is used for error
/// messages and the edge listing produced by `Display`.
pub trait VertexKey: Clone + Eq + Hash + fmt::Debug {}

impl<T: Clone + Eq + Hash + fmt::Debug> VertexKey for T {}

/// A mutable graph over keys of type `K`.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `add_vertex` | \(O(1)\) amortized | Hash insert + push |
/// | `add_edge` | \(O(1)\) amortized | No duplicate check |
/// | `delete_edge` | \(O(\text{degree})\) | First matching record only |
/// | `neighbors` | \(O(\text{degree})\) | Clones keys |
/// | `in_degree` | \(O(n + m)\) | Scans every list |
/// | `transpose` | \(O(n + m)\) | Builds a new graph |
#[derive(Debug, Clone)]
pub struct Graph<K> {
    directed: bool,
    keys: Vec<K>,
    slots: HashMap<K, usize>,
    adjacency: Vec<NeighborList>,
}

impl<K: VertexKey> Graph<K> {
    /// Creates an empty graph.
    pub fn new(directed: bool) -> Self {
        Self {
            directed,
            keys: Vec::new(),
            slots: HashMap::new(),
            adjacency: Vec::new(),
        }
    }

    /// Creates an empty directed graph.
    pub fn directed() -> Self {
        Self::new(true)
    }

    /// Creates an empty undirected graph.
    pub fn undirected() -> Self {
        Self::new(false)
    }

    /// Builds a graph by calling [`Graph::add_edge`] for every pair, in order.
    pub fn from_edges<I>(directed: bool, edges: I) -> Self
    where
        I: IntoIterator<Item = (K, K)>,
    {
        let mut graph = Self::new(directed);
        for (u, v) in edges {
            graph.add_edge(u, v);
        }
        graph
    }

    /// Returns `true` for a directed graph.
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Inserts `v` with an empty neighbor list if it is absent.
    ///
    /// Idempotent. Returns the vertex's dense slot either way.
    pub fn add_vertex(&mut self, v: K) -> usize {
        if let Some(&slot) = self.slots.get(&v) {
            return slot;
        }
        let slot = self.keys.len();
        self.slots.insert(v.clone(), slot);
        self.keys.push(v);
        self.adjacency.push(NeighborList::new());
        slot
    }

    /// Adds the edge `(u, v)`, creating either endpoint as needed.
    pub fn add_edge(&mut self, u: K, v: K) {
        let from = self.add_vertex(u);
        let to = self.add_vertex(v);
        self.adjacency[from].append(to);
        if !self.directed {
            self.adjacency[to].append(from);
        }
    }

    /// Removes the first record `u -> v` (and the first `v -> u` when undirected).
    ///
    /// Deleting an edge that does not exist, or whose endpoints were never
    /// added, is not an error. Returns `true` if a record was removed from
    /// `u`'s list.
    pub fn delete_edge(&mut self, u: &K, v: &K) -> bool {
        let (Some(from), Some(to)) = (self.slot_of(u), self.slot_of(v)) else {
            return false;
        };
        let removed = self.adjacency[from].remove_first(to);
        if !self.directed {
            self.adjacency[to].remove_first(from);
        }
        removed
    }

    /// Returns the keys reachable from `v` by one edge, in list order.
    ///
    /// # Errors
    /// [`GraphError::UnknownVertex`] if `v` was never added.
    pub fn neighbors(&self, v: &K) -> Result<Vec<K>> {
        let list = self.neighbor_list(v)?;
        Ok(list.iter().map(|t| self.keys[t].clone()).collect())
    }

    /// Returns the raw neighbor records of `v`.
    ///
    /// # Errors
    /// [`GraphError::UnknownVertex`] if `v` was never added.
    pub fn neighbor_list(&self, v: &K) -> Result<&NeighborList> {
        let slot = self.require_slot(v)?;
        Ok(&self.adjacency[slot])
    }

    /// Returns `true` if `v` appears in `u`'s neighbor list.
    ///
    /// # Errors
    /// [`GraphError::UnknownVertex`] if `u` was never added.
    pub fn are_neighbors(&self, u: &K, v: &K) -> Result<bool> {
        let list = self.neighbor_list(u)?;
        Ok(self.slot_of(v).is_some_and(|to| list.contains(to)))
    }

    /// All vertex keys, in insertion order.
    pub fn vertices(&self) -> &[K] {
        &self.keys
    }

    /// Every `(u, v)` record: vertices in order, then each neighbor list in order.
    ///
    /// An undirected edge is listed twice, once from each endpoint.
    pub fn edges(&self) -> Vec<(K, K)> {
        self.edge_slots()
            .map(|(u, v)| (self.keys[u].clone(), self.keys[v].clone()))
            .collect()
    }

    /// Returns `true` if `v` has been added.
    pub fn contains_vertex(&self, v: &K) -> bool {
        self.slots.contains_key(v)
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.keys.len()
    }

    /// Number of logical edges; an undirected edge counts once.
    pub fn edge_count(&self) -> usize {
        let records: usize = self.adjacency.iter().map(NeighborList::len).sum();
        if self.directed {
            records
        } else {
            records / 2
        }
    }

    /// Length of `v`'s neighbor list.
    ///
    /// # Errors
    /// [`GraphError::UnknownVertex`] if `v` was never added.
    pub fn out_degree(&self, v: &K) -> Result<usize> {
        self.neighbor_list(v).map(NeighborList::len)
    }

    /// Number of records, across all lists, that target `v`.
    ///
    /// # Errors
    /// [`GraphError::UnknownVertex`] if `v` was never added.
    pub fn in_degree(&self, v: &K) -> Result<usize> {
        let slot = self.require_slot(v)?;
        Ok(self.edge_slots().filter(|&(_, t)| t == slot).count())
    }

    /// Returns a graph with every directed edge reversed.
    ///
    /// The vertex set (and its order) is preserved, isolated vertices included.
    /// An undirected graph is already symmetric, so its transpose is a copy.
    pub fn transpose(&self) -> Self {
        if !self.directed {
            return self.clone();
        }
        let mut transposed = Self::new(true);
        for key in &self.keys {
            transposed.add_vertex(key.clone());
        }
        for (u, v) in self.edge_slots() {
            transposed.adjacency[v].append(u);
        }
        transposed
    }

    pub(crate) fn slot_of(&self, v: &K) -> Option<usize> {
        self.slots.get(v).copied()
    }

    pub(crate) fn require_slot(&self, v: &K) -> Result<usize> {
        self.slot_of(v).ok_or_else(|| GraphError::unknown_vertex(v))
    }

    pub(crate) fn key(&self, slot: usize) -> &K {
        &self.keys[slot]
    }

    pub(crate) fn list(&self, slot: usize) -> &NeighborList {
        &self.adjacency[slot]
    }

    pub(crate) fn edge_slots(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(u, list)| list.iter().map(move |v| (u, v)))
    }
}

impl<K: VertexKey> Default for Graph<K> {
    fn default() -> Self {
        Self::directed()
    }
}

/// Lists every edge record as `(u, v)`, one per line.
impl<K: VertexKey> fmt::Display for Graph<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (u, v) in self.edge_slots() {
            writeln!(f, "({:?}, {:?})", self.keys[u], self.keys[v])?;
        }
        Ok(())
    }
}
