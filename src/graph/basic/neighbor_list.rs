//! Ordered per-vertex neighbor storage.
//!
//! A `NeighborList` keeps outgoing edge records in insertion order and never
//! reorders them; traversal-order-dependent results (DFS forests, topological
//! orders, Eulerian circuits) rely on that. Records hold dense vertex slots,
//! not user keys, so the list stays `Copy`-cheap to scan.

/// An ordered sequence of neighbor slots for one vertex.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `append` | \(O(1)\) amortized | Pushes to the tail |
/// | `remove_first` | \(O(\text{degree})\) | Linear scan, preserves order |
/// | `position` | \(O(\text{degree})\) | Linear scan |
/// | `len` | \(O(1)\) | |
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NeighborList {
    targets: Vec<usize>,
}

impl NeighborList {
    /// Creates an empty list.
    pub const fn new() -> Self {
        Self {
            targets: Vec::new(),
        }
    }

    /// Appends a record pointing at `target`.
    pub fn append(&mut self, target: usize) {
        self.targets.push(target);
    }

    /// Removes the first record pointing at `target`.
    ///
    /// Returns `false` (and leaves the list untouched) if no record matches.
    pub fn remove_first(&mut self, target: usize) -> bool {
        match self.position(target) {
            Some(idx) => {
                self.targets.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Returns the index of the first record pointing at `target`.
    pub fn position(&self, target: usize) -> Option<usize> {
        self.targets.iter().position(|&t| t == target)
    }

    /// Returns `true` if some record points at `target`.
    pub fn contains(&self, target: usize) -> bool {
        self.position(target).is_some()
    }

    /// Returns the target stored at `slot`.
    pub fn get(&self, slot: usize) -> Option<usize> {
        self.targets.get(slot).copied()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Returns `true` if the list holds no records.
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Iterates targets in insertion order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = usize> + '_ {
        self.targets.iter().copied()
    }

    /// Returns a cursor positioned at the first record.
    pub const fn cursor(&self) -> Cursor {
        Cursor { slot: 0 }
    }
}

impl<'a> IntoIterator for &'a NeighborList {
    type Item = usize;
    type IntoIter = core::iter::Copied<core::slice::Iter<'a, usize>>;

    fn into_iter(self) -> Self::IntoIter {
        self.targets.iter().copied()
    }
}

/// A detached position into a [`NeighborList`].
///
/// The cursor borrows nothing, so it can be stored in per-algorithm scratch
/// tables and resumed after arbitrary reads of the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    slot: usize,
}

impl Cursor {
    /// Index of the record the cursor points at.
    pub const fn slot(self) -> usize {
        self.slot
    }

    /// Returns the target under the cursor, or `None` once exhausted.
    pub fn current(self, list: &NeighborList) -> Option<usize> {
        list.get(self.slot)
    }

    /// Moves past the current record.
    pub fn advance(&mut self) {
        self.slot += 1;
    }

    /// Returns `true` when no records remain ahead of the cursor.
    pub fn is_exhausted(self, list: &NeighborList) -> bool {
        self.slot >= list.len()
    }
}
