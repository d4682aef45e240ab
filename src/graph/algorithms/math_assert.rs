//! Debug-only invariant checks for the DFS and Eulerian algorithms.
//!
//! Callers pass the invariant as a boolean together with a short statement
//! of it; the check vanishes from release builds.

/// Panics in debug builds if `condition` is false, quoting `message`.
#[inline(always)]
pub(crate) fn math_assert_msg(condition: bool, message: &str) {
    debug_assert!(condition, "graph invariant violated: {message}");
}
