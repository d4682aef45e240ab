//! Feature-gated logging.
//!
//! With the `tracing` feature enabled, [`trace_event!`] forwards to the
//! matching `tracing` macro; without it the invocation expands to nothing and
//! its arguments are never evaluated.

/// Emits a `tracing` event at the given level.
///
/// ```ignore
/// trace_event!(debug, vertices = n, "dfs forest built");
/// ```
#[cfg(feature = "tracing")]
macro_rules! trace_event {
    ($level:ident, $($arg:tt)+) => {
        ::tracing::$level!($($arg)+)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_event {
    ($level:ident, $($arg:tt)+) => {};
}

pub(crate) use trace_event;
