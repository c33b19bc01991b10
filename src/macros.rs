//! Crate-internal diagnostic macros.

/// Emits a `tracing::debug!` event when the `tracing` feature is enabled.
///
/// Without the feature the invocation expands to nothing, so arguments must not
/// carry side effects.
///
/// ```ignore
/// trace!(nodes = graph.node_count(), "dijkstra start");
/// ```
macro_rules! trace {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        {
            ::tracing::debug!($($arg)*);
        }
    };
}
