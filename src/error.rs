//! Error type shared by every graph algorithm.
//!
//! Unreachable nodes are not errors; they are reported as `None` distances.
//! Everything else a caller can get wrong (bad indices, weights an algorithm
//! cannot handle, graphs of the wrong shape) surfaces as a [`GraphError`].

use core::fmt;

/// The error type for graph construction and graph algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GraphError {
    /// A node index was not in `0..node_count`.
    NodeOutOfBounds {
        /// The offending index.
        node: usize,
        /// Number of nodes in the graph.
        node_count: usize,
    },
    /// An edge carried a negative weight where only non-negative weights are valid.
    NegativeWeight {
        /// Tail of the edge.
        from: usize,
        /// Head of the edge.
        to: usize,
    },
    /// A negative-weight cycle is reachable from the source.
    NegativeCycle,
    /// The graph is not connected, so no spanning tree exists.
    Disconnected {
        /// Number of connected components found.
        components: usize,
    },
    /// The graph has a cycle, witnessed by the back edge `from -> to`.
    Cycle {
        /// Tail of the back edge.
        from: usize,
        /// Head of the back edge.
        to: usize,
    },
    /// Source and sink of a flow problem are the same node.
    SourceIsSink {
        /// The node given as both source and sink.
        node: usize,
    },
    /// An accumulated weight did not fit in the weight type.
    WeightOverflow,
    /// Parts of a value disagree with each other, for example a distance
    /// matrix whose cell count is not the square of its node count.
    Inconsistent {
        /// Which parts disagree.
        reason: &'static str,
    },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::NodeOutOfBounds { node, node_count } => {
                write!(f, "node {node} is out of bounds for a graph with {node_count} nodes")
            }
            Self::NegativeWeight { from, to } => {
                write!(f, "edge {from} -> {to} has a negative weight")
            }
            Self::NegativeCycle => f.write_str("a negative-weight cycle is reachable from the source"),
            Self::Disconnected { components } => {
                write!(f, "graph is disconnected ({components} components)")
            }
            Self::Cycle { from, to } => {
                write!(f, "graph contains a cycle through edge {from} -> {to}")
            }
            Self::SourceIsSink { node } => {
                write!(f, "node {node} cannot be both source and sink")
            }
            Self::WeightOverflow => f.write_str("accumulated weight overflowed"),
            Self::Inconsistent { reason } => write!(f, "inconsistent data: {reason}"),
        }
    }
}

impl std::error::Error for GraphError {}

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, GraphError>;
