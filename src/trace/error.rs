//! Trace contract violations.

/// A trace whose path cannot be explained at all.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TraceError {
    #[error("decision path is empty")]
    EmptyPath,

    #[error("LEAF node at position {index} is not the last of {len} path nodes")]
    LeafNotLast { index: usize, len: usize },

    #[error("decision path contains {count} LEAF nodes (expected at most one)")]
    MultipleLeaves { count: usize },
}
