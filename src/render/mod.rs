//! Path Tree Rendering
//!
//! Reconstructs the traversed path as a tree: each node links to the next
//! node on the path through a True/False connector. Nodes are stored flat in
//! path order and the nesting is drawn from their depth. Untaken
//! siblings are not part of the trace and are not shown.

mod text;
mod tree;


pub use tree::{BranchLabel, LeafTone, NodeStyle, PathTree, TreeNode, Walk};
