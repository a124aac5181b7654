//! Path tree structure

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::trace::DecisionNode;

/// Leaf coloring, taken from the resolved decision
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeafTone {
    Applied,
    NotApplied,
    Undetermined,
}

impl From<Option<bool>> for LeafTone {
    fn from(decision: Option<bool>) -> Self {
        match decision {
            Some(true) => LeafTone::Applied,
            Some(false) => LeafTone::NotApplied,
            None => LeafTone::Undetermined,
        }
    }
}

/// How a node is drawn
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeStyle {
    /// Comparison held
    Taken,
    /// Comparison failed (de-emphasized)
    NotTaken,
    /// Terminal node
    Leaf(LeafTone),
}

/// Connector label
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BranchLabel {
    True,
    False,
}

impl From<bool> for BranchLabel {
    fn from(passed: bool) -> Self {
        if passed {
            BranchLabel::True
        } else {
            BranchLabel::False
        }
    }
}

impl fmt::Display for BranchLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BranchLabel::True => f.write_str("True"),
            BranchLabel::False => f.write_str("False"),
        }
    }
}

/// One rendered node
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TreeNode {
    pub node_id: i64,
    pub feature_name: String,
    pub condition: String,
    pub threshold: f64,
    pub feature_value: f64,
    pub style: NodeStyle,
    /// Nesting level, 0 for the root
    pub depth: usize,
    /// Connector from the previous node; `None` on the root
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub incoming: Option<BranchLabel>,
    /// Connector to the next node; `None` on the last node of the path
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outgoing: Option<BranchLabel>,
}

impl TreeNode {
    pub fn is_leaf(&self) -> bool {
        matches!(self.style, NodeStyle::Leaf(_))
    }
}

/// Reconstructed decision path
///
/// Stored flat in path order; nesting exists only through `depth` and the
/// connector labels.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PathTree {
    pub nodes: Vec<TreeNode>,
}

impl PathTree {
    /// Build the tree from the flat path.
    ///
    /// `decision` colors the LEAF; the LEAF's own `passed` flag is ignored.
    pub fn build(path: &[DecisionNode], decision: Option<bool>) -> Self {
        let tone = LeafTone::from(decision);
        let last = path.len().saturating_sub(1);

        let nodes = path
            .iter()
            .enumerate()
            .map(|(i, node)| {
                let style = if node.is_leaf() {
                    NodeStyle::Leaf(tone)
                } else if node.passed {
                    NodeStyle::Taken
                } else {
                    NodeStyle::NotTaken
                };

                TreeNode {
                    node_id: node.node_id,
                    feature_name: node.feature_name.clone(),
                    condition: node.condition.clone(),
                    threshold: node.threshold,
                    feature_value: node.feature_value,
                    style,
                    depth: i,
                    incoming: i.checked_sub(1).map(|prev| BranchLabel::from(path[prev].passed)),
                    outgoing: (i < last).then(|| BranchLabel::from(node.passed)),
                }
            })
            .collect();

        Self { nodes }
    }

    /// Nodes root first, with depth and incoming connector
    pub fn walk(&self) -> Walk<'_> {
        Walk { inner: self.nodes.iter() }
    }

    /// Number of rendered nodes (equals the path length)
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of True/False connectors
    pub fn connector_count(&self) -> usize {
        self.nodes.iter().filter(|node| node.outgoing.is_some()).count()
    }

    /// Root node
    pub fn root(&self) -> Option<&TreeNode> {
        self.nodes.first()
    }

    /// Last node on the path
    pub fn last(&self) -> Option<&TreeNode> {
        self.nodes.last()
    }
}

/// Iterator over a [`PathTree`]: `(node, depth, incoming label)`
pub struct Walk<'a> {
    inner: std::slice::Iter<'a, TreeNode>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = (&'a TreeNode, usize, Option<BranchLabel>);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|node| (node, node.depth, node.incoming))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}
