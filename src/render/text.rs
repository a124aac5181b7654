//! Plain-text diagram of a path tree

use super::tree::{LeafTone, NodeStyle, PathTree, TreeNode};

const INDENT: &str = "    ";
/// Deeper nodes stay at this indentation so line width is bounded
const MAX_INDENT_LEVELS: usize = 32;

impl LeafTone {
    fn tag(self) -> &'static str {
        match self {
            LeafTone::Applied => "APPLY",
            LeafTone::NotApplied => "DO NOT APPLY",
            LeafTone::Undetermined => "UNDETERMINED",
        }
    }
}

fn node_line(node: &TreeNode) -> String {
    match node.style {
        NodeStyle::Leaf(tone) => {
            format!("◆ LEAF #{} [{}] {}", node.node_id, tone.tag(), node.condition)
        }
        NodeStyle::Taken => format!(
            "● #{} {}: {} (value {:.4}, threshold {:.4})",
            node.node_id, node.feature_name, node.condition, node.feature_value, node.threshold
        ),
        NodeStyle::NotTaken => format!(
            "○ #{} {}: {} (value {:.4}, threshold {:.4}) [not met]",
            node.node_id, node.feature_name, node.condition, node.feature_value, node.threshold
        ),
    }
}

impl PathTree {
    /// Indented diagram, one line per node
    ///
    /// ```text
    /// ● #0 Persistent Low Load Score: Persistent Low Load Score > 0.60 (value 0.8500, threshold 0.6000)
    /// └─ True ─▶ ◆ LEAF #1 [APPLY] LEAF: ES = True
    /// ```
    pub fn render_text(&self) -> String {
        let mut out = String::new();

        for (node, depth, label) in self.walk() {
            match label {
                None => out.push_str(&node_line(node)),
                Some(label) => {
                    out.push_str(&INDENT.repeat((depth - 1).min(MAX_INDENT_LEVELS)));
                    out.push_str(&format!("└─ {label} ─▶ {}", node_line(node)));
                }
            }
            out.push('\n');
        }

        out
    }
}
