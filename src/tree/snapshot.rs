use std::fmt::Write;

use serde::Serialize;

use super::{children, label, NodeKind, TreeNode};
use crate::model::ServerList;

#[derive(Debug, Clone, Serialize)]
pub struct TreeNodeSnapshot {
    pub label: String,
    pub path: String, // "", "0", "0/1", "0/1/2"
    pub kind: NodeKind,
    pub children: Vec<TreeNodeSnapshot>,
}

/// One row of an expanded node, without its own subtree
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChildSummary {
    pub label: String,
    pub path: String,
    pub kind: NodeKind,
}

impl ChildSummary {
    pub fn of(list: &ServerList, node: &TreeNode) -> Self {
        Self {
            label: label(list, node).unwrap_or_default(),
            path: node.path(),
            kind: node.kind(list),
        }
    }
}

/// Fully expands `node`
pub fn build_tree_snapshot(list: &ServerList, node: &TreeNode) -> TreeNodeSnapshot {
    let children = children(list, node)
        .iter()
        .map(|child| build_tree_snapshot(list, child))
        .collect();

    TreeNodeSnapshot {
        label: label(list, node).unwrap_or_default(),
        path: node.path(),
        kind: node.kind(list),
        children,
    }
}

impl TreeNodeSnapshot {
    /// Indented text outline, two spaces per level
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out, 0);
        out
    }

    fn render_into(&self, out: &mut String, depth: usize) {
        let _ = writeln!(out, "{}{}", "  ".repeat(depth), self.label);
        for child in &self.children {
            child.render_into(out, depth + 1);
        }
    }

    pub fn count(&self) -> usize {
        1 + self.children.iter().map(TreeNodeSnapshot::count).sum::<usize>()
    }
}
