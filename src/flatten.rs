//! Flattening the displayed tree into keyboard navigation order.

use std::collections::HashSet;

use crate::node::{NodeKind, TreeNode};

/// One entry of the visible order, as the renderer and keyboard navigation see
/// it. Depth is display depth within the currently displayed tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleRow {
    pub id: String,
    pub name: String,
    pub kind: NodeKind,
    pub depth: usize,
    pub has_children: bool,
    pub is_expanded: bool,
}

/// Produce the pre-order, depth-first sequence of visible rows.
///
/// A folder's children are included if and only if its id is in the expansion
/// set. This sequence defines next/previous adjacency for keyboard navigation
/// regardless of nesting depth.
pub fn visible_rows(nodes: &[TreeNode], expanded: &HashSet<String>) -> Vec<VisibleRow> {
    let mut rows = Vec::new();
    for node in nodes {
        collect_rows(node, 0, expanded, &mut rows);
    }
    rows
}

fn collect_rows(
    node: &TreeNode,
    depth: usize,
    expanded: &HashSet<String>,
    rows: &mut Vec<VisibleRow>,
) {
    let is_expanded = expanded.contains(&node.id);

    rows.push(VisibleRow {
        id: node.id.clone(),
        name: node.name.clone(),
        kind: node.kind,
        depth,
        has_children: node.has_children(),
        is_expanded,
    });

    if node.is_folder() && is_expanded {
        for child in &node.children {
            collect_rows(child, depth + 1, expanded, rows);
        }
    }
}
