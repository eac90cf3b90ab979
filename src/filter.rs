//! Search filtering over the tree.
//!
//! Filtering is a pure function: it never touches widget state. The set of
//! folders that must be expanded so every match is visible is returned
//! alongside the pruned tree, and merging that set into the expansion state is
//! an explicit transition owned by the state machine.

use std::collections::HashSet;

use crate::node::TreeNode;

/// Result of one filter pass.
#[derive(Debug, Clone, Default)]
pub struct FilterOutcome {
    /// The pruned tree: nodes whose name matches the query plus every ancestor
    /// of a match.
    pub nodes: Vec<TreeNode>,
    /// Every folder kept by the pass. Expanding all of them makes every match
    /// reachable without manual expansion.
    pub auto_expand: HashSet<String>,
}

/// Case-insensitive substring match on the node name.
pub fn name_matches(name: &str, lowered_query: &str) -> bool {
    name.to_lowercase().contains(lowered_query)
}

/// Filter a forest by a search query.
///
/// A node is kept if its name contains the query (case-insensitive) or if any
/// child survives filtering. Children of a kept node are always the filtered
/// children, so a folder that matches by name but has no matching descendants
/// is kept childless. An empty query is the identity.
pub fn filter_tree(nodes: &[TreeNode], query: &str) -> FilterOutcome {
    if query.is_empty() {
        return FilterOutcome {
            nodes: nodes.to_vec(),
            auto_expand: HashSet::new(),
        };
    }

    let lowered = query.to_lowercase();
    let mut auto_expand = HashSet::new();
    let kept = filter_nodes(nodes, &lowered, &mut auto_expand);

    log::debug!(
        "filter: query {:?} kept {} root nodes, {} folders to expand",
        query,
        kept.len(),
        auto_expand.len()
    );

    FilterOutcome {
        nodes: kept,
        auto_expand,
    }
}

fn filter_nodes(
    nodes: &[TreeNode],
    lowered_query: &str,
    auto_expand: &mut HashSet<String>,
) -> Vec<TreeNode> {
    let mut kept = Vec::new();

    for node in nodes {
        let matches = name_matches(&node.name, lowered_query);
        let children = filter_nodes(&node.children, lowered_query, auto_expand);

        if matches || !children.is_empty() {
            if node.is_folder() {
                auto_expand.insert(node.id.clone());
            }
            kept.push(TreeNode {
                id: node.id.clone(),
                name: node.name.clone(),
                kind: node.kind,
                children,
            });
        }
    }

    kept
}
