use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::Result;

/// Whether a node is a container or a selectable leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Folder,
    File,
}

/// Represents a single node in the tree
///
/// The JSON shape matches the widget's wire format: `kind` serializes as
/// `"type"`, and `children` may be omitted entirely for leaves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNode {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            children: Vec::new(),
        }
    }

    /// Create a new folder node
    pub fn folder(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(id, name, NodeKind::Folder)
    }

    /// Create a new file node
    pub fn file(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(id, name, NodeKind::File)
    }

    /// Add a child node
    pub fn with_child(mut self, child: TreeNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn is_folder(&self) -> bool {
        self.kind == NodeKind::Folder
    }

    /// Check if this node has children
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

/// Find a node by id anywhere in a forest.
///
/// Ids are a caller contract: they must be unique across the whole tree. On a
/// duplicate id the first pre-order match wins.
pub fn find_node<'a>(nodes: &'a [TreeNode], id: &str) -> Option<&'a TreeNode> {
    for node in nodes {
        if node.id == id {
            return Some(node);
        }
        if let Some(found) = find_node(&node.children, id) {
            return Some(found);
        }
    }
    None
}

/// Load a tree from a JSON file (an array of root nodes).
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<TreeNode>> {
    let content = fs::read_to_string(path)?;
    let nodes: Vec<TreeNode> = serde_json::from_str(&content)?;
    log::info!("Loaded {} root nodes", nodes.len());
    Ok(nodes)
}

const SAMPLE_JSON: &str = include_str!("../data/sample_tree.json");

lazy_static::lazy_static! {
    static ref SAMPLE_TREE: Vec<TreeNode> =
        serde_json::from_str(SAMPLE_JSON).expect("embedded sample tree is valid JSON");
}

/// The demo data set: Documents > {Work > "Project A" > files, Personal > files}.
pub fn sample_tree() -> Vec<TreeNode> {
    SAMPLE_TREE.clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_creation() {
        let file = TreeNode::file("1", "report.pdf");
        assert_eq!(file.id, "1");
        assert_eq!(file.name, "report.pdf");
        assert_eq!(file.kind, NodeKind::File);
        assert!(!file.is_folder());
        assert!(!file.has_children());

        let folder = TreeNode::folder("2", "Documents");
        assert!(folder.is_folder());
        assert!(!folder.has_children());
    }

    #[test]
    fn test_with_child() {
        let folder = TreeNode::folder("1", "Documents")
            .with_child(TreeNode::file("1.1", "resume.pdf"))
            .with_child(TreeNode::folder("1.2", "photos"));

        assert!(folder.has_children());
        assert_eq!(folder.children.len(), 2);
        assert_eq!(folder.children[0].name, "resume.pdf");
        assert_eq!(folder.children[1].name, "photos");
    }

    #[test]
    fn test_find_node() {
        let roots = vec![TreeNode::folder("1", "Documents")
            .with_child(TreeNode::folder("1.1", "Work").with_child(TreeNode::file("1.1.1", "report.pdf")))];

        assert_eq!(find_node(&roots, "1").unwrap().name, "Documents");
        assert_eq!(find_node(&roots, "1.1.1").unwrap().name, "report.pdf");
        assert!(find_node(&roots, "nonexistent").is_none());
    }

    #[test]
    fn test_wire_format() {
        let json = r#"[
            {
                "id": "1",
                "name": "Documents",
                "type": "folder",
                "children": [
                    { "id": "1.1", "name": "resume.pdf", "type": "file" }
                ]
            }
        ]"#;

        let nodes: Vec<TreeNode> = serde_json::from_str(json).unwrap();
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].kind, NodeKind::Folder);
        // Omitted "children" means leaf
        assert!(nodes[0].children[0].children.is_empty());
        assert_eq!(nodes[0].children[0].kind, NodeKind::File);

        // Leaves serialize without a children field
        let out = serde_json::to_string(&nodes[0].children[0]).unwrap();
        assert!(!out.contains("children"));
        assert!(out.contains(r#""type":"file""#));
    }

    #[test]
    fn test_sample_tree() {
        let roots = sample_tree();
        assert_eq!(roots.len(), 1);
        assert_eq!(roots[0].name, "Documents");

        let project_a = find_node(&roots, "1.1.1").unwrap();
        assert_eq!(project_a.name, "Project A");
        assert_eq!(project_a.children.len(), 2);

        // photos is an empty folder, not a file
        let photos = find_node(&roots, "1.2.2").unwrap();
        assert!(photos.is_folder());
        assert!(!photos.has_children());
    }
}
