/// Serialisable tree snapshot — the data contract between the aggregator
/// and any renderer.
///
/// A snapshot is a plain nested record `{name, size, fileCount, children}`
/// with no parent links; [`FileTree::from_snapshot`] restores them.
use super::file_node::{FileNode, NodeIndex};
use super::file_tree::FileTree;
use compact_str::CompactString;
use serde::{Deserialize, Serialize};

/// One node of a serialised tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotNode {
    pub name: CompactString,
    pub size: u64,
    pub file_count: u64,
    #[serde(default)]
    pub children: Vec<SnapshotNode>,
}

/// A snapshot whose stated totals disagree with its leaves.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("snapshot node '{name}' states {stated_size} bytes / {stated_files} files, children add up to {size} bytes / {files} files")]
pub struct SnapshotMismatch {
    pub name: String,
    pub stated_size: u64,
    pub stated_files: u64,
    pub size: u64,
    pub files: u64,
}

impl FileTree {
    /// Serialise the subtree rooted at `index`.
    pub fn to_snapshot(&self, index: NodeIndex) -> SnapshotNode {
        let node = self.node(index);
        SnapshotNode {
            name: node.name.clone(),
            size: node.size,
            file_count: node.file_count,
            children: node
                .children
                .iter()
                .map(|&c| self.to_snapshot(c))
                .collect(),
        }
    }

    /// Rebuild an arena tree from a snapshot.
    ///
    /// A node with children, or a leaf counting zero files, becomes a
    /// directory; a leaf counting one file becomes a file. Directory totals
    /// are re-accumulated from the leaves and must match the stated ones.
    pub fn from_snapshot(snapshot: &SnapshotNode) -> Result<Self, SnapshotMismatch> {
        let mut tree = FileTree::new(node_from_snapshot(snapshot, None));
        let root = tree.root();
        for child in &snapshot.children {
            attach_snapshot(&mut tree, root, child)?;
        }
        check_totals(&tree, root, snapshot)?;
        Ok(tree)
    }
}

fn node_from_snapshot(snapshot: &SnapshotNode, parent: Option<NodeIndex>) -> FileNode {
    if snapshot.children.is_empty() && snapshot.file_count == 1 {
        FileNode::new_file(snapshot.name.clone(), snapshot.size, parent)
    } else {
        FileNode::new_dir(snapshot.name.clone(), parent)
    }
}

fn attach_snapshot(
    tree: &mut FileTree,
    parent: NodeIndex,
    snapshot: &SnapshotNode,
) -> Result<(), SnapshotMismatch> {
    let idx = tree.add_node(node_from_snapshot(snapshot, Some(parent)));
    for child in &snapshot.children {
        attach_snapshot(tree, idx, child)?;
    }
    check_totals(tree, idx, snapshot)?;
    tree.add_child(parent, idx);
    Ok(())
}

fn check_totals(
    tree: &FileTree,
    idx: NodeIndex,
    snapshot: &SnapshotNode,
) -> Result<(), SnapshotMismatch> {
    let node = tree.node(idx);
    if node.size == snapshot.size && node.file_count == snapshot.file_count {
        return Ok(());
    }
    Err(SnapshotMismatch {
        name: snapshot.name.to_string(),
        stated_size: snapshot.size,
        stated_files: snapshot.file_count,
        size: node.size,
        files: node.file_count,
    })
}
