/// Arena-backed aggregate tree.
///
/// All nodes live in a single `Vec<FileNode>`. Relationships between nodes
/// use `NodeIndex` (a thin `u32` wrapper) rather than heap pointers, so the
/// `parent` back-link never forms an ownership cycle with `children`.
use super::file_node::{FileNode, NodeIndex};
use std::cmp::Ordering;

/// Canonical ordering applied to each directory's children.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChildOrder {
    /// Whatever order the platform directory listing yields.
    #[default]
    Enumeration,
    /// Byte-wise ascending by name.
    Name,
    /// Largest first, ties broken by name.
    SizeDescending,
}

/// A broken aggregate invariant, reported by [`FileTree::verify`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvariantViolation {
    #[error("node {0:?}: size does not equal the sum of its children")]
    SizeMismatch(NodeIndex),
    #[error("node {0:?}: file count does not equal the sum of its children")]
    CountMismatch(NodeIndex),
    #[error("file node {0:?} must count exactly one file and have no children")]
    BadFileLeaf(NodeIndex),
    #[error("node {child:?} does not point back to its parent {parent:?}")]
    BrokenParentLink { parent: NodeIndex, child: NodeIndex },
}

/// The complete tree produced by a scan (or loaded from a snapshot).
#[derive(Debug, Clone, PartialEq)]
pub struct FileTree {
    /// Arena: every node in a flat vector.
    pub nodes: Vec<FileNode>,

    /// The scan root. Always index 0 in trees built by the scanner.
    root: NodeIndex,
}

impl FileTree {
    /// Create a tree holding only `root`.
    pub fn new(root: FileNode) -> Self {
        Self::with_capacity(root, 1)
    }

    /// Create a tree holding only `root`, pre-allocating room for
    /// `estimated_nodes` nodes.
    pub fn with_capacity(mut root: FileNode, estimated_nodes: usize) -> Self {
        root.parent = None;
        let mut nodes = Vec::with_capacity(estimated_nodes.max(1));
        nodes.push(root);
        Self {
            nodes,
            root: NodeIndex(0),
        }
    }

    /// Index of the scan root.
    #[inline]
    pub fn root(&self) -> NodeIndex {
        self.root
    }

    /// Allocate a detached node in the arena and return its index.
    ///
    /// The node only becomes part of the tree once [`add_child`](Self::add_child)
    /// links it to a parent.
    pub fn add_node(&mut self, node: FileNode) -> NodeIndex {
        let idx = NodeIndex::new(self.nodes.len());
        self.nodes.push(node);
        idx
    }

    /// Append `child` to `parent`'s children and fold its totals into the parent.
    ///
    /// The child must already be complete (its own subtree aggregated):
    /// totals are accumulated as each child is attached, there is no
    /// separate aggregation pass. Ancestors above `parent` are not touched;
    /// they receive `parent`'s totals when `parent` itself is attached.
    pub fn add_child(&mut self, parent: NodeIndex, child: NodeIndex) {
        let (size, count) = {
            let c = &mut self.nodes[child.idx()];
            c.parent = Some(parent);
            (c.size, c.file_count)
        };
        let p = &mut self.nodes[parent.idx()];
        p.children.push(child);
        p.size += size;
        p.file_count += count;
    }

    /// Reorder `parent`'s children. Totals are unaffected.
    pub fn sort_children(&mut self, parent: NodeIndex, order: ChildOrder) {
        if order == ChildOrder::Enumeration {
            return;
        }
        let mut children = std::mem::take(&mut self.nodes[parent.idx()].children);
        children.sort_by(|a, b| {
            let a = &self.nodes[a.idx()];
            let b = &self.nodes[b.idx()];
            match order {
                ChildOrder::Name => a.name.cmp(&b.name),
                ChildOrder::SizeDescending => {
                    b.size.cmp(&a.size).then_with(|| a.name.cmp(&b.name))
                }
                ChildOrder::Enumeration => Ordering::Equal,
            }
        });
        self.nodes[parent.idx()].children = children;
    }

    /// Get the node at the given index.
    #[inline]
    pub fn node(&self, index: NodeIndex) -> &FileNode {
        &self.nodes[index.idx()]
    }

    /// Direct children of a node, in stored order.
    #[inline]
    pub fn children(&self, index: NodeIndex) -> &[NodeIndex] {
        &self.nodes[index.idx()].children
    }

    /// Parent of a node, `None` for the root.
    #[inline]
    pub fn parent(&self, index: NodeIndex) -> Option<NodeIndex> {
        self.nodes[index.idx()].parent
    }

    /// Aggregated size of the whole tree.
    pub fn total_size(&self) -> u64 {
        self.node(self.root).size
    }

    /// Aggregated file count of the whole tree.
    pub fn total_files(&self) -> u64 {
        self.node(self.root).file_count
    }

    /// Longest child path below `index` (0 for a leaf).
    pub fn max_depth(&self, index: NodeIndex) -> usize {
        self.children(index)
            .iter()
            .map(|&c| self.max_depth(c) + 1)
            .max()
            .unwrap_or(0)
    }

    /// `index` and every node reachable through `children`, in pre-order.
    pub fn descendants(&self, index: NodeIndex) -> Vec<NodeIndex> {
        let mut out = Vec::new();
        self.collect_preorder(index, &mut out);
        out
    }

    fn collect_preorder(&self, index: NodeIndex, out: &mut Vec<NodeIndex>) {
        out.push(index);
        for &child in self.children(index) {
            self.collect_preorder(child, out);
        }
    }

    /// Chain of nodes from the root down to `index`, both inclusive.
    pub fn ancestry(&self, index: NodeIndex) -> Vec<NodeIndex> {
        let mut chain = Vec::new();
        let mut current = Some(index);
        while let Some(idx) = current {
            chain.push(idx);
            current = self.parent(idx);
        }
        chain.reverse();
        chain
    }

    /// Path of `index` relative to the root, segments joined with `/`.
    ///
    /// The root itself is reported by name.
    pub fn relative_path(&self, index: NodeIndex) -> String {
        let chain = self.ancestry(index);
        if chain.len() == 1 {
            return self.node(index).name.to_string();
        }
        chain[1..]
            .iter()
            .map(|&i| self.node(i).name.as_str())
            .collect::<Vec<_>>()
            .join("/")
    }

    /// Check the aggregate invariants for every node under the root.
    pub fn verify(&self) -> Result<(), InvariantViolation> {
        for idx in self.descendants(self.root) {
            let node = self.node(idx);
            if !node.is_dir && (node.file_count != 1 || !node.children.is_empty()) {
                return Err(InvariantViolation::BadFileLeaf(idx));
            }
            if !node.is_dir {
                continue;
            }
            let mut size = 0u64;
            let mut count = 0u64;
            for &child in &node.children {
                let c = self.node(child);
                if c.parent != Some(idx) {
                    return Err(InvariantViolation::BrokenParentLink { parent: idx, child });
                }
                size += c.size;
                count += c.file_count;
            }
            if size != node.size {
                return Err(InvariantViolation::SizeMismatch(idx));
            }
            if count != node.file_count {
                return Err(InvariantViolation::CountMismatch(idx));
            }
        }
        Ok(())
    }

    /// Total number of nodes in the arena.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false` — a tree holds at least its root.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
