/// A single node in the arena-allocated aggregate tree.
///
/// Nodes are stored in a flat `Vec<FileNode>`. Parent-child relationships
/// use indices rather than pointers: `children` owns nothing beyond the
/// indices, and `parent` is a plain back-link used only for navigation.
use compact_str::CompactString;

/// Lightweight index into the arena `Vec<FileNode>`.
///
/// Uses `u32` to keep nodes small — supports up to ~4 billion nodes,
/// which is more than enough for any real filesystem.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeIndex(pub u32);

impl NodeIndex {
    /// Create a new `NodeIndex` from a `usize`.
    #[inline]
    pub fn new(index: usize) -> Self {
        debug_assert!(index <= u32::MAX as usize, "NodeIndex overflow");
        Self(index as u32)
    }

    /// Return the index as a `usize` for Vec indexing.
    #[inline]
    pub fn idx(self) -> usize {
        self.0 as usize
    }
}

/// A single file or directory in the tree.
#[derive(Debug, Clone, PartialEq)]
pub struct FileNode {
    /// File or directory base name (NOT the full path).
    pub name: CompactString,

    /// Size in bytes. For directories this is the sum of all descendant
    /// file sizes, accumulated while the directory is scanned.
    pub size: u64,

    /// Number of descendant *files*. A file counts itself (1); directories
    /// are never counted, so an empty directory has 0.
    pub file_count: u64,

    /// `true` if this node represents a directory.
    pub is_dir: bool,

    /// Index of the parent node. `None` for the scan root.
    pub parent: Option<NodeIndex>,

    /// Children in insertion order.
    pub children: Vec<NodeIndex>,
}

impl FileNode {
    /// Create a new file leaf with the given name and size.
    pub fn new_file(name: CompactString, size: u64, parent: Option<NodeIndex>) -> Self {
        Self {
            name,
            size,
            file_count: 1,
            is_dir: false,
            parent,
            children: Vec::new(),
        }
    }

    /// Create a new, still empty directory node.
    pub fn new_dir(name: CompactString, parent: Option<NodeIndex>) -> Self {
        Self {
            name,
            size: 0,
            file_count: 0,
            is_dir: true,
            parent,
            children: Vec::new(),
        }
    }

    /// `true` if the node has at least one child (can be zoomed into).
    #[inline]
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// `true` for files and for empty or excluded directories.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}
