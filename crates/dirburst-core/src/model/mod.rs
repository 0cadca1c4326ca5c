/// Data model for the DirBurst aggregate tree.
///
/// Re-exports the arena-allocated tree, the serialisable snapshot record
/// and the display formatting helpers.
pub mod file_node;
pub mod file_tree;
pub mod size;
pub mod snapshot;

pub use file_node::{FileNode, NodeIndex};
pub use file_tree::{ChildOrder, FileTree, InvariantViolation};
pub use snapshot::{SnapshotMismatch, SnapshotNode};
