/// Shared fixtures for unit tests: hand-built snapshots and a proptest
/// strategy that generates well-formed trees.
use crate::model::{FileTree, SnapshotNode};
use proptest::prelude::*;

pub(crate) fn file(name: &str, size: u64) -> SnapshotNode {
    SnapshotNode {
        name: name.into(),
        size,
        file_count: 1,
        children: Vec::new(),
    }
}

/// A directory whose totals are the sums of `children`.
pub(crate) fn dir(name: &str, children: Vec<SnapshotNode>) -> SnapshotNode {
    SnapshotNode {
        name: name.into(),
        size: children.iter().map(|c| c.size).sum(),
        file_count: children.iter().map(|c| c.file_count).sum(),
        children,
    }
}

pub(crate) fn tree(snapshot: &SnapshotNode) -> FileTree {
    FileTree::from_snapshot(snapshot).expect("fixture totals are consistent")
}

/// root
/// ├── docs (300)
/// │   ├── a.txt (100)
/// │   └── b.txt (200)
/// ├── notes.md (100)
/// └── empty/
pub(crate) fn sample_tree() -> FileTree {
    tree(&dir(
        "root",
        vec![
            dir("docs", vec![file("a.txt", 100), file("b.txt", 200)]),
            file("notes.md", 100),
            dir("empty", Vec::new()),
        ],
    ))
}

/// Arbitrary trees up to four levels deep, zero-byte files and empty
/// directories included.
pub(crate) fn arb_snapshot() -> impl Strategy<Value = SnapshotNode> {
    let leaf = prop_oneof![
        4 => (0u64..10_000).prop_map(|size| file("f", size)),
        1 => Just(dir("empty", Vec::new())),
    ];
    leaf.prop_recursive(4, 64, 6, |inner| {
        prop::collection::vec(inner, 0..6).prop_map(|children| dir("d", children))
    })
}
