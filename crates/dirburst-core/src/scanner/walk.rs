/// Depth-first directory walker — builds the aggregate tree in one pass.
///
/// The walk is driven by `walkdir`, which yields entries depth-first with
/// each directory's contents directly after the directory itself. A stack
/// of open directories mirrors `DirEntry::depth`: when the walk moves back
/// up, the finished directory is attached to its parent with
/// [`FileTree::add_child`], which folds its size and file count in on the
/// spot. Directory nodes are allocated when their first child arrives (or
/// when they close empty), so nodes still land in the arena in pre-order
/// and an unreadable directory never leaves a node behind.
///
/// Symbolic links are never descended into. A link to a file counts the
/// target's length; a link to a directory is a leaf sized by the link
/// itself; a dangling link is skipped.
use super::error::ScanError;
use super::progress::ScanCounters;
use super::{ScanOptions, ScanResult, ScanStats, SkippedEntry};
use crate::model::{FileNode, FileTree, NodeIndex};
use compact_str::CompactString;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, warn};
use walkdir::{DirEntry, WalkDir};

/// How many entries are processed between two progress callbacks.
const PROGRESS_INTERVAL: u64 = 500;

/// Initial arena capacity; the arena grows as needed.
const ESTIMATED_NODES: usize = 4_096;

/// A directory whose entries are still being walked.
struct OpenDir {
    name: CompactString,
    path: PathBuf,
    /// Allocated on first use.
    node: Option<NodeIndex>,
    /// The directory could not be listed; it is dropped when it closes.
    unreadable: bool,
}

struct Walker<F: FnMut(&ScanCounters)> {
    tree: FileTree,
    stats: ScanStats,
    counters: ScanCounters,
    entries_seen: u64,
    /// `open[d]` is the directory at depth `d`; `open[0]` is the root.
    open: Vec<OpenDir>,
    child_order: crate::model::ChildOrder,
    on_progress: F,
}

/// Walk `root_path`, invoking `on_progress` periodically with running totals.
pub(super) fn walk<F: FnMut(&ScanCounters)>(
    root_path: &Path,
    options: &ScanOptions,
    on_progress: F,
) -> Result<ScanResult, ScanError> {
    let start = Instant::now();
    info!("Starting scan of {}", root_path.display());

    let meta = fs::metadata(root_path)
        .map_err(|err| ScanError::for_root(root_path.to_path_buf(), err))?;
    let root_name = CompactString::new(root_display_name(root_path));

    if !meta.is_dir() {
        // Edge case: the scan root is a single file.
        let tree = FileTree::new(FileNode::new_file(root_name, meta.len(), None));
        let stats = ScanStats {
            files: 1,
            duration: start.elapsed(),
            ..ScanStats::default()
        };
        info!("Scan root is a file ({} bytes)", meta.len());
        return Ok(ScanResult { tree, stats });
    }

    // An unlistable root is fatal, unlike any directory below it.
    fs::read_dir(root_path).map_err(|err| ScanError::for_root(root_path.to_path_buf(), err))?;

    let tree = FileTree::with_capacity(FileNode::new_dir(root_name.clone(), None), ESTIMATED_NODES);
    let mut walker = Walker {
        open: vec![OpenDir {
            name: root_name,
            path: root_path.to_path_buf(),
            node: Some(tree.root()),
            unreadable: false,
        }],
        tree,
        stats: ScanStats {
            dirs: 1,
            ..ScanStats::default()
        },
        counters: ScanCounters {
            dirs_found: 1,
            ..ScanCounters::default()
        },
        entries_seen: 0,
        child_order: options.child_order,
        on_progress,
    };

    let mut excluded = 0u64;
    let entries = WalkDir::new(root_path)
        .follow_links(false)
        .into_iter()
        .filter_entry(|entry| {
            let skip = entry.depth() > 0
                && entry.file_type().is_dir()
                && options.is_excluded(&entry.file_name().to_string_lossy());
            if skip {
                debug!("Excluding directory {}", entry.path().display());
                excluded += 1;
            }
            !skip
        });

    for entry_result in entries {
        match entry_result {
            Ok(entry) if entry.depth() == 0 => {}
            Ok(entry) => walker.visit(entry),
            Err(err) => walker.fail(err),
        }
    }

    walker.close_to(1);
    let root = walker.tree.root();
    walker.tree.sort_children(root, options.child_order);

    let mut stats = walker.stats;
    stats.excluded = excluded;
    stats.duration = start.elapsed();
    info!(
        "Scan complete: {} files, {} dirs, {} bytes, {} skipped, {} excluded in {:?}",
        stats.files,
        stats.dirs,
        walker.tree.total_size(),
        stats.skipped.len(),
        stats.excluded,
        stats.duration
    );

    Ok(ScanResult {
        tree: walker.tree,
        stats,
    })
}

impl<F: FnMut(&ScanCounters)> Walker<F> {
    /// Handle one entry below the root.
    fn visit(&mut self, entry: DirEntry) {
        // Everything deeper than the entry's parent has been fully walked.
        self.close_to(entry.depth());
        let name = CompactString::new(entry.file_name().to_string_lossy());
        let file_type = entry.file_type();

        if file_type.is_dir() {
            self.counters.dirs_found += 1;
            self.open.push(OpenDir {
                name,
                path: entry.path().to_path_buf(),
                node: None,
                unreadable: false,
            });
            self.tick(entry.path());
            return;
        }

        let size = match leaf_size(&entry) {
            Ok(size) => size,
            Err(err) => {
                self.skip(entry.path().to_path_buf(), err);
                return;
            }
        };
        let parent = self.node_at(self.open.len() - 1);
        let child = self.tree.add_node(FileNode::new_file(name, size, Some(parent)));
        self.tree.add_child(parent, child);
        self.stats.files += 1;
        self.counters.files_found += 1;
        self.counters.total_size += size;
        self.tick(entry.path());
    }

    /// Handle an error yielded by the walk.
    fn fail(&mut self, err: walkdir::Error) {
        let path = match err.path() {
            Some(p) => p.to_path_buf(),
            None => self
                .open
                .last()
                .map(|d| d.path.clone())
                .unwrap_or_default(),
        };
        // The directory just entered could not be listed: drop it whole.
        if self.open.len() > 1 {
            if let Some(top) = self.open.last_mut() {
                if top.path == path && top.node.is_none() {
                    top.unreadable = true;
                }
            }
        }
        self.skip(path, err.into());
    }

    /// Attach every open directory at depth `>= depth` to its parent.
    fn close_to(&mut self, depth: usize) {
        while self.open.len() > depth.max(1) {
            let level = self.open.len() - 1;
            if self.open[level].unreadable {
                self.open.pop();
                continue;
            }
            let node = self.node_at(level);
            self.open.pop();
            let parent = self.node_at(level - 1);
            self.tree.sort_children(node, self.child_order);
            self.tree.add_child(parent, node);
            self.stats.dirs += 1;
        }
    }

    /// Arena index of the open directory at `level`, allocating it (and any
    /// unallocated ancestors) first.
    fn node_at(&mut self, level: usize) -> NodeIndex {
        if let Some(node) = self.open[level].node {
            return node;
        }
        let parent = self.node_at(level - 1);
        let dir = &mut self.open[level];
        let node = self
            .tree
            .add_node(FileNode::new_dir(dir.name.clone(), Some(parent)));
        dir.node = Some(node);
        node
    }

    /// Record a per-entry failure and keep going.
    fn skip(&mut self, path: PathBuf, source: std::io::Error) {
        let message = source.to_string();
        warn!(
            "{}",
            ScanError::EntryUnreadable {
                path: path.clone(),
                source
            }
        );
        self.stats.skipped.push(SkippedEntry { path, message });
    }

    fn tick(&mut self, path: &Path) {
        self.entries_seen += 1;
        if self.entries_seen % PROGRESS_INTERVAL == 0 {
            self.counters.current_path = path.to_string_lossy().into_owned();
            (self.on_progress)(&self.counters);
        }
    }
}

/// Byte length of a non-directory entry.
///
/// Links to files report the target's length; links to directories (and
/// other non-file targets) report the link's own length. A dangling link
/// is an error.
fn leaf_size(entry: &DirEntry) -> std::io::Result<u64> {
    if entry.path_is_symlink() {
        let target = fs::metadata(entry.path())?;
        if target.is_file() {
            return Ok(target.len());
        }
    }
    Ok(entry.metadata().map_err(std::io::Error::from)?.len())
}

/// Display name for the scan root: its base name, resolving `.`/`..`
/// where possible, or the path itself for filesystem roots.
fn root_display_name(path: &Path) -> String {
    let resolved = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    match resolved.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => resolved.to_string_lossy().into_owned(),
    }
}
