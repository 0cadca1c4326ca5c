/// Scanner module — builds the aggregate tree from the filesystem.
///
/// [`scan`] is a blocking, single-threaded depth-first walk. [`start_scan`]
/// runs the same walk on a background thread and reports over a crossbeam
/// channel so a UI stays responsive; the finished tree is moved to the
/// receiver in [`ScanProgress::Complete`]. There is no cancellation: a scan
/// runs to completion or fails.
pub mod error;
pub mod progress;
mod walk;

pub use error::ScanError;
pub use progress::{ScanCounters, ScanProgress};

use crate::model::{ChildOrder, FileTree};
use crossbeam_channel::Receiver;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

/// Maximum number of progress messages that may queue up in the channel.
///
/// `Update` messages are sent with `try_send` and silently dropped when the
/// channel is full; the terminal `Complete`/`Failed` message always blocks
/// until there is room.
pub const PROGRESS_CHANNEL_CAPACITY: usize = 256;

/// What to scan and how to order the result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanOptions {
    /// Directory base names that are skipped entirely (files are never excluded).
    pub excluded_names: BTreeSet<String>,
    /// Order of each directory's children.
    pub child_order: ChildOrder,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            excluded_names: BTreeSet::from([".git".to_string()]),
            child_order: ChildOrder::Enumeration,
        }
    }
}

impl ScanOptions {
    /// `true` if a directory called `name` must be skipped.
    pub fn is_excluded(&self, name: &str) -> bool {
        self.excluded_names.contains(name)
    }
}

/// An entry left out of the totals because it could not be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedEntry {
    pub path: PathBuf,
    pub message: String,
}

/// Counters describing a finished scan.
#[derive(Debug, Clone, Default)]
pub struct ScanStats {
    /// Files (leaves) included in the tree.
    pub files: u64,
    /// Directories included in the tree, the root among them.
    pub dirs: u64,
    /// Directories skipped because their name is excluded.
    pub excluded: u64,
    /// Entries skipped because they could not be read.
    pub skipped: Vec<SkippedEntry>,
    pub duration: Duration,
}

/// The output of a successful scan.
#[derive(Debug, Clone)]
pub struct ScanResult {
    pub tree: FileTree,
    pub stats: ScanStats,
}

/// Scan `path` and build its aggregate tree.
///
/// Fails only if the root itself is missing or unreadable; every other
/// failure is recorded in [`ScanStats::skipped`] and the scan carries on.
pub fn scan(path: &Path, options: &ScanOptions) -> Result<ScanResult, ScanError> {
    walk::walk(path, options, |_| {})
}

/// Like [`scan`], calling `on_progress` with running totals every few
/// hundred entries.
pub fn scan_with_progress<F: FnMut(&ScanCounters)>(
    path: &Path,
    options: &ScanOptions,
    on_progress: F,
) -> Result<ScanResult, ScanError> {
    walk::walk(path, options, on_progress)
}

/// Handle to a running or completed background scan.
pub struct ScanHandle {
    /// Receiver for progress updates and the final result.
    pub progress_rx: Receiver<ScanProgress>,
    /// Join handle for the scan thread.
    _thread: Option<thread::JoinHandle<()>>,
}

/// Start a scan of `root_path` on a background thread.
pub fn start_scan(root_path: PathBuf, options: ScanOptions) -> std::io::Result<ScanHandle> {
    let (progress_tx, progress_rx) =
        crossbeam_channel::bounded::<ScanProgress>(PROGRESS_CHANNEL_CAPACITY);

    let thread = thread::Builder::new()
        .name("dirburst-scanner".into())
        .spawn(move || {
            let update_tx = progress_tx.clone();
            let outcome = scan_with_progress(&root_path, &options, |counters| {
                let _ = update_tx.try_send(ScanProgress::Update(counters.clone()));
            });
            let msg = match outcome {
                Ok(result) => ScanProgress::Complete(Box::new(result)),
                Err(err) => {
                    tracing::error!("Scan failed: {err}");
                    ScanProgress::Failed(err)
                }
            };
            // The receiver may already be gone if the UI started another scan.
            let _ = progress_tx.send(msg);
        })?;

    Ok(ScanHandle {
        progress_rx,
        _thread: Some(thread),
    })
}
