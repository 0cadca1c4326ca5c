/// Output surfaces that work without a window: SVG documents, JSON
/// snapshots and CSV listings.
pub mod export;
pub mod svg;

use crate::model::SnapshotMismatch;
use std::path::PathBuf;

/// Failure to write (or read back) an exported file.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("cannot access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("inconsistent snapshot: {0}")]
    Snapshot(#[from] SnapshotMismatch),
}
