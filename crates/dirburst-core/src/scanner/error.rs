/// Scan error taxonomy.
use std::path::PathBuf;

/// Errors raised while building the aggregate tree.
///
/// `NotFound` and `Unreadable` abort the scan and carry no partial result.
/// `EntryUnreadable` never escapes [`scan`](crate::scanner::scan): the entry
/// is skipped, logged and recorded in [`ScanStats::skipped`](crate::scanner::ScanStats).
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    /// The scan root does not exist.
    #[error("path does not exist: {}", .path.display())]
    NotFound { path: PathBuf },

    /// The scan root exists but cannot be stat'd or enumerated.
    #[error("cannot read {}: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A single entry below the root could not be read.
    #[error("skipped unreadable entry {}: {source}", .path.display())]
    EntryUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ScanError {
    /// Classify an I/O failure on the scan root.
    pub(crate) fn for_root(path: PathBuf, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound { path }
        } else {
            Self::Unreadable { path, source }
        }
    }
}
