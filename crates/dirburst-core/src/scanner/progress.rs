/// Scan progress reporting — lightweight messages sent from the scan
/// thread to the UI thread via a crossbeam channel.
use super::error::ScanError;
use super::ScanResult;

/// Running totals, reported every few hundred entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanCounters {
    pub files_found: u64,
    pub dirs_found: u64,
    pub total_size: u64,
    pub current_path: String,
}

/// Messages sent from the scan thread to the UI.
#[derive(Debug)]
pub enum ScanProgress {
    /// Periodic update with running totals. Dropped when the channel is full.
    Update(ScanCounters),
    /// Scanning finished; the finished tree moves to the receiver.
    Complete(Box<ScanResult>),
    /// The scan root was missing or unreadable.
    Failed(ScanError),
}
