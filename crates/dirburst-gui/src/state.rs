/// Application state management.
///
/// Centralises all mutable state that the UI reads and writes.
/// The scan thread communicates via a channel; state updates happen
/// in `process_scan_messages()` which runs once per frame. The finished
/// tree is moved into this state and never shared with another thread.
use dirburst_core::chart::{ChartController, ChartEvent, Transition};
use dirburst_core::config::Config;
use dirburst_core::geometry::Point;
use dirburst_core::model::{FileTree, NodeIndex};
use dirburst_core::scanner::{ScanCounters, ScanHandle, ScanProgress, ScanStats};
use std::path::PathBuf;

/// The current phase of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppPhase {
    /// Idle — no scan has been started yet.
    Idle,
    /// Scanning — spinner and live counters.
    Scanning,
    /// A tree is loaded and charted.
    Results,
    /// The last scan failed; `scan_error` says why.
    Failed,
}

/// Maximum number of scan-progress messages drained from the channel per frame.
///
/// Prevents a backlog (e.g. after the window was hidden) from blocking the
/// render thread for a perceptible duration when it is eventually shown again.
const MAX_MESSAGES_PER_FRAME: usize = 300;

/// All application state.
pub struct AppState {
    pub config: Config,

    // ── Scan ───────────────────────────────────────────
    /// Contents of the path field in the toolbar.
    pub scan_path: String,
    pub phase: AppPhase,
    pub scan_handle: Option<ScanHandle>,
    pub scan_counters: ScanCounters,
    /// Statistics of the scan that produced `tree`, if it was scanned.
    pub scan_stats: Option<ScanStats>,
    pub scan_error: Option<String>,

    // ── Results ────────────────────────────────────────
    pub tree: Option<FileTree>,
    pub chart: Option<ChartController>,
    /// Arc under the pointer during the previous frame.
    hovered: Option<NodeIndex>,

    // ── UI state ───────────────────────────────────────
    pub show_about: bool,
    pub show_skipped: bool,
    /// `true` = dark mode (default), `false` = light mode.
    pub dark_mode: bool,
}

impl AppState {
    /// Create initial application state with `scan_path` in the path field.
    pub fn new(config: Config, scan_path: PathBuf) -> Self {
        Self {
            config,
            scan_path: scan_path.to_string_lossy().into_owned(),
            phase: AppPhase::Idle,
            scan_handle: None,
            scan_counters: ScanCounters::default(),
            scan_stats: None,
            scan_error: None,
            tree: None,
            chart: None,
            hovered: None,
            show_about: false,
            show_skipped: false,
            dark_mode: true,
        }
    }

    /// Start a background scan of `path`, discarding the current chart.
    pub fn start_scan(&mut self, path: PathBuf) {
        self.phase = AppPhase::Scanning;
        self.scan_path = path.to_string_lossy().into_owned();
        self.scan_counters = ScanCounters {
            current_path: self.scan_path.clone(),
            ..ScanCounters::default()
        };
        self.scan_stats = None;
        self.scan_error = None;
        self.tree = None;
        self.chart = None;
        self.hovered = None;

        let spawned = dirburst_core::scanner::start_scan(path, self.config.scan.clone());
        self.attach_scan(spawned);
    }

    /// Replace the current scan handle. A previous scan's channel is
    /// dropped either way, so its result can never land.
    fn attach_scan(&mut self, spawned: std::io::Result<ScanHandle>) {
        self.scan_handle = match spawned {
            Ok(handle) => Some(handle),
            Err(err) => {
                tracing::error!("Could not start scan thread: {err}");
                self.fail(format!("could not start scan thread: {err}"));
                None
            }
        };
    }

    /// Show `tree` as the current result and chart its root.
    pub fn set_tree(&mut self, tree: FileTree, stats: Option<ScanStats>) {
        self.chart = Some(ChartController::new(&tree, self.config.chart.clone()));
        self.tree = Some(tree);
        self.scan_stats = stats;
        self.hovered = None;
        self.phase = AppPhase::Results;
    }

    /// Process pending scan progress messages. Called once per frame.
    ///
    /// Returns `true` if the UI should repaint (new data arrived).
    pub fn process_scan_messages(&mut self) -> bool {
        let handle = match &self.scan_handle {
            Some(h) => h,
            None => return false,
        };

        let mut repaint = false;
        let mut messages_this_frame = 0usize;
        while messages_this_frame < MAX_MESSAGES_PER_FRAME {
            let msg = match handle.progress_rx.try_recv() {
                Ok(m) => m,
                Err(crossbeam_channel::TryRecvError::Empty) => break,
                Err(crossbeam_channel::TryRecvError::Disconnected) => {
                    self.scan_handle = None;
                    self.fail("scan thread stopped without a result".to_string());
                    return true;
                }
            };
            messages_this_frame += 1;
            repaint = true;
            match msg {
                ScanProgress::Update(counters) => {
                    self.scan_counters = counters;
                }
                ScanProgress::Complete(result) => {
                    let result = *result;
                    self.scan_handle = None;
                    self.set_tree(result.tree, Some(result.stats));
                    return true;
                }
                ScanProgress::Failed(err) => {
                    self.scan_handle = None;
                    self.fail(err.to_string());
                    return true;
                }
            }
        }
        repaint
    }

    fn fail(&mut self, message: String) {
        self.scan_error = Some(message);
        self.phase = AppPhase::Failed;
    }

    /// Feed the arc under the pointer (if any) to the chart as
    /// enter/move/leave events.
    pub fn pointer_over(&mut self, node: Option<NodeIndex>, pos: Point) {
        let (Some(tree), Some(chart)) = (self.tree.as_ref(), self.chart.as_mut()) else {
            return;
        };
        let event = match (self.hovered, node) {
            (Some(prev), Some(now)) if prev == now => Some(ChartEvent::PointerMove { pos }),
            (_, Some(now)) => Some(ChartEvent::PointerEnter { node: now, pos }),
            (Some(_), None) => Some(ChartEvent::PointerLeave),
            (None, None) => None,
        };
        if let Some(event) = event {
            chart.handle(tree, event);
        }
        self.hovered = node;
    }

    /// Zoom into `node`.
    pub fn select(&mut self, node: NodeIndex) -> Transition {
        self.navigate(ChartEvent::Click(node))
    }

    /// Zoom out to the parent of the display root.
    pub fn go_back(&mut self) -> Transition {
        self.navigate(ChartEvent::GoBack)
    }

    fn navigate(&mut self, event: ChartEvent) -> Transition {
        let (Some(tree), Some(chart)) = (self.tree.as_ref(), self.chart.as_mut()) else {
            return Transition::Unchanged;
        };
        let transition = chart.handle(tree, event);
        if transition != Transition::Unchanged {
            // The tooltip was hidden; the next pointer event re-enters.
            self.hovered = None;
        }
        transition
    }

    /// `true` while the chart can zoom out.
    pub fn can_go_back(&self) -> bool {
        self.chart.as_ref().is_some_and(ChartController::can_go_back)
    }
}
