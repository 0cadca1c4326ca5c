/// End-to-end tests for `AppState` — the GUI application state machine.
///
/// These tests exercise the real business-logic paths of `AppState` without
/// spinning up an egui window, keeping them fast and deterministic.
///
/// **Scope:**
///   - Scan lifecycle (start, progress messages, completion, failure)
///   - Chart navigation (zoom in, go back, ignored clicks)
///   - Pointer tracking and the tooltip
///
/// The real background scanner is used so no mocking is needed.
use dirburst_core::chart::{Transition, TOOLTIP_OFFSET};
use dirburst_core::config::Config;
use dirburst_core::geometry::Point;
use dirburst_core::model::{FileTree, NodeIndex};
use dirburst_gui::state::{AppPhase, AppState};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tempfile::TempDir;

// ── Helpers ───────────────────────────────────────────────────────────────────

fn write_bytes(path: &Path, n: usize) {
    let mut f = fs::File::create(path).unwrap();
    f.write_all(&vec![0u8; n]).unwrap();
}

/// Build a minimal temp directory and return the `TempDir` guard.
///
/// Layout: `a.txt` (100), `b.bin` (200), `sub/c.rs` (300).
fn make_temp_tree() -> TempDir {
    let tmp = TempDir::new().unwrap();
    write_bytes(&tmp.path().join("a.txt"), 100);
    write_bytes(&tmp.path().join("b.bin"), 200);
    let sub = tmp.path().join("sub");
    fs::create_dir_all(&sub).unwrap();
    write_bytes(&sub.join("c.rs"), 300);
    tmp
}

fn new_state(path: &Path) -> AppState {
    AppState::new(Config::default(), path.to_path_buf())
}

/// Pump `process_scan_messages()` until the phase leaves `Scanning` or the
/// deadline expires.
fn pump_until_done(state: &mut AppState) {
    let deadline = std::time::Instant::now() + Duration::from_secs(30);
    while state.phase == AppPhase::Scanning {
        assert!(
            std::time::Instant::now() < deadline,
            "scan did not complete within 30 seconds"
        );
        state.process_scan_messages();
        std::thread::sleep(Duration::from_millis(10));
    }
}

fn scanned_state() -> (TempDir, AppState) {
    let tmp = make_temp_tree();
    let mut state = new_state(tmp.path());
    state.start_scan(tmp.path().to_path_buf());
    pump_until_done(&mut state);
    assert_eq!(state.phase, AppPhase::Results);
    (tmp, state)
}

fn child_named(tree: &FileTree, parent: NodeIndex, name: &str) -> NodeIndex {
    *tree
        .children(parent)
        .iter()
        .find(|&&c| tree.node(c).name == name)
        .unwrap_or_else(|| panic!("no child named {name}"))
}

// ── Scan lifecycle ─────────────────────────────────────────────────────────────

/// A freshly created `AppState` must start in the `Idle` phase.
#[test]
fn new_state_is_idle() {
    let state = new_state(Path::new("."));
    assert_eq!(state.phase, AppPhase::Idle);
    assert!(state.tree.is_none());
    assert!(state.chart.is_none());
    assert!(state.dark_mode, "dark mode must be the default");
}

/// After `start_scan`, the phase must be `Scanning`.
#[test]
fn start_scan_sets_scanning_phase() {
    let tmp = make_temp_tree();
    let mut state = new_state(tmp.path());
    state.start_scan(tmp.path().to_path_buf());
    assert_eq!(state.phase, AppPhase::Scanning);
    assert!(state.scan_handle.is_some());
}

/// Completion charts the scanned tree rooted at the scan directory.
#[test]
fn scan_completes_and_chart_is_available() {
    let (_tmp, state) = scanned_state();

    let tree = state.tree.as_ref().expect("tree must exist");
    assert_eq!(tree.total_size(), 600);
    assert_eq!(tree.total_files(), 3);
    // root + a.txt + b.bin + sub + c.rs
    assert_eq!(tree.len(), 5);

    let chart = state.chart.as_ref().expect("chart must exist");
    assert_eq!(chart.current_root(), tree.root());
    assert!(!state.can_go_back());
    assert!(state.scan_handle.is_none());
    let stats = state.scan_stats.as_ref().expect("stats must exist");
    assert_eq!(stats.files, 3);
}

/// Starting a second scan clears the previous results.
#[test]
fn start_scan_resets_previous_results() {
    let (tmp, mut state) = scanned_state();

    state.start_scan(tmp.path().to_path_buf());
    assert_eq!(state.phase, AppPhase::Scanning);
    assert!(state.tree.is_none(), "previous tree must be cleared");
    assert!(state.chart.is_none(), "previous chart must be cleared");
    assert!(state.scan_stats.is_none());

    pump_until_done(&mut state);
    assert_eq!(state.phase, AppPhase::Results);
}

/// A missing scan root ends in `Failed` with a message.
#[test]
fn scan_of_missing_path_fails() {
    let tmp = TempDir::new().unwrap();
    let missing: PathBuf = tmp.path().join("does-not-exist");
    let mut state = new_state(&missing);
    state.start_scan(missing);
    pump_until_done(&mut state);

    assert_eq!(state.phase, AppPhase::Failed);
    assert!(state.scan_error.is_some());
    assert!(state.tree.is_none());
    assert!(state.chart.is_none());
}

/// `set_tree` charts a tree that did not come from a scan (e.g. a snapshot).
#[test]
fn set_tree_without_stats_shows_results() {
    let (_tmp, scanned) = scanned_state();
    let tree = scanned.tree.expect("tree");

    let mut state = new_state(Path::new("."));
    state.set_tree(tree, None);
    assert_eq!(state.phase, AppPhase::Results);
    assert!(state.chart.is_some());
    assert!(state.scan_stats.is_none());
}

// ── Chart navigation ──────────────────────────────────────────────────────────

/// Zoom into a directory, then go back to the scan root.
#[test]
fn select_directory_then_go_back() {
    let (_tmp, mut state) = scanned_state();
    let tree = state.tree.as_ref().expect("tree");
    let root = tree.root();
    let sub = child_named(tree, root, "sub");

    assert_eq!(state.select(sub), Transition::ZoomedIn(sub));
    assert_eq!(state.chart.as_ref().map(|c| c.current_root()), Some(sub));
    assert!(state.can_go_back());

    assert_eq!(state.go_back(), Transition::ZoomedOut(root));
    assert_eq!(state.chart.as_ref().map(|c| c.current_root()), Some(root));
    assert!(!state.can_go_back());
}

/// Files cannot become the display root.
#[test]
fn select_file_is_ignored() {
    let (_tmp, mut state) = scanned_state();
    let tree = state.tree.as_ref().expect("tree");
    let root = tree.root();
    let file = child_named(tree, root, "a.txt");

    assert_eq!(state.select(file), Transition::Unchanged);
    assert_eq!(state.chart.as_ref().map(|c| c.current_root()), Some(root));
}

/// Going back at the scan root is a no-op.
#[test]
fn go_back_at_root_is_noop() {
    let (_tmp, mut state) = scanned_state();
    assert_eq!(state.go_back(), Transition::Unchanged);
}

/// Navigation without a chart does nothing.
#[test]
fn navigation_without_chart_is_noop() {
    let mut state = new_state(Path::new("."));
    assert_eq!(state.go_back(), Transition::Unchanged);
    assert_eq!(state.select(NodeIndex::new(0)), Transition::Unchanged);
}

// ── Pointer and tooltip ───────────────────────────────────────────────────────

/// Hover shows a tooltip offset from the pointer, it follows the pointer,
/// and leaving hides it.
#[test]
fn pointer_over_drives_tooltip() {
    let (_tmp, mut state) = scanned_state();
    let tree = state.tree.as_ref().expect("tree");
    let sub = child_named(tree, tree.root(), "sub");

    state.pointer_over(Some(sub), Point::new(100.0, 100.0));
    let tip = state
        .chart
        .as_ref()
        .and_then(|c| c.tooltip().cloned())
        .expect("tooltip after enter");
    assert_eq!(tip.node, sub);
    assert_eq!(tip.text.title, "sub");
    assert_eq!(
        tip.position,
        Point::new(100.0 + TOOLTIP_OFFSET.x, 100.0 + TOOLTIP_OFFSET.y)
    );

    state.pointer_over(Some(sub), Point::new(150.0, 120.0));
    let moved = state
        .chart
        .as_ref()
        .and_then(|c| c.tooltip().cloned())
        .expect("tooltip after move");
    assert_eq!(
        moved.position,
        Point::new(150.0 + TOOLTIP_OFFSET.x, 120.0 + TOOLTIP_OFFSET.y)
    );

    state.pointer_over(None, Point::ORIGIN);
    assert!(state.chart.as_ref().and_then(|c| c.tooltip()).is_none());
}

/// Zooming hides the tooltip; hovering again after the zoom shows it anew.
#[test]
fn zoom_hides_tooltip_until_next_hover() {
    let (_tmp, mut state) = scanned_state();
    let tree = state.tree.as_ref().expect("tree");
    let sub = child_named(tree, tree.root(), "sub");
    let c_rs = child_named(tree, sub, "c.rs");

    state.pointer_over(Some(sub), Point::new(10.0, 10.0));
    state.select(sub);
    assert!(state.chart.as_ref().and_then(|c| c.tooltip()).is_none());

    // Pointer now over a child arc of the new root.
    state.pointer_over(Some(c_rs), Point::new(12.0, 10.0));
    let tip = state
        .chart
        .as_ref()
        .and_then(|c| c.tooltip().cloned())
        .expect("tooltip after re-enter");
    assert_eq!(tip.node, c_rs);
    assert_eq!(tip.text.title, "c.rs");
}
