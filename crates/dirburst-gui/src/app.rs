/// Main `eframe::App` implementation for DirBurst.
///
/// This is the top-level UI layout that composes the toolbar, status bar
/// and the sunburst chart.
use crate::state::{AppPhase, AppState};
use crate::theme::DirBurstTheme;
use crate::widgets;
use dirburst_core::config::Config;
use dirburst_core::geometry::Point;
use dirburst_core::model::FileTree;
use std::path::PathBuf;

/// Pre-built application state.
///
/// Construct this **before** calling `eframe::run_native` so that the
/// initial scan is already running (or the snapshot already charted) when
/// the OS window appears.
pub struct DirBurstState {
    pub(crate) inner: AppState,
}

impl DirBurstState {
    /// Start a background scan of `path`.
    pub fn scanning(config: Config, path: PathBuf) -> Self {
        let mut state = AppState::new(config, path.clone());
        state.start_scan(path);
        Self { inner: state }
    }

    /// Chart an already built tree (e.g. a loaded snapshot). `path` only
    /// pre-fills the path field for the next scan.
    pub fn with_tree(config: Config, path: PathBuf, tree: FileTree) -> Self {
        let mut state = AppState::new(config, path);
        state.set_tree(tree, None);
        Self { inner: state }
    }
}

/// The DirBurst application.
pub struct DirBurstApp {
    state: AppState,
}

impl DirBurstApp {
    /// Create a new application instance from pre-built state.
    pub fn with_state(cc: &eframe::CreationContext<'_>, state: DirBurstState) -> Self {
        DirBurstTheme::for_mode(state.inner.dark_mode).apply(&cc.egui_ctx);
        Self { state: state.inner }
    }
}

impl eframe::App for DirBurstApp {
    /// Override the GPU clear colour to match the active theme background,
    /// preventing a colour mismatch flash between frames.
    fn clear_color(&self, visuals: &egui::Visuals) -> [f32; 4] {
        let [r, g, b, a] = visuals.panel_fill.to_array();
        [
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        ]
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ── Apply theme ───────────────────────────────────────────────────
        // Called every frame so that toggling dark_mode takes effect
        // immediately on the next rendered frame.
        let theme = DirBurstTheme::for_mode(self.state.dark_mode);
        theme.apply(ctx);

        // ── Process background messages ───────────────────────────────────
        self.state.process_scan_messages();
        if self.state.phase == AppPhase::Scanning {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }

        // ── Top toolbar ───────────────────────────────────────────────────
        egui::TopBottomPanel::top("toolbar")
            .min_height(36.0)
            .show(ctx, |ui| {
                ui.add_space(4.0);
                widgets::toolbar::toolbar(ui, &mut self.state, &theme);
                ui.add_space(4.0);
            });

        // ── About dialog ──────────────────────────────────────────────────
        let mut show_about = self.state.show_about;
        egui::Window::new("About DirBurst")
            .open(&mut show_about)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .fixed_size([340.0, 0.0])
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(8.0);
                    ui.label(
                        egui::RichText::new("☀ DirBurst")
                            .size(24.0)
                            .strong()
                            .color(theme.accent),
                    );
                    ui.label(
                        egui::RichText::new(format!("v{}", env!("CARGO_PKG_VERSION")))
                            .size(13.0)
                            .color(theme.text_muted),
                    );
                    ui.add_space(12.0);
                    ui.label(
                        egui::RichText::new(
                            "Disk usage as a zoomable sunburst chart.\n\
                             Click a directory to zoom in, Go Back to zoom out.",
                        )
                        .size(12.0)
                        .color(theme.text_primary),
                    );
                    ui.add_space(8.0);
                });
            });
        self.state.show_about = show_about;

        // ── Skipped entries ───────────────────────────────────────────────
        let mut show_skipped = self.state.show_skipped;
        if let Some(stats) = self.state.scan_stats.as_ref() {
            egui::Window::new("Skipped entries")
                .open(&mut show_skipped)
                .default_size([520.0, 300.0])
                .show(ctx, |ui| {
                    egui::ScrollArea::vertical().show(ui, |ui| {
                        for entry in &stats.skipped {
                            ui.label(
                                egui::RichText::new(entry.path.display().to_string())
                                    .color(theme.text_primary),
                            );
                            ui.label(
                                egui::RichText::new(&entry.message)
                                    .size(11.0)
                                    .color(theme.warning),
                            );
                            ui.add_space(4.0);
                        }
                    });
                });
        }
        self.state.show_skipped = show_skipped;

        // ── Bottom status bar ─────────────────────────────────────────────
        egui::TopBottomPanel::bottom("status_bar")
            .min_height(24.0)
            .show(ctx, |ui| {
                ui.add_space(2.0);
                widgets::status_bar::status_bar(ui, &self.state, &theme);
                ui.add_space(2.0);
            });

        // ── Central panel (sunburst) ──────────────────────────────────────
        egui::CentralPanel::default().show(ctx, |ui| {
            let (Some(tree), Some(chart)) = (self.state.tree.as_ref(), self.state.chart.as_ref())
            else {
                let (text, color) = match self.state.phase {
                    AppPhase::Idle => ("Enter a directory and click Scan.", theme.text_muted),
                    AppPhase::Scanning => ("Scanning...", theme.text_muted),
                    AppPhase::Failed => (
                        self.state.scan_error.as_deref().unwrap_or("Scan failed."),
                        theme.error,
                    ),
                    AppPhase::Results => ("Nothing to show.", theme.text_muted),
                };
                widgets::sunburst::placeholder(ui, text, color);
                return;
            };

            let response = widgets::sunburst::sunburst(ui, tree, chart, &theme);
            let pointer = response
                .hover
                .map(|(_, pos)| Point::new(f64::from(pos.x), f64::from(pos.y)))
                .unwrap_or(Point::ORIGIN);
            self.state
                .pointer_over(response.hover.map(|(node, _)| node), pointer);

            use widgets::sunburst::SunburstAction;
            match response.action {
                Some(SunburstAction::Select(node)) => {
                    self.state.select(node);
                }
                Some(SunburstAction::GoBack) => {
                    self.state.go_back();
                }
                None => {}
            }
        });
    }
}
