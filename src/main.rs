//! DirBurst — disk usage as an interactive, zoomable sunburst chart.
//!
//! Thin binary entry point. All logic lives in the `dirburst-core`
//! and `dirburst-gui` crates.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use anyhow::Context;
use clap::{Parser, ValueEnum};
use dirburst_core::chart::ChartController;
use dirburst_core::config::Config;
use dirburst_core::model::{ChildOrder, FileTree};
use dirburst_core::output::{export, svg};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(
    name = "dirburst",
    version,
    about = "Explore disk usage as a zoomable sunburst chart"
)]
struct Cli {
    /// Directory to scan
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Directory name to skip (repeatable, added to the configured set)
    #[arg(short, long, value_name = "NAME")]
    exclude: Vec<String>,

    /// JSON configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Chart a saved JSON snapshot instead of scanning
    #[arg(short, long, value_name = "FILE")]
    snapshot: Option<PathBuf>,

    /// Order of each directory's children
    #[arg(long, value_enum)]
    order: Option<Order>,

    /// Write the tree as a JSON snapshot and exit
    #[arg(long, value_name = "FILE")]
    export_json: Option<PathBuf>,

    /// Write the chart as SVG and exit
    #[arg(long, value_name = "FILE")]
    export_svg: Option<PathBuf>,

    /// Write a flat CSV listing and exit
    #[arg(long, value_name = "FILE")]
    export_csv: Option<PathBuf>,
}

impl Cli {
    fn headless(&self) -> bool {
        self.export_json.is_some() || self.export_svg.is_some() || self.export_csv.is_some()
    }
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum Order {
    Enumeration,
    Name,
    Size,
}

impl From<Order> for ChildOrder {
    fn from(order: Order) -> Self {
        match order {
            Order::Enumeration => ChildOrder::Enumeration,
            Order::Name => ChildOrder::Name,
            Order::Size => ChildOrder::SizeDescending,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialise structured logging.
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    tracing::info!("DirBurst starting");

    let config = load_config(&cli)?;

    if cli.headless() {
        let tree = match &cli.snapshot {
            Some(path) => load_snapshot(path)?,
            None => scan(&cli.path, &config)?,
        };
        return run_exports(&cli, &tree, &config);
    }

    // Build application state *before* opening the window so the first
    // rendered frame already shows the scan (or the loaded snapshot).
    let state = match &cli.snapshot {
        Some(path) => {
            let tree = load_snapshot(path)?;
            dirburst_gui::DirBurstState::with_tree(config, cli.path.clone(), tree)
        }
        None => dirburst_gui::DirBurstState::scanning(config, cli.path.clone()),
    };

    let icon = dirburst_gui::icon::generate_icon(64);
    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_title("DirBurst -- Disk Usage Sunburst")
            .with_inner_size([1000.0, 800.0])
            .with_min_inner_size([480.0, 420.0])
            .with_icon(icon),
        ..Default::default()
    };

    eframe::run_native(
        "DirBurst",
        options,
        Box::new(|cc| Ok(Box::new(dirburst_gui::DirBurstApp::with_state(cc, state)))),
    )
    .map_err(|e| anyhow::anyhow!("eframe error: {e}"))?;

    Ok(())
}

/// The configuration file (or defaults) with command-line overrides applied.
fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("failed to load configuration {}", path.display()))?,
        None => Config::default(),
    };
    config.scan.excluded_names.extend(cli.exclude.iter().cloned());
    if let Some(order) = cli.order {
        config.scan.child_order = order.into();
    }
    Ok(config)
}

fn load_snapshot(path: &Path) -> anyhow::Result<FileTree> {
    export::load_snapshot(path)
        .with_context(|| format!("failed to load snapshot {}", path.display()))
}

fn scan(path: &Path, config: &Config) -> anyhow::Result<FileTree> {
    let result = dirburst_core::scanner::scan(path, &config.scan)
        .with_context(|| format!("failed to scan {}", path.display()))?;
    if !result.stats.skipped.is_empty() {
        tracing::warn!(
            "{} entries could not be read and were left out of the totals",
            result.stats.skipped.len()
        );
    }
    Ok(result.tree)
}

fn run_exports(cli: &Cli, tree: &FileTree, config: &Config) -> anyhow::Result<()> {
    if let Some(path) = &cli.export_json {
        export::save_snapshot(tree, path)
            .with_context(|| format!("failed to write snapshot {}", path.display()))?;
    }
    if let Some(path) = &cli.export_csv {
        export::save_csv(tree, path)
            .with_context(|| format!("failed to write CSV {}", path.display()))?;
    }
    if let Some(path) = &cli.export_svg {
        let chart = ChartController::new(tree, config.chart.clone());
        svg::write_svg(chart.scene(), path)
            .with_context(|| format!("failed to write SVG {}", path.display()))?;
    }
    Ok(())
}
