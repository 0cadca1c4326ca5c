/// DirBurst Core — disk-usage aggregation and sunburst chart engine.
///
/// This crate contains all business logic with zero UI dependencies.
/// The egui frontend and the headless exporter both drive it.
///
/// # Modules
///
/// - [`model`] — Arena-allocated aggregate tree, snapshots, formatting.
/// - [`scanner`] — Filesystem walk building the aggregate tree.
/// - [`layout`] — Angular/radial span assignment for a display root.
/// - [`geometry`] — Ring-segment paths and polar hit-testing.
/// - [`color`] — Angle-based arc colouring.
/// - [`chart`] — Navigation state machine and rendered scene.
/// - [`output`] — SVG, JSON and CSV exports.
/// - [`config`] — Scan options and chart constants.
pub mod chart;
pub mod color;
pub mod config;
pub mod geometry;
pub mod layout;
pub mod model;
pub mod output;
pub mod scanner;

#[cfg(test)]
mod testing;
