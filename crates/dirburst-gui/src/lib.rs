/// DirBurst GUI — egui-based desktop frontend.
///
/// This crate contains all UI code. Scanning, layout and chart state live
/// in `dirburst-core`.
pub mod app;
pub mod icon;
pub mod state;
pub mod theme;
pub mod widgets;

pub use app::{DirBurstApp, DirBurstState};
