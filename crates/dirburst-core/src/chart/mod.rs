/// Interactive chart — navigation state, rendered scene and pointer
/// interaction, independent of any drawing backend.
///
/// A surface (the egui widget, the SVG writer) draws
/// [`ChartController::scene`] and feeds pointer input back as
/// [`ChartEvent`]s.
mod controller;
mod scene;

pub use controller::{ChartController, ChartEvent, ChartState, Tooltip, Transition, TOOLTIP_OFFSET};
pub use scene::{ChartScene, Label, NavigationControl, RenderedArc, TooltipText};
