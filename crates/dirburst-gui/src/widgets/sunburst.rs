/// Sunburst chart widget — paints the controller's scene and reports
/// pointer input back.
///
/// The scene is laid out in chart units (`outer_radius` from the config);
/// the widget scales it uniformly to fit the available space and converts
/// pointer positions back into chart units for hit-testing. The tooltip
/// is drawn wherever the controller anchored it.
use crate::theme::{to_color32, DirBurstTheme};
use dirburst_core::chart::ChartController;
use dirburst_core::geometry::{ArcSpan, Point};
use dirburst_core::model::{FileTree, NodeIndex};
use egui::epaint::{Mesh, Vertex, WHITE_UV};
use egui::{Color32, Pos2, Rect, Sense, Shape, Stroke, Ui, Vec2};
use std::f64::consts::PI;

/// Largest angle covered by one tessellated segment.
const MAX_SEGMENT_ANGLE: f64 = PI / 90.0;

/// Action returned from the sunburst widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SunburstAction {
    /// User clicked an arc.
    Select(NodeIndex),
    /// User pressed "Go Back".
    GoBack,
}

/// What happened in the widget this frame.
pub struct SunburstResponse {
    /// Arc under the pointer, and the pointer position in screen points.
    pub hover: Option<(NodeIndex, Pos2)>,
    pub action: Option<SunburstAction>,
}

/// Maps chart units to screen points.
#[derive(Debug, Clone, Copy)]
struct Viewport {
    center: Pos2,
    scale: f32,
}

impl Viewport {
    fn to_screen(self, p: Point) -> Pos2 {
        self.center + Vec2::new(p.x as f32, p.y as f32) * self.scale
    }

    fn to_chart(self, pos: Pos2) -> Point {
        let d = (pos - self.center) / self.scale;
        Point::new(d.x as f64, d.y as f64)
    }
}

/// Draw the chart. Returns hover information and an optional action.
pub fn sunburst(
    ui: &mut Ui,
    tree: &FileTree,
    chart: &ChartController,
    theme: &DirBurstTheme,
) -> SunburstResponse {
    let mut action = None;

    // ── Navigation row ─────────────────────────────────────────────
    ui.horizontal(|ui| {
        if chart.can_go_back() {
            let back = egui::Button::new(
                egui::RichText::new("Go Back").strong().color(Color32::WHITE),
            )
            .fill(theme.back_button)
            .min_size(Vec2::new(70.0, 24.0));
            if ui.add(back).clicked() {
                action = Some(SunburstAction::GoBack);
            }
            ui.add_space(8.0);
        }

        for (i, node) in chart.breadcrumb(tree).into_iter().enumerate() {
            if i > 0 {
                ui.label(egui::RichText::new(" › ").color(theme.text_muted).size(12.0));
            }
            let name = tree.node(node).name.as_str();
            let text = if node == chart.current_root() {
                egui::RichText::new(name).color(theme.text_primary).size(12.0).strong()
            } else {
                egui::RichText::new(name).color(theme.text_muted).size(12.0)
            };
            ui.label(text);
        }
    });
    ui.add_space(4.0);

    // ── Canvas ─────────────────────────────────────────────────────
    let (rect, response) = ui.allocate_exact_size(ui.available_size(), Sense::click());
    if rect.width() < 10.0 || rect.height() < 10.0 {
        return SunburstResponse {
            hover: None,
            action,
        };
    }

    let scene = chart.scene();
    let view = Viewport {
        center: rect.center(),
        scale: rect.width().min(rect.height()) / scene.canvas_size as f32,
    };
    let painter = ui.painter_at(rect);

    let hover = response
        .hover_pos()
        .and_then(|pos| chart.hit_test(view.to_chart(pos)).map(|node| (node, pos)));
    let hovered_node = hover.map(|(node, _)| node);

    for arc in &scene.arcs {
        let mut fill = to_color32(arc.fill);
        if Some(arc.node) == hovered_node {
            fill = theme.hover_fill(fill);
        }
        if let Some(mesh) = arc_mesh(&arc.span, view, fill) {
            painter.add(Shape::mesh(mesh));
        }
        let outline: Vec<Pos2> = arc
            .path
            .flatten(MAX_SEGMENT_ANGLE)
            .into_iter()
            .map(|p| view.to_screen(p))
            .collect();
        painter.add(Shape::closed_line(outline, Stroke::new(1.0, theme.arc_stroke)));
    }

    let font = egui::FontId::proportional((10.0 * view.scale).clamp(8.0, 14.0));
    for label in scene.labels() {
        painter.text(
            view.to_screen(label.position),
            egui::Align2::CENTER_CENTER,
            &label.text,
            font.clone(),
            theme.arc_label,
        );
    }

    if let Some(node) = hovered_node {
        if scene.arc(node).is_some_and(|a| a.zoomable) {
            ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
        }
        if response.clicked() {
            action = Some(SunburstAction::Select(node));
        }
    }

    // ── Tooltip ────────────────────────────────────────────────────
    if let Some(tip) = chart.tooltip() {
        egui::Area::new(response.id.with("sunburst_tip"))
            .order(egui::Order::Tooltip)
            .fixed_pos(Pos2::new(tip.position.x as f32, tip.position.y as f32))
            .interactable(false)
            .show(ui.ctx(), |ui| {
                egui::Frame::new()
                    .fill(theme.tooltip_bg)
                    .corner_radius(4.0)
                    .inner_margin(egui::Margin::symmetric(10, 6))
                    .show(ui, |ui| {
                        ui.label(
                            egui::RichText::new(&tip.text.title)
                                .strong()
                                .size(12.0)
                                .color(theme.tooltip_text),
                        );
                        ui.label(
                            egui::RichText::new(&tip.text.detail)
                                .size(12.0)
                                .color(theme.tooltip_text),
                        );
                    });
            });
    }

    SunburstResponse { hover, action }
}

/// Triangulate a ring segment as a strip between its inner and outer arcs.
/// Zero-width spans produce nothing.
fn arc_mesh(span: &ArcSpan, view: Viewport, color: Color32) -> Option<Mesh> {
    let width = span.angular_width();
    if width <= 0.0 {
        return None;
    }
    let steps = (width / MAX_SEGMENT_ANGLE).ceil().max(1.0) as u32;
    let mut mesh = Mesh::default();
    mesh.reserve_vertices(2 * (steps as usize + 1));
    mesh.reserve_triangles(2 * steps as usize);

    for i in 0..=steps {
        let angle = span.angle_start + width * f64::from(i) / f64::from(steps);
        let (sin, cos) = angle.sin_cos();
        for radius in [span.radius_inner, span.radius_outer] {
            mesh.vertices.push(Vertex {
                pos: view.to_screen(Point::new(radius * cos, radius * sin)),
                uv: WHITE_UV,
                color,
            });
        }
        if i > 0 {
            let base = 2 * (i - 1);
            mesh.add_triangle(base, base + 1, base + 2);
            mesh.add_triangle(base + 1, base + 3, base + 2);
        }
    }
    Some(mesh)
}

/// Shown in place of the chart when there is nothing to draw.
pub fn placeholder(ui: &mut Ui, text: &str, color: Color32) {
    let rect = Rect::from_min_size(ui.cursor().min, ui.available_size());
    ui.allocate_rect(rect, Sense::hover());
    ui.painter().text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        text,
        egui::FontId::proportional(14.0),
        color,
    );
}
