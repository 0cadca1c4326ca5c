/// Rendered scene — everything a surface needs to draw one display root.
use crate::color::{span_color, Rgb};
use crate::config::ChartConfig;
use crate::geometry::{ArcSpan, PathGeometry, Point};
use crate::layout::SunburstLayout;
use crate::model::size::{format_file_count, format_megabytes};
use crate::model::{FileTree, NodeIndex};

/// Hover text of one arc.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TooltipText {
    /// Node name.
    pub title: String,
    /// `"N files, X.XX MB"` for nodes with children, `"X.XX MB"` otherwise.
    pub detail: String,
}

impl TooltipText {
    pub fn for_node(tree: &FileTree, index: NodeIndex) -> Self {
        let node = tree.node(index);
        let detail = if node.has_children() {
            format!(
                "{}, {}",
                format_file_count(node.file_count),
                format_megabytes(node.size)
            )
        } else {
            format_megabytes(node.size)
        };
        Self {
            title: node.name.to_string(),
            detail,
        }
    }
}

/// Text drawn centred on an arc.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
    /// Chart-centred anchor (mid angle, mid radius).
    pub position: Point,
}

/// One drawable arc.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedArc {
    pub node: NodeIndex,
    pub span: ArcSpan,
    pub path: PathGeometry,
    pub fill: Rgb,
    pub label: Option<Label>,
    pub tooltip: TooltipText,
    /// Clicking this arc zooms in.
    pub zoomable: bool,
}

/// The "Go Back" control shown above the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavigationControl {
    /// Parent of the display root; the control is hidden when `None`.
    pub back_target: Option<NodeIndex>,
}

impl NavigationControl {
    pub fn is_visible(&self) -> bool {
        self.back_target.is_some()
    }
}

/// Arcs, labels and navigation for the current display root.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartScene {
    pub root: NodeIndex,
    /// Arcs in drawing order: ancestors before descendants.
    pub arcs: Vec<RenderedArc>,
    pub navigation: NavigationControl,
    /// Side of the square canvas.
    pub canvas_size: f64,
    /// Chart centre in canvas coordinates.
    pub center: Point,
}

impl ChartScene {
    /// Build the scene for a finished layout pass.
    pub fn build(tree: &FileTree, layout: &SunburstLayout, config: &ChartConfig) -> Self {
        let arcs = layout
            .nodes()
            .iter()
            .filter_map(|&index| {
                let span = layout.span(index)?;
                Some(render_arc(tree, index, span, config))
            })
            .collect();

        let offset = config.center_offset();
        Self {
            root: layout.root(),
            arcs,
            navigation: NavigationControl {
                back_target: tree.parent(layout.root()),
            },
            canvas_size: config.canvas_size(),
            center: Point::new(offset, offset),
        }
    }

    /// The arc drawn for `node`, if it is part of this scene.
    pub fn arc(&self, node: NodeIndex) -> Option<&RenderedArc> {
        self.arcs.iter().find(|a| a.node == node)
    }

    /// Arcs that carry a text label.
    pub fn labels(&self) -> impl Iterator<Item = &Label> {
        self.arcs.iter().filter_map(|a| a.label.as_ref())
    }
}

fn render_arc(tree: &FileTree, index: NodeIndex, span: ArcSpan, config: &ChartConfig) -> RenderedArc {
    let node = tree.node(index);
    let label = (span.angular_width() > config.label_min_angle).then(|| Label {
        text: format!("{} ({})", node.name, format_megabytes(node.size)),
        position: span.label_anchor(),
    });

    RenderedArc {
        node: index,
        span,
        path: span.path(),
        fill: span_color(&span, config.saturation, config.lightness),
        label,
        tooltip: TooltipText::for_node(tree, index),
        zoomable: node.has_children(),
    }
}
