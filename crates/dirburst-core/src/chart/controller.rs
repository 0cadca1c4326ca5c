/// Chart controller — the navigation state machine.
///
/// The only state is the display root. Zooming in or going back re-runs the
/// layout on the new root, rebuilds the scene wholesale and hides the
/// tooltip. Hover events only move the tooltip.
use super::scene::{ChartScene, TooltipText};
use crate::config::ChartConfig;
use crate::geometry::Point;
use crate::layout::{ring_thickness, SunburstLayout};
use crate::model::{FileTree, NodeIndex};
use tracing::debug;

/// Tooltip position relative to the pointer.
pub const TOOLTIP_OFFSET: Point = Point { x: 10.0, y: -20.0 };

/// Which node the chart is centred on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartState {
    DisplayingRoot(NodeIndex),
}

impl ChartState {
    pub fn root(self) -> NodeIndex {
        match self {
            ChartState::DisplayingRoot(node) => node,
        }
    }
}

/// Input delivered by the rendering surface.
///
/// Pointer positions are in surface coordinates; the tooltip is anchored
/// in the same space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChartEvent {
    PointerEnter { node: NodeIndex, pos: Point },
    PointerMove { pos: Point },
    PointerLeave,
    Click(NodeIndex),
    GoBack,
}

/// Outcome of [`ChartController::handle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    ZoomedIn(NodeIndex),
    ZoomedOut(NodeIndex),
    Unchanged,
}

/// A visible tooltip.
#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    pub node: NodeIndex,
    pub text: TooltipText,
    /// Top-left anchor in surface coordinates.
    pub position: Point,
}

#[derive(Debug, Clone)]
pub struct ChartController {
    state: ChartState,
    config: ChartConfig,
    layout: SunburstLayout,
    scene: ChartScene,
    tooltip: Option<Tooltip>,
}

impl ChartController {
    /// Start out displaying the root of `tree`.
    pub fn new(tree: &FileTree, config: ChartConfig) -> Self {
        let root = tree.root();
        let layout = crate::layout::layout(
            tree,
            root,
            ring_thickness(config.outer_radius, tree.max_depth(root)),
        );
        let scene = ChartScene::build(tree, &layout, &config);
        Self {
            state: ChartState::DisplayingRoot(root),
            config,
            layout,
            scene,
            tooltip: None,
        }
    }

    pub fn state(&self) -> ChartState {
        self.state
    }

    /// The node currently drawn as the full circle.
    pub fn current_root(&self) -> NodeIndex {
        self.state.root()
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    pub fn layout(&self) -> &SunburstLayout {
        &self.layout
    }

    pub fn scene(&self) -> &ChartScene {
        &self.scene
    }

    pub fn tooltip(&self) -> Option<&Tooltip> {
        self.tooltip.as_ref()
    }

    /// `true` if the display root has a parent to go back to.
    pub fn can_go_back(&self) -> bool {
        self.scene.navigation.is_visible()
    }

    /// Apply one event.
    pub fn handle(&mut self, tree: &FileTree, event: ChartEvent) -> Transition {
        match event {
            ChartEvent::PointerEnter { node, pos } => {
                self.tooltip = self.scene.arc(node).map(|arc| Tooltip {
                    node,
                    text: arc.tooltip.clone(),
                    position: anchor(pos),
                });
                Transition::Unchanged
            }
            ChartEvent::PointerMove { pos } => {
                if let Some(tooltip) = self.tooltip.as_mut() {
                    tooltip.position = anchor(pos);
                }
                Transition::Unchanged
            }
            ChartEvent::PointerLeave => {
                self.tooltip = None;
                Transition::Unchanged
            }
            ChartEvent::Click(node) => self.zoom_in(tree, node),
            ChartEvent::GoBack => self.go_back(tree),
        }
    }

    /// Make `node` the display root if it is drawn and has children.
    pub fn zoom_in(&mut self, tree: &FileTree, node: NodeIndex) -> Transition {
        let Some(arc) = self.scene.arc(node) else {
            debug!("Ignoring click on {node:?}: not part of the current chart");
            return Transition::Unchanged;
        };
        if !arc.zoomable || node == self.current_root() {
            return Transition::Unchanged;
        }
        self.display(tree, node);
        Transition::ZoomedIn(node)
    }

    /// Return to the parent of the display root, if there is one.
    pub fn go_back(&mut self, tree: &FileTree) -> Transition {
        match self.scene.navigation.back_target {
            Some(parent) => {
                self.display(tree, parent);
                Transition::ZoomedOut(parent)
            }
            None => Transition::Unchanged,
        }
    }

    /// The node drawn under a chart-centred point, if any.
    ///
    /// Rings are radially disjoint and siblings never overlap, so at most
    /// one arc contains the point.
    pub fn hit_test(&self, pos: Point) -> Option<NodeIndex> {
        self.scene
            .arcs
            .iter()
            .find(|arc| arc.span.contains(pos))
            .map(|arc| arc.node)
    }

    /// Nodes from the tree root down to the display root.
    pub fn breadcrumb(&self, tree: &FileTree) -> Vec<NodeIndex> {
        tree.ancestry(self.current_root())
    }

    fn display(&mut self, tree: &FileTree, root: NodeIndex) {
        debug!("Displaying {}", tree.relative_path(root));
        self.state = ChartState::DisplayingRoot(root);
        self.layout.relayout(
            tree,
            root,
            ring_thickness(self.config.outer_radius, tree.max_depth(root)),
        );
        self.scene = ChartScene::build(tree, &self.layout, &self.config);
        self.tooltip = None;
    }
}

fn anchor(pointer: Point) -> Point {
    Point::new(pointer.x + TOOLTIP_OFFSET.x, pointer.y + TOOLTIP_OFFSET.y)
}
