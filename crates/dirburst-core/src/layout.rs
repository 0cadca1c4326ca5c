/// Sunburst layout — assigns every node below a display root its angular
/// span and radial band.
///
/// The root of the pass always owns the full circle `[0, 2π)`; each child
/// receives a share of its parent's span proportional to its size, laid out
/// in `children` order with a running cursor. Ring `d` (distance from the
/// display root) covers radii `[d·t, (d+1)·t)`.
///
/// The result is a side table indexed by [`NodeIndex`]; the aggregate tree
/// itself is never touched, so re-rooting is just another pass.
use crate::geometry::ArcSpan;
use crate::model::{FileTree, NodeIndex};
use std::f64::consts::TAU;
use tracing::debug;

/// A root that cannot be laid out proportionally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    /// The root has children but a total size of zero, so every child
    /// collapses to a zero-width arc.
    #[error("node {node:?} has children but zero total size")]
    DegenerateRoot { node: NodeIndex },
}

/// Report whether `root` degenerates under the zero-size policy.
///
/// Layout proceeds either way; this only surfaces the caveat.
pub fn check_root(tree: &FileTree, root: NodeIndex) -> Result<(), LayoutError> {
    let node = tree.node(root);
    if node.has_children() && node.size == 0 {
        Err(LayoutError::DegenerateRoot { node: root })
    } else {
        Ok(())
    }
}

/// Ring thickness for a chart of `outer_radius` showing `max_depth`
/// levels below the display root.
pub fn ring_thickness(outer_radius: f64, max_depth: usize) -> f64 {
    outer_radius / (max_depth + 1) as f64
}

/// Spans of every node in the subtree of one display root.
#[derive(Debug, Clone, PartialEq)]
pub struct SunburstLayout {
    root: NodeIndex,
    ring_thickness: f64,
    /// `spans[i]` belongs to `NodeIndex(i)`; `None` outside the subtree.
    spans: Vec<Option<ArcSpan>>,
    /// Laid-out nodes in pre-order, root first.
    order: Vec<NodeIndex>,
}

/// Lay out the subtree of `root` with rings `ring_thickness` wide.
pub fn layout(tree: &FileTree, root: NodeIndex, ring_thickness: f64) -> SunburstLayout {
    let mut out = SunburstLayout {
        root,
        ring_thickness,
        spans: Vec::new(),
        order: Vec::new(),
    };
    out.relayout(tree, root, ring_thickness);
    out
}

/// Lay out the subtree of `root` so that its deepest ring ends exactly at
/// `outer_radius`.
pub fn layout_to_radius(tree: &FileTree, root: NodeIndex, outer_radius: f64) -> SunburstLayout {
    layout(tree, root, ring_thickness(outer_radius, tree.max_depth(root)))
}

impl SunburstLayout {
    /// Overwrite this table with a fresh pass rooted at `root`. Nothing of
    /// the previous pass survives.
    pub fn relayout(&mut self, tree: &FileTree, root: NodeIndex, ring_thickness: f64) {
        self.root = root;
        self.ring_thickness = ring_thickness;
        self.spans.clear();
        self.spans.resize(tree.len(), None);
        self.order.clear();

        if let Err(err) = check_root(tree, root) {
            debug!("{err}; children are laid out as zero-width arcs");
        }
        self.assign(tree, root, 0.0, TAU, 0);
        debug!(
            "Laid out {} nodes under {:?} (ring thickness {:.2})",
            self.order.len(),
            root,
            ring_thickness
        );
    }

    fn assign(&mut self, tree: &FileTree, index: NodeIndex, start: f64, end: f64, depth: usize) {
        let t = self.ring_thickness;
        self.spans[index.idx()] = Some(ArcSpan {
            angle_start: start,
            angle_end: end,
            radius_inner: depth as f64 * t,
            radius_outer: (depth + 1) as f64 * t,
            depth,
        });
        self.order.push(index);

        let node = tree.node(index);
        let width = end - start;
        // Boundaries come from cumulative sizes, so neighbours share exact
        // edges and the last non-empty child closes at `end`.
        let mut covered = 0u64;
        let mut cursor = start;
        for &child in &node.children {
            covered += tree.node(child).size;
            let next = if node.size == 0 {
                start
            } else if covered >= node.size {
                end
            } else {
                start + width * (covered as f64 / node.size as f64)
            };
            self.assign(tree, child, cursor, next, depth + 1);
            cursor = next;
        }
    }

    /// The display root of this pass.
    pub fn root(&self) -> NodeIndex {
        self.root
    }

    pub fn ring_thickness(&self) -> f64 {
        self.ring_thickness
    }

    /// Span of `index`, or `None` if it lies outside the laid-out subtree.
    pub fn span(&self, index: NodeIndex) -> Option<ArcSpan> {
        self.spans.get(index.idx()).copied().flatten()
    }

    /// Laid-out nodes in pre-order (ancestors before descendants).
    pub fn nodes(&self) -> &[NodeIndex] {
        &self.order
    }

    /// Outer edge of the deepest ring.
    pub fn outer_radius(&self) -> f64 {
        self.order
            .iter()
            .filter_map(|&i| self.span(i))
            .map(|s| s.radius_outer)
            .fold(0.0, f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{arb_snapshot, dir, file, sample_tree, tree};
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;
    use std::f64::consts::PI;

    fn child_named(tree: &FileTree, parent: NodeIndex, name: &str) -> NodeIndex {
        *tree
            .children(parent)
            .iter()
            .find(|&&c| tree.node(c).name == name)
            .expect("child exists")
    }

    #[test]
    fn test_two_children_split_three_to_one() {
        let t = tree(&dir("root", vec![file("a", 300), file("b", 100)]));
        let layout = layout(&t, t.root(), 100.0);
        let a = layout.span(child_named(&t, t.root(), "a")).unwrap();
        let b = layout.span(child_named(&t, t.root(), "b")).unwrap();

        assert_abs_diff_eq!(a.angle_start, 0.0);
        assert_abs_diff_eq!(a.angle_end, 1.5 * PI, epsilon = 1e-12);
        assert_abs_diff_eq!(b.angle_start, 1.5 * PI, epsilon = 1e-12);
        assert_abs_diff_eq!(b.angle_end, TAU);
    }

    #[test]
    fn test_radial_bands_follow_depth() {
        let t = sample_tree();
        let layout = layout(&t, t.root(), 50.0);
        let docs = child_named(&t, t.root(), "docs");
        let a = child_named(&t, docs, "a.txt");

        let root_span = layout.span(t.root()).unwrap();
        assert_eq!((root_span.radius_inner, root_span.radius_outer), (0.0, 50.0));
        let a_span = layout.span(a).unwrap();
        assert_eq!(a_span.depth, 2);
        assert_eq!((a_span.radius_inner, a_span.radius_outer), (100.0, 150.0));
        assert_eq!(layout.outer_radius(), 150.0);
    }

    #[test]
    fn test_ring_thickness_divides_radius() {
        assert_eq!(ring_thickness(300.0, 0), 300.0);
        assert_eq!(ring_thickness(300.0, 2), 100.0);

        let t = sample_tree();
        let layout = layout_to_radius(&t, t.root(), 300.0);
        assert_eq!(layout.ring_thickness(), 100.0);
        assert_eq!(layout.outer_radius(), 300.0);
    }

    #[test]
    fn test_empty_directory_gets_zero_width() {
        let t = sample_tree();
        let layout = layout(&t, t.root(), 10.0);
        let empty = layout.span(child_named(&t, t.root(), "empty")).unwrap();
        assert_eq!(empty.angle_start, empty.angle_end);
        assert_eq!(empty.angle_end, TAU);
    }

    #[test]
    fn test_all_zero_subtree_is_degenerate_but_laid_out() {
        let t = tree(&dir("root", vec![file("a", 0), file("b", 0)]));
        assert_eq!(
            check_root(&t, t.root()),
            Err(LayoutError::DegenerateRoot { node: t.root() })
        );

        let layout = layout(&t, t.root(), 10.0);
        for &child in t.children(t.root()) {
            let span = layout.span(child).unwrap();
            assert_eq!(span.angular_width(), 0.0);
        }
        assert_eq!(layout.nodes().len(), 3);
    }

    #[test]
    fn test_reroot_covers_full_circle_and_hides_outside_nodes() {
        let t = sample_tree();
        let docs = child_named(&t, t.root(), "docs");
        let layout = layout(&t, docs, 10.0);

        let span = layout.span(docs).unwrap();
        assert_eq!((span.angle_start, span.angle_end, span.depth), (0.0, TAU, 0));
        assert_eq!(layout.root(), docs);
        assert!(layout.span(t.root()).is_none());
        assert!(layout.span(child_named(&t, t.root(), "notes.md")).is_none());
        assert_eq!(layout.nodes().len(), 3);
    }

    #[test]
    fn test_relayout_forgets_previous_root() {
        let t = sample_tree();
        let docs = child_named(&t, t.root(), "docs");
        let mut table = layout(&t, t.root(), 10.0);
        table.relayout(&t, docs, 10.0);

        assert_eq!(table, layout(&t, docs, 10.0));
    }

    #[test]
    fn test_nodes_are_preorder() {
        let t = sample_tree();
        let layout = layout(&t, t.root(), 10.0);
        assert_eq!(layout.nodes(), t.descendants(t.root()).as_slice());
    }

    proptest! {
        #[test]
        fn prop_children_partition_parent_span(snapshot in arb_snapshot()) {
            let t = tree(&snapshot);
            let layout = layout(&t, t.root(), 10.0);

            for &index in layout.nodes() {
                let node = t.node(index);
                let parent = layout.span(index).unwrap();
                let spans: Vec<ArcSpan> =
                    node.children.iter().map(|&c| layout.span(c).unwrap()).collect();
                if spans.is_empty() {
                    continue;
                }

                prop_assert_eq!(spans[0].angle_start, parent.angle_start);
                for pair in spans.windows(2) {
                    prop_assert_eq!(pair[0].angle_end, pair[1].angle_start);
                }
                let total: f64 = spans.iter().map(ArcSpan::angular_width).sum();
                if node.size > 0 {
                    prop_assert_eq!(spans[spans.len() - 1].angle_end, parent.angle_end);
                    prop_assert!((total - parent.angular_width()).abs() < 1e-9);
                } else {
                    prop_assert_eq!(total, 0.0);
                }
                for span in &spans {
                    prop_assert!(span.angular_width() >= 0.0);
                    prop_assert_eq!(span.depth, parent.depth + 1);
                }
            }
        }

        #[test]
        fn prop_layout_is_idempotent(snapshot in arb_snapshot()) {
            let t = tree(&snapshot);
            prop_assert_eq!(layout(&t, t.root(), 7.5), layout(&t, t.root(), 7.5));
        }

        #[test]
        fn prop_any_directory_reroots_to_full_circle(snapshot in arb_snapshot()) {
            let t = tree(&snapshot);
            for index in t.descendants(t.root()) {
                let span = layout(&t, index, 1.0).span(index).unwrap();
                prop_assert_eq!(span.angle_start, 0.0);
                prop_assert_eq!(span.angle_end, TAU);
                prop_assert_eq!(span.depth, 0);
            }
        }
    }
}
