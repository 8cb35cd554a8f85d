//! Radial mind-map renderer for strategy hierarchies.

use ratatui::style::Color;

use crate::api::models::HierarchyNode;
use crate::domain::NodeKind;
use crate::viz::surface::{Anchor, DrawingSurface, Label};
use crate::viz::Dimensions;

pub const DEFAULT_NODE_RADIUS: f64 = 5.0;
const RADIAL_MARGIN: f64 = 100.0;
const LABEL_OFFSET: f64 = 6.0;

/// A laid-out tree node in surface coordinates.
#[derive(Debug, Clone)]
pub struct PlacedNode {
    pub name: String,
    pub kind: NodeKind,
    pub size: Option<f64>,
    pub angle: f64,
    pub radius: f64,
    pub x: f64,
    pub y: f64,
    pub depth: usize,
    pub parent: Option<usize>,
    pub leaf: bool,
}

/// Flattens the tree in depth-first order; circle indices of the rendered
/// scene follow this order.
pub fn flatten(root: &HierarchyNode) -> Vec<&HierarchyNode> {
    let mut nodes = Vec::with_capacity(root.count());
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        nodes.push(node);
        for child in node.children.iter().rev() {
            stack.push(child);
        }
    }
    nodes
}

/// Radial layout: angles span `[0, 2π]` partitioned over the leaves, with
/// adjacent leaves separated by `1/depth` under the same parent and
/// `2/depth` otherwise; internal nodes sit at the midpoint of their
/// children. Radius grows linearly with depth up to
/// `min(width, height) / 2 - 100`.
pub fn layout(root: &HierarchyNode, dims: Dimensions) -> Vec<PlacedNode> {
    struct Flat {
        depth: usize,
        parent: Option<usize>,
        children: Vec<usize>,
    }

    let flattened = flatten(root);
    let mut flat: Vec<Flat> = Vec::with_capacity(flattened.len());
    // Rebuild parent/child indices in the same depth-first order.
    {
        let mut stack: Vec<(usize, Option<usize>)> = vec![(0, None)];
        let mut cursor = 0usize;
        while let Some((depth, parent)) = stack.pop() {
            let node = flattened[cursor];
            flat.push(Flat {
                depth,
                parent,
                children: Vec::new(),
            });
            if let Some(p) = parent {
                flat[p].children.push(cursor);
            }
            let this = cursor;
            cursor += 1;
            for _ in node.children.iter().rev() {
                stack.push((depth + 1, Some(this)));
            }
        }
        for children in flat.iter_mut().map(|f| &mut f.children) {
            children.sort_unstable();
        }
    }

    let count = flat.len();
    let mut angles = vec![0.0f64; count];

    // Walk the leaves in order, accumulating separation-weighted offsets.
    let mut previous: Option<usize> = None;
    let mut cursor = 0.0f64;
    for index in 0..count {
        if !flat[index].children.is_empty() {
            continue;
        }
        if let Some(prev) = previous {
            let same_parent = flat[prev].parent == flat[index].parent;
            let weight = if same_parent { 1.0 } else { 2.0 };
            cursor += weight / flat[index].depth.max(1) as f64;
        }
        angles[index] = cursor;
        previous = Some(index);
    }

    // Internal nodes take the midpoint of their first and last child,
    // processed in reverse depth-first order so children resolve first.
    for index in (0..count).rev() {
        let children = &flat[index].children;
        if children.is_empty() {
            continue;
        }
        let first = angles[children[0]];
        let last = angles[*children.last().unwrap_or(&children[0])];
        angles[index] = (first + last) / 2.0;
    }

    let span = cursor;
    if span > 0.0 {
        for angle in &mut angles {
            *angle = *angle / span * std::f64::consts::TAU;
        }
    }

    let max_depth = flat.iter().map(|f| f.depth).max().unwrap_or(0).max(1);
    let max_radius = (dims.width.min(dims.height) / 2.0 - RADIAL_MARGIN).max(0.0);
    let center = (dims.width / 2.0, dims.height / 2.0);

    flattened
        .iter()
        .enumerate()
        .map(|(index, node)| {
            let angle = angles[index];
            let radius = flat[index].depth as f64 / max_depth as f64 * max_radius;
            PlacedNode {
                name: node.name.clone(),
                kind: node.kind,
                size: node.size,
                angle,
                radius,
                x: radius.mul_add(angle.sin(), center.0),
                y: (-radius).mul_add(angle.cos(), center.1),
                depth: flat[index].depth,
                parent: flat[index].parent,
                leaf: flat[index].children.is_empty(),
            }
        })
        .collect()
}

/// Draws the mind map: one line per parent link, one circle and one label
/// per node.
pub fn render(surface: &mut impl DrawingSurface, data: &HierarchyNode, dims: Dimensions) {
    surface.clear();
    let placed = layout(data, dims);

    for node in &placed {
        if let Some(parent) = node.parent {
            let p = &placed[parent];
            surface.line(p.x, p.y, node.x, node.y, 1.0, Color::DarkGray);
        }
    }

    for node in &placed {
        surface.circle(
            node.x,
            node.y,
            node.size.unwrap_or(DEFAULT_NODE_RADIUS),
            node.kind.color(),
        );
    }

    for node in &placed {
        let outward = node.angle < std::f64::consts::PI;
        // Leaves label outward, internal nodes inward, mirrored on the
        // left half of the circle so text stays upright.
        let start_anchored = outward == node.leaf;
        let offset = if start_anchored {
            LABEL_OFFSET
        } else {
            -LABEL_OFFSET
        };
        let direction = (node.angle.sin(), -node.angle.cos());
        surface.text(Label {
            x: direction.0.mul_add(offset, node.x),
            y: direction.1.mul_add(offset, node.y),
            text: node.name.clone(),
            anchor: if start_anchored {
                Anchor::Start
            } else {
                Anchor::End
            },
            rotation: if node.angle >= std::f64::consts::PI {
                180.0
            } else {
                0.0
            },
            color: Color::White,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viz::surface::Scene;

    fn node(name: &str, kind: NodeKind, children: Vec<HierarchyNode>) -> HierarchyNode {
        HierarchyNode {
            name: name.to_string(),
            kind,
            size: None,
            description: None,
            budget: None,
            children,
        }
    }

    fn sample_tree() -> HierarchyNode {
        node(
            "Kenya AI Strategy",
            NodeKind::Root,
            vec![
                node(
                    "Strategic Pillars",
                    NodeKind::Category,
                    vec![
                        node("AI Infrastructure", NodeKind::Pillar, vec![]),
                        node("Human Capital", NodeKind::Pillar, vec![]),
                    ],
                ),
                node(
                    "Priority Sectors",
                    NodeKind::Category,
                    vec![node("Agriculture", NodeKind::Sector, vec![])],
                ),
            ],
        )
    }

    #[test]
    fn one_circle_per_node_and_one_line_per_edge() {
        let tree = sample_tree();
        let expected_nodes = tree.count();
        let mut scene = Scene::new(800.0, 600.0);
        render(&mut scene, &tree, Dimensions::new(800.0, 600.0));
        assert_eq!(scene.circles().count(), expected_nodes);
        assert_eq!(scene.lines().count(), expected_nodes - 1);
        assert_eq!(scene.labels().len(), expected_nodes);
    }

    #[test]
    fn root_sits_at_center() {
        let tree = sample_tree();
        let placed = layout(&tree, Dimensions::new(800.0, 600.0));
        assert!((placed[0].x - 400.0).abs() < 1e-9);
        assert!((placed[0].y - 300.0).abs() < 1e-9);
        assert_eq!(placed[0].depth, 0);
    }

    #[test]
    fn leaf_angles_cover_the_circle_in_order() {
        let tree = sample_tree();
        let placed = layout(&tree, Dimensions::new(800.0, 600.0));
        let leaf_angles: Vec<f64> = placed
            .iter()
            .filter(|n| n.leaf)
            .map(|n| n.angle)
            .collect();
        assert_eq!(leaf_angles.len(), 3);
        assert!((leaf_angles[0] - 0.0).abs() < 1e-9);
        assert!((leaf_angles.last().unwrap() - std::f64::consts::TAU).abs() < 1e-9);
        assert!(leaf_angles.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn labels_past_half_circle_are_flipped() {
        let tree = sample_tree();
        let mut scene = Scene::new(800.0, 600.0);
        render(&mut scene, &tree, Dimensions::new(800.0, 600.0));
        let placed = layout(&tree, Dimensions::new(800.0, 600.0));
        for (label, node) in scene.labels().iter().zip(&placed) {
            if node.angle >= std::f64::consts::PI {
                assert!((label.rotation - 180.0).abs() < f64::EPSILON);
            } else {
                assert!(label.rotation.abs() < f64::EPSILON);
            }
        }
    }

    #[test]
    fn rerender_replaces_previous_content() {
        let tree = sample_tree();
        let mut scene = Scene::new(800.0, 600.0);
        render(&mut scene, &tree, Dimensions::new(800.0, 600.0));
        render(&mut scene, &tree, Dimensions::new(800.0, 600.0));
        assert_eq!(scene.circles().count(), tree.count());
    }
}
