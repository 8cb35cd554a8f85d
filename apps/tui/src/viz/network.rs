//! Force-directed network renderer for the country/theme graph.
//!
//! The layout runs as a live simulation: each UI tick advances it until it
//! cools below the alpha floor. Dragging a node pins its position for the
//! drag duration and re-heats the simulation.

use ratatui::style::Color;

use crate::api::models::GraphData;
use crate::viz::surface::{hex_color, Anchor, DrawingSurface, Label};
use crate::viz::Dimensions;

pub const DEFAULT_NODE_RADIUS: f64 = 10.0;
const DEFAULT_NODE_COLOR: Color = Color::Rgb(105, 179, 162);
const LINK_COLOR: Color = Color::DarkGray;

const LINK_DISTANCE: f64 = 100.0;
const LINK_STRENGTH: f64 = 0.7;
const CHARGE_STRENGTH: f64 = -300.0;
const ALPHA_MIN: f64 = 0.001;
const ALPHA_DECAY: f64 = 0.0228;
const VELOCITY_RETAIN: f64 = 0.6;
const DRAG_ALPHA_TARGET: f64 = 0.3;

#[derive(Debug, Clone)]
pub struct SimNode {
    pub id: String,
    pub name: String,
    pub radius: f64,
    pub color: Color,
    pub x: f64,
    pub y: f64,
    vx: f64,
    vy: f64,
    pub fx: Option<f64>,
    pub fy: Option<f64>,
}

#[derive(Debug, Clone)]
struct SimLink {
    source: usize,
    target: usize,
    value: f64,
}

#[derive(Debug, Clone)]
pub struct ForceSimulation {
    nodes: Vec<SimNode>,
    links: Vec<SimLink>,
    center: (f64, f64),
    alpha: f64,
    alpha_target: f64,
    dropped_links: usize,
}

impl ForceSimulation {
    /// Builds a simulation from the wire graph. Links whose endpoints do
    /// not name an existing node id are dropped.
    pub fn new(data: &GraphData, dims: Dimensions) -> Self {
        let center = (dims.width / 2.0, dims.height / 2.0);

        // Deterministic phyllotaxis seeding around the center.
        let golden_angle = std::f64::consts::PI * (3.0 - 5.0f64.sqrt());
        let nodes: Vec<SimNode> = data
            .nodes
            .iter()
            .enumerate()
            .map(|(i, node)| {
                let spread = 10.0 * (0.5 + i as f64).sqrt();
                let angle = i as f64 * golden_angle;
                SimNode {
                    id: node.id.clone(),
                    name: node.name.clone(),
                    radius: node.size.unwrap_or(DEFAULT_NODE_RADIUS),
                    color: node
                        .color
                        .as_deref()
                        .and_then(hex_color)
                        .unwrap_or(DEFAULT_NODE_COLOR),
                    x: spread.mul_add(angle.cos(), center.0),
                    y: spread.mul_add(angle.sin(), center.1),
                    vx: 0.0,
                    vy: 0.0,
                    fx: None,
                    fy: None,
                }
            })
            .collect();

        let index_of = |id: &str| nodes.iter().position(|n| n.id == id);
        let mut links = Vec::with_capacity(data.links.len());
        let mut dropped_links = 0;
        for link in &data.links {
            match (index_of(&link.source), index_of(&link.target)) {
                (Some(source), Some(target)) => links.push(SimLink {
                    source,
                    target,
                    value: link.value,
                }),
                _ => dropped_links += 1,
            }
        }

        Self {
            nodes,
            links,
            center,
            alpha: 1.0,
            alpha_target: 0.0,
            dropped_links,
        }
    }

    pub fn nodes(&self) -> &[SimNode] {
        &self.nodes
    }

    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    pub const fn dropped_links(&self) -> usize {
        self.dropped_links
    }

    pub const fn alpha(&self) -> f64 {
        self.alpha
    }

    pub const fn alpha_target(&self) -> f64 {
        self.alpha_target
    }

    /// Whether the simulation still has energy to spend.
    pub fn running(&self) -> bool {
        self.alpha >= ALPHA_MIN
    }

    /// Advances one step: alpha relaxation, pairwise charge, link springs,
    /// centering, then integration. Returns `false` once cooled.
    pub fn tick(&mut self) -> bool {
        if !self.running() {
            return false;
        }
        self.alpha += (self.alpha_target - self.alpha) * ALPHA_DECAY;

        // Repulsive charge between every pair.
        for i in 0..self.nodes.len() {
            for j in (i + 1)..self.nodes.len() {
                let dx = self.nodes[i].x - self.nodes[j].x;
                let dy = self.nodes[i].y - self.nodes[j].y;
                let dist2 = dx.mul_add(dx, dy * dy).max(1.0);
                let dist = dist2.sqrt();
                let push = -CHARGE_STRENGTH * self.alpha / dist2;
                let (ux, uy) = (dx / dist, dy / dist);
                self.nodes[i].vx += ux * push;
                self.nodes[i].vy += uy * push;
                self.nodes[j].vx -= ux * push;
                self.nodes[j].vy -= uy * push;
            }
        }

        // Springs pulling links toward their target distance.
        for link in &self.links {
            let (s, t) = (link.source, link.target);
            let dx = self.nodes[t].x - self.nodes[s].x;
            let dy = self.nodes[t].y - self.nodes[s].y;
            let len = dx.hypot(dy).max(1e-6);
            let stretch = (len - LINK_DISTANCE) / len * LINK_STRENGTH * self.alpha;
            self.nodes[s].vx += dx * stretch;
            self.nodes[s].vy += dy * stretch;
            self.nodes[t].vx -= dx * stretch;
            self.nodes[t].vy -= dy * stretch;
        }

        // Centering translates the whole layout, velocities untouched.
        if !self.nodes.is_empty() {
            let n = self.nodes.len() as f64;
            let mean_x = self.nodes.iter().map(|node| node.x).sum::<f64>() / n;
            let mean_y = self.nodes.iter().map(|node| node.y).sum::<f64>() / n;
            for node in &mut self.nodes {
                node.x += self.center.0 - mean_x;
                node.y += self.center.1 - mean_y;
            }
        }

        for node in &mut self.nodes {
            node.vx *= VELOCITY_RETAIN;
            node.vy *= VELOCITY_RETAIN;
            match (node.fx, node.fy) {
                (Some(fx), Some(fy)) => {
                    node.x = fx;
                    node.y = fy;
                    node.vx = 0.0;
                    node.vy = 0.0;
                }
                _ => {
                    node.x += node.vx;
                    node.y += node.vy;
                }
            }
        }

        true
    }

    /// Index of the node under `(x, y)`, if any.
    pub fn node_at(&self, x: f64, y: f64, slop: f64) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (index, node) in self.nodes.iter().enumerate() {
            let distance = (x - node.x).hypot(y - node.y);
            if distance <= node.radius + slop && best.is_none_or(|(_, d)| distance < d) {
                best = Some((index, distance));
            }
        }
        best.map(|(index, _)| index)
    }

    /// Pins the node and re-energizes the simulation.
    pub fn drag_start(&mut self, index: usize) {
        if let Some(node) = self.nodes.get_mut(index) {
            node.fx = Some(node.x);
            node.fy = Some(node.y);
            self.alpha_target = DRAG_ALPHA_TARGET;
            if self.alpha < DRAG_ALPHA_TARGET {
                self.alpha = DRAG_ALPHA_TARGET;
            }
        }
    }

    pub fn drag_to(&mut self, index: usize, x: f64, y: f64) {
        if let Some(node) = self.nodes.get_mut(index) {
            node.fx = Some(x);
            node.fy = Some(y);
        }
    }

    /// Releases the pin and lets the simulation relax.
    pub fn drag_end(&mut self, index: usize) {
        if let Some(node) = self.nodes.get_mut(index) {
            node.fx = None;
            node.fy = None;
        }
        self.alpha_target = 0.0;
    }
}

/// Draws the current simulation state: one line per link, one circle and
/// one label per node.
pub fn render(surface: &mut impl DrawingSurface, sim: &ForceSimulation) {
    surface.clear();

    for link in &sim.links {
        let s = &sim.nodes[link.source];
        let t = &sim.nodes[link.target];
        surface.line(s.x, s.y, t.x, t.y, link.value.max(0.0).sqrt(), LINK_COLOR);
    }

    for node in &sim.nodes {
        surface.circle(node.x, node.y, node.radius, node.color);
    }

    for node in &sim.nodes {
        surface.text(Label {
            x: node.x + 12.0,
            y: node.y + 3.0,
            text: node.name.clone(),
            anchor: Anchor::Start,
            rotation: 0.0,
            color: Color::White,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::{GraphLink, GraphNode};
    use crate::viz::surface::Scene;

    fn graph() -> GraphData {
        GraphData {
            nodes: vec![
                GraphNode {
                    id: "KE".into(),
                    name: "Kenya".into(),
                    size: Some(20.0),
                    color: Some("#FF6B35".into()),
                },
                GraphNode {
                    id: "NG".into(),
                    name: "Nigeria".into(),
                    size: None,
                    color: None,
                },
                GraphNode {
                    id: "theme_skills".into(),
                    name: "Skills Development".into(),
                    size: Some(15.0),
                    color: None,
                },
            ],
            links: vec![
                GraphLink {
                    source: "KE".into(),
                    target: "theme_skills".into(),
                    value: 1.0,
                },
                GraphLink {
                    source: "NG".into(),
                    target: "theme_skills".into(),
                    value: 4.0,
                },
            ],
        }
    }

    fn dims() -> Dimensions {
        Dimensions::new(800.0, 700.0)
    }

    #[test]
    fn renders_one_circle_per_node_and_one_line_per_link() {
        let sim = ForceSimulation::new(&graph(), dims());
        let mut scene = Scene::new(800.0, 700.0);
        render(&mut scene, &sim);
        assert_eq!(scene.circles().count(), 3);
        assert_eq!(scene.lines().count(), 2);
        assert_eq!(scene.labels().len(), 3);

        let widths: Vec<f64> = scene
            .lines()
            .filter_map(|shape| match shape {
                crate::viz::surface::Shape::Line { width, .. } => Some(*width),
                _ => None,
            })
            .collect();
        assert_eq!(widths, vec![1.0, 2.0]);
    }

    #[test]
    fn dangling_links_are_dropped() {
        let mut data = graph();
        data.links.push(GraphLink {
            source: "KE".into(),
            target: "missing".into(),
            value: 1.0,
        });
        let sim = ForceSimulation::new(&data, dims());
        assert_eq!(sim.link_count(), 2);
        assert_eq!(sim.dropped_links(), 1);
    }

    #[test]
    fn drag_pins_node_position_through_ticks() {
        let mut sim = ForceSimulation::new(&graph(), dims());
        sim.drag_start(0);
        sim.drag_to(0, 50.0, 60.0);
        for _ in 0..5 {
            sim.tick();
        }
        assert!((sim.nodes()[0].x - 50.0).abs() < 1e-9);
        assert!((sim.nodes()[0].y - 60.0).abs() < 1e-9);
    }

    #[test]
    fn drag_reenergizes_and_release_relaxes() {
        let mut sim = ForceSimulation::new(&graph(), dims());
        for _ in 0..500 {
            if !sim.tick() {
                break;
            }
        }
        assert!(!sim.running());

        sim.drag_start(1);
        assert!((sim.alpha_target() - 0.3).abs() < f64::EPSILON);
        assert!(sim.running());

        sim.drag_end(1);
        assert!(sim.alpha_target().abs() < f64::EPSILON);
        assert!(sim.nodes()[1].fx.is_none());
    }

    #[test]
    fn unstyled_nodes_use_defaults() {
        let sim = ForceSimulation::new(&graph(), dims());
        let nigeria = &sim.nodes()[1];
        assert!((nigeria.radius - DEFAULT_NODE_RADIUS).abs() < f64::EPSILON);
        assert_eq!(nigeria.color, DEFAULT_NODE_COLOR);
        assert_eq!(sim.nodes()[0].color, Color::Rgb(255, 107, 53));
    }
}
