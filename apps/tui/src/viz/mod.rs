//! Visualization renderers and the per-container handle registry.
//!
//! All four variants share one contract: `Registry::render` clears the
//! container's previous scene, builds a fresh one from the given data, and
//! replaces the registry entry (including any live force simulation, which
//! stops with the handle it belonged to). Rendering into a container whose
//! surface has not been measured is an error the caller swallows.

pub mod heatmap;
pub mod mindmap;
pub mod network;
pub mod scale;
pub mod surface;
pub mod timeline;
pub mod tooltip;

use std::collections::HashMap;

use thiserror::Error;

use crate::api::models::{GraphData, HeatmapData, HierarchyNode, TimelineEvent};
use network::ForceSimulation;
use surface::Scene;
use tooltip::TooltipContent;

const HIT_SLOP: f64 = 2.0;

/// The fixed drawing containers of the portal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerId {
    CountryMindMap,
    ThemeNetwork,
    StrategyTimeline,
    CoverageHeatmap,
}

impl ContainerId {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CountryMindMap => "country-mind-map",
            Self::ThemeNetwork => "theme-network",
            Self::StrategyTimeline => "strategy-timeline",
            Self::CoverageHeatmap => "coverage-heatmap",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    MindMap,
    Network,
    Timeline,
    Heatmap,
}

impl Variant {
    pub const fn label(self) -> &'static str {
        match self {
            Self::MindMap => "Mind map",
            Self::Network => "Network",
            Self::Timeline => "Timeline",
            Self::Heatmap => "Heatmap",
        }
    }

    /// Fixed surface height per variant; width follows the container.
    pub const fn default_height(self) -> f64 {
        match self {
            Self::MindMap => 600.0,
            Self::Network => 700.0,
            Self::Timeline => 500.0,
            Self::Heatmap => 400.0,
        }
    }
}

/// Surface size in abstract units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
}

impl Dimensions {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Data accepted by the renderers, one shape per variant.
#[derive(Debug, Clone)]
pub enum VizData {
    Hierarchy(HierarchyNode),
    Graph(GraphData),
    Timeline(Vec<TimelineEvent>),
    Heatmap(HeatmapData),
}

impl VizData {
    pub const fn variant(&self) -> Variant {
        match self {
            Self::Hierarchy(_) => Variant::MindMap,
            Self::Graph(_) => Variant::Network,
            Self::Timeline(_) => Variant::Timeline,
            Self::Heatmap(_) => Variant::Heatmap,
        }
    }
}

/// What is currently drawn in a container: the variant is stored
/// explicitly so a redraw never has to infer it from the container name.
#[derive(Debug, Clone)]
pub struct VizHandle {
    pub variant: Variant,
    pub data: VizData,
    pub scene: Scene,
    pub dims: Dimensions,
    pub simulation: Option<ForceSimulation>,
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("no drawing surface registered for container {}", .0.as_str())]
    TargetMissing(ContainerId),
}

/// Registry of measured surfaces and live handles, owned by the
/// controller.
#[derive(Debug, Default)]
pub struct Registry {
    surfaces: HashMap<ContainerId, f64>,
    entries: HashMap<ContainerId, VizHandle>,
}

impl Registry {
    /// Records the measured width of a container's surface. Called by the
    /// widget layer whenever the container is laid out.
    pub fn measure(&mut self, id: ContainerId, width: f64) {
        self.surfaces.insert(id, width);
    }

    pub fn is_measured(&self, id: ContainerId) -> bool {
        self.surfaces.contains_key(&id)
    }

    pub fn handle(&self, id: ContainerId) -> Option<&VizHandle> {
        self.entries.get(&id)
    }

    pub fn handle_mut(&mut self, id: ContainerId) -> Option<&mut VizHandle> {
        self.entries.get_mut(&id)
    }

    /// Removes a container's handle; a live simulation stops with it.
    pub fn remove(&mut self, id: ContainerId) {
        self.entries.remove(&id);
    }

    /// Builds a fresh scene for `id` from `data` and replaces whatever was
    /// drawn there before. The previous handle, simulation included, is
    /// dropped.
    pub fn render(&mut self, id: ContainerId, data: VizData) -> Result<(), RenderError> {
        let Some(width) = self.surfaces.get(&id).copied() else {
            return Err(RenderError::TargetMissing(id));
        };
        let variant = data.variant();
        let dims = Dimensions::new(width, variant.default_height());
        let mut scene = Scene::new(dims.width, dims.height);

        let simulation = match &data {
            VizData::Hierarchy(root) => {
                mindmap::render(&mut scene, root, dims);
                None
            }
            VizData::Graph(graph) => {
                let sim = ForceSimulation::new(graph, dims);
                network::render(&mut scene, &sim);
                Some(sim)
            }
            VizData::Timeline(events) => {
                timeline::render(&mut scene, events, dims);
                None
            }
            VizData::Heatmap(cells) => {
                heatmap::render(&mut scene, cells, dims);
                None
            }
        };

        self.entries.insert(
            id,
            VizHandle {
                variant,
                data,
                scene,
                dims,
                simulation,
            },
        );
        Ok(())
    }

    /// Re-renders every registered handle with its stored variant and
    /// cached data at the currently measured widths. Used after a resize.
    pub fn rerender_all(&mut self) {
        let ids: Vec<ContainerId> = self.entries.keys().copied().collect();
        for id in ids {
            if let Some(data) = self.entries.get(&id).map(|handle| handle.data.clone()) {
                let _ = self.render(id, data);
            }
        }
    }

    /// Advances every live simulation one step and refreshes its scene.
    pub fn tick_simulations(&mut self) {
        for handle in self.entries.values_mut() {
            if let Some(sim) = &mut handle.simulation {
                if sim.tick() {
                    network::render(&mut handle.scene, sim);
                }
            }
        }
    }
}

/// Resolves the datum under `(x, y)` in a handle's scene into tooltip
/// content. The title falls back across name, country, and theme the way
/// the portal composes it.
pub fn hit_test(handle: &VizHandle, x: f64, y: f64) -> Option<TooltipContent> {
    match &handle.data {
        VizData::Hierarchy(root) => {
            let index = handle.scene.circle_at(x, y, HIT_SLOP)?;
            let node = mindmap::flatten(root).into_iter().nth(index)?;
            Some(TooltipContent {
                title: node.name.clone(),
                description: node.description.clone(),
                budget: node.budget.clone(),
                value: None,
            })
        }
        VizData::Graph(_) => {
            let sim = handle.simulation.as_ref()?;
            let index = sim.node_at(x, y, HIT_SLOP)?;
            Some(TooltipContent::titled(sim.nodes()[index].name.clone()))
        }
        VizData::Timeline(events) => {
            let index = handle.scene.circle_at(x, y, HIT_SLOP)?;
            let dated = timeline::dated_events(events);
            let entry = dated.get(index)?;
            Some(TooltipContent {
                title: entry.event.country.clone(),
                description: entry.event.description.clone(),
                budget: None,
                value: None,
            })
        }
        VizData::Heatmap(data) => {
            let index = handle.scene.rect_at(x, y)?;
            let x_scale = heatmap::theme_scale(data, handle.dims);
            let y_scale = heatmap::country_scale(data, handle.dims);
            let cell = data
                .data
                .iter()
                .filter(|cell| {
                    x_scale.position(&cell.theme).is_some()
                        && y_scale.position(&cell.country).is_some()
                })
                .nth(index)?;
            Some(TooltipContent {
                title: cell.theme.clone(),
                description: Some(cell.country.clone()),
                budget: None,
                value: Some(cell.value),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::{GraphLink, GraphNode};
    use crate::domain::NodeKind;

    fn graph(nodes: usize) -> GraphData {
        GraphData {
            nodes: (0..nodes)
                .map(|i| GraphNode {
                    id: format!("n{i}"),
                    name: format!("Node {i}"),
                    size: None,
                    color: None,
                })
                .collect(),
            links: (1..nodes)
                .map(|i| GraphLink {
                    source: "n0".into(),
                    target: format!("n{i}"),
                    value: 1.0,
                })
                .collect(),
        }
    }

    #[test]
    fn render_without_a_measured_surface_is_target_missing() {
        let mut registry = Registry::default();
        let result = registry.render(ContainerId::ThemeNetwork, VizData::Graph(graph(2)));
        assert!(matches!(result, Err(RenderError::TargetMissing(_))));
        assert!(registry.handle(ContainerId::ThemeNetwork).is_none());
    }

    #[test]
    fn rerender_replaces_the_scene_without_accumulation() {
        let mut registry = Registry::default();
        registry.measure(ContainerId::ThemeNetwork, 800.0);
        registry
            .render(ContainerId::ThemeNetwork, VizData::Graph(graph(5)))
            .expect("surface measured");
        registry
            .render(ContainerId::ThemeNetwork, VizData::Graph(graph(3)))
            .expect("surface measured");

        let handle = registry
            .handle(ContainerId::ThemeNetwork)
            .expect("rendered");
        assert_eq!(handle.scene.circles().count(), 3);
        assert_eq!(handle.scene.lines().count(), 2);
    }

    #[test]
    fn rerender_replaces_the_simulation() {
        let mut registry = Registry::default();
        registry.measure(ContainerId::ThemeNetwork, 800.0);
        registry
            .render(ContainerId::ThemeNetwork, VizData::Graph(graph(4)))
            .expect("surface measured");
        registry.tick_simulations();
        registry.tick_simulations();

        registry
            .render(ContainerId::ThemeNetwork, VizData::Graph(graph(4)))
            .expect("surface measured");
        let sim = registry
            .handle(ContainerId::ThemeNetwork)
            .and_then(|handle| handle.simulation.as_ref())
            .expect("network handle has a simulation");
        assert!((sim.alpha() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn resize_rerenders_at_the_new_measured_width() {
        let mut registry = Registry::default();
        registry.measure(ContainerId::CountryMindMap, 800.0);
        let tree = HierarchyNode {
            name: "root".into(),
            kind: NodeKind::Root,
            size: None,
            description: None,
            budget: None,
            children: vec![HierarchyNode {
                name: "leaf".into(),
                kind: NodeKind::Action,
                size: None,
                description: None,
                budget: None,
                children: vec![],
            }],
        };
        registry
            .render(ContainerId::CountryMindMap, VizData::Hierarchy(tree))
            .expect("surface measured");

        registry.measure(ContainerId::CountryMindMap, 400.0);
        registry.rerender_all();

        let handle = registry
            .handle(ContainerId::CountryMindMap)
            .expect("rendered");
        assert_eq!(handle.variant, Variant::MindMap);
        assert!((handle.dims.width - 400.0).abs() < f64::EPSILON);
        assert_eq!(handle.scene.circles().count(), 2);
    }

    #[test]
    fn removing_a_handle_drops_its_simulation() {
        let mut registry = Registry::default();
        registry.measure(ContainerId::ThemeNetwork, 800.0);
        registry
            .render(ContainerId::ThemeNetwork, VizData::Graph(graph(2)))
            .expect("surface measured");
        registry.remove(ContainerId::ThemeNetwork);
        assert!(registry.handle(ContainerId::ThemeNetwork).is_none());
    }
}
