//! Wire models for the portal API.

use serde::{Deserialize, Serialize};

use crate::domain::{NodeKind, StrategyStatus};

/// One entry of `/api/countries`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountrySummary {
    pub code: String,
    pub name: String,
    pub status: StrategyStatus,
}

/// One entry of `/api/themes`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeSummary {
    pub name: String,
    pub frequency: u32,
    #[serde(default)]
    pub countries: Vec<String>,
    #[serde(default)]
    pub percentage: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchHit {
    pub country_code: String,
    pub country_name: String,
    pub relevance: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Vec<SearchHit>,
}

/// A node of a strategy mind map. The payload is tree-shaped; `children`
/// is absent on leaves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HierarchyNode {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<HierarchyNode>,
}

impl HierarchyNode {
    /// Number of nodes in the subtree rooted here, including itself.
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(Self::count).sum::<usize>()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphLink {
    pub source: String,
    pub target: String,
    pub value: f64,
}

/// Payload of `/api/network-graph`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraphData {
    #[serde(default)]
    pub nodes: Vec<GraphNode>,
    #[serde(default)]
    pub links: Vec<GraphLink>,
}

/// One event of `/api/timeline`. `date` is an ISO `YYYY-MM-DD` string;
/// parsing happens on the layout side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineEvent {
    pub country: String,
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, alias = "title", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TimelineData {
    #[serde(default)]
    pub events: Vec<TimelineEvent>,
}

/// One cell of the theme coverage heatmap; `value` lies in `[0, 1]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeatmapCell {
    pub theme: String,
    pub country: String,
    pub value: f64,
}

/// Payload of `/api/heatmap`. The `themes` and `countries` lists carry
/// the axis domains and are supersets of the values in `data`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HeatmapData {
    #[serde(default)]
    pub data: Vec<HeatmapCell>,
    #[serde(default)]
    pub themes: Vec<String>,
    #[serde(default)]
    pub countries: Vec<String>,
}

/// The in-memory dataset held by the controller; this is what exports
/// serialize.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PortalDataset {
    pub countries: Vec<CountrySummary>,
    pub themes: Vec<ThemeSummary>,
}
