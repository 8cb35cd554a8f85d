use std::collections::{HashMap, HashSet};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use ratatui::layout::Rect;
use throbber_widgets_tui::ThrobberState;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::api::models::{
    CountrySummary, GraphData, HeatmapData, HierarchyNode, PortalDataset, SearchHit,
    SearchResponse, ThemeSummary, TimelineEvent,
};
use crate::api::PortalClient;
use crate::config::AppConfig;
use crate::error::PortalError;
use crate::export::ExportFormat;
use crate::viz::tooltip::Tooltip;
use crate::viz::{ContainerId, Registry};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Countries,
    CountryDetail,
    Network,
    Timeline,
    Heatmap,
    Search,
    Compare,
}

/// Transient dismissible message shown in the status area.
#[derive(Debug, Clone)]
pub struct Banner {
    pub text: String,
    pub error: bool,
}

/// Results of fetches running on the runtime, posted back to the UI loop.
#[derive(Debug)]
pub enum AppMessage {
    Countries(Result<Vec<CountrySummary>, PortalError>),
    Themes(Result<Vec<ThemeSummary>, PortalError>),
    Search {
        generation: u64,
        result: Result<SearchResponse, PortalError>,
    },
    Comparison(Result<serde_json::Value, PortalError>),
    MindMap {
        country_code: String,
        result: Result<HierarchyNode, PortalError>,
    },
    NetworkGraph(Result<GraphData, PortalError>),
    Timeline(Result<Vec<TimelineEvent>, PortalError>),
    Heatmap(Result<HeatmapData, PortalError>),
}

#[derive(Debug)]
pub struct App {
    pub running: bool,
    pub screen: Screen,
    pub show_help: bool,
    pub debug: bool,

    pub client: Arc<PortalClient>,
    pub tx: UnboundedSender<AppMessage>,
    pub rx: UnboundedReceiver<AppMessage>,

    pub export_dir: PathBuf,
    pub export_format: ExportFormat,

    // Fetched datasets.
    pub countries: Vec<CountrySummary>,
    pub themes: Vec<ThemeSummary>,
    pub mind_maps: HashMap<String, HierarchyNode>,
    pub network_graph: Option<GraphData>,
    pub timeline_events: Option<Vec<TimelineEvent>>,
    pub heatmap: Option<HeatmapData>,
    pub comparison: Option<serde_json::Value>,

    // Selection and navigation.
    pub selected_country_index: usize,
    pub compare_selection: Vec<String>,
    pub detail_country: Option<CountrySummary>,

    // Search.
    pub search_input: String,
    pub search_results: Vec<SearchHit>,
    pub selected_result_index: usize,
    pub pending_search: Option<Instant>,
    pub search_generation: u64,

    // Visualizations and pointer interaction.
    pub registry: Registry,
    pub tooltip: Tooltip,
    pub tooltip_cell: (u16, u16),
    pub dragging: Option<(ContainerId, usize)>,
    pub panel_areas: HashMap<ContainerId, Rect>,
    pub pending_resize: Option<Instant>,
    pub in_flight: HashSet<String>,

    // Chrome.
    pub banner: Option<Banner>,
    pub loading: usize,
    pub throbber_state: ThrobberState,
    pub animation_counter: f64,
    pub last_frame: Instant,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            running: true,
            screen: Screen::Countries,
            show_help: false,
            debug: config.debug,
            client: Arc::new(PortalClient::new(&config.api_base_url)),
            tx,
            rx,
            export_dir: config.export_dir.clone(),
            export_format: ExportFormat::default(),
            countries: Vec::new(),
            themes: Vec::new(),
            mind_maps: HashMap::new(),
            network_graph: None,
            timeline_events: None,
            heatmap: None,
            comparison: None,
            selected_country_index: 0,
            compare_selection: Vec::new(),
            detail_country: None,
            search_input: String::new(),
            search_results: Vec::new(),
            selected_result_index: 0,
            pending_search: None,
            search_generation: 0,
            registry: Registry::default(),
            tooltip: Tooltip::default(),
            tooltip_cell: (0, 0),
            dragging: None,
            panel_areas: HashMap::new(),
            pending_resize: None,
            in_flight: HashSet::new(),
            banner: None,
            loading: 0,
            throbber_state: ThrobberState::default(),
            animation_counter: 0.0,
            last_frame: Instant::now(),
        }
    }

    /// Per-frame bookkeeping: animation clock, spinner, and live
    /// simulations.
    pub fn update(&mut self) {
        let now = Instant::now();
        let delta = now.duration_since(self.last_frame);
        self.last_frame = now;

        self.animation_counter += delta.as_secs_f64() * 2.0;
        if self.animation_counter > 2.0 * std::f64::consts::PI {
            self.animation_counter -= 2.0 * std::f64::consts::PI;
        }

        if self.loading > 0 {
            self.throbber_state.calc_next();
        }

        self.registry.tick_simulations();
    }

    pub fn set_status(&mut self, text: impl Into<String>) {
        self.banner = Some(Banner {
            text: text.into(),
            error: false,
        });
    }

    pub fn set_error(&mut self, text: impl Into<String>) {
        let text = text.into();
        if self.debug {
            eprintln!("[DEBUG] {text}");
        }
        self.banner = Some(Banner { text, error: true });
    }

    pub fn dismiss_banner(&mut self) {
        self.banner = None;
    }

    pub fn selected_country(&self) -> Option<&CountrySummary> {
        self.countries.get(self.selected_country_index)
    }

    /// Snapshot of the in-memory dataset, as serialized by exports.
    pub fn dataset(&self) -> PortalDataset {
        PortalDataset {
            countries: self.countries.clone(),
            themes: self.themes.clone(),
        }
    }

    pub const fn is_loading(&self) -> bool {
        self.loading > 0
    }
}
