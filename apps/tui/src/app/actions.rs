//! Controller actions: fetch dispatch, debounced search and resize,
//! comparison validation, export, and navigation.
//!
//! Fetches run on the tokio runtime and post an [`AppMessage`] back to the
//! UI loop; the loop applies whatever arrives on its next pass. Search
//! responses carry a generation number so a stale response can never
//! overwrite a newer one.

use std::time::{Duration, Instant};

use crate::api::models::CountrySummary;
use crate::app::state::{App, AppMessage, Screen};
use crate::error::PortalError;
use crate::export;
use crate::viz::{ContainerId, VizData};

pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);
pub const RESIZE_DEBOUNCE: Duration = Duration::from_millis(250);
pub const MIN_QUERY_LEN: usize = 2;
pub const MIN_COMPARE_COUNTRIES: usize = 2;

/// Kicks off the initial countries and themes fetches.
pub fn load_initial_data(app: &mut App) {
    app.loading += 1;
    let client = app.client.clone();
    let tx = app.tx.clone();
    tokio::spawn(async move {
        let _ = tx.send(AppMessage::Countries(client.fetch_countries().await));
    });

    app.loading += 1;
    let client = app.client.clone();
    let tx = app.tx.clone();
    tokio::spawn(async move {
        let _ = tx.send(AppMessage::Themes(client.fetch_themes().await));
    });
}

/// Records a keystroke; the actual request goes out once the input has
/// been quiet for the debounce window.
pub fn queue_search(app: &mut App) {
    app.pending_search = Some(Instant::now());
}

pub fn queue_resize(app: &mut App) {
    app.pending_resize = Some(Instant::now());
}

/// Fires debounced work whose quiet period has elapsed. Called once per
/// loop pass.
pub fn flush_pending(app: &mut App) {
    if app
        .pending_search
        .is_some_and(|at| at.elapsed() >= SEARCH_DEBOUNCE)
    {
        app.pending_search = None;
        dispatch_search(app);
    }

    if app
        .pending_resize
        .is_some_and(|at| at.elapsed() >= RESIZE_DEBOUNCE)
    {
        app.pending_resize = None;
        app.registry.rerender_all();
    }
}

/// Issues one search request for the current input. Queries shorter than
/// two characters clear the results without touching the network.
pub fn dispatch_search(app: &mut App) {
    let query = app.search_input.trim().to_string();
    if query.chars().count() < MIN_QUERY_LEN {
        app.search_results.clear();
        app.selected_result_index = 0;
        return;
    }

    app.search_generation += 1;
    let generation = app.search_generation;
    app.loading += 1;
    let client = app.client.clone();
    let tx = app.tx.clone();
    tokio::spawn(async move {
        let result = client.search(&query).await;
        let _ = tx.send(AppMessage::Search { generation, result });
    });
}

/// Toggles the highlighted country in the comparison selection.
pub fn toggle_compare_selection(app: &mut App) {
    let Some(code) = app.selected_country().map(|c| c.code.clone()) else {
        return;
    };
    if let Some(position) = app.compare_selection.iter().position(|c| *c == code) {
        app.compare_selection.remove(position);
    } else {
        app.compare_selection.push(code);
    }
}

/// Validates the selection and issues one comparison request carrying all
/// selected codes.
pub fn request_comparison(app: &mut App) {
    if app.compare_selection.len() < MIN_COMPARE_COUNTRIES {
        let error =
            PortalError::Validation("Select at least 2 countries for comparison".to_string());
        app.set_error(error.to_string());
        return;
    }

    app.loading += 1;
    let codes = app.compare_selection.clone();
    let client = app.client.clone();
    let tx = app.tx.clone();
    tokio::spawn(async move {
        let _ = tx.send(AppMessage::Comparison(client.compare(&codes).await));
    });
}

/// Serializes the in-memory dataset in the selected format and writes it
/// to the export directory.
pub fn export_dataset(app: &mut App) {
    let dataset = app.dataset();
    match export::write_export(&app.export_dir, app.export_format, &dataset) {
        Ok(path) => {
            let label = app.export_format.label();
            app.set_status(format!("Exported {label} to {}", path.display()));
        }
        Err(e) => app.set_error(format!("Export failed: {e}")),
    }
}

/// Navigates to a country's detail screen and makes sure its mind map is
/// on the way.
pub fn open_country(app: &mut App, country: CountrySummary) {
    let code = country.code.clone();
    app.detail_country = Some(country);
    app.screen = Screen::CountryDetail;
    app.registry.remove(ContainerId::CountryMindMap);
    app.tooltip.hide();

    let key = format!("mind-map:{code}");
    if app.mind_maps.contains_key(&code) || app.in_flight.contains(&key) {
        return;
    }
    app.in_flight.insert(key);
    app.loading += 1;
    let client = app.client.clone();
    let tx = app.tx.clone();
    tokio::spawn(async move {
        let result = client.fetch_mind_map(&code).await;
        let _ = tx.send(AppMessage::MindMap {
            country_code: code,
            result,
        });
    });
}

pub fn show_network(app: &mut App) {
    app.screen = Screen::Network;
    app.tooltip.hide();
    if app.network_graph.is_some() || app.in_flight.contains("network") {
        return;
    }
    app.in_flight.insert("network".to_string());
    app.loading += 1;
    let client = app.client.clone();
    let tx = app.tx.clone();
    tokio::spawn(async move {
        let _ = tx.send(AppMessage::NetworkGraph(client.fetch_network_graph().await));
    });
}

pub fn show_timeline(app: &mut App) {
    app.screen = Screen::Timeline;
    app.tooltip.hide();
    if app.timeline_events.is_some() || app.in_flight.contains("timeline") {
        return;
    }
    app.in_flight.insert("timeline".to_string());
    app.loading += 1;
    let client = app.client.clone();
    let tx = app.tx.clone();
    tokio::spawn(async move {
        let result = client.fetch_timeline().await;
        let _ = tx.send(AppMessage::Timeline(result.map(|data| data.events)));
    });
}

pub fn show_heatmap(app: &mut App) {
    app.screen = Screen::Heatmap;
    app.tooltip.hide();
    if app.heatmap.is_some() || app.in_flight.contains("heatmap") {
        return;
    }
    app.in_flight.insert("heatmap".to_string());
    app.loading += 1;
    let client = app.client.clone();
    let tx = app.tx.clone();
    tokio::spawn(async move {
        let _ = tx.send(AppMessage::Heatmap(client.fetch_heatmap().await));
    });
}

/// Renders any visualization whose data has arrived but whose container
/// has no handle yet. Containers that have not been laid out are skipped
/// until they are.
pub fn sync_visualizations(app: &mut App) {
    if let Some(country) = &app.detail_country {
        if let Some(map) = app.mind_maps.get(&country.code) {
            if app.registry.handle(ContainerId::CountryMindMap).is_none() {
                let _ = app
                    .registry
                    .render(ContainerId::CountryMindMap, VizData::Hierarchy(map.clone()));
            }
        }
    }

    if let Some(graph) = &app.network_graph {
        if app.registry.handle(ContainerId::ThemeNetwork).is_none() {
            let _ = app
                .registry
                .render(ContainerId::ThemeNetwork, VizData::Graph(graph.clone()));
        }
    }

    if let Some(events) = &app.timeline_events {
        if app.registry.handle(ContainerId::StrategyTimeline).is_none() {
            let _ = app.registry.render(
                ContainerId::StrategyTimeline,
                VizData::Timeline(events.clone()),
            );
        }
    }

    if let Some(heatmap) = &app.heatmap {
        if app.registry.handle(ContainerId::CoverageHeatmap).is_none() {
            let _ = app.registry.render(
                ContainerId::CoverageHeatmap,
                VizData::Heatmap(heatmap.clone()),
            );
        }
    }
}

/// Applies one fetch result to the state. Failures become banners; a
/// search result whose generation is not the latest is dropped.
pub fn apply_message(app: &mut App, message: AppMessage) {
    app.loading = app.loading.saturating_sub(1);

    match message {
        AppMessage::Countries(Ok(countries)) => {
            app.countries = countries;
            if app.selected_country_index >= app.countries.len() {
                app.selected_country_index = app.countries.len().saturating_sub(1);
            }
        }
        AppMessage::Countries(Err(e)) => {
            app.set_error(format!("Failed to load countries: {e}"));
        }
        AppMessage::Themes(Ok(themes)) => app.themes = themes,
        AppMessage::Themes(Err(e)) => app.set_error(format!("Failed to load themes: {e}")),
        AppMessage::Search { generation, result } => {
            if generation != app.search_generation {
                return;
            }
            match result {
                Ok(response) => {
                    app.search_results = response.results;
                    app.selected_result_index = 0;
                }
                Err(e) => app.set_error(format!("Search failed: {e}")),
            }
        }
        AppMessage::Comparison(Ok(payload)) => {
            app.comparison = Some(payload);
            app.screen = Screen::Compare;
        }
        AppMessage::Comparison(Err(e)) => app.set_error(format!("Comparison failed: {e}")),
        AppMessage::MindMap {
            country_code,
            result,
        } => {
            app.in_flight.remove(&format!("mind-map:{country_code}"));
            match result {
                Ok(map) => {
                    app.mind_maps.insert(country_code, map);
                }
                Err(e) => app.set_error(format!("Failed to load strategy map: {e}")),
            }
        }
        AppMessage::NetworkGraph(result) => {
            app.in_flight.remove("network");
            match result {
                Ok(graph) => app.network_graph = Some(graph),
                Err(e) => app.set_error(format!("Failed to load network graph: {e}")),
            }
        }
        AppMessage::Timeline(result) => {
            app.in_flight.remove("timeline");
            match result {
                Ok(events) => app.timeline_events = Some(events),
                Err(e) => app.set_error(format!("Failed to load timeline: {e}")),
            }
        }
        AppMessage::Heatmap(result) => {
            app.in_flight.remove("heatmap");
            match result {
                Ok(heatmap) => app.heatmap = Some(heatmap),
                Err(e) => app.set_error(format!("Failed to load heatmap: {e}")),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::{SearchHit, SearchResponse};
    use crate::config::AppConfig;
    use std::path::PathBuf;

    fn test_app() -> App {
        App::new(&AppConfig {
            api_base_url: "http://127.0.0.1:1".to_string(),
            export_dir: PathBuf::from("./exports"),
            debug: false,
        })
    }

    fn hit(code: &str) -> SearchHit {
        SearchHit {
            country_code: code.to_string(),
            country_name: code.to_string(),
            relevance: 1,
        }
    }

    fn country(code: &str) -> CountrySummary {
        CountrySummary {
            code: code.to_string(),
            name: code.to_string(),
            status: crate::domain::StrategyStatus::Published,
        }
    }

    #[tokio::test]
    async fn short_queries_clear_results_without_a_request() {
        let mut app = test_app();
        app.search_results = vec![hit("KE")];
        app.search_input = "k".to_string();

        dispatch_search(&mut app);

        assert!(app.search_results.is_empty());
        assert_eq!(app.search_generation, 0);
        assert_eq!(app.loading, 0);
    }

    #[tokio::test]
    async fn each_dispatch_issues_one_generation() {
        let mut app = test_app();
        app.search_input = "kenya".to_string();
        dispatch_search(&mut app);
        dispatch_search(&mut app);
        assert_eq!(app.search_generation, 2);
    }

    #[test]
    fn stale_search_responses_are_dropped() {
        let mut app = test_app();
        app.search_generation = 3;
        app.search_results = vec![hit("NG")];

        apply_message(
            &mut app,
            AppMessage::Search {
                generation: 2,
                result: Ok(SearchResponse {
                    results: vec![hit("KE")],
                }),
            },
        );
        assert_eq!(app.search_results[0].country_code, "NG");

        apply_message(
            &mut app,
            AppMessage::Search {
                generation: 3,
                result: Ok(SearchResponse {
                    results: vec![hit("KE")],
                }),
            },
        );
        assert_eq!(app.search_results[0].country_code, "KE");
    }

    #[test]
    fn comparison_needs_at_least_two_countries() {
        let mut app = test_app();
        app.compare_selection = vec!["KE".to_string()];

        request_comparison(&mut app);

        let banner = app.banner.as_ref().expect("validation banner");
        assert!(banner.error);
        assert_eq!(app.loading, 0);
    }

    #[tokio::test]
    async fn comparison_with_two_countries_issues_one_request() {
        let mut app = test_app();
        app.compare_selection = vec!["KE".to_string(), "NG".to_string()];

        request_comparison(&mut app);

        assert!(app.banner.is_none());
        assert_eq!(app.loading, 1);
    }

    #[test]
    fn toggling_compare_selection_adds_and_removes() {
        let mut app = test_app();
        app.countries = vec![country("KE"), country("NG")];
        app.selected_country_index = 1;

        toggle_compare_selection(&mut app);
        assert_eq!(app.compare_selection, vec!["NG".to_string()]);

        toggle_compare_selection(&mut app);
        assert!(app.compare_selection.is_empty());
    }

    #[test]
    fn flush_respects_the_debounce_window() {
        let mut app = test_app();
        app.search_input = "kenya".to_string();
        app.pending_search = Some(Instant::now());

        flush_pending(&mut app);

        // Still inside the quiet window: nothing dispatched yet.
        assert!(app.pending_search.is_some());
        assert_eq!(app.search_generation, 0);
    }

    #[tokio::test]
    async fn elapsed_debounce_dispatches_exactly_once() {
        let mut app = test_app();
        app.search_input = "kenya".to_string();
        app.pending_search = Some(Instant::now() - Duration::from_millis(400));

        flush_pending(&mut app);
        assert!(app.pending_search.is_none());
        assert_eq!(app.search_generation, 1);

        flush_pending(&mut app);
        assert_eq!(app.search_generation, 1);
    }
}
