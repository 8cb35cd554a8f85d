//! HTTP client for the strategies portal API.

use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::api::models::{
    CountrySummary, GraphData, HeatmapData, HierarchyNode, SearchResponse, ThemeSummary,
    TimelineData,
};
use crate::error::{PortalError, PortalResult};

/// Client bound to one portal instance.
#[derive(Debug, Clone)]
pub struct PortalClient {
    base_url: String,
    http: Client,
}

impl PortalClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, &str)],
    ) -> PortalResult<T> {
        let url = format!("{}{endpoint}", self.base_url);
        let mut request = self.http.get(&url);
        if !query.is_empty() {
            request = request.query(query);
        }

        let response = request
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|e| PortalError::fetch(endpoint, e))?;

        response
            .json::<T>()
            .await
            .map_err(|e| PortalError::fetch(endpoint, e))
    }

    pub async fn fetch_countries(&self) -> PortalResult<Vec<CountrySummary>> {
        self.get_json("/api/countries", &[]).await
    }

    pub async fn fetch_themes(&self) -> PortalResult<Vec<ThemeSummary>> {
        self.get_json("/api/themes", &[]).await
    }

    pub async fn search(&self, query: &str) -> PortalResult<SearchResponse> {
        self.get_json("/api/search", &[("q", query)]).await
    }

    /// Requests a comparison for the given country codes. The payload
    /// shape belongs to the server; it is consumed opaquely.
    pub async fn compare(&self, codes: &[String]) -> PortalResult<serde_json::Value> {
        let query: Vec<(&str, &str)> = codes
            .iter()
            .map(|code| ("countries", code.as_str()))
            .collect();
        self.get_json("/api/comparison", &query).await
    }

    pub async fn fetch_mind_map(&self, country_code: &str) -> PortalResult<HierarchyNode> {
        let endpoint = format!("/api/mind-map/{country_code}");
        self.get_json(&endpoint, &[]).await
    }

    pub async fn fetch_network_graph(&self) -> PortalResult<GraphData> {
        self.get_json("/api/network-graph", &[]).await
    }

    pub async fn fetch_timeline(&self) -> PortalResult<TimelineData> {
        self.get_json("/api/timeline", &[]).await
    }

    pub async fn fetch_heatmap(&self) -> PortalResult<HeatmapData> {
        self.get_json("/api/heatmap", &[]).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_stripped() {
        let client = PortalClient::new("http://localhost:5000/");
        assert_eq!(client.base_url(), "http://localhost:5000");
    }
}
