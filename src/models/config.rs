//! Configuration model loaded from external sources.

use serde::Deserialize;

use crate::index::HighlightTags;
use crate::pagination::{
    DEFAULT_MAX_PAGE_RANGE, DEFAULT_PAGE_RANGE_DELTA, DEFAULT_RESULTS_PER_PAGE, PagingSettings,
};

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub domain: String,
    pub address: String,
    pub port: u16,
    pub templates_dir: String,
    pub secret: String,
    pub search: SearchConfig,
}

/// Connection and presentation settings of the hosted search index.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Service name, expanded to `https://{name}.search.windows.net`.
    pub service_name: String,
    /// Full base URL; takes precedence over `service_name` when set.
    pub endpoint: Option<String>,
    /// Query-scoped key, never an admin key.
    pub query_api_key: String,
    pub index_name: String,
    pub suggester_name: String,
    pub api_version: String,
    pub timeout_secs: u64,
    pub results_per_page: usize,
    pub max_page_range: usize,
    pub page_range_delta: usize,
    pub highlight_pre_tag: String,
    pub highlight_post_tag: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        let tags = HighlightTags::default();
        Self {
            service_name: String::new(),
            endpoint: None,
            query_api_key: String::new(),
            index_name: "hotels".to_string(),
            suggester_name: "sg".to_string(),
            api_version: "2020-06-30".to_string(),
            timeout_secs: 30,
            results_per_page: DEFAULT_RESULTS_PER_PAGE,
            max_page_range: DEFAULT_MAX_PAGE_RANGE,
            page_range_delta: DEFAULT_PAGE_RANGE_DELTA,
            highlight_pre_tag: tags.pre,
            highlight_post_tag: tags.post,
        }
    }
}

impl SearchConfig {
    /// Base URL of the service without a trailing slash.
    pub fn base_url(&self) -> Option<String> {
        if let Some(endpoint) = self
            .endpoint
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
        {
            return Some(endpoint.trim_end_matches('/').to_string());
        }

        let name = self.service_name.trim();
        if name.is_empty() {
            None
        } else {
            Some(format!("https://{name}.search.windows.net"))
        }
    }

    pub fn paging(&self) -> PagingSettings {
        PagingSettings {
            results_per_page: self.results_per_page,
            max_page_range: self.max_page_range,
            page_range_delta: self.page_range_delta,
        }
    }

    pub fn highlight_tags(&self) -> HighlightTags {
        HighlightTags {
            pre: self.highlight_pre_tag.clone(),
            post: self.highlight_post_tag.clone(),
        }
    }
}
