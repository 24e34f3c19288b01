//! REST client for an Azure Cognitive Search index.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::domain::hotel::Hotel;
use crate::index::errors::{SearchIndexError, SearchIndexResult};
use crate::index::{
    AutocompleteMode, AutocompleteQuery, SearchIndex, SearchMode, SearchQuery, SearchResults,
    SuggestQuery,
};
use crate::models::config::SearchConfig;

const API_KEY_HEADER: &str = "api-key";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchRequestBody<'a> {
    search: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    select: Option<String>,
    search_mode: SearchMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    skip: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    top: Option<usize>,
    count: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AutocompleteRequestBody<'a> {
    search: &'a str,
    suggester_name: &'a str,
    autocomplete_mode: AutocompleteMode,
    fuzzy: bool,
    top: usize,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SuggestRequestBody<'a> {
    search: &'a str,
    suggester_name: &'a str,
    fuzzy: bool,
    top: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    highlight_pre_tag: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    highlight_post_tag: Option<&'a str>,
}

#[derive(Deserialize)]
struct SearchResponseBody {
    #[serde(rename = "@odata.count")]
    count: Option<u64>,
    #[serde(default)]
    value: Vec<Hotel>,
}

#[derive(Deserialize)]
struct AutocompleteItem {
    text: String,
}

#[derive(Deserialize)]
struct SuggestItem {
    #[serde(rename = "@search.text")]
    text: String,
}

#[derive(Deserialize)]
struct ValueList<T> {
    #[serde(default = "Vec::new")]
    value: Vec<T>,
}

/// Query-only client bound to one index of a search service.
#[derive(Clone, Debug)]
pub struct AzureSearchIndex {
    http_client: Client,
    base_url: String,
    index_name: String,
    suggester_name: String,
    api_version: String,
    api_key: String,
}

impl AzureSearchIndex {
    /// Builds the index client around an existing HTTP client.
    pub fn new(config: &SearchConfig, http_client: Client) -> SearchIndexResult<Self> {
        let api_key = config.query_api_key.trim();
        if api_key.is_empty() {
            return Err(SearchIndexError::Configuration(
                "query api key is not set".to_string(),
            ));
        }

        let base_url = config.base_url().ok_or_else(|| {
            SearchIndexError::Configuration(
                "either search service name or endpoint must be set".to_string(),
            )
        })?;

        Ok(Self {
            http_client,
            base_url,
            index_name: config.index_name.clone(),
            suggester_name: config.suggester_name.clone(),
            api_version: config.api_version.clone(),
            api_key: api_key.to_string(),
        })
    }

    /// Builds a dedicated HTTP client honouring the configured timeout.
    pub fn from_config(config: &SearchConfig) -> SearchIndexResult<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| SearchIndexError::Configuration(e.to_string()))?;
        Self::new(config, http_client)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn docs_url(&self, operation: &str) -> String {
        format!(
            "{}/indexes/{}/docs/{operation}",
            self.base_url, self.index_name
        )
    }

    async fn post<B, R>(&self, operation: &str, body: &B) -> SearchIndexResult<R>
    where
        B: Serialize + Sync,
        R: DeserializeOwned,
    {
        let response = self
            .http_client
            .post(self.docs_url(operation))
            .query(&[("api-version", self.api_version.as_str())])
            .header(API_KEY_HEADER, &self.api_key)
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            log::warn!("Search {operation} on index {} failed with {status}", self.index_name);
            return Err(SearchIndexError::from_status(status, body));
        }

        Ok(response.json::<R>().await?)
    }
}

#[async_trait]
impl SearchIndex for AzureSearchIndex {
    async fn search(&self, query: SearchQuery) -> SearchIndexResult<SearchResults> {
        let body = SearchRequestBody {
            search: &query.search,
            select: (!query.select.is_empty()).then(|| query.select.join(",")),
            search_mode: query.mode,
            skip: query.pagination.as_ref().map(|p| p.skip),
            top: query.pagination.as_ref().map(|p| p.top),
            count: query.include_total_count,
        };

        let response: SearchResponseBody = self.post("search", &body).await?;
        let total = response
            .count
            .and_then(|count| usize::try_from(count).ok())
            .unwrap_or(response.value.len());

        Ok(SearchResults {
            total,
            documents: response.value,
        })
    }

    async fn autocomplete(&self, query: AutocompleteQuery) -> SearchIndexResult<Vec<String>> {
        let body = AutocompleteRequestBody {
            search: &query.search,
            suggester_name: &self.suggester_name,
            autocomplete_mode: query.mode,
            fuzzy: query.fuzzy,
            top: query.top,
        };

        let response: ValueList<AutocompleteItem> = self.post("autocomplete", &body).await?;
        Ok(response.value.into_iter().map(|item| item.text).collect())
    }

    async fn suggest(&self, query: SuggestQuery) -> SearchIndexResult<Vec<String>> {
        let body = SuggestRequestBody {
            search: &query.search,
            suggester_name: &self.suggester_name,
            fuzzy: query.fuzzy,
            top: query.top,
            highlight_pre_tag: query.highlight.as_ref().map(|tags| tags.pre.as_str()),
            highlight_post_tag: query.highlight.as_ref().map(|tags| tags.post.as_str()),
        };

        let response: ValueList<SuggestItem> = self.post("suggest", &body).await?;
        Ok(response.value.into_iter().map(|item| item.text).collect())
    }
}
