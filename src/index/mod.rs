//! Port to the hosted search index and the queries it understands.

use async_trait::async_trait;
use serde::Serialize;

use crate::domain::hotel::Hotel;
use crate::index::errors::SearchIndexResult;

pub mod azure;
pub mod errors;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

/// Fields requested for every result document.
pub const HOTEL_PROJECTION: [&str; 2] = ["HotelName", "Description"];

#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum SearchMode {
    /// Every query term is required.
    All,
}

/// How the last term of a partial query is completed.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum AutocompleteMode {
    /// Completes the last term using the preceding terms as context.
    OneTermWithContext,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    pub skip: usize,
    pub top: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub search: String,
    pub select: Vec<String>,
    pub mode: SearchMode,
    pub pagination: Option<Pagination>,
    pub include_total_count: bool,
}

impl SearchQuery {
    pub fn new(search: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            select: Vec::new(),
            mode: SearchMode::All,
            pagination: None,
            include_total_count: false,
        }
    }

    pub fn select<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.select = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Requests the zero-based `page` of `per_page` documents.
    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination {
            skip: page.saturating_mul(per_page),
            top: per_page,
        });
        self
    }

    pub fn include_total_count(mut self) -> Self {
        self.include_total_count = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutocompleteQuery {
    pub search: String,
    pub mode: AutocompleteMode,
    pub fuzzy: bool,
    pub top: usize,
}

impl AutocompleteQuery {
    pub fn new(search: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            mode: AutocompleteMode::OneTermWithContext,
            fuzzy: false,
            top: 5,
        }
    }

    pub fn fuzzy(mut self, fuzzy: bool) -> Self {
        self.fuzzy = fuzzy;
        self
    }

    pub fn top(mut self, top: usize) -> Self {
        self.top = top;
        self
    }
}

/// Markers wrapped around the matched part of a suggestion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightTags {
    pub pre: String,
    pub post: String,
}

impl Default for HighlightTags {
    fn default() -> Self {
        Self {
            pre: "<b>".to_string(),
            post: "</b>".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestQuery {
    pub search: String,
    pub fuzzy: bool,
    pub top: usize,
    pub highlight: Option<HighlightTags>,
}

impl SuggestQuery {
    pub fn new(search: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            fuzzy: false,
            top: 5,
            highlight: None,
        }
    }

    pub fn fuzzy(mut self, fuzzy: bool) -> Self {
        self.fuzzy = fuzzy;
        self
    }

    pub fn top(mut self, top: usize) -> Self {
        self.top = top;
        self
    }

    pub fn highlight(mut self, tags: HighlightTags) -> Self {
        self.highlight = Some(tags);
        self
    }
}

/// One page of documents together with the total number of matches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchResults {
    pub total: usize,
    pub documents: Vec<Hotel>,
}

/// Read-only operations of a hosted search collection.
///
/// The suggester used by `autocomplete` and `suggest` is part of the index
/// configuration rather than of each query.
#[async_trait]
pub trait SearchIndex: Send + Sync {
    async fn search(&self, query: SearchQuery) -> SearchIndexResult<SearchResults>;
    async fn autocomplete(&self, query: AutocompleteQuery) -> SearchIndexResult<Vec<String>>;
    async fn suggest(&self, query: SuggestQuery) -> SearchIndexResult<Vec<String>>;
}
