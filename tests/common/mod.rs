use std::sync::Mutex;

use async_trait::async_trait;
use hotel_search::domain::hotel::Hotel;
use hotel_search::index::errors::{SearchIndexError, SearchIndexResult};
use hotel_search::index::{
    AutocompleteQuery, SearchIndex, SearchQuery, SearchResults, SuggestQuery,
};

/// In-memory index answering every query with numbered hotels.
pub struct FakeIndex {
    total: usize,
    fail: bool,
    searches: Mutex<Vec<SearchQuery>>,
}

impl FakeIndex {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            fail: false,
            searches: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new(0)
        }
    }

    pub fn searches(&self) -> Vec<SearchQuery> {
        self.searches.lock().unwrap().clone()
    }

    fn check(&self) -> SearchIndexResult<()> {
        if self.fail {
            Err(SearchIndexError::Request("connection refused".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl SearchIndex for FakeIndex {
    async fn search(&self, query: SearchQuery) -> SearchIndexResult<SearchResults> {
        self.check()?;

        let (skip, top) = query
            .pagination
            .as_ref()
            .map_or((0, self.total), |p| (p.skip, p.top));
        let documents = (skip..skip.saturating_add(top).min(self.total))
            .map(|i| Hotel::new(format!("Hotel #{i}"), Some(format!("Description #{i}"))))
            .collect();
        self.searches.lock().unwrap().push(query);

        Ok(SearchResults {
            total: self.total,
            documents,
        })
    }

    async fn autocomplete(&self, query: AutocompleteQuery) -> SearchIndexResult<Vec<String>> {
        self.check()?;
        Ok(["lake view", "lake shore", "lake front"]
            .into_iter()
            .take(query.top)
            .map(String::from)
            .collect())
    }

    async fn suggest(&self, query: SuggestQuery) -> SearchIndexResult<Vec<String>> {
        self.check()?;
        Ok(match query.highlight {
            Some(tags) => vec![format!("{}Lake{}side inn", tags.pre, tags.post)],
            None => vec!["lakeside inn".to_string(), "lake house".to_string()],
        })
    }
}
