//! Mock search index for isolating services in tests.

use async_trait::async_trait;
use mockall::mock;

use crate::index::errors::SearchIndexResult;
use crate::index::{AutocompleteQuery, SearchIndex, SearchQuery, SearchResults, SuggestQuery};

mock! {
    pub SearchIndex {}

    #[async_trait]
    impl SearchIndex for SearchIndex {
        async fn search(&self, query: SearchQuery) -> SearchIndexResult<SearchResults>;
        async fn autocomplete(&self, query: AutocompleteQuery) -> SearchIndexResult<Vec<String>>;
        async fn suggest(&self, query: SuggestQuery) -> SearchIndexResult<Vec<String>>;
    }
}
