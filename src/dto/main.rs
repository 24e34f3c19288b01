use serde::Serialize;

use crate::domain::hotel::Hotel;
use crate::domain::paging::PagingState;
use crate::pagination::Paginated;

/// Data required to render the search results template.
#[derive(Serialize)]
pub struct SearchPageData {
    /// Page of hotels with the window of page buttons around it.
    pub results: Paginated<Hotel>,
    /// Query echoed back into the search box.
    pub search_text: String,
}

impl SearchPageData {
    /// State the next paging request has to start from.
    pub fn paging_state(&self) -> PagingState {
        PagingState::new(
            self.results.window.current_page,
            self.results.window.left_most_page,
            self.search_text.clone(),
        )
    }
}
