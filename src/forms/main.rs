use serde::Deserialize;
use validator::Validate;

use crate::forms::FormError;

/// Longest accepted query. The text is kept in the session cookie, which must
/// stay under 4 KiB after encryption and encoding.
pub const MAX_SEARCH_TEXT_LENGTH: u64 = 300;

/// Submission of the search box.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct SearchForm {
    #[serde(rename = "searchText", default)]
    #[validate(length(max = MAX_SEARCH_TEXT_LENGTH))]
    pub search_text: Option<String>,
}

impl SearchForm {
    pub fn new(search_text: impl Into<String>) -> Self {
        Self {
            search_text: Some(search_text.into()),
        }
    }

    /// Trims the query and checks its length. Missing and blank queries both
    /// become the match-all empty query.
    pub fn into_search_text(self) -> Result<String, FormError> {
        let form = Self {
            search_text: self.search_text.map(|text| text.trim().to_string()),
        };
        form.validate()?;
        Ok(form.search_text.unwrap_or_default())
    }
}

/// Paging control request: `prev`, `next` or a zero-based page index.
#[derive(Debug, Deserialize)]
pub struct PagingForm {
    pub paging: String,
}
