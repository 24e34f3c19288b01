use serde::Deserialize;
use validator::Validate;

use crate::forms::FormError;

/// Type-ahead term; the hosted service accepts between 1 and 100 characters.
#[derive(Debug, Deserialize, Validate)]
pub struct TermForm {
    #[validate(length(min = 1, max = 100))]
    pub term: String,
}

/// Suggestion request with optional fuzzy matching and highlighting.
#[derive(Debug, Deserialize, Validate)]
pub struct SuggestForm {
    #[validate(length(min = 1, max = 100))]
    pub term: String,
    #[serde(default)]
    pub fuzzy: bool,
    #[serde(default)]
    pub highlights: bool,
}

impl TermForm {
    pub fn new(term: impl Into<String>) -> Self {
        Self { term: term.into() }
    }

    /// Trims the term and checks its length.
    pub fn into_term(self) -> Result<String, FormError> {
        let form = Self::new(self.term.trim());
        form.validate()?;
        Ok(form.term)
    }
}

impl SuggestForm {
    /// Trims the term and checks its length.
    pub fn normalize(mut self) -> Result<Self, FormError> {
        self.term = self.term.trim().to_string();
        self.validate()?;
        Ok(self)
    }
}
