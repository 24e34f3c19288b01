//! Paging directives and the per-session state they are resolved against.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Raised when a paging directive is neither `prev`, `next` nor a page index.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid page directive: {0:?}")]
pub struct InvalidPageDirective(pub String);

/// Navigation request coming from the paging control.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PagingDirective {
    Previous,
    Next,
    Page(usize),
}

impl PagingDirective {
    /// Resolves the directive into an absolute page index.
    ///
    /// `Previous` on the first page stays on the first page.
    pub fn resolve(self, previous_page: usize) -> usize {
        match self {
            PagingDirective::Previous => previous_page.saturating_sub(1),
            PagingDirective::Next => previous_page.saturating_add(1),
            PagingDirective::Page(page) => page,
        }
    }
}

impl FromStr for PagingDirective {
    type Err = InvalidPageDirective;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "prev" => Ok(PagingDirective::Previous),
            "next" => Ok(PagingDirective::Next),
            other => other
                .parse::<usize>()
                .map(PagingDirective::Page)
                .map_err(|_| InvalidPageDirective(s.to_string())),
        }
    }
}

impl Display for PagingDirective {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PagingDirective::Previous => write!(f, "prev"),
            PagingDirective::Next => write!(f, "next"),
            PagingDirective::Page(page) => write!(f, "{page}"),
        }
    }
}

/// Paging state carried over to the next request of the same session.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PagingState {
    pub page: usize,
    pub left_most_page: usize,
    pub search_text: String,
}

impl PagingState {
    pub fn new(page: usize, left_most_page: usize, search_text: impl Into<String>) -> Self {
        Self {
            page,
            left_most_page,
            search_text: search_text.into(),
        }
    }
}
