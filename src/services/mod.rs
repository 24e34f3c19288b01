//! Query orchestration and suggestion aggregation on top of the search index.

use thiserror::Error;

use crate::domain::paging::InvalidPageDirective;
use crate::forms::FormError;
use crate::index::errors::SearchIndexError;
use crate::session::SessionError;

pub mod api;
pub mod main;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    InvalidPageDirective(#[from] InvalidPageDirective),

    #[error("search service error: {0}")]
    SearchService(#[from] SearchIndexError),

    #[error("paging requested without a previous search")]
    MissingSessionState,

    #[error("session error: {0}")]
    Session(String),

    #[error("form error: {0}")]
    Form(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<SessionError> for ServiceError {
    fn from(err: SessionError) -> Self {
        ServiceError::Session(err.to_string())
    }
}

impl From<FormError> for ServiceError {
    fn from(err: FormError) -> Self {
        ServiceError::Form(err.to_string())
    }
}
