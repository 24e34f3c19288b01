use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SearchIndexError {
    #[error("Request error: {0}")]
    Request(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Search service returned {code}: {message}")]
    Status { code: u16, message: String },

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

pub type SearchIndexResult<T> = Result<T, SearchIndexError>;

impl SearchIndexError {
    /// Maps a non-success response status and its body to an error.
    pub fn from_status(status: StatusCode, body: String) -> Self {
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => SearchIndexError::Unauthorized(
                format!("search service rejected the api key ({status})"),
            ),
            _ => SearchIndexError::Status {
                code: status.as_u16(),
                message: body,
            },
        }
    }
}

impl From<reqwest::Error> for SearchIndexError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            SearchIndexError::Decode(err.to_string())
        } else if err.is_builder() {
            SearchIndexError::Configuration(err.to_string())
        } else if let Some(status) = err.status() {
            SearchIndexError::from_status(status, err.to_string())
        } else {
            SearchIndexError::Request(err.to_string())
        }
    }
}
