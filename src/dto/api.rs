//! DTOs exposed by the type-ahead API endpoints.

use serde::Serialize;

/// Body returned by the API when a request cannot be served.
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: &'static str,
    /// Correlation id also written to the server log.
    pub request_id: String,
}
