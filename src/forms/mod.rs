//! Form and query payloads accepted by the routes.

use thiserror::Error;
use validator::ValidationErrors;

pub mod api;
pub mod main;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),
}
