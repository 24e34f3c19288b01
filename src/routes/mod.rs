//! HTTP handlers and the helpers they share.

use actix_web::HttpResponse;
use actix_web::http::StatusCode;
use actix_web::http::header::{CacheControl, CacheDirective};
use tera::{Context, Tera};
use uuid::Uuid;

use crate::services::ServiceError;

pub mod api;
pub mod main;

/// Fresh correlation id tying a failed request to its log entry.
pub fn new_request_id() -> String {
    Uuid::new_v4().to_string()
}

pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    match tera.render(template, context) {
        Ok(body) => HttpResponse::Ok().content_type("text/html").body(body),
        Err(err) => {
            log::error!("Failed to render template '{template}': {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// Status used for a failed service call; the body never carries the cause.
pub fn error_status(err: &ServiceError) -> StatusCode {
    match err {
        ServiceError::InvalidPageDirective(_)
        | ServiceError::MissingSessionState
        | ServiceError::Form(_) => StatusCode::BAD_REQUEST,
        ServiceError::SearchService(_) => StatusCode::BAD_GATEWAY,
        ServiceError::Session(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Renders the generic error page carrying `request_id`.
pub fn render_error(tera: &Tera, status: StatusCode, request_id: &str) -> HttpResponse {
    let mut context = Context::new();
    context.insert("request_id", request_id);
    context.insert("current_page", "error");

    let mut response = HttpResponse::build(status);
    response.insert_header(CacheControl(vec![
        CacheDirective::NoStore,
        CacheDirective::NoCache,
    ]));
    match tera.render("error.html", &context) {
        Ok(body) => response.content_type("text/html").body(body),
        Err(err) => {
            log::error!("Failed to render error page: {err}");
            response.body(format!("Request id: {request_id}"))
        }
    }
}

/// Logs `err` under a new correlation id and renders the error page.
pub fn service_error_page(tera: &Tera, err: &ServiceError) -> HttpResponse {
    let request_id = new_request_id();
    log::error!("Request {request_id} failed: {err}");
    render_error(tera, error_status(err), &request_id)
}
