use actix_web::{HttpResponse, Responder, get, web};

use crate::dto::api::ApiErrorResponse;
use crate::forms::api::{SuggestForm, TermForm};
use crate::index::{HighlightTags, SearchIndex};
use crate::routes::{error_status, new_request_id};
use crate::services::{ServiceError, ServiceResult, api as api_service};

fn json_response(result: ServiceResult<Vec<String>>) -> HttpResponse {
    match result {
        Ok(items) => HttpResponse::Ok().json(items),
        Err(err) => {
            let request_id = new_request_id();
            log::error!("Request {request_id} failed: {err}");
            let error = match &err {
                ServiceError::Form(_) => "invalid term",
                _ => "search failed",
            };
            HttpResponse::build(error_status(&err)).json(ApiErrorResponse { error, request_id })
        }
    }
}

/// Completions of the partially typed term.
#[get("/autocomplete")]
pub async fn autocomplete(
    index: web::Data<dyn SearchIndex>,
    web::Query(form): web::Query<TermForm>,
) -> impl Responder {
    json_response(api_service::autocomplete(index.get_ref(), form).await)
}

/// Best completion followed by matching suggestions.
#[get("/autocomplete-suggest")]
pub async fn autocomplete_and_suggest(
    index: web::Data<dyn SearchIndex>,
    web::Query(form): web::Query<TermForm>,
) -> impl Responder {
    json_response(api_service::autocomplete_and_suggest(index.get_ref(), form).await)
}

#[get("/suggest")]
pub async fn suggest(
    index: web::Data<dyn SearchIndex>,
    tags: web::Data<HighlightTags>,
    web::Query(form): web::Query<SuggestForm>,
) -> impl Responder {
    json_response(api_service::suggest(index.get_ref(), form, tags.get_ref()).await)
}
