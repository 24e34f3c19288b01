use actix_session::Session;
use actix_web::http::StatusCode;
use actix_web::{Responder, get, post, web};
use tera::{Context, Tera};

use crate::dto::main::SearchPageData;
use crate::forms::main::{PagingForm, SearchForm};
use crate::index::SearchIndex;
use crate::pagination::PagingSettings;
use crate::routes::{new_request_id, render_error, render_template, service_error_page};
use crate::services::main as main_service;

fn results_context(data: &SearchPageData) -> Context {
    let mut context = Context::new();
    context.insert("current_page", "index");
    context.insert("search_text", &data.search_text);
    context.insert("results", &data.results);
    context
}

#[get("/")]
pub async fn show_index(tera: web::Data<Tera>) -> impl Responder {
    let mut context = Context::new();
    context.insert("current_page", "index");
    context.insert("search_text", "");
    render_template(&tera, "main/index.html", &context)
}

/// Runs the query typed into the search box and shows its first page.
#[post("/")]
pub async fn search(
    session: Session,
    index: web::Data<dyn SearchIndex>,
    settings: web::Data<PagingSettings>,
    tera: web::Data<Tera>,
    web::Form(form): web::Form<SearchForm>,
) -> impl Responder {
    match main_service::submit_search(index.get_ref(), &session, settings.get_ref(), form).await {
        Ok(data) => render_template(&tera, "main/index.html", &results_context(&data)),
        Err(err) => service_error_page(&tera, &err),
    }
}

/// Moves to another page of the previous search of this session.
#[get("/page")]
pub async fn page(
    session: Session,
    index: web::Data<dyn SearchIndex>,
    settings: web::Data<PagingSettings>,
    tera: web::Data<Tera>,
    web::Query(form): web::Query<PagingForm>,
) -> impl Responder {
    match main_service::change_page(index.get_ref(), &session, settings.get_ref(), form).await {
        Ok(data) => render_template(&tera, "main/index.html", &results_context(&data)),
        Err(err) => service_error_page(&tera, &err),
    }
}

#[get("/privacy")]
pub async fn privacy(tera: web::Data<Tera>) -> impl Responder {
    let mut context = Context::new();
    context.insert("current_page", "privacy");
    render_template(&tera, "main/privacy.html", &context)
}

#[get("/error")]
pub async fn show_error(tera: web::Data<Tera>) -> impl Responder {
    render_error(&tera, StatusCode::OK, &new_request_id())
}
