use std::sync::Arc;

use actix_cors::Cors;
use actix_files::Files;
use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::Key;
use actix_web::{App, HttpServer, middleware, web};
use tera::Tera;

use crate::index::SearchIndex;
use crate::index::azure::AzureSearchIndex;
use crate::models::config::ServerConfig;
use crate::routes::api::{autocomplete, autocomplete_and_suggest, suggest};
use crate::routes::main::{page, privacy, search, show_error, show_index};

pub mod domain;
pub mod dto;
pub mod forms;
pub mod index;
pub mod models;
pub mod pagination;
pub mod routes;
pub mod services;
pub mod session;

/// Registers every route of the application on `cfg`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(autocomplete)
            .service(autocomplete_and_suggest)
            .service(suggest),
    )
    .service(show_index)
    .service(search)
    .service(page)
    .service(privacy)
    .service(show_error);
}

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    // One HTTP client for the lifetime of the process; workers share its pool.
    let search_index = AzureSearchIndex::from_config(&server_config.search)
        .map_err(|e| std::io::Error::other(format!("Failed to create search client: {e}")))?;
    log::info!(
        "Querying index '{}' at {}",
        server_config.search.index_name,
        search_index.base_url()
    );
    let search_index: Arc<dyn SearchIndex> = Arc::new(search_index);

    let paging = server_config.search.paging();
    let highlight_tags = server_config.search.highlight_tags();

    let secret_key = Key::try_from(server_config.secret.as_bytes())
        .map_err(|e| std::io::Error::other(format!("Invalid session secret: {e}")))?;

    let tera = Tera::new(&server_config.templates_dir)
        .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

    let cookie_domain = Some(server_config.domain.trim().to_string()).filter(|d| !d.is_empty());

    let bind_address = (server_config.address.clone(), server_config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(
                SessionMiddleware::builder(CookieSessionStore::default(), secret_key.clone())
                    .cookie_secure(false) // set to true in prod
                    .cookie_domain(cookie_domain.clone())
                    .build(),
            )
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(Files::new("/assets", "./assets"))
            .configure(configure)
            .app_data(web::Data::from(search_index.clone()))
            .app_data(web::Data::new(paging))
            .app_data(web::Data::new(highlight_tags.clone()))
            .app_data(web::Data::new(tera.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}
