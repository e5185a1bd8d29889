//! HTTP handlers and route configuration.

pub mod form;
mod health;
mod posts;
mod reference;

#[cfg(test)]
pub(crate) mod test_support;

use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/postagem")
                .route("/create", web::post().to(posts::create))
                .route("/generos", web::get().to(reference::list_genres))
                .route("/categorias", web::get().to(reference::list_categories)),
        );
}
