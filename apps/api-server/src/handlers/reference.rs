//! Reference data listings.

use actix_web::{HttpResponse, web};

use postagem_shared::ReferenceItem;

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /postagem/generos
pub async fn list_genres(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let items: Vec<ReferenceItem> = state
        .references
        .list_genres()
        .await?
        .into_iter()
        .map(|g| ReferenceItem {
            id: g.id,
            name: g.name,
        })
        .collect();

    Ok(HttpResponse::Ok().json(items))
}

/// GET /postagem/categorias
pub async fn list_categories(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let items: Vec<ReferenceItem> = state
        .references
        .list_categories()
        .await?
        .into_iter()
        .map(|c| ReferenceItem {
            id: c.id,
            name: c.name,
        })
        .collect();

    Ok(HttpResponse::Ok().json(items))
}
