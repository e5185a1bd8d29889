//! Post creation handler.

use actix_multipart::Multipart;
use actix_web::{HttpResponse, web};

use postagem_shared::MessageResponse;

use crate::handlers::form;
use crate::middleware::error::{AppError, AppResult};
use crate::observability::RequestId;
use crate::state::AppState;

pub const POST_CREATED_MESSAGE: &str = "Post cadastrado com sucesso!";

/// POST /postagem/create
pub async fn create(
    state: web::Data<AppState>,
    request_id: RequestId,
    payload: Multipart,
) -> AppResult<HttpResponse> {
    let command = form::decode_create_post(payload, state.form_limits)
        .await
        .map_err(|e| {
            tracing::info!(request_id = request_id.as_str(), error = %e, "Rejected post form");
            AppError::from(e)
        })?;

    let post = state.posts.create(command).await.map_err(|e| {
        tracing::warn!(request_id = request_id.as_str(), error = %e, "Post creation failed");
        AppError::from(e)
    })?;

    tracing::debug!(request_id = request_id.as_str(), post_id = post.id, "Post stored");

    Ok(HttpResponse::Ok().json(MessageResponse::new(POST_CREATED_MESSAGE)))
}
