//! User registration and lookup endpoints

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
};
use tracing::info;

use crate::api::state::AppState;
use crate::api::types::{ApiError, CreateUserDto, Json, TransactionId, UserResponse};

/// `POST /user`
pub async fn create_user(
    State(state): State<AppState>,
    TransactionId(transaction_id): TransactionId,
    Json(request): Json<CreateUserDto>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    info!(%transaction_id, "start - controller - create user");

    let command = request.into_command()?;
    let user = state.user_service.create(command, transaction_id).await?;

    info!(%transaction_id, user_id = %user.id(), "end - controller - create user");

    Ok((StatusCode::CREATED, Json(UserResponse::from(&user))))
}

/// `GET /users/document/{document}`
pub async fn find_user_by_document(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(document): Path<String>,
) -> Result<Json<UserResponse>, ApiError> {
    let TransactionId(transaction_id) = TransactionId::or_generate(&headers);
    info!(%transaction_id, "start - controller - find user by document");

    let user = state
        .user_service
        .find_by_document(&document, transaction_id)
        .await?;

    info!(%transaction_id, "end - controller - find user by document");

    Ok(Json(UserResponse::from(&user)))
}
