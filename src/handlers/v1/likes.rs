use anyhow::anyhow;
use axum::{extract::State, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use serde_json::json;
use sqlx::Acquire;
use tower_sessions::Session;
use uuid::Uuid;
use validator::Validate;

use crate::app_state::AppState;
use crate::error::{AppError, AppResult};
use crate::handlers::v1::session_user_id;
use crate::models::matches::CanonicalPair;
use crate::queries::likes::{delete_like, insert_like, like_exists, list_liked_users};
use crate::queries::matches::{find_match_by_pair, insert_match};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LikePayload {
    #[validate(length(min = 1, message = "likedUserId cannot be empty"))]
    pub liked_user_id: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeResponse {
    #[serde(rename = "match")]
    pub is_match: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_user_id: Option<Uuid>,
}

pub async fn like_user(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LikePayload>,
) -> AppResult<impl IntoResponse> {
    payload
        .validate()
        .map_err(|e| AppError::BadRequest(anyhow!("Invalid like payload: {}", e)))?;

    let user_id = session_user_id(&session).await?;

    let liked_user_id = Uuid::parse_str(payload.liked_user_id.trim())
        .map_err(|_| AppError::BadRequest(anyhow!("Invalid likedUserId format")))?;

    // Canonicalizing up front doubles as the self-like check.
    let pair = CanonicalPair::new(user_id, liked_user_id)
        .ok_or_else(|| AppError::BadRequest(anyhow!("You cannot like yourself")))?;

    let mut conn = state.db_pool.acquire().await.map_err(|e| {
        AppError::InternalServerError(anyhow!(
            "Failed to acquire database connection: {}",
            e
        ))
    })?;

    // Edge insert and mutual-match formation are one atomic unit; the
    // unique constraints on likes and matches keep concurrent mutual likes
    // from producing duplicate rows.
    let mut tx = conn.begin().await.map_err(|e| {
        AppError::InternalServerError(anyhow!("Database transaction failed: {}", e))
    })?;

    insert_like(&mut tx, user_id, liked_user_id).await?;

    let mutual = like_exists(&mut tx, liked_user_id, user_id).await?;
    if mutual && find_match_by_pair(&mut tx, &pair).await?.is_none() {
        insert_match(&mut tx, &pair).await?;
    }

    tx.commit().await.map_err(|e| {
        AppError::InternalServerError(anyhow!("Failed to commit transaction: {}", e))
    })?;

    Ok((
        axum::http::StatusCode::OK,
        Json(LikeResponse {
            is_match: mutual,
            matched_user_id: mutual.then_some(liked_user_id),
        }),
    ))
}

pub async fn unlike_user(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LikePayload>,
) -> AppResult<impl IntoResponse> {
    payload
        .validate()
        .map_err(|e| AppError::BadRequest(anyhow!("Invalid unlike payload: {}", e)))?;

    let user_id = session_user_id(&session).await?;

    let liked_user_id = Uuid::parse_str(payload.liked_user_id.trim())
        .map_err(|_| AppError::BadRequest(anyhow!("Invalid likedUserId format")))?;

    let mut conn = state.db_pool.acquire().await.map_err(|e| {
        AppError::InternalServerError(anyhow!(
            "Failed to acquire database connection: {}",
            e
        ))
    })?;

    // The match, if one formed, stays; retracting a like only removes the
    // directed edge.
    let removed = delete_like(&mut conn, user_id, liked_user_id).await?;
    if !removed {
        return Err(AppError::NotFound(anyhow!("Like not found")));
    }

    Ok((axum::http::StatusCode::OK, Json(json!({}))))
}

pub async fn get_liked_users(
    State(state): State<AppState>,
    session: Session,
) -> AppResult<impl IntoResponse> {
    let user_id = session_user_id(&session).await?;

    let mut conn = state.db_pool.acquire().await.map_err(|e| {
        AppError::InternalServerError(anyhow!(
            "Failed to acquire database connection: {}",
            e
        ))
    })?;

    let users = list_liked_users(&mut conn, user_id).await?;

    Ok((axum::http::StatusCode::OK, Json(users)))
}
