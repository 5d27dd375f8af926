use anyhow::anyhow;
use axum::{extract::State, response::IntoResponse, Json};
use serde::Deserialize;
use serde_json::json;
use tower_sessions::Session;
use uuid::Uuid;
use validator::Validate;

use crate::app_state::AppState;
use crate::error::{AppError, AppResult};
use crate::handlers::v1::session_user_id;
use crate::models::matches::{BlockStatus, CanonicalPair};
use crate::queries::matches::{list_matches_for_user, set_block_status};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BlockPayload {
    #[validate(length(min = 1, message = "matchUserId cannot be empty"))]
    pub match_user_id: String,
}

pub async fn get_matched_users(
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

    let matches = list_matches_for_user(&mut conn, user_id).await?;

    Ok((axum::http::StatusCode::OK, Json(matches)))
}

pub async fn block_user(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<BlockPayload>,
) -> AppResult<impl IntoResponse> {
    set_block(state, session, payload, true).await
}

pub async fn unblock_user(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<BlockPayload>,
) -> AppResult<impl IntoResponse> {
    set_block(state, session, payload, false).await
}

async fn set_block(
    state: AppState,
    session: Session,
    payload: BlockPayload,
    blocked: bool,
) -> AppResult<(axum::http::StatusCode, Json<serde_json::Value>)> {
    payload
        .validate()
        .map_err(|e| AppError::BadRequest(anyhow!("Invalid block payload: {}", e)))?;

    let user_id = session_user_id(&session).await?;

    let match_user_id = Uuid::parse_str(payload.match_user_id.trim())
        .map_err(|_| AppError::BadRequest(anyhow!("Invalid matchUserId format")))?;

    let pair = CanonicalPair::new(user_id, match_user_id)
        .ok_or_else(|| AppError::BadRequest(anyhow!("You cannot block yourself")))?;

    // Blocking records which canonical slot acted; unblocking resets to
    // none and is open to either member, not just whoever blocked.
    let status = if blocked {
        pair.block_marker(user_id)
            .ok_or_else(|| AppError::Forbidden(anyhow!("You are not part of this match")))?
    } else {
        BlockStatus::None
    };

    let mut conn = state.db_pool.acquire().await.map_err(|e| {
        AppError::InternalServerError(anyhow!(
            "Failed to acquire database connection: {}",
            e
        ))
    })?;

    let updated = set_block_status(&mut conn, &pair, status).await?;
    if !updated {
        return Err(AppError::NotFound(anyhow!("Match not found")));
    }

    Ok((axum::http::StatusCode::OK, Json(json!({}))))
}
