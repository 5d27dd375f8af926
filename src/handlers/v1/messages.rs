use anyhow::anyhow;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use serde_json::json;
use tower_sessions::Session;
use validator::Validate;

use crate::app_state::AppState;
use crate::error::{AppError, AppResult};
use crate::handlers::v1::session_user_id;
use crate::queries::matches::resolve_membership;
use crate::queries::messages::{insert_message, list_messages_for_match};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SendMessagePayload {
    pub match_id: i32,
    #[validate(length(min = 1, message = "message cannot be empty"))]
    pub message: String,
}

pub async fn send_message(
    State(state): State<AppState>,
    session: Session,
    Json(mut payload): Json<SendMessagePayload>,
) -> AppResult<impl IntoResponse> {
    payload.message = payload.message.trim().to_string();
    payload
        .validate()
        .map_err(|e| AppError::BadRequest(anyhow!("Invalid message payload: {}", e)))?;

    let sender_id = session_user_id(&session).await?;

    let mut conn = state.db_pool.acquire().await.map_err(|e| {
        AppError::InternalServerError(anyhow!(
            "Failed to acquire database connection: {}",
            e
        ))
    })?;

    let membership = resolve_membership(&mut conn, payload.match_id, sender_id).await?;

    // Any active block disables sending for both members.
    if membership.is_blocked() {
        return Err(AppError::Forbidden(anyhow!(
            "Cannot send message while this match is blocked"
        )));
    }

    // Receiver comes from match membership, never from the client.
    insert_message(
        &mut conn,
        membership.match_id,
        sender_id,
        membership.other_user_id,
        &payload.message,
    )
    .await?;

    Ok((axum::http::StatusCode::OK, Json(json!({}))))
}

pub async fn get_messages(
    State(state): State<AppState>,
    session: Session,
    Path(match_id): Path<i32>,
) -> AppResult<impl IntoResponse> {
    let user_id = session_user_id(&session).await?;

    let mut conn = state.db_pool.acquire().await.map_err(|e| {
        AppError::InternalServerError(anyhow!(
            "Failed to acquire database connection: {}",
            e
        ))
    })?;

    // Membership gates access; an active block does not hide history.
    resolve_membership(&mut conn, match_id, user_id).await?;

    let messages = list_messages_for_match(&mut conn, match_id).await?;

    Ok((axum::http::StatusCode::OK, Json(messages)))
}
