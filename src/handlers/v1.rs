pub mod discovery;
pub mod likes;
pub mod matches;
pub mod messages;

use anyhow::anyhow;
use tower_sessions::Session;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::sessions::UserSession;

/// The authenticated user id for this request. The auth middleware has
/// already turned away anonymous requests, so every handler behind it can
/// rely on this resolving.
pub async fn session_user_id(session: &Session) -> AppResult<Uuid> {
    let user_session = session
        .get::<UserSession>("user")
        .await
        .map_err(|e| AppError::InternalServerError(anyhow!("Failed to load session: {}", e)))?;

    match user_session {
        Some(user_data) => Ok(user_data.user_id),
        None => Err(AppError::Unauthorized(anyhow!("User session not found"))),
    }
}
