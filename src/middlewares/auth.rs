use anyhow::anyhow;
use axum::{extract::Request, middleware::Next, response::Response};
use tower_sessions::Session;

use crate::error::{AppError, AppResult};
use crate::models::sessions::UserSession;

/// Rejects requests with no authenticated principal in the session store.
/// Credential checks happen in the auth service; by the time a session row
/// exists the user is already verified.
pub async fn auth_middleware(session: Session, req: Request, next: Next) -> AppResult<Response> {
    match session.get::<UserSession>("user").await {
        Ok(Some(_user_session)) => Ok(next.run(req).await),
        Ok(None) => Err(AppError::Unauthorized(anyhow!("Not logged in"))),
        Err(e) => Err(AppError::InternalServerError(anyhow!(
            "Failed to load session: {}",
            e
        ))),
    }
}
