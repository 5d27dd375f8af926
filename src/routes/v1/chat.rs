use crate::handlers::v1::messages;
use crate::{app_state::AppState, middlewares::auth::auth_middleware};
use axum::routing::{get, post};
use axum::{middleware, Router};

pub fn chat_routes() -> Router<AppState> {
    // Protected routes that require authentication
    Router::new()
        .route("/sendMessage", post(messages::send_message))
        .route("/getMessages/{match_id}", get(messages::get_messages))
        .layer(middleware::from_fn(auth_middleware))
}
