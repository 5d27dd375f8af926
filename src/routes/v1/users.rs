use crate::handlers::v1::{discovery, likes, matches};
use crate::{app_state::AppState, middlewares::auth::auth_middleware};
use axum::routing::{get, post};
use axum::{middleware, Router};

pub fn users_routes() -> Router<AppState> {
    // Protected routes that require authentication
    Router::new()
        .route("/userList", get(discovery::get_user_list))
        .route("/like", post(likes::like_user))
        .route("/unlike", post(likes::unlike_user))
        .route("/likedUsers", get(likes::get_liked_users))
        .route("/matchedUsers", get(matches::get_matched_users))
        .route("/block", post(matches::block_user))
        .route("/unblock", post(matches::unblock_user))
        .layer(middleware::from_fn(auth_middleware))
}
