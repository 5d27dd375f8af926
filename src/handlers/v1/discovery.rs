use anyhow::anyhow;
use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use serde_json::json;

use crate::app_state::AppState;
use crate::error::{AppError, AppResult};
use crate::geo;
use crate::models::users::{CandidateFilters, CandidateUser, Pagination};
use crate::queries::users::{count_candidates, list_candidates};

#[derive(Debug, Deserialize)]
pub struct UserListParams {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub gender: Option<String>,
    pub age: Option<i32>,
    pub sexuality: Option<String>,
    pub desire: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

pub async fn get_user_list(
    State(state): State<AppState>,
    Query(params): Query<UserListParams>,
) -> AppResult<impl IntoResponse> {
    let page = params.page.unwrap_or(1).max(1);
    let per_page = params.limit.unwrap_or(10).max(1);

    let filters = CandidateFilters {
        gender: params.gender,
        age: params.age,
        sexuality: params.sexuality,
        desire: params.desire,
    };

    let mut conn = state.db_pool.acquire().await.map_err(|e| {
        AppError::InternalServerError(anyhow!(
            "Failed to acquire database connection: {}",
            e
        ))
    })?;

    let total_users = count_candidates(&mut conn, &filters).await?;
    let pagination = Pagination::new(total_users, page, per_page);
    let users = list_candidates(&mut conn, &filters, per_page, pagination.offset()).await?;

    // Distance only when the requester sent coordinates and the candidate
    // has stored ones; anything else stays null rather than pretending to
    // be at (0, 0).
    let users: Vec<CandidateUser> = users
        .into_iter()
        .map(|user| {
            let distance = match (params.lat, params.lng, user.lat, user.lng) {
                (Some(lat), Some(lng), Some(user_lat), Some(user_lng)) => {
                    Some(geo::distance_km(lat, lng, user_lat, user_lng))
                }
                _ => None,
            };
            CandidateUser { user, distance }
        })
        .collect();

    Ok((
        axum::http::StatusCode::OK,
        Json(json!({
            "users": users,
            "pagination": pagination,
        })),
    ))
}
