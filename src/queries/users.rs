use sqlx::PgConnection;

use crate::error::{AppError, AppResult};
use crate::models::users::{CandidateFilters, User};

const USER_COLUMNS: &str =
    "id, name, age, gender, sexuality, desire, lat, lng, created_at, last_login";

pub async fn count_candidates(
    conn: &mut PgConnection,
    filters: &CandidateFilters,
) -> AppResult<i64> {
    let sql = format!("SELECT COUNT(*) FROM users{}", filters.where_clause());

    let mut query = sqlx::query_scalar::<_, i64>(&sql);
    if let Some(gender) = &filters.gender {
        query = query.bind(gender);
    }
    if let Some(age) = filters.age {
        query = query.bind(age);
    }
    if let Some(sexuality) = &filters.sexuality {
        query = query.bind(sexuality);
    }
    if let Some(desire) = &filters.desire {
        query = query.bind(desire);
    }

    query.fetch_one(conn).await.map_err(|e| {
        tracing::error!("candidate count query failed: {:?}", e);
        AppError::InternalServerError(anyhow::anyhow!("Database error listing users"))
    })
}

// Newest registrations first; LIMIT/OFFSET ride as bound parameters after
// the filter values.
pub async fn list_candidates(
    conn: &mut PgConnection,
    filters: &CandidateFilters,
    limit: i64,
    offset: i64,
) -> AppResult<Vec<User>> {
    let first_page_param = filters.param_count() + 1;
    let sql = format!(
        "SELECT {} FROM users{} ORDER BY created_at DESC LIMIT ${} OFFSET ${}",
        USER_COLUMNS,
        filters.where_clause(),
        first_page_param,
        first_page_param + 1,
    );

    let mut query = sqlx::query_as::<_, User>(&sql);
    if let Some(gender) = &filters.gender {
        query = query.bind(gender);
    }
    if let Some(age) = filters.age {
        query = query.bind(age);
    }
    if let Some(sexuality) = &filters.sexuality {
        query = query.bind(sexuality);
    }
    if let Some(desire) = &filters.desire {
        query = query.bind(desire);
    }
    query = query.bind(limit).bind(offset);

    query.fetch_all(conn).await.map_err(|e| {
        tracing::error!("candidate page query failed: {:?}", e);
        AppError::InternalServerError(anyhow::anyhow!("Database error listing users"))
    })
}
