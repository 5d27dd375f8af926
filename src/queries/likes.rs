use sqlx::PgConnection;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::users::User;

/*
liker_id UUID NOT NULL REFERENCES users(id) ON DELETE CASCADE,
liked_id UUID NOT NULL REFERENCES users(id) ON DELETE CASCADE,
created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
PRIMARY KEY (liker_id, liked_id),
CHECK (liker_id <> liked_id)

 */
pub async fn insert_like(conn: &mut PgConnection, liker_id: Uuid, liked_id: Uuid) -> AppResult<()> {
    let result = sqlx::query("INSERT INTO likes (liker_id, liked_id) VALUES ($1, $2)")
        .bind(liker_id)
        .bind(liked_id)
        .execute(conn)
        .await;

    if let Err(e) = result {
        if let Some(db_err) = e.as_database_error() {
            if db_err.is_unique_violation() {
                return Err(AppError::Conflict(anyhow::anyhow!(
                    "You have already liked this user"
                )));
            }
        }
        tracing::error!("like insert failed: {:?}", e);
        return Err(AppError::InternalServerError(anyhow::anyhow!(
            "Database error recording like"
        )));
    }

    Ok(())
}

pub async fn like_exists(
    conn: &mut PgConnection,
    liker_id: Uuid,
    liked_id: Uuid,
) -> AppResult<bool> {
    sqlx::query_scalar::<_, bool>(
        "SELECT EXISTS(SELECT 1 FROM likes WHERE liker_id = $1 AND liked_id = $2)",
    )
    .bind(liker_id)
    .bind(liked_id)
    .fetch_one(conn)
    .await
    .map_err(|e| {
        tracing::error!("like lookup failed: {:?}", e);
        AppError::InternalServerError(anyhow::anyhow!("Database error checking like"))
    })
}

/// Removes the directed edge; reports whether anything was there to remove.
pub async fn delete_like(
    conn: &mut PgConnection,
    liker_id: Uuid,
    liked_id: Uuid,
) -> AppResult<bool> {
    let result = sqlx::query("DELETE FROM likes WHERE liker_id = $1 AND liked_id = $2")
        .bind(liker_id)
        .bind(liked_id)
        .execute(conn)
        .await
        .map_err(|e| {
            tracing::error!("like delete failed: {:?}", e);
            AppError::InternalServerError(anyhow::anyhow!("Database error removing like"))
        })?;

    Ok(result.rows_affected() > 0)
}

pub async fn list_liked_users(conn: &mut PgConnection, liker_id: Uuid) -> AppResult<Vec<User>> {
    sqlx::query_as::<_, User>(
        "SELECT u.id, u.name, u.age, u.gender, u.sexuality, u.desire, u.lat, u.lng, \
                u.created_at, u.last_login \
         FROM likes l \
         JOIN users u ON l.liked_id = u.id \
         WHERE l.liker_id = $1 \
         ORDER BY l.created_at DESC",
    )
    .bind(liker_id)
    .fetch_all(conn)
    .await
    .map_err(|e| {
        tracing::error!("liked users query failed: {:?}", e);
        AppError::InternalServerError(anyhow::anyhow!("Database error listing liked users"))
    })
}
