use sqlx::PgConnection;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::matches::{BlockStatus, CanonicalPair, Match, MatchMembership, MatchSummary};

const MATCH_COLUMNS: &str = "id, user1_id, user2_id, block_status, created_at";

pub async fn find_match_by_pair(
    conn: &mut PgConnection,
    pair: &CanonicalPair,
) -> AppResult<Option<Match>> {
    let sql = format!(
        "SELECT {} FROM matches WHERE user1_id = $1 AND user2_id = $2",
        MATCH_COLUMNS
    );
    sqlx::query_as::<_, Match>(&sql)
        .bind(pair.user1())
        .bind(pair.user2())
        .fetch_optional(conn)
        .await
        .map_err(|e| {
            tracing::error!("match pair lookup failed: {:?}", e);
            AppError::InternalServerError(anyhow::anyhow!("Database error fetching match"))
        })
}

/// Inserts the canonical match row. The unique constraint on
/// (user1_id, user2_id) absorbs the race where both members' mutual likes
/// land at the same instant: the second insert is a no-op.
pub async fn insert_match(conn: &mut PgConnection, pair: &CanonicalPair) -> AppResult<()> {
    sqlx::query(
        "INSERT INTO matches (user1_id, user2_id) VALUES ($1, $2) \
         ON CONFLICT (user1_id, user2_id) DO NOTHING",
    )
    .bind(pair.user1())
    .bind(pair.user2())
    .execute(conn)
    .await
    .map_err(|e| {
        tracing::error!("match insert failed: {:?}", e);
        AppError::InternalServerError(anyhow::anyhow!("Database error creating match"))
    })?;

    Ok(())
}

/// The authorization primitive for everything that touches a match: fails
/// NotFound for an unknown match id and Forbidden when `user_id` is not one
/// of its two members.
pub async fn resolve_membership(
    conn: &mut PgConnection,
    match_id: i32,
    user_id: Uuid,
) -> AppResult<MatchMembership> {
    let sql = format!("SELECT {} FROM matches WHERE id = $1", MATCH_COLUMNS);
    let match_row = sqlx::query_as::<_, Match>(&sql)
        .bind(match_id)
        .fetch_optional(conn)
        .await
        .map_err(|e| {
            tracing::error!("match lookup failed: {:?}", e);
            AppError::InternalServerError(anyhow::anyhow!("Database error fetching match"))
        })?;

    let match_row = match match_row {
        Some(m) => m,
        None => return Err(AppError::NotFound(anyhow::anyhow!("Match not found"))),
    };

    match match_row.other_member(user_id) {
        Some(other_user_id) => Ok(MatchMembership {
            match_id: match_row.id,
            other_user_id,
            block_status: match_row.block_status,
        }),
        None => Err(AppError::Forbidden(anyhow::anyhow!(
            "You are not part of this match"
        ))),
    }
}

/// Writes the block state for the pair's match row; reports whether a match
/// existed to update.
pub async fn set_block_status(
    conn: &mut PgConnection,
    pair: &CanonicalPair,
    status: BlockStatus,
) -> AppResult<bool> {
    let result =
        sqlx::query("UPDATE matches SET block_status = $1 WHERE user1_id = $2 AND user2_id = $3")
            .bind(status)
            .bind(pair.user1())
            .bind(pair.user2())
            .execute(conn)
            .await
            .map_err(|e| {
                tracing::error!("block status update failed: {:?}", e);
                AppError::InternalServerError(anyhow::anyhow!(
                    "Database error updating block status"
                ))
            })?;

    Ok(result.rows_affected() > 0)
}

pub async fn list_matches_for_user(
    conn: &mut PgConnection,
    user_id: Uuid,
) -> AppResult<Vec<MatchSummary>> {
    sqlx::query_as::<_, MatchSummary>(
        "SELECT m.id, m.user1_id, m.user2_id, m.block_status, m.created_at, \
                u1.name AS user1_name, u2.name AS user2_name \
         FROM matches m \
         JOIN users u1 ON m.user1_id = u1.id \
         JOIN users u2 ON m.user2_id = u2.id \
         WHERE m.user1_id = $1 OR m.user2_id = $1 \
         ORDER BY m.created_at DESC",
    )
    .bind(user_id)
    .fetch_all(conn)
    .await
    .map_err(|e| {
        tracing::error!("matches query failed: {:?}", e);
        AppError::InternalServerError(anyhow::anyhow!("Database error listing matches"))
    })
}
