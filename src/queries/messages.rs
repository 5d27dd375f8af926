use sqlx::PgConnection;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::messages::Message;

pub async fn insert_message(
    conn: &mut PgConnection,
    match_id: i32,
    sender_id: Uuid,
    receiver_id: Uuid,
    body: &str,
) -> AppResult<()> {
    sqlx::query(
        "INSERT INTO messages (match_id, sender_id, receiver_id, body) VALUES ($1, $2, $3, $4)",
    )
    .bind(match_id)
    .bind(sender_id)
    .bind(receiver_id)
    .bind(body)
    .execute(conn)
    .await
    .map_err(|e| {
        tracing::error!("message insert failed: {:?}", e);
        AppError::InternalServerError(anyhow::anyhow!("Database error sending message"))
    })?;

    Ok(())
}

// Delivery order is creation order, oldest first.
pub async fn list_messages_for_match(
    conn: &mut PgConnection,
    match_id: i32,
) -> AppResult<Vec<Message>> {
    sqlx::query_as::<_, Message>(
        "SELECT id, match_id, sender_id, receiver_id, body, created_at \
         FROM messages WHERE match_id = $1 ORDER BY created_at ASC",
    )
    .bind(match_id)
    .fetch_all(conn)
    .await
    .map_err(|e| {
        tracing::error!("messages query failed: {:?}", e);
        AppError::InternalServerError(anyhow::anyhow!("Database error fetching messages"))
    })
}
