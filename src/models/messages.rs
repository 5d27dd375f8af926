use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/*
id SERIAL PRIMARY KEY,
match_id INT NOT NULL REFERENCES matches(id) ON DELETE CASCADE,
sender_id UUID NOT NULL REFERENCES users(id),
receiver_id UUID NOT NULL REFERENCES users(id),
body TEXT NOT NULL,
created_at TIMESTAMPTZ NOT NULL DEFAULT now(),

 */
// Immutable once written; receiver_id is derived from match membership on
// insert, never taken from the client.
#[derive(Debug, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: i32,
    pub match_id: i32,
    pub sender_id: Uuid,
    pub receiver_id: Uuid,
    pub body: String,
    pub created_at: DateTime<Utc>,
}
