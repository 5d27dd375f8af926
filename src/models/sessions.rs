use serde::{Deserialize, Serialize};

/// Written into the session store by the auth service at login; this
/// subsystem only reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSession {
    pub user_id: uuid::Uuid,
}
