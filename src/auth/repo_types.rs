use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;

/// Vault account record.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,                    // unique account ID
    pub username: String,           // unique vault login name
    #[serde(skip_serializing)]
    pub password_hash: String,      // Argon2 PHC string, never serialized out
    pub created_at: OffsetDateTime, // creation timestamp, immutable
}
