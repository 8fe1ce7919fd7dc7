use sqlx::PgPool;
use tracing::warn;

use crate::auth::repo_types::User;
use crate::error::{is_unique_violation, StorageError};

impl User {
    /// Find a user by their unique username. Absence is not an error.
    pub async fn find_by_username(
        db: &PgPool,
        username: &str,
    ) -> Result<Option<User>, StorageError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, password_hash, created_at
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(db)
        .await?;
        Ok(user)
    }

    /// Insert a new user with an already hashed password.
    ///
    /// A taken username is an expected outcome and comes back as
    /// `Ok(false)`; any other database failure propagates.
    pub async fn create(
        db: &PgPool,
        username: &str,
        password_hash: &str,
    ) -> Result<bool, StorageError> {
        let result = sqlx::query(
            r#"
            INSERT INTO users (username, password_hash)
            VALUES ($1, $2)
            "#,
        )
        .bind(username)
        .bind(password_hash)
        .execute(db)
        .await;

        match result {
            Ok(done) => Ok(done.rows_affected() == 1),
            Err(e) if is_unique_violation(&e) => {
                warn!(username, "username already taken");
                Ok(false)
            }
            Err(e) => Err(e.into()),
        }
    }
}
