use sqlx::PgPool;
use tracing::debug;

use crate::entries::repo_types::{EntryDraft, EntryRow, PasswordEntry};
use crate::error::StorageError;

/// Every entry the given user owns, category populated via LEFT JOIN.
/// Storage trouble is an error, never an empty list.
pub async fn get_all_entries_for_user(
    db: &PgPool,
    user_id: i64,
) -> Result<Vec<PasswordEntry>, StorageError> {
    let rows = sqlx::query_as::<_, EntryRow>(
        r#"
        SELECT pe.id, pe.user_id, pe.website, pe.username, pe.password,
               c.category_id, c.name AS category_name, c.description AS category_description
        FROM password_entries pe
        LEFT JOIN categories c ON pe.category_id = c.category_id
        WHERE pe.user_id = $1
        "#,
    )
    .bind(user_id)
    .fetch_all(db)
    .await?;
    Ok(rows.into_iter().map(PasswordEntry::from).collect())
}

/// Insert a new entry attributed to `user_id`. `Ok(true)` iff exactly one
/// row was written.
///
/// A category id only sticks when it names a category the same user owns;
/// anything else (including no category) is written as NULL.
pub async fn add_entry(
    db: &PgPool,
    entry: &EntryDraft,
    user_id: i64,
) -> Result<bool, StorageError> {
    let done = sqlx::query(
        r#"
        INSERT INTO password_entries (user_id, website, username, password, category_id)
        VALUES ($1, $2, $3, $4,
                (SELECT category_id FROM categories WHERE category_id = $5 AND user_id = $1))
        "#,
    )
    .bind(user_id)
    .bind(&entry.website)
    .bind(&entry.username)
    .bind(&entry.password)
    .bind(entry.category_id)
    .execute(db)
    .await?;
    Ok(done.rows_affected() == 1)
}

/// Replace website, username, password and category for an entry the acting
/// user owns. A row the user does not own, or that does not exist, is left
/// untouched and reported as `Ok(false)`.
pub async fn update_entry(
    db: &PgPool,
    entry_id: i64,
    entry: &EntryDraft,
    user_id: i64,
) -> Result<bool, StorageError> {
    let done = sqlx::query(
        r#"
        UPDATE password_entries
        SET website = $1, username = $2, password = $3,
            category_id = (SELECT category_id FROM categories
                           WHERE category_id = $4 AND user_id = $6)
        WHERE id = $5 AND user_id = $6
        "#,
    )
    .bind(&entry.website)
    .bind(&entry.username)
    .bind(&entry.password)
    .bind(entry.category_id)
    .bind(entry_id)
    .bind(user_id)
    .execute(db)
    .await?;
    Ok(done.rows_affected() == 1)
}

/// Delete an entry the acting user owns. SQL failure surfaces as
/// `StorageError` so the UI can report it; a missing or foreign id affects
/// zero rows and completes as a no-op.
pub async fn delete_entry(db: &PgPool, entry_id: i64, user_id: i64) -> Result<(), StorageError> {
    let done = sqlx::query(
        r#"
        DELETE FROM password_entries
        WHERE id = $1 AND user_id = $2
        "#,
    )
    .bind(entry_id)
    .bind(user_id)
    .execute(db)
    .await?;
    if done.rows_affected() == 0 {
        debug!(entry_id, "delete matched no rows");
    }
    Ok(())
}
