use sqlx::PgPool;
use tracing::error;

use crate::categories::repo_types::Category;
use crate::error::StorageError;

/// All categories owned by the given user. No ordering contract.
pub async fn get_categories_for_user(
    db: &PgPool,
    user_id: i64,
) -> Result<Vec<Category>, StorageError> {
    let rows = sqlx::query_as::<_, Category>(
        r#"
        SELECT category_id AS id, user_id, name, description
        FROM categories
        WHERE user_id = $1
        "#,
    )
    .bind(user_id)
    .fetch_all(db)
    .await?;
    Ok(rows)
}

/// Insert a category and return it with its generated id.
///
/// Any failure (constraint violation or storage trouble) comes back as
/// `None` so UI flows stay a single branch; the cause is logged here.
pub async fn create_category(
    db: &PgPool,
    user_id: i64,
    name: &str,
    description: Option<&str>,
) -> Option<Category> {
    let result = sqlx::query_as::<_, Category>(
        r#"
        INSERT INTO categories (user_id, name, description)
        VALUES ($1, $2, $3)
        RETURNING category_id AS id, user_id, name, description
        "#,
    )
    .bind(user_id)
    .bind(name)
    .bind(description)
    .fetch_one(db)
    .await;

    match result {
        Ok(category) => Some(category),
        Err(e) => {
            error!(error = %e, user_id, "create category failed");
            None
        }
    }
}
