use thiserror::Error;

/// Infrastructure failure from the storage layer: connectivity loss, pool
/// exhaustion, malformed query. Expected business outcomes (missing row,
/// taken username) never take this form; they come back as `Option`/`bool`
/// sentinels per operation.
#[derive(Debug, Error)]
#[error("storage failure: {source}")]
pub struct StorageError {
    #[from]
    source: sqlx::Error,
}

/// Whether the error is the database rejecting a duplicate key, as opposed
/// to infrastructure trouble.
pub(crate) fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db) => db.is_unique_violation(),
        _ => false,
    }
}
