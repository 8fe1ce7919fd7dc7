use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// User-defined label for grouping credential entries. Owned by exactly one
/// user and only ever listed within that user's scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Category {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub description: Option<String>,
}
