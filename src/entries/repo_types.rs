use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::categories::repo_types::Category;

/// A stored website credential, with its category joined in when set.
///
/// `username`/`password` here are the credential for the website, not the
/// vault account's own login. The password is stored verbatim: what the
/// user saved must come back character-for-character for display and copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordEntry {
    pub id: i64,
    pub user_id: i64,
    pub website: String,
    pub username: String,
    pub password: String,
    pub category: Option<Category>, // None = uncategorized
}

/// Caller-supplied fields for inserting or replacing an entry; `id` and the
/// owning user are passed separately to the store calls.
#[derive(Debug, Clone, Deserialize)]
pub struct EntryDraft {
    pub website: String,
    pub username: String,
    pub password: String,
    pub category_id: Option<i64>,
}

/// Flat row shape produced by the LEFT JOIN read.
#[derive(Debug, FromRow)]
pub(crate) struct EntryRow {
    pub id: i64,
    pub user_id: i64,
    pub website: String,
    pub username: String,
    pub password: String,
    pub category_id: Option<i64>,
    pub category_name: Option<String>,
    pub category_description: Option<String>,
}

impl From<EntryRow> for PasswordEntry {
    fn from(r: EntryRow) -> Self {
        let category = r.category_id.map(|id| Category {
            id,
            user_id: r.user_id,
            name: r.category_name.unwrap_or_default(),
            description: r.category_description,
        });
        Self {
            id: r.id,
            user_id: r.user_id,
            website: r.website,
            username: r.username,
            password: r.password,
            category,
        }
    }
}
