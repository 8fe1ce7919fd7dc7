use lazy_static::lazy_static;
use regex::Regex;
use sqlx::PgPool;
use tracing::{debug, error, info, warn};

use crate::auth::password::{hash_password, verify_password};
use crate::auth::repo_types::User;
use crate::error::StorageError;

pub fn is_valid_username(username: &str) -> bool {
    lazy_static! {
        static ref USERNAME_RE: Regex = Regex::new(r"^[A-Za-z0-9._-]{3,50}$").unwrap();
    }
    USERNAME_RE.is_match(username)
}

/// Register a new vault account.
///
/// Returns `true` only on a confirmed insert. A taken username, invalid
/// input, or any hashing/storage failure all come back as `false`; failures
/// are logged here rather than propagated so the caller has a single yes/no
/// outcome to present.
pub async fn register(db: &PgPool, username: &str, password: &str) -> bool {
    let username = username.trim();
    if !is_valid_username(username) {
        warn!("register rejected: invalid username");
        return false;
    }
    if password.is_empty() {
        warn!(username, "register rejected: empty password");
        return false;
    }

    // No hashing work when the name is already taken.
    match User::find_by_username(db, username).await {
        Ok(Some(_)) => {
            warn!(username, "register rejected: username taken");
            return false;
        }
        Ok(None) => {}
        Err(e) => {
            error!(error = %e, "register lookup failed");
            return false;
        }
    }

    let hash = match hash_password(password) {
        Ok(h) => h,
        Err(e) => {
            error!(error = %e, "hash_password failed");
            return false;
        }
    };

    // The lookup above and this insert are not one transaction; a concurrent
    // registration of the same name loses on the unique constraint instead.
    match User::create(db, username, &hash).await {
        Ok(created) => {
            if created {
                info!(username, "user registered");
            }
            created
        }
        Err(e) => {
            error!(error = %e, "create user failed");
            false
        }
    }
}

/// Check credentials against the stored hash.
///
/// Unknown username and wrong password both resolve to `Ok(None)` and are
/// deliberately indistinguishable, in the return value and in the logs.
/// `Err` is reserved for storage trouble; a stored hash that fails to parse
/// counts as a mismatch.
pub async fn validate(
    db: &PgPool,
    username: &str,
    password: &str,
) -> Result<Option<User>, StorageError> {
    let user = match User::find_by_username(db, username.trim()).await? {
        Some(u) => u,
        None => {
            debug!("login rejected");
            return Ok(None);
        }
    };

    match verify_password(password, &user.password_hash) {
        Ok(true) => {
            info!(user_id = user.id, "user authenticated");
            Ok(Some(user))
        }
        Ok(false) => {
            debug!("login rejected");
            Ok(None)
        }
        Err(e) => {
            error!(error = %e, user_id = user.id, "stored hash failed to parse");
            Ok(None)
        }
    }
}
