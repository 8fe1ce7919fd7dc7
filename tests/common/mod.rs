use passvault::auth::User;
use sqlx::PgPool;

/// Insert a user row directly (bypassing the auth service) and return its id.
pub async fn seed_user(db: &PgPool, username: &str) -> i64 {
    let created = User::create(db, username, "seeded-hash")
        .await
        .expect("seed user insert");
    assert!(created, "seed user should not collide");
    User::find_by_username(db, username)
        .await
        .expect("seed user lookup")
        .expect("seeded user should exist")
        .id
}
