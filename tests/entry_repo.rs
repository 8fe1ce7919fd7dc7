mod common;

use passvault::categories::repo::create_category;
use passvault::entries::repo::{add_entry, delete_entry, get_all_entries_for_user, update_entry};
use passvault::entries::EntryDraft;
use sqlx::PgPool;

use common::seed_user;

fn draft(website: &str, username: &str, password: &str, category_id: Option<i64>) -> EntryDraft {
    EntryDraft {
        website: website.into(),
        username: username.into(),
        password: password.into(),
        category_id,
    }
}

#[sqlx::test(migrator = "passvault::MIGRATOR")]
async fn added_entry_roundtrips_with_category(db: PgPool) {
    let user_id = seed_user(&db, "owner").await;
    let category = create_category(&db, user_id, "Work", None)
        .await
        .expect("create category");

    let added = add_entry(&db, &draft("github.com", "bob", "p@ss", Some(category.id)), user_id)
        .await
        .expect("add should not error");
    assert!(added);

    let entries = get_all_entries_for_user(&db, user_id)
        .await
        .expect("read should not error");
    assert_eq!(entries.len(), 1);
    let entry = &entries[0];
    assert_eq!(entry.website, "github.com");
    assert_eq!(entry.username, "bob");
    assert_eq!(entry.password, "p@ss");
    assert_eq!(entry.user_id, user_id);
    assert_eq!(entry.category.as_ref().map(|c| c.id), Some(category.id));
}

#[sqlx::test(migrator = "passvault::MIGRATOR")]
async fn entry_without_category_stays_uncategorized(db: PgPool) {
    let user_id = seed_user(&db, "owner").await;

    assert!(add_entry(&db, &draft("mail.example", "bob", "hunter2", None), user_id)
        .await
        .expect("add should not error"));

    let entries = get_all_entries_for_user(&db, user_id)
        .await
        .expect("read should not error");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].category, None);
}

#[sqlx::test(migrator = "passvault::MIGRATOR")]
async fn foreign_category_id_is_written_as_null(db: PgPool) {
    let owner = seed_user(&db, "owner").await;
    let other = seed_user(&db, "other").await;
    let foreign = create_category(&db, other, "Theirs", None)
        .await
        .expect("create category");

    assert!(add_entry(&db, &draft("site", "name", "pw", Some(foreign.id)), owner)
        .await
        .expect("add should not error"));

    let entries = get_all_entries_for_user(&db, owner).await.expect("read");
    assert_eq!(entries[0].category, None);
}

#[sqlx::test(migrator = "passvault::MIGRATOR")]
async fn entries_are_scoped_to_owner(db: PgPool) {
    let owner = seed_user(&db, "owner").await;
    let other = seed_user(&db, "other").await;
    assert!(add_entry(&db, &draft("github.com", "bob", "p@ss", None), owner)
        .await
        .expect("add should not error"));

    assert_eq!(get_all_entries_for_user(&db, owner).await.expect("read").len(), 1);
    assert!(get_all_entries_for_user(&db, other).await.expect("read").is_empty());
}

#[sqlx::test(migrator = "passvault::MIGRATOR")]
async fn update_replaces_all_editable_fields(db: PgPool) {
    let user_id = seed_user(&db, "owner").await;
    let category = create_category(&db, user_id, "Work", None)
        .await
        .expect("create category");
    assert!(add_entry(&db, &draft("old.site", "old", "old-pw", None), user_id)
        .await
        .expect("add"));
    let entry_id = get_all_entries_for_user(&db, user_id).await.expect("read")[0].id;

    let changed = update_entry(
        &db,
        entry_id,
        &draft("new.site", "new", "new-pw", Some(category.id)),
        user_id,
    )
    .await
    .expect("update should not error");
    assert!(changed);

    let entries = get_all_entries_for_user(&db, user_id).await.expect("read");
    let entry = &entries[0];
    assert_eq!(entry.id, entry_id);
    assert_eq!(entry.website, "new.site");
    assert_eq!(entry.username, "new");
    assert_eq!(entry.password, "new-pw");
    assert_eq!(entry.category.as_ref().map(|c| c.id), Some(category.id));
}

#[sqlx::test(migrator = "passvault::MIGRATOR")]
async fn update_by_non_owner_touches_nothing(db: PgPool) {
    let owner = seed_user(&db, "owner").await;
    let intruder = seed_user(&db, "intruder").await;
    assert!(add_entry(&db, &draft("site", "name", "pw", None), owner)
        .await
        .expect("add"));
    let entry_id = get_all_entries_for_user(&db, owner).await.expect("read")[0].id;

    let changed = update_entry(&db, entry_id, &draft("x", "x", "x", None), intruder)
        .await
        .expect("update should not error");
    assert!(!changed);

    let entries = get_all_entries_for_user(&db, owner).await.expect("read");
    assert_eq!(entries[0].website, "site");
    assert_eq!(entries[0].password, "pw");
}

#[sqlx::test(migrator = "passvault::MIGRATOR")]
async fn delete_removes_owned_entry(db: PgPool) {
    let user_id = seed_user(&db, "owner").await;
    assert!(add_entry(&db, &draft("site", "name", "pw", None), user_id)
        .await
        .expect("add"));
    let entry_id = get_all_entries_for_user(&db, user_id).await.expect("read")[0].id;

    delete_entry(&db, entry_id, user_id)
        .await
        .expect("delete should not error");
    assert!(get_all_entries_for_user(&db, user_id).await.expect("read").is_empty());
}

#[sqlx::test(migrator = "passvault::MIGRATOR")]
async fn delete_of_missing_id_is_a_noop(db: PgPool) {
    let user_id = seed_user(&db, "owner").await;

    delete_entry(&db, 999_999, user_id)
        .await
        .expect("missing id should not raise");
}

#[sqlx::test(migrator = "passvault::MIGRATOR")]
async fn delete_by_non_owner_leaves_row(db: PgPool) {
    let owner = seed_user(&db, "owner").await;
    let intruder = seed_user(&db, "intruder").await;
    assert!(add_entry(&db, &draft("site", "name", "pw", None), owner)
        .await
        .expect("add"));
    let entry_id = get_all_entries_for_user(&db, owner).await.expect("read")[0].id;

    delete_entry(&db, entry_id, intruder)
        .await
        .expect("foreign delete should be a silent no-op");
    assert_eq!(get_all_entries_for_user(&db, owner).await.expect("read").len(), 1);
}
