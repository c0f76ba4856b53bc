/// Integration tests for SessionRepositorySql.
///
/// Require a running PostgreSQL instance. Run with:
/// `cargo test -- --ignored --nocapture`

use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::adapters::persistence::{
    database::Database, repositories::SessionRepositorySql, repositories::UserRepositorySql,
};
use crate::core::credentials::StoredCredential;
use crate::core::entities::{Session, User};
use crate::core::usecases::ports::{SessionRepository, UserRepository};

use super::test_database_url;

async fn seed_user(db: &Database) -> Uuid {
    let users = UserRepositorySql::new(db.clone());
    let user = users
        .create(User::new(
            Uuid::new_v4(),
            format!("session-owner-{}", Uuid::new_v4()),
        ))
        .await
        .expect("seeding the owning user should succeed");
    user.id()
}

#[tokio::test]
#[ignore]
async fn create_then_find_by_token_hash_round_trips() {
    let db = Database::new_default(&test_database_url())
        .await
        .expect("failed to connect to test database");
    let repo = SessionRepositorySql::new(db.clone());
    let user_id = seed_user(&db).await;

    let now = Utc::now();
    let session = Session::new(
        Uuid::new_v4(),
        StoredCredential::from_hash("session-token-hash"),
        user_id,
        now,
        now + Duration::hours(1),
    );

    let created = repo.create(session).await.expect("create should succeed");

    let found = repo
        .find_by_token_hash("session-token-hash")
        .await
        .expect("find should succeed")
        .expect("session should exist");
    assert_eq!(found.id(), created.id());
    assert!(!found.is_revoked());

    db.shutdown().await;
}

#[tokio::test]
#[ignore]
async fn revoke_marks_session_revoked() {
    let db = Database::new_default(&test_database_url())
        .await
        .expect("failed to connect to test database");
    let repo = SessionRepositorySql::new(db.clone());
    let user_id = seed_user(&db).await;

    let now = Utc::now();
    let created = repo
        .create(Session::new(
            Uuid::new_v4(),
            StoredCredential::from_hash(format!("revoke-{}", Uuid::new_v4())),
            user_id,
            now,
            now + Duration::hours(1),
        ))
        .await
        .expect("create should succeed");

    repo.revoke(created.id()).await.expect("revoke should succeed");

    let found = repo
        .find_by_id(created.id())
        .await
        .expect("find should succeed")
        .expect("session should exist");
    assert!(found.is_revoked());

    db.shutdown().await;
}

#[tokio::test]
#[ignore]
async fn touch_updates_last_used_at() {
    let db = Database::new_default(&test_database_url())
        .await
        .expect("failed to connect to test database");
    let repo = SessionRepositorySql::new(db.clone());
    let user_id = seed_user(&db).await;

    let now = Utc::now();
    let created = repo
        .create(Session::new(
            Uuid::new_v4(),
            StoredCredential::from_hash(format!("touch-{}", Uuid::new_v4())),
            user_id,
            now,
            now + Duration::hours(1),
        ))
        .await
        .expect("create should succeed");

    let later = now + Duration::minutes(5);
    repo.touch(created.id(), later).await.expect("touch should succeed");

    let found = repo
        .find_by_id(created.id())
        .await
        .expect("find should succeed")
        .expect("session should exist");
    assert_eq!(found.last_used_at(), later);

    db.shutdown().await;
}
