//! `PgStore` against a live database
//!
//! Constraint mapping, batched lookups, ordering and the cascade delete.

use assert_matches::assert_matches;
use blog_platform::backend::auth::users::NewUser;
use blog_platform::backend::posts::comments::NewComment;
use blog_platform::backend::posts::db::{NewPost, PostChanges};
use blog_platform::backend::store::{
    CommentStore, HealthCheck, PostStore, StoreError, UserStore,
};
use blog_platform::shared::models::Role;
use pretty_assertions::assert_eq;
use uuid::Uuid;

use crate::common::database::TestDatabase;

fn new_post(author_id: Uuid, title: &str) -> NewPost {
    NewPost {
        title: title.to_string(),
        content: "Content that is long enough".to_string(),
        author_id,
    }
}

#[tokio::test]
async fn test_duplicate_email_maps_to_duplicate_field() {
    let db = TestDatabase::new().await;
    let store = db.store();
    let user = db.create_user("dup").await;

    let result = store
        .insert_user(NewUser {
            username: "someone else".to_string(),
            email: user.email.clone(),
            password_hash: "hash".to_string(),
            role: Role::User,
        })
        .await;

    assert_matches!(result, Err(StoreError::Duplicate { field }) if field == "email");
}

#[tokio::test]
async fn test_post_for_unknown_author_maps_to_missing_reference() {
    let db = TestDatabase::new().await;

    let result = db.store().insert_post(new_post(Uuid::new_v4(), "Orphan post")).await;

    assert_matches!(result, Err(StoreError::MissingReference { field }) if field == "author_id");
}

#[tokio::test]
async fn test_find_users_by_ids_batches_and_skips_unknown() {
    let db = TestDatabase::new().await;
    let store = db.store();
    let alice = db.create_user("alice").await;
    let bob = db.create_user("bob").await;

    let mut found = store
        .find_users_by_ids(&[alice.id, bob.id, Uuid::new_v4()])
        .await
        .unwrap();
    found.sort_by_key(|u| u.username.clone());

    let names: Vec<&str> = found.iter().map(|u| u.username.as_str()).collect();
    assert_eq!(names, vec!["alice", "bob"]);
    assert!(store.find_users_by_ids(&[]).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_list_posts_newest_first() {
    let db = TestDatabase::new().await;
    let store = db.store();
    let author = db.create_user("lister").await;

    let mut ids = Vec::new();
    for i in 0..3 {
        let post = store
            .insert_post(new_post(author.id, &format!("Ordered post {}", i)))
            .await
            .unwrap();
        ids.push(post.id);
    }

    // Other tests share the table; keep only this author's posts
    let listed: Vec<Uuid> = store
        .list_posts(0, i64::MAX as u64)
        .await
        .unwrap()
        .into_iter()
        .filter(|p| p.author_id == author.id)
        .map(|p| p.id)
        .collect();

    ids.reverse();
    assert_eq!(listed, ids);
    assert!(store.count_posts().await.unwrap() >= 3);
}

#[tokio::test]
async fn test_update_post_keeps_author_and_stamps_time() {
    let db = TestDatabase::new().await;
    let store = db.store();
    let author = db.create_user("editor").await;
    let post = store.insert_post(new_post(author.id, "Before edit")).await.unwrap();

    let updated = store
        .update_post(
            post.id,
            PostChanges {
                title: "After edit".to_string(),
                content: "Rewritten content body".to_string(),
            },
        )
        .await
        .unwrap()
        .expect("post exists");

    assert_eq!(updated.title, "After edit");
    assert_eq!(updated.author_id, author.id);
    assert!(updated.updated_at >= post.updated_at);

    let missing = store
        .update_post(
            Uuid::new_v4(),
            PostChanges {
                title: "Nobody".to_string(),
                content: "Nothing to update here".to_string(),
            },
        )
        .await
        .unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn test_delete_cascades_to_comments() {
    let db = TestDatabase::new().await;
    let store = db.store();
    let author = db.create_user("cascader").await;
    let post = store.insert_post(new_post(author.id, "Doomed post")).await.unwrap();
    let keeper = store.insert_post(new_post(author.id, "Surviving post")).await.unwrap();

    for (post_id, text) in [(post.id, "first"), (post.id, "second"), (keeper.id, "kept")] {
        store
            .insert_comment(NewComment {
                post_id,
                author_id: author.id,
                content: text.to_string(),
            })
            .await
            .unwrap();
    }

    assert!(store.delete_post_cascade(post.id).await.unwrap());

    assert!(store.find_post(post.id).await.unwrap().is_none());
    assert!(store.comments_for_post(post.id).await.unwrap().is_empty());
    assert_eq!(store.comments_for_post(keeper.id).await.unwrap().len(), 1);

    assert!(!store.delete_post_cascade(post.id).await.unwrap());
}

#[tokio::test]
async fn test_comment_on_missing_post_is_rejected() {
    let db = TestDatabase::new().await;
    let author = db.create_user("commenter").await;

    let result = db
        .store()
        .insert_comment(NewComment {
            post_id: Uuid::new_v4(),
            author_id: author.id,
            content: "Into the void".to_string(),
        })
        .await;

    assert_matches!(result, Err(StoreError::MissingReference { field }) if field == "post_id");
}

#[tokio::test]
async fn test_ping_reports_connected() {
    let db = TestDatabase::new().await;
    assert!(db.store().ping().await);
    assert!(sqlx::query("SELECT 1").execute(db.pool()).await.is_ok());
}
