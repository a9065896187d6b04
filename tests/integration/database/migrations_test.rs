//! Database migration tests
//!
//! Ensure the migrations apply and the schema the store expects exists.

use std::time::Duration;

use blog_platform::backend::server::config::{migrate_when_reachable, run_migrations};
use sqlx::postgres::PgPoolOptions;

use crate::common::database::{create_test_pool, test_database_url};

#[tokio::test]
async fn test_migrations_run_successfully() {
    let pool = create_test_pool().await;
    let result = run_migrations(&pool).await;
    assert!(result.is_ok(), "Migrations should run successfully: {:?}", result);

    // Idempotent on an up-to-date schema
    assert!(run_migrations(&pool).await.is_ok());
}

#[tokio::test]
async fn test_blog_tables_exist() {
    let pool = create_test_pool().await;
    run_migrations(&pool).await.unwrap();

    for table in ["users", "posts", "comments"] {
        let result = sqlx::query(&format!("SELECT 1 FROM {} LIMIT 1", table))
            .execute(&pool)
            .await;
        assert!(result.is_ok(), "{} table should exist", table);
    }
}

#[tokio::test]
async fn test_lazy_pool_is_migrated_once_reachable() {
    let pool = PgPoolOptions::new()
        .max_connections(2)
        .connect_lazy(&test_database_url())
        .unwrap();

    tokio::time::timeout(
        Duration::from_secs(30),
        migrate_when_reachable(pool.clone(), Duration::from_millis(50)),
    )
    .await
    .expect("migrations should run once the database answers");

    let applied: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM _sqlx_migrations WHERE success")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert!(applied >= 1);
    assert!(sqlx::query("SELECT 1 FROM users LIMIT 1").execute(&pool).await.is_ok());
}
