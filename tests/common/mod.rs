#![allow(dead_code)]

use axum_test::TestServer;
use chrono::{DateTime, Duration, Utc};
use shortlink::application::services::{AuthService, LinkService};
use shortlink::infrastructure::persistence::{SqliteLinkRepository, connect, run_migrations};
use shortlink::routes::build_router;
use shortlink::state::AppState;
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use std::sync::Arc;
use tempfile::TempDir;

pub const TEST_TOKEN: &str = "test-api-token";
pub const TEST_DOMAIN: &str = "https://s.example.com";

/// Fresh in-memory database with the schema applied.
///
/// A single connection that is never recycled keeps the in-memory database
/// alive for the whole test.
pub async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .unwrap();

    run_migrations(&pool).await.unwrap();
    pool
}

/// File-backed database opened the way the server opens it (WAL, busy
/// timeout), with several connections so statements really run in parallel.
///
/// Keep the returned [`TempDir`] alive for as long as the pool is used.
pub async fn create_file_pool(max_connections: u32) -> (SqlitePool, TempDir) {
    let dir = TempDir::new().unwrap();
    let url = format!("sqlite://{}", dir.path().join("links.db").display());

    let pool = connect(&url, max_connections).await.unwrap();
    run_migrations(&pool).await.unwrap();

    (pool, dir)
}

pub fn create_test_state(pool: SqlitePool) -> AppState {
    let pool = Arc::new(pool);

    let link_repo = Arc::new(SqliteLinkRepository::new(pool));
    let link_service = Arc::new(LinkService::new(link_repo, TEST_DOMAIN));
    let auth_service = Arc::new(AuthService::new(TEST_TOKEN));

    AppState::new(link_service, auth_service)
}

/// Full application router over a fresh database.
pub async fn create_test_server() -> (TestServer, SqlitePool) {
    let pool = create_test_pool().await;
    let server = TestServer::new(build_router(create_test_state(pool.clone()))).unwrap();
    (server, pool)
}

pub fn auth_header() -> String {
    format!("Bearer {}", TEST_TOKEN)
}

async fn insert_link(
    pool: &SqlitePool,
    code: &str,
    url: &str,
    created_at: DateTime<Utc>,
    expires_at: Option<DateTime<Utc>>,
) {
    sqlx::query(
        "INSERT INTO short_links (code, target_url, clicks, created_at, expires_at) VALUES (?1, ?2, 0, ?3, ?4)",
    )
    .bind(code)
    .bind(url)
    .bind(created_at)
    .bind(expires_at)
    .execute(pool)
    .await
    .unwrap();
}

pub async fn create_test_link(pool: &SqlitePool, code: &str, url: &str) {
    insert_link(pool, code, url, Utc::now(), None).await;
}

pub async fn create_expired_link(pool: &SqlitePool, code: &str, url: &str) {
    let now = Utc::now();
    insert_link(
        pool,
        code,
        url,
        now - Duration::hours(2),
        Some(now - Duration::hours(1)),
    )
    .await;
}

pub async fn get_clicks(pool: &SqlitePool, code: &str) -> i64 {
    sqlx::query_scalar("SELECT clicks FROM short_links WHERE code = ?1")
        .bind(code)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn link_exists(pool: &SqlitePool, code: &str) -> bool {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM short_links WHERE code = ?1")
        .bind(code)
        .fetch_one(pool)
        .await
        .unwrap();
    count > 0
}
