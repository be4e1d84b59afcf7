mod common;

use chrono::{Duration, Utc};
use shortlink::application::services::LinkService;
use shortlink::domain::entities::NewLink;
use shortlink::domain::repositories::LinkRepository;
use shortlink::error::AppError;
use shortlink::infrastructure::persistence::SqliteLinkRepository;
use std::sync::Arc;

fn new_link(code: &str, url: &str) -> NewLink {
    NewLink {
        code: code.to_string(),
        target_url: url.to_string(),
        created_at: Utc::now(),
        expires_at: None,
    }
}

#[tokio::test]
async fn test_create_link() {
    let pool = common::create_test_pool().await;
    let repo = SqliteLinkRepository::new(Arc::new(pool));

    let link = repo
        .create(new_link("test123", "https://example.com"))
        .await
        .unwrap();

    assert!(link.id > 0);
    assert_eq!(link.code, "test123");
    assert_eq!(link.target_url, "https://example.com");
    assert_eq!(link.clicks, 0);
    assert!(link.expires_at.is_none());
}

#[tokio::test]
async fn test_create_duplicate_code_is_conflict() {
    let pool = common::create_test_pool().await;
    let repo = SqliteLinkRepository::new(Arc::new(pool));

    repo.create(new_link("dup", "https://first.example.com"))
        .await
        .unwrap();

    let result = repo.create(new_link("dup", "https://second.example.com")).await;

    assert!(matches!(result, Err(AppError::Conflict { .. })));

    let stored = repo.find_by_code("dup").await.unwrap().unwrap();
    assert_eq!(stored.target_url, "https://first.example.com");
}

#[tokio::test]
async fn test_find_by_code() {
    let pool = common::create_test_pool().await;
    common::create_test_link(&pool, "abc123", "https://example.com").await;
    let repo = SqliteLinkRepository::new(Arc::new(pool));

    let link = repo.find_by_code("abc123").await.unwrap();
    assert_eq!(link.unwrap().target_url, "https://example.com");

    assert!(repo.find_by_code("missing").await.unwrap().is_none());
}

#[tokio::test]
async fn test_find_is_case_sensitive() {
    let pool = common::create_test_pool().await;
    common::create_test_link(&pool, "AbC", "https://example.com").await;
    let repo = SqliteLinkRepository::new(Arc::new(pool));

    assert!(repo.find_by_code("AbC").await.unwrap().is_some());
    assert!(repo.find_by_code("abc").await.unwrap().is_none());
}

#[tokio::test]
async fn test_expiry_round_trips() {
    let pool = common::create_test_pool().await;
    let repo = SqliteLinkRepository::new(Arc::new(pool));

    let now = Utc::now();
    let expires_at = now + Duration::seconds(60);

    repo.create(NewLink {
        code: "ttl".to_string(),
        target_url: "https://example.com".to_string(),
        created_at: now,
        expires_at: Some(expires_at),
    })
    .await
    .unwrap();

    let link = repo.find_by_code("ttl").await.unwrap().unwrap();
    assert_eq!(link.created_at.timestamp_millis(), now.timestamp_millis());
    assert_eq!(
        link.expires_at.map(|e| e.timestamp_millis()),
        Some(expires_at.timestamp_millis())
    );
    assert!(!link.is_expired());
}

#[tokio::test]
async fn test_increment_clicks() {
    let pool = common::create_test_pool().await;
    common::create_test_link(&pool, "click", "https://example.com").await;
    let repo = SqliteLinkRepository::new(Arc::new(pool.clone()));

    assert!(repo.increment_clicks("click").await.unwrap());
    assert!(repo.increment_clicks("click").await.unwrap());
    assert!(!repo.increment_clicks("missing").await.unwrap());

    assert_eq!(common::get_clicks(&pool, "click").await, 2);
}

#[tokio::test]
async fn test_delete_by_code() {
    let pool = common::create_test_pool().await;
    common::create_test_link(&pool, "gone", "https://example.com").await;
    let repo = SqliteLinkRepository::new(Arc::new(pool));

    assert_eq!(repo.delete_by_code("gone").await.unwrap(), 1);
    assert_eq!(repo.delete_by_code("gone").await.unwrap(), 0);
    assert!(repo.find_by_code("gone").await.unwrap().is_none());
}

#[tokio::test]
async fn test_list_all_and_count() {
    let pool = common::create_test_pool().await;
    common::create_test_link(&pool, "first", "https://one.example.com").await;
    common::create_expired_link(&pool, "old", "https://old.example.com").await;
    let repo = SqliteLinkRepository::new(Arc::new(pool));

    let links = repo.list_all().await.unwrap();
    assert_eq!(links.len(), 2);
    assert_eq!(links[0].code, "old");
    assert_eq!(links[1].code, "first");

    assert_eq!(repo.count().await.unwrap(), 2);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_resolves_count_every_click() {
    const REQUESTS: i64 = 50;

    let (pool, _dir) = common::create_file_pool(8).await;
    common::create_test_link(&pool, "busy", "https://example.com").await;

    let repo = Arc::new(SqliteLinkRepository::new(Arc::new(pool.clone())));
    let service = Arc::new(LinkService::new(repo, common::TEST_DOMAIN));

    let start = Arc::new(tokio::sync::Barrier::new(REQUESTS as usize));
    let mut tasks = tokio::task::JoinSet::new();
    for _ in 0..REQUESTS {
        let service = service.clone();
        let start = start.clone();
        tasks.spawn(async move {
            start.wait().await;
            service.resolve("busy").await
        });
    }

    while let Some(result) = tasks.join_next().await {
        assert!(result.unwrap().is_ok());
    }

    assert_eq!(common::get_clicks(&pool, "busy").await, REQUESTS);

    pool.close().await;
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_increments_on_shared_pool() {
    const WRITERS: i64 = 8;
    const PER_WRITER: i64 = 25;

    let (pool, _dir) = common::create_file_pool(WRITERS as u32).await;
    common::create_test_link(&pool, "hot", "https://example.com").await;

    let repo = Arc::new(SqliteLinkRepository::new(Arc::new(pool.clone())));

    let mut tasks = tokio::task::JoinSet::new();
    for _ in 0..WRITERS {
        let repo = repo.clone();
        tasks.spawn(async move {
            for _ in 0..PER_WRITER {
                assert!(repo.increment_clicks("hot").await.unwrap());
            }
        });
    }

    while let Some(result) = tasks.join_next().await {
        result.unwrap();
    }

    assert_eq!(common::get_clicks(&pool, "hot").await, WRITERS * PER_WRITER);

    pool.close().await;
}
