mod common;

use serde_json::json;
use std::time::Duration;

#[tokio::test]
async fn test_redirect_success() {
    let (server, pool) = common::create_test_server().await;
    common::create_test_link(&pool, "redirect1", "https://example.com/target").await;

    let response = server.get("/redirect1").await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "https://example.com/target");
    assert_eq!(response.header("cache-control"), "no-cache");
}

#[tokio::test]
async fn test_redirect_unusable_target_is_not_counted() {
    let (server, pool) = common::create_test_server().await;
    common::create_test_link(&pool, "ctl", "https://example.com/a\nb").await;

    let response = server.get("/ctl").await;

    assert_eq!(response.status_code(), 500);
    assert_eq!(common::get_clicks(&pool, "ctl").await, 0);
}

#[tokio::test]
async fn test_redirect_non_ascii_target_is_encoded() {
    let (server, pool) = common::create_test_server().await;
    common::create_test_link(&pool, "cafe", "https://example.com/caf\u{e9}").await;

    let response = server.get("/cafe").await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "https://example.com/caf%C3%A9");
    assert_eq!(common::get_clicks(&pool, "cafe").await, 1);
}

#[tokio::test]
async fn test_redirect_counts_clicks() {
    let (server, pool) = common::create_test_server().await;
    common::create_test_link(&pool, "counted", "https://example.com").await;

    for _ in 0..3 {
        let response = server.get("/counted").await;
        assert_eq!(response.status_code(), 302);
    }

    assert_eq!(common::get_clicks(&pool, "counted").await, 3);
}

#[tokio::test]
async fn test_redirect_not_found() {
    let (server, _pool) = common::create_test_server().await;

    let response = server.get("/nonexistent").await;

    assert_eq!(response.status_code(), 404);
    assert_eq!(
        response.json::<serde_json::Value>()["error"]["code"],
        "not_found"
    );
}

#[tokio::test]
async fn test_redirect_expired_link_is_gone() {
    let (server, pool) = common::create_test_server().await;
    common::create_expired_link(&pool, "expired", "https://example.com").await;

    let response = server.get("/expired").await;

    assert_eq!(response.status_code(), 410);
    assert_eq!(common::get_clicks(&pool, "expired").await, 0);
}

#[tokio::test]
async fn test_redirect_after_ttl_elapses() {
    let (server, _pool) = common::create_test_server().await;

    server
        .post("/api/shorten")
        .add_header("Authorization", common::auth_header())
        .json(&json!({ "url": "https://example.com", "custom": "brief", "ttl_seconds": 1 }))
        .await
        .assert_status_ok();

    assert_eq!(server.get("/brief").await.status_code(), 302);

    tokio::time::sleep(Duration::from_millis(1500)).await;

    assert_eq!(server.get("/brief").await.status_code(), 410);

    let info = server
        .get("/api/info/brief")
        .add_header("Authorization", common::auth_header())
        .await;
    info.assert_status_ok();

    let json = info.json::<serde_json::Value>();
    assert_eq!(json["clicks"], 1);
    assert_eq!(json["expired"], true);
}

#[tokio::test]
async fn test_redirect_does_not_require_token() {
    let (server, pool) = common::create_test_server().await;
    common::create_test_link(&pool, "public", "https://example.com").await;

    let response = server
        .get("/public")
        .add_header("Authorization", "Bearer wrong")
        .await;

    assert_eq!(response.status_code(), 302);
}

#[tokio::test]
async fn test_redirect_reserved_path_is_not_a_link() {
    let (server, _pool) = common::create_test_server().await;

    let response = server.get("/api").await;

    assert_eq!(response.status_code(), 404);
}
