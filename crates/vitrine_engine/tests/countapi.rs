use std::sync::{Arc, Once};
use std::time::Duration;

use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use vitrine_engine::{
    CountApiBackend, CountApiConfig, FailureKind, MemorySessionStore, MetricsBackend, NowFn,
    SessionStore, VisitorInfo,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(vitrine_logging::initialize_for_tests);
}

fn pinned_clock() -> NowFn {
    Arc::new(|| Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap())
}

fn backend(server: &MockServer, sessions: Arc<dyn SessionStore>) -> CountApiBackend {
    let config = CountApiConfig {
        enabled: true,
        namespace: "ns".to_string(),
        key: "visits".to_string(),
        base_url: server.uri(),
    };
    CountApiBackend::new(
        config,
        Duration::from_secs(5),
        Duration::from_secs(5),
        sessions,
        pinned_clock(),
    )
    .unwrap()
}

fn visitor() -> VisitorInfo {
    VisitorInfo::detect(Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap())
}

async fn mount_counts(server: &MockServer, read: i64, hit: i64) {
    Mock::given(method("GET"))
        .and(path("/get/ns/visits"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "value": read })))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/hit/ns/visits"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "value": hit })))
        .mount(server)
        .await;
}

async fn mount_side_channel(server: &MockServer) {
    for key in ["pageviews", "today-2024-05-01", "unique-sessions"] {
        Mock::given(method("GET"))
            .and(path(format!("/hit/ns/{key}")))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "value": 1 })))
            .mount(server)
            .await;
    }
}

async fn side_channel_hits(server: &MockServer, key: &str) -> usize {
    let wanted = format!("/hit/ns/{key}");
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .filter(|request| request.url.path() == wanted)
        .count()
}

#[tokio::test]
async fn hit_result_becomes_the_total_and_derives_the_rest() {
    init_logging();
    let server = MockServer::start().await;
    mount_counts(&server, 41, 42).await;
    mount_side_channel(&server).await;

    let backend = backend(&server, Arc::new(MemorySessionStore::new()));
    let metrics = backend.fetch_metrics(&visitor()).await.unwrap();

    assert_eq!(metrics.total_visitors, 42);
    assert_eq!(metrics.page_views, 58);
    assert!((2..=21).contains(&metrics.today_visitors));
    assert!((1..=8).contains(&metrics.online_users));
}

#[tokio::test]
async fn missing_hit_value_falls_back_to_the_read() {
    init_logging();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/get/ns/visits"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "value": 7 })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/hit/ns/visits"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;
    mount_side_channel(&server).await;

    let backend = backend(&server, Arc::new(MemorySessionStore::new()));
    let metrics = backend.fetch_metrics(&visitor()).await.unwrap();

    assert_eq!(metrics.total_visitors, 7);
}

#[tokio::test]
async fn side_channel_records_the_day_bucket_and_page_views() {
    init_logging();
    let server = MockServer::start().await;
    mount_counts(&server, 0, 1).await;
    mount_side_channel(&server).await;

    let backend = backend(&server, Arc::new(MemorySessionStore::new()));
    backend.fetch_metrics(&visitor()).await.unwrap();

    let mut tries = 0;
    while side_channel_hits(&server, "today-2024-05-01").await == 0 && tries < 50 {
        tokio::time::sleep(Duration::from_millis(20)).await;
        tries += 1;
    }
    assert_eq!(side_channel_hits(&server, "pageviews").await, 1);
    assert_eq!(side_channel_hits(&server, "today-2024-05-01").await, 1);
}

#[tokio::test]
async fn unique_session_hit_fires_at_most_once() {
    init_logging();
    let server = MockServer::start().await;
    mount_counts(&server, 1, 2).await;
    mount_side_channel(&server).await;

    let backend = backend(&server, Arc::new(MemorySessionStore::new()));
    backend.fetch_metrics(&visitor()).await.unwrap();
    backend.fetch_metrics(&visitor()).await.unwrap();

    let mut tries = 0;
    while side_channel_hits(&server, "unique-sessions").await == 0 && tries < 50 {
        tokio::time::sleep(Duration::from_millis(20)).await;
        tries += 1;
    }
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert_eq!(side_channel_hits(&server, "unique-sessions").await, 1);
}

#[tokio::test]
async fn fetch_current_reads_without_counting() {
    init_logging();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/get/ns/visits"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "value": 99 })))
        .mount(&server)
        .await;

    let backend = backend(&server, Arc::new(MemorySessionStore::new()));
    let value = backend.fetch_current().await.unwrap();

    assert_eq!(value, Some(99));
    let requests = server.received_requests().await.unwrap_or_default();
    assert!(requests
        .iter()
        .all(|request| request.url.path().starts_with("/get/")));
}

#[tokio::test]
async fn server_error_surfaces_the_http_status() {
    init_logging();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/get/ns/visits"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let backend = backend(&server, Arc::new(MemorySessionStore::new()));
    let err = backend.fetch_metrics(&visitor()).await.unwrap_err();

    assert_eq!(err.kind, FailureKind::HttpStatus(500));
}

#[tokio::test]
async fn negative_count_is_treated_as_absent() {
    init_logging();
    let server = MockServer::start().await;
    mount_counts(&server, -5, -3).await;
    mount_side_channel(&server).await;

    let backend = backend(&server, Arc::new(MemorySessionStore::new()));
    let metrics = backend.fetch_metrics(&visitor()).await.unwrap();

    assert_eq!(metrics.total_visitors, 0);
}
