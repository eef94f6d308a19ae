//! Listing workflow tests: concurrent fetches, partial failure, and
//! blank-filter omission, driven through the App message loop against a
//! mock server.

use armory::api::CatalogClient;
use armory::app::{App, AppMessage};
use std::time::Duration;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::time::timeout;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn summaries_json() -> serde_json::Value {
    serde_json::json!([
        {
            "id": 1, "name": "nmap", "description": "Network scanner",
            "category": "Recon", "average_rating": 4.5, "rating_count": 2
        },
        {
            "id": 2, "name": "sqlmap", "description": "SQL injection",
            "category": "Web", "rating_count": 0
        }
    ])
}

/// Apply the next `n` async results to the app, in whatever order the
/// fetches settled.
async fn settle(app: &mut App, rx: &mut UnboundedReceiver<AppMessage>, n: usize) {
    for _ in 0..n {
        let msg = timeout(Duration::from_secs(5), rx.recv())
            .await
            .expect("timed out waiting for app message")
            .expect("message channel closed");
        app.handle_message(msg);
    }
}

fn app_for(server: &MockServer) -> (App, UnboundedReceiver<AppMessage>) {
    let mut app = App::new(CatalogClient::with_url(&server.uri()));
    let rx = app.message_rx.take().unwrap();
    (app, rx)
}

#[tokio::test]
async fn reload_settles_all_three_fetches() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/tools"))
        .respond_with(ResponseTemplate::new(200).set_body_json(summaries_json()))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/categories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!(["Recon", "Web"])))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/stats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "total_tools": 2, "total_ratings": 2, "categories": 2, "average_rating": 4.5
        })))
        .mount(&mock_server)
        .await;

    let (mut app, mut rx) = app_for(&mock_server);
    app.reload_listing();
    assert!(app.listing.is_loading());

    settle(&mut app, &mut rx, 3).await;

    assert!(!app.listing.is_loading());
    assert_eq!(app.listing.tools.len(), 2);
    assert_eq!(app.listing.categories, vec!["Recon".to_string(), "Web".to_string()]);
    assert_eq!(app.listing.stats.as_ref().unwrap().total_tools, 2);
}

#[tokio::test]
async fn stats_failure_does_not_block_the_grid() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/tools"))
        .respond_with(ResponseTemplate::new(200).set_body_json(summaries_json()))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/categories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!(["Recon"])))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/stats"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&mock_server)
        .await;

    let (mut app, mut rx) = app_for(&mock_server);
    app.reload_listing();
    settle(&mut app, &mut rx, 3).await;

    // Grid and categories render; only the stats banner stays empty.
    assert!(!app.listing.is_loading());
    assert_eq!(app.listing.tools.len(), 2);
    assert_eq!(app.listing.categories.len(), 1);
    assert!(app.listing.stats.is_none());
}

#[tokio::test]
async fn blank_search_is_omitted_from_the_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/tools"))
        .and(query_param_is_missing("search"))
        .and(query_param_is_missing("language"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/categories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/stats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "total_tools": 0, "total_ratings": 0, "categories": 0
        })))
        .mount(&mock_server)
        .await;

    let (mut app, mut rx) = app_for(&mock_server);
    app.listing.filters.search = String::new();
    app.listing.filters.language = String::new();
    app.reload_listing();
    settle(&mut app, &mut rx, 3).await;
    // The expect(1) on the mock verifies the query shape on drop.
}

#[tokio::test]
async fn typed_search_is_forwarded() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/tools"))
        .and(query_param("search", "map"))
        .respond_with(ResponseTemplate::new(200).set_body_json(summaries_json()))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/categories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/stats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "total_tools": 2, "total_ratings": 0, "categories": 2
        })))
        .mount(&mock_server)
        .await;

    let (mut app, mut rx) = app_for(&mock_server);
    app.listing.filters.search = "map".into();
    app.reload_listing();
    settle(&mut app, &mut rx, 3).await;
    assert_eq!(app.listing.tools.len(), 2);
}

#[tokio::test]
async fn empty_result_renders_distinct_from_loading() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/tools"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/categories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/stats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "total_tools": 0, "total_ratings": 0, "categories": 0
        })))
        .mount(&mock_server)
        .await;

    let (mut app, mut rx) = app_for(&mock_server);
    assert!(!app.listing.is_empty_result());

    app.reload_listing();
    assert!(app.listing.is_loading());
    assert!(!app.listing.is_empty_result());

    settle(&mut app, &mut rx, 3).await;
    assert!(app.listing.is_empty_result());
}
