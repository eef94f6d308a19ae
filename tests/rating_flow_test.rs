//! Detail & rating workflow tests: pessimistic refresh after a rating is
//! accepted, form preservation on failure, and the terminal not-found
//! state.

use armory::api::CatalogClient;
use armory::app::{App, AppMessage, Screen};
use armory::state::DetailStatus;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::time::timeout;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn tool_before() -> serde_json::Value {
    serde_json::json!({
        "id": 1,
        "name": "nmap",
        "description": "Network scanner",
        "category": "Recon",
        "created_at": "2026-01-10T08:00:00Z",
        "updated_at": "2026-01-10T08:00:00Z",
        "average_rating": 4.5,
        "rating_count": 2,
        "ratings": [
            {"id": 10, "tool_id": 1, "user_name": "alice", "rating": 4,
             "created_at": "2026-02-01T12:00:00Z"},
            {"id": 11, "tool_id": 1, "user_name": "bob", "rating": 5,
             "created_at": "2026-02-02T12:00:00Z"}
        ]
    })
}

fn tool_after() -> serde_json::Value {
    serde_json::json!({
        "id": 1,
        "name": "nmap",
        "description": "Network scanner",
        "category": "Recon",
        "created_at": "2026-01-10T08:00:00Z",
        "updated_at": "2026-03-01T09:00:00Z",
        "average_rating": 4.0,
        "rating_count": 3,
        "ratings": [
            {"id": 10, "tool_id": 1, "user_name": "alice", "rating": 4,
             "created_at": "2026-02-01T12:00:00Z"},
            {"id": 11, "tool_id": 1, "user_name": "bob", "rating": 5,
             "created_at": "2026-02-02T12:00:00Z"},
            {"id": 12, "tool_id": 1, "user_name": "carol", "rating": 3,
             "created_at": "2026-03-01T09:00:00Z"}
        ]
    })
}

async fn next_message(app: &mut App, rx: &mut UnboundedReceiver<AppMessage>) {
    let msg = timeout(Duration::from_secs(5), rx.recv())
        .await
        .expect("timed out waiting for app message")
        .expect("message channel closed");
    app.handle_message(msg);
}

fn app_for(server: &MockServer) -> (App, UnboundedReceiver<AppMessage>) {
    let mut app = App::new(CatalogClient::with_url(&server.uri()));
    let rx = app.message_rx.take().unwrap();
    (app, rx)
}

#[tokio::test]
async fn accepted_rating_refetches_the_authoritative_aggregate() {
    let mock_server = MockServer::start().await;

    // First fetch returns the tool with ratings [4, 5]; after the new
    // rating lands the server serves the recomputed aggregate.
    Mock::given(method("GET"))
        .and(path("/api/tools/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(tool_before()))
        .up_to_n_times(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/tools/1/ratings"))
        .and(body_json(serde_json::json!({
            "user_name": "carol",
            "rating": 3
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "id": 12, "tool_id": 1, "user_name": "carol", "rating": 3,
            "created_at": "2026-03-01T09:00:00Z"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/tools/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(tool_after()))
        .mount(&mock_server)
        .await;

    let (mut app, mut rx) = app_for(&mock_server);
    app.open_detail(1);
    next_message(&mut app, &mut rx).await;

    let tool = app.detail.tool.as_ref().unwrap();
    assert_eq!(tool.rating_count, 2);
    assert_eq!(tool.average_rating, Some(4.5));

    app.detail.form.user_name = "carol".into();
    app.detail.form.rating = 3;
    app.submit_rating();

    // RatingAccepted clears the form and triggers the re-fetch.
    next_message(&mut app, &mut rx).await;
    assert!(app.detail.form.user_name.is_empty());
    assert_eq!(app.detail.status, DetailStatus::Loading);

    // The refreshed tool carries the server-recomputed aggregate.
    next_message(&mut app, &mut rx).await;
    let tool = app.detail.tool.as_ref().unwrap();
    assert_eq!(tool.rating_count, 3);
    assert_eq!(tool.average_rating, Some(4.0));
    assert_eq!(tool.ratings.len(), 3);
    assert_eq!(tool.ratings[2].user_name, "carol");
}

#[tokio::test]
async fn rejected_rating_preserves_the_form() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/tools/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(tool_before()))
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/tools/1/ratings"))
        .respond_with(
            ResponseTemplate::new(422)
                .set_body_json(serde_json::json!({"detail": "rating must be between 1 and 5"})),
        )
        .mount(&mock_server)
        .await;

    let (mut app, mut rx) = app_for(&mock_server);
    app.open_detail(1);
    next_message(&mut app, &mut rx).await;

    app.detail.form.user_name = "carol".into();
    app.detail.form.comment = "half finished thought".into();
    app.submit_rating();
    next_message(&mut app, &mut rx).await;

    // Entered values survive so the user can correct and retry.
    assert_eq!(app.detail.form.user_name, "carol");
    assert_eq!(app.detail.form.comment, "half finished thought");
    assert!(!app.detail.form.submitting);
    assert_eq!(
        app.detail.form.error.as_deref(),
        Some("rating must be between 1 and 5")
    );
}

#[tokio::test]
async fn blank_user_name_issues_no_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/tools/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(tool_before()))
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/tools/1/ratings"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&mock_server)
        .await;

    let (mut app, mut rx) = app_for(&mock_server);
    app.open_detail(1);
    next_message(&mut app, &mut rx).await;

    app.detail.form.user_name = "   ".into();
    app.submit_rating();

    assert!(!app.detail.form.submitting);
    assert_eq!(app.detail.form.error.as_deref(), Some("Your name is required"));
}

#[tokio::test]
async fn unknown_tool_renders_terminal_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/tools/999"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(serde_json::json!({"detail": "Tool not found"})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let (mut app, mut rx) = app_for(&mock_server);
    app.open_detail(999);
    assert_eq!(app.screen, Screen::Detail);

    next_message(&mut app, &mut rx).await;
    assert_eq!(app.detail.status, DetailStatus::NotFound);
    assert!(app.detail.tool.is_none());
    // Terminal state: exactly one fetch was attempted (expect(1) verifies
    // on drop).
}

#[tokio::test]
async fn transport_failure_marks_detail_failed() {
    let (mut app, mut rx) = {
        // Nothing listens on this port.
        let mut app = App::new(CatalogClient::with_url("http://127.0.0.1:1"));
        let rx = app.message_rx.take().unwrap();
        (app, rx)
    };
    app.open_detail(1);
    next_message(&mut app, &mut rx).await;
    assert!(matches!(app.detail.status, DetailStatus::Failed(_)));
}
