//! HTTP API integration tests for the feed server.
//!
//! Router-level tests drive the full middleware stack via `oneshot`;
//! the end-to-end test binds a real listener and uses a real HTTP client.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use beacon_feed::{api, fixtures::FixtureSet, state::AppState};
use beacon_types::{NotificationCounts, Todo};
use tower::ServiceExt;

const BODY_LIMIT: usize = 64 * 1024;

fn test_router() -> Router {
    api::create_router(AppState::new(FixtureSet::built_in(), None))
}

async fn get(router: Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), BODY_LIMIT)
        .await
        .unwrap();
    (status, body.to_vec())
}

#[tokio::test]
async fn root_returns_the_greeting() {
    let (status, body) = get(test_router(), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"Hello World!");
}

#[tokio::test]
async fn notifications_returns_the_fixed_record() {
    let (status, body) = get(test_router(), "/notifications").await;
    assert_eq!(status, StatusCode::OK);

    let counts: NotificationCounts = serde_json::from_slice(&body).unwrap();
    assert_eq!(
        counts,
        NotificationCounts {
            network: 3,
            jobs: 6,
            messaging: 1,
            notifications: 0,
        }
    );
}

#[tokio::test]
async fn every_valid_todo_id_returns_its_record() {
    let fixtures = FixtureSet::built_in();
    for raw in 1..=fixtures.todo_count() as u32 {
        let (status, body) = get(test_router(), &format!("/todos/{raw}")).await;
        assert_eq!(status, StatusCode::OK, "todo {raw} should be served");

        let todo: Todo = serde_json::from_slice(&body).unwrap();
        assert_eq!(todo.id.get(), raw);
        assert!(!todo.title.is_empty());
    }
}

#[tokio::test]
async fn out_of_range_todo_id_is_not_found() {
    let (status, body) = get(test_router(), "/todos/999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let problem: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(problem["code"], "todo_not_found");
    assert!(problem["request_id"].is_string());
}

#[tokio::test]
async fn malformed_todo_ids_are_rejected() {
    for bad in ["0", "-1", "abc", "1.5", "4294967296"] {
        let (status, body) = get(test_router(), &format!("/todos/{bad}")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "id {bad:?} should be rejected");

        let problem: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(problem["code"], "invalid_todo_id");
    }
}

#[tokio::test]
async fn caller_request_id_is_echoed_in_errors() {
    let response = test_router()
        .oneshot(
            Request::builder()
                .uri("/todos/999")
                .header("x-request-id", "req-echo-1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = axum::body::to_bytes(response.into_body(), BODY_LIMIT)
        .await
        .unwrap();
    let problem: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(problem["request_id"], "req-echo-1");
}

#[tokio::test]
async fn healthz_reports_ok() {
    let (status, body) = get(test_router(), "/healthz").await;
    assert_eq!(status, StatusCode::OK);

    let health: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(health["status"], "ok");
    assert_eq!(health["service"], "feed");
}

#[tokio::test]
async fn cross_origin_reads_are_permitted() {
    let response = test_router()
        .oneshot(
            Request::builder()
                .uri("/notifications")
                .header(header::ORIGIN, "http://localhost:5173")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "*"
    );
}

#[tokio::test]
async fn end_to_end_over_a_real_listener() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, test_router()).await.unwrap();
    });

    let base = format!("http://{addr}");
    let client = reqwest::Client::new();

    let counts: NotificationCounts = client
        .get(format!("{base}/notifications"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(counts.total(), 10);

    let todo: Todo = client
        .get(format!("{base}/todos/2"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(todo.id.get(), 2);

    let missing = client
        .get(format!("{base}/todos/0"))
        .send()
        .await
        .unwrap();
    assert_eq!(missing.status(), reqwest::StatusCode::BAD_REQUEST);
}
