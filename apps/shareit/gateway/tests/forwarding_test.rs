//! Gateway against a stub ShareIt server
//!
//! The stub records every request it receives, so each test can assert both
//! what the gateway answered and what (if anything) reached the server.

use axum::body::{Body, Bytes};
use axum::extract::State;
use axum::http::{HeaderMap, Method, Request, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use core_config::{Environment, app_info, server::ServerConfig};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use shareit_gateway::{AppState, Config, ShareItClient, UpstreamConfig, api};
use std::sync::{Arc, Mutex};
use test_utils::{MutableClock, reference_time};
use tokio::net::TcpListener;
use tower::ServiceExt;

#[derive(Debug, Clone)]
struct Seen {
    method: Method,
    uri: String,
    user: Option<String>,
    body: Value,
}

#[derive(Clone, Default)]
struct Recorder(Arc<Mutex<Vec<Seen>>>);

impl Recorder {
    fn seen(&self) -> Vec<Seen> {
        self.0.lock().unwrap().clone()
    }
}

async fn stub(
    State(recorder): State<Recorder>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    recorder.0.lock().unwrap().push(Seen {
        method: method.clone(),
        uri: uri.to_string(),
        user: headers
            .get("X-Sharer-User-Id")
            .map(|v| v.to_str().unwrap().to_string()),
        body: serde_json::from_slice(&body).unwrap_or(Value::Null),
    });

    if method == Method::DELETE {
        return StatusCode::OK.into_response();
    }
    match uri.path() {
        "/users/99" => (
            StatusCode::NOT_FOUND,
            Json(json!({"error": "User with id 99 not found"})),
        )
            .into_response(),
        "/health" => Json(json!({"status": "healthy"})).into_response(),
        path => Json(json!({"path": path})).into_response(),
    }
}

async fn spawn_stub() -> (String, Recorder) {
    let recorder = Recorder::default();
    let app = Router::new().fallback(stub).with_state(recorder.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}", addr), recorder)
}

/// Address nothing listens on
async fn closed_address() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

fn gateway(upstream_url: &str) -> Router {
    let upstream = UpstreamConfig {
        url: upstream_url.to_string(),
        timeout_secs: 2,
    };
    let state = AppState {
        config: Config {
            app: app_info!(),
            server: ServerConfig::default(),
            upstream: upstream.clone(),
            environment: Environment::Development,
        },
        client: ShareItClient::new(&upstream).unwrap(),
        clock: Arc::new(MutableClock::at(reference_time())),
    };

    api::routes(&state).merge(api::ready_router(state))
}

async fn call(
    app: &Router,
    method: &str,
    uri: &str,
    user_id: Option<i32>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(id) = user_id {
        builder = builder.header("X-Sharer-User-Id", id.to_string());
    }
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

#[tokio::test]
async fn test_valid_user_is_forwarded() {
    let (url, recorder) = spawn_stub().await;
    let app = gateway(&url);

    let (status, body) = call(
        &app,
        "POST",
        "/users",
        None,
        Some(json!({"name": "Alice", "email": "alice@shareit.test"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["path"], "/users");

    let seen = recorder.seen();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].method, Method::POST);
    assert_eq!(seen[0].body["email"], "alice@shareit.test");
    assert_eq!(seen[0].user, None);
}

#[tokio::test]
async fn test_invalid_user_stops_at_gateway() {
    let (url, recorder) = spawn_stub().await;
    let app = gateway(&url);

    let (status, body) = call(
        &app,
        "POST",
        "/users",
        None,
        Some(json!({"name": " ", "email": "alice"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("email"));
    assert!(recorder.seen().is_empty());
}

#[tokio::test]
async fn test_item_requires_available_flag() {
    let (url, recorder) = spawn_stub().await;
    let app = gateway(&url);

    let (status, _) = call(
        &app,
        "POST",
        "/items",
        Some(1),
        Some(json!({"name": "Drill", "description": "Cordless"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(recorder.seen().is_empty());
}

#[tokio::test]
async fn test_blank_search_answers_empty_list() {
    let (url, recorder) = spawn_stub().await;
    let app = gateway(&url);

    let (status, body) = call(&app, "GET", "/items/search?text=%20%20", None, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
    assert!(recorder.seen().is_empty());
}

#[tokio::test]
async fn test_search_forwards_text_and_page() {
    let (url, recorder) = spawn_stub().await;
    let app = gateway(&url);

    let (status, _) = call(&app, "GET", "/items/search?text=drill&size=5", Some(3), None).await;

    assert_eq!(status, StatusCode::OK);
    let seen = recorder.seen();
    assert_eq!(seen[0].uri, "/items/search?text=drill&from=0&size=5");
    assert_eq!(seen[0].user.as_deref(), Some("3"));
}

#[tokio::test]
async fn test_booking_dates_checked_against_clock() {
    let (url, recorder) = spawn_stub().await;
    let app = gateway(&url);

    // clock reads 2030-01-01T12:00:00
    let (status, body) = call(
        &app,
        "POST",
        "/bookings",
        Some(2),
        Some(json!({"itemId": 1, "start": "2030-01-01T11:00:00", "end": "2030-01-01T14:00:00"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid booking dates");

    let (status, _) = call(
        &app,
        "POST",
        "/bookings",
        Some(2),
        Some(json!({"itemId": 1, "start": "2030-01-01T14:00:00", "end": "2030-01-01T14:00:00"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(recorder.seen().is_empty());

    let (status, _) = call(
        &app,
        "POST",
        "/bookings",
        Some(2),
        Some(json!({"itemId": 1, "start": "2030-01-01T13:00:00", "end": "2030-01-01T14:00:00"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let seen = recorder.seen();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].body["itemId"], 1);
    assert_eq!(seen[0].user.as_deref(), Some("2"));
}

#[tokio::test]
async fn test_unknown_state_rejected() {
    let (url, recorder) = spawn_stub().await;
    let app = gateway(&url);

    let (status, body) = call(
        &app,
        "GET",
        "/bookings?state=UNSUPPORTED_STATUS",
        Some(1),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Unknown state: UNSUPPORTED_STATUS");
    assert!(recorder.seen().is_empty());
}

#[tokio::test]
async fn test_owner_listing_query_normalized() {
    let (url, recorder) = spawn_stub().await;
    let app = gateway(&url);

    let uri = "/bookings/owner?state=current&size=5";
    let (status, _) = call(&app, "GET", uri, Some(1), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        recorder.seen()[0].uri,
        "/bookings/owner?state=CURRENT&from=0&size=5"
    );
}

#[tokio::test]
async fn test_approval_flag_forwarded() {
    let (url, recorder) = spawn_stub().await;
    let app = gateway(&url);

    let (status, _) = call(&app, "PATCH", "/bookings/4?approved=false", Some(1), None).await;

    assert_eq!(status, StatusCode::OK);
    let seen = recorder.seen();
    assert_eq!(seen[0].method, Method::PATCH);
    assert_eq!(seen[0].uri, "/bookings/4?approved=false");
}

#[tokio::test]
async fn test_caller_and_paging_checked() {
    let (url, recorder) = spawn_stub().await;
    let app = gateway(&url);

    let (status, _) = call(&app, "GET", "/items", None, None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = call(&app, "GET", "/requests/all?from=-1", Some(1), None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = call(&app, "GET", "/requests/all?size=0", Some(1), None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = call(&app, "GET", "/requests/0", Some(1), None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    assert!(recorder.seen().is_empty());
}

#[tokio::test]
async fn test_upstream_status_and_body_relayed() {
    let (url, _) = spawn_stub().await;
    let app = gateway(&url);

    let (status, body) = call(&app, "GET", "/users/99", None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "User with id 99 not found");

    let (status, body) = call(&app, "DELETE", "/users/99", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::Null);
}

#[tokio::test]
async fn test_unreachable_server_is_503() {
    let app = gateway(&closed_address().await);

    let (status, body) = call(&app, "GET", "/users", None, None).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert!(
        body["error"]
            .as_str()
            .unwrap()
            .starts_with("ShareIt server unavailable")
    );

    let (status, body) = call(&app, "GET", "/ready", None, None).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["shareit_server"], "disconnected");
}

#[tokio::test]
async fn test_ready_when_server_healthy() {
    let (url, _) = spawn_stub().await;
    let app = gateway(&url);

    let (status, body) = call(&app, "GET", "/ready", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ready");
}
