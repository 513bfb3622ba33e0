//! End-to-end scenario over the assembled server routes
//!
//! Three users share one item: A owns it, B books and reviews it, C is a
//! stranger. Runs on in-memory SQLite with a clock the test moves forward.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::TimeDelta;
use core_config::{Environment, app_info, server::ServerConfig};
use database::postgres::PostgresConfig;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use shareit_server::{AppState, Config, api};
use std::sync::Arc;
use test_utils::{MutableClock, TestDatabase, reference_time};
use tower::ServiceExt;

struct Server {
    app: Router,
    clock: Arc<MutableClock>,
    _db: TestDatabase,
}

impl Server {
    async fn start() -> Self {
        let db = TestDatabase::new().await;
        let clock = Arc::new(MutableClock::at(reference_time()));
        let state = AppState {
            config: Config {
                app: app_info!(),
                database: PostgresConfig::new("sqlite::memory:"),
                server: ServerConfig::default(),
                environment: Environment::Development,
            },
            db: db.connection(),
            clock: clock.clone(),
        };

        let app = api::routes(&state).merge(api::ready_router(state));
        Self {
            app,
            clock,
            _db: db,
        }
    }

    async fn call(
        &self,
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

        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }

    async fn create_user(&self, name: &str) -> i32 {
        let (status, body) = self
            .call(
                "POST",
                "/users",
                None,
                Some(json!({
                    "name": name,
                    "email": format!("{}@shareit.test", name.to_lowercase()),
                })),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        body["id"].as_i64().unwrap() as i32
    }
}

#[tokio::test]
async fn test_share_book_approve_and_comment() {
    let server = Server::start().await;
    let a = server.create_user("A").await;
    let b = server.create_user("B").await;
    let c = server.create_user("C").await;

    let (status, item) = server
        .call(
            "POST",
            "/items",
            Some(a),
            Some(json!({"name": "Drill", "description": "Cordless drill", "available": true})),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    let item_id = item["id"].as_i64().unwrap();

    let (status, booking) = server
        .call(
            "POST",
            "/bookings",
            Some(b),
            Some(json!({
                "itemId": item_id,
                "start": "2030-01-01T13:00:00",
                "end": "2030-01-01T14:00:00"
            })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(booking["status"], "WAITING");
    assert_eq!(booking["booker"]["id"], b);
    let booking_id = booking["id"].as_i64().unwrap();

    let approve = format!("/bookings/{}?approved=true", booking_id);
    let (status, approved) = server.call("PATCH", &approve, Some(a), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(approved["status"], "APPROVED");

    let (status, _) = server.call("PATCH", &approve, Some(a), None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // availability is left as the owner set it
    let item_uri = format!("/items/{}", item_id);
    let (_, owner_view) = server.call("GET", &item_uri, Some(a), None).await;
    assert_eq!(owner_view["available"], true);
    assert_eq!(owner_view["nextBooking"]["id"], booking_id);
    assert_eq!(owner_view["nextBooking"]["bookerId"], b);
    assert_eq!(owner_view["lastBooking"], Value::Null);

    let (status, stranger_view) = server.call("GET", &item_uri, Some(c), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stranger_view["nextBooking"], Value::Null);
    assert_eq!(stranger_view["lastBooking"], Value::Null);

    let (status, _) = server.call("GET", &format!("/bookings/{}", booking_id), Some(c), None).await;
    assert_eq!(status, StatusCode::CONFLICT);

    server.clock.advance(TimeDelta::hours(3));

    let comment_uri = format!("/items/{}/comment", item_id);
    let (status, comment) = server
        .call("POST", &comment_uri, Some(b), Some(json!({"text": "Worked great"})))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(comment["authorName"], "B");
    assert_eq!(comment["text"], "Worked great");

    let (status, _) = server
        .call("POST", &comment_uri, Some(c), Some(json!({"text": "Never used it"})))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, owner_view) = server.call("GET", &item_uri, Some(a), None).await;
    assert_eq!(owner_view["lastBooking"]["id"], booking_id);
    assert_eq!(owner_view["nextBooking"], Value::Null);
    assert_eq!(owner_view["comments"].as_array().unwrap().len(), 1);

    let (status, past) = server.call("GET", "/bookings?state=PAST", Some(b), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(past.as_array().unwrap().len(), 1);

    let (status, owned) = server.call("GET", "/bookings/owner", Some(a), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(owned[0]["id"], booking_id);
}

#[tokio::test]
async fn test_request_answered_by_item() {
    let server = Server::start().await;
    let a = server.create_user("A").await;
    let b = server.create_user("B").await;

    let (status, request) = server
        .call("POST", "/requests", Some(b), Some(json!({"description": "Need a ladder"})))
        .await;
    assert_eq!(status, StatusCode::OK);
    let request_id = request["id"].as_i64().unwrap();

    let (status, _) = server
        .call(
            "POST",
            "/items",
            Some(a),
            Some(json!({
                "name": "Ladder",
                "description": "Three metres",
                "available": true,
                "requestId": request_id
            })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let (_, own) = server.call("GET", "/requests", Some(b), None).await;
    assert_eq!(own[0]["items"][0]["name"], "Ladder");

    let (_, others) = server.call("GET", "/requests/all", Some(a), None).await;
    assert_eq!(others[0]["id"], request_id);

    let (_, search) = server.call("GET", "/items/search?text=LADDER", None, None).await;
    assert_eq!(search.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_deleted_user_is_gone() {
    let server = Server::start().await;
    let c = server.create_user("C").await;

    let uri = format!("/users/{}", c);
    let (status, body) = server.call("DELETE", &uri, None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::Null);

    let (status, body) = server.call("GET", &uri, None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], format!("User with id {} not found", c));

    let (status, _) = server.call("DELETE", &uri, None, None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_ready_pings_database() {
    let server = Server::start().await;

    let (status, body) = server.call("GET", "/ready", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ready");
    assert_eq!(body["database"], "connected");
}
