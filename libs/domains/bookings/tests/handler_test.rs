//! Handler tests for the Bookings domain
//!
//! Exercise the bookings router on its own: caller header, query parsing,
//! JSON shapes and status codes.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_bookings::*;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use std::sync::Arc;
use test_utils::{MutableClock, TestDatabase, factory, reference_time};
use tower::ServiceExt;

async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn app(db: &TestDatabase) -> axum::Router {
    let clock = Arc::new(MutableClock::at(reference_time()));
    handlers::router(BookingService::new(PgBookingRepository::new(db.connection()), clock))
}

fn request(method: &str, uri: &str, user_id: i32, body: Option<Value>) -> Request<Body> {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("X-Sharer-User-Id", user_id.to_string());
    match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

#[tokio::test]
async fn test_create_then_approve() {
    let db = TestDatabase::new().await;
    let owner = factory::create_user(&db.connection).await.unwrap();
    let booker = factory::create_user(&db.connection).await.unwrap();
    let item = factory::create_item(&db.connection, owner.id).await.unwrap();

    let response = app(&db)
        .oneshot(request(
            "POST",
            "/",
            booker.id,
            Some(json!({
                "itemId": item.id,
                "start": "2030-01-02T10:00:00",
                "end": "2030-01-03T10:00:00"
            })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["status"], "WAITING");
    assert_eq!(body["booker"]["id"], booker.id);
    assert_eq!(body["item"]["id"], item.id);
    let booking_id = body["id"].as_i64().unwrap();

    let response = app(&db)
        .oneshot(request(
            "PATCH",
            &format!("/{}?approved=true", booking_id),
            owner.id,
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["status"], "APPROVED");

    let response = app(&db)
        .oneshot(request(
            "PATCH",
            &format!("/{}?approved=false", booking_id),
            owner.id,
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_in_the_past_returns_400() {
    let db = TestDatabase::new().await;
    let owner = factory::create_user(&db.connection).await.unwrap();
    let booker = factory::create_user(&db.connection).await.unwrap();
    let item = factory::create_item(&db.connection, owner.id).await.unwrap();

    let response = app(&db)
        .oneshot(request(
            "POST",
            "/",
            booker.id,
            Some(json!({
                "itemId": item.id,
                "start": "2029-12-31T10:00:00",
                "end": "2030-01-03T10:00:00"
            })),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["error"], "invalid booking dates");
}

#[tokio::test]
async fn test_unknown_state_returns_400() {
    let db = TestDatabase::new().await;
    let booker = factory::create_user(&db.connection).await.unwrap();

    for uri in ["/?state=UNSUPPORTED_STATUS", "/owner?state=UNSUPPORTED_STATUS"] {
        let response = app(&db)
            .oneshot(request("GET", uri, booker.id, None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = json_body(response.into_body()).await;
        assert_eq!(body["error"], "Unknown state: UNSUPPORTED_STATUS");
    }
}

#[tokio::test]
async fn test_list_defaults_to_all() {
    let db = TestDatabase::new().await;
    let owner = factory::create_user(&db.connection).await.unwrap();
    let booker = factory::create_user(&db.connection).await.unwrap();
    let item = factory::create_item(&db.connection, owner.id).await.unwrap();
    factory::create_booking(&db.connection, item.id, booker.id)
        .await
        .unwrap();

    let response = app(&db)
        .oneshot(request("GET", "/", booker.id, None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bookings: Vec<Booking> = json_body(response.into_body()).await;
    assert_eq!(bookings.len(), 1);

    let response = app(&db)
        .oneshot(request("GET", "/owner?state=waiting&from=0&size=1", owner.id, None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bookings: Vec<Booking> = json_body(response.into_body()).await;
    assert_eq!(bookings.len(), 1);
}

#[tokio::test]
async fn test_missing_approved_flag_returns_400() {
    let db = TestDatabase::new().await;
    let owner = factory::create_user(&db.connection).await.unwrap();

    let response = app(&db)
        .oneshot(request("PATCH", "/1", owner.id, None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unknown_booking_returns_404() {
    let db = TestDatabase::new().await;
    let user = factory::create_user(&db.connection).await.unwrap();

    let response = app(&db)
        .oneshot(request("GET", "/999", user.id, None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
