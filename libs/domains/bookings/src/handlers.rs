use axum::{Json, Router, extract::State, routing::get};
use axum_helpers::{
    IdPath, PageParams, SharerUserId, ValidatedJson, ValidatedQuery,
    errors::responses::{
        BadRequestResponse, ConflictResponse, InternalServerErrorResponse, NotFoundResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::BookingResult;
use crate::models::{
    ApprovalQuery, Booker, Booking, BookingItem, BookingState, NewBooking, StateQuery,
};
use crate::repository::BookingRepository;
use crate::service::BookingService;

const TAG: &str = "bookings";

/// OpenAPI documentation for Bookings API
#[derive(OpenApi)]
#[openapi(
    paths(create_booking, approve_booking, get_booking, list_for_booker, list_for_owner),
    components(
        schemas(Booking, Booker, BookingItem, BookingState, NewBooking, entity::BookingStatus),
        responses(
            BadRequestResponse,
            NotFoundResponse,
            ConflictResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = TAG, description = "Booking requests, approval and listings")
    )
)]
pub struct ApiDoc;

/// Create the bookings router, to be nested under `/bookings`
pub fn router<R: BookingRepository + 'static>(service: BookingService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_for_booker).post(create_booking))
        .route("/owner", get(list_for_owner))
        .route("/{id}", get(get_booking).patch(approve_booking))
        .with_state(shared_service)
}

/// Request a booking of someone else's item
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    params(
        ("X-Sharer-User-Id" = i32, Header, description = "Booker user ID")
    ),
    request_body = NewBooking,
    responses(
        (status = 200, description = "Booking created in WAITING status", body = Booking),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_booking<R: BookingRepository>(
    State(service): State<Arc<BookingService<R>>>,
    SharerUserId(user_id): SharerUserId,
    ValidatedJson(input): ValidatedJson<NewBooking>,
) -> BookingResult<Json<Booking>> {
    let booking = service.add_booking(user_id, input).await?;
    Ok(Json(booking))
}

/// Approve or reject a waiting booking of an owned item
#[utoipa::path(
    patch,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i32, Path, description = "Booking ID"),
        ("X-Sharer-User-Id" = i32, Header, description = "Item owner user ID"),
        ApprovalQuery
    ),
    responses(
        (status = 200, description = "Booking decided", body = Booking),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn approve_booking<R: BookingRepository>(
    State(service): State<Arc<BookingService<R>>>,
    IdPath(id): IdPath,
    SharerUserId(user_id): SharerUserId,
    ValidatedQuery(query): ValidatedQuery<ApprovalQuery>,
) -> BookingResult<Json<Booking>> {
    let booking = service.approve_booking(user_id, id, query.approved).await?;
    Ok(Json(booking))
}

/// Get a booking as its booker or as the item owner
#[utoipa::path(
    get,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i32, Path, description = "Booking ID"),
        ("X-Sharer-User-Id" = i32, Header, description = "Caller user ID")
    ),
    responses(
        (status = 200, description = "Booking found", body = Booking),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_booking<R: BookingRepository>(
    State(service): State<Arc<BookingService<R>>>,
    IdPath(id): IdPath,
    SharerUserId(user_id): SharerUserId,
) -> BookingResult<Json<Booking>> {
    let booking = service.get_booking(user_id, id).await?;
    Ok(Json(booking))
}

/// Bookings made by the caller, newest start first
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    params(
        ("X-Sharer-User-Id" = i32, Header, description = "Booker user ID"),
        StateQuery,
        PageParams
    ),
    responses(
        (status = 200, description = "Bookings matching the state", body = Vec<Booking>),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_for_booker<R: BookingRepository>(
    State(service): State<Arc<BookingService<R>>>,
    SharerUserId(user_id): SharerUserId,
    ValidatedQuery(query): ValidatedQuery<StateQuery>,
    ValidatedQuery(page): ValidatedQuery<PageParams>,
) -> BookingResult<Json<Vec<Booking>>> {
    let state = BookingState::parse(query.state.as_deref())?;
    let bookings = service.list_by_booker(user_id, state, page.page()).await?;
    Ok(Json(bookings))
}

/// Bookings of the caller's items, newest start first
#[utoipa::path(
    get,
    path = "/owner",
    tag = TAG,
    params(
        ("X-Sharer-User-Id" = i32, Header, description = "Owner user ID"),
        StateQuery,
        PageParams
    ),
    responses(
        (status = 200, description = "Bookings matching the state", body = Vec<Booking>),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_for_owner<R: BookingRepository>(
    State(service): State<Arc<BookingService<R>>>,
    SharerUserId(user_id): SharerUserId,
    ValidatedQuery(query): ValidatedQuery<StateQuery>,
    ValidatedQuery(page): ValidatedQuery<PageParams>,
) -> BookingResult<Json<Vec<Booking>>> {
    let state = BookingState::parse(query.state.as_deref())?;
    let bookings = service.list_by_owner(user_id, state, page.page()).await?;
    Ok(Json(bookings))
}
