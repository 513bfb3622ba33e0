use axum::{Router, extract::State, routing::get};
use axum_helpers::{IdPath, PageParams, SharerUserId, ValidatedJson, ValidatedQuery};
use domain_bookings::{ApprovalQuery, BookingState, NewBooking, StateQuery};
use tracing::{info, warn};

use super::page_query;
use crate::client::UpstreamResponse;
use crate::error::{GatewayError, GatewayResult};
use crate::state::AppState;

const INVALID_DATES: &str = "invalid booking dates";

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_for_booker).post(create_booking))
        .route("/owner", get(list_for_owner))
        .route("/{id}", get(get_booking).patch(approve_booking))
}

async fn create_booking(
    State(state): State<AppState>,
    SharerUserId(user_id): SharerUserId,
    ValidatedJson(input): ValidatedJson<NewBooking>,
) -> GatewayResult<UpstreamResponse> {
    let now = state.clock.utc().naive_utc();
    if !input.dates_valid(now) {
        warn!(user_id, start = ?input.start, end = ?input.end, "Rejected booking dates");
        return Err(GatewayError::Validation(INVALID_DATES.to_string()));
    }

    info!(user_id, item_id = ?input.item_id, "Creating booking");
    state.client.post("/bookings", Some(user_id), &input).await
}

async fn approve_booking(
    State(state): State<AppState>,
    SharerUserId(user_id): SharerUserId,
    IdPath(id): IdPath,
    ValidatedQuery(query): ValidatedQuery<ApprovalQuery>,
) -> GatewayResult<UpstreamResponse> {
    info!(user_id, booking_id = id, approved = query.approved, "Deciding on booking");
    state
        .client
        .patch::<()>(
            &format!("/bookings/{}", id),
            Some(user_id),
            &[("approved", query.approved.to_string())],
            None,
        )
        .await
}

async fn get_booking(
    State(state): State<AppState>,
    SharerUserId(user_id): SharerUserId,
    IdPath(id): IdPath,
) -> GatewayResult<UpstreamResponse> {
    state
        .client
        .get(&format!("/bookings/{}", id), Some(user_id), &[])
        .await
}

async fn list_for_booker(
    State(state): State<AppState>,
    SharerUserId(user_id): SharerUserId,
    ValidatedQuery(filter): ValidatedQuery<StateQuery>,
    ValidatedQuery(page): ValidatedQuery<PageParams>,
) -> GatewayResult<UpstreamResponse> {
    let query = listing_query(&filter, &page)?;
    state.client.get("/bookings", Some(user_id), &query).await
}

async fn list_for_owner(
    State(state): State<AppState>,
    SharerUserId(user_id): SharerUserId,
    ValidatedQuery(filter): ValidatedQuery<StateQuery>,
    ValidatedQuery(page): ValidatedQuery<PageParams>,
) -> GatewayResult<UpstreamResponse> {
    let query = listing_query(&filter, &page)?;
    state
        .client
        .get("/bookings/owner", Some(user_id), &query)
        .await
}

/// Normalized `state`, `from` and `size`; an unknown state never reaches the server
fn listing_query(
    filter: &StateQuery,
    page: &PageParams,
) -> GatewayResult<Vec<(&'static str, String)>> {
    let state = BookingState::parse(filter.state.as_deref())
        .map_err(|e| GatewayError::Validation(e.to_string()))?;

    let mut query = vec![("state", state.to_string())];
    query.extend(page_query(page));
    Ok(query)
}
