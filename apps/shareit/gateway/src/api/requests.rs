use axum::{Router, extract::State, routing::get};
use axum_helpers::{IdPath, PageParams, SharerUserId, ValidatedJson, ValidatedQuery};
use domain_requests::NewItemRequest;
use tracing::info;

use super::page_query;
use crate::client::UpstreamResponse;
use crate::error::GatewayResult;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_own).post(create_request))
        .route("/all", get(list_others))
        .route("/{id}", get(get_request))
}

async fn create_request(
    State(state): State<AppState>,
    SharerUserId(user_id): SharerUserId,
    ValidatedJson(input): ValidatedJson<NewItemRequest>,
) -> GatewayResult<UpstreamResponse> {
    info!(user_id, "Creating item request");
    state.client.post("/requests", Some(user_id), &input).await
}

async fn list_own(
    State(state): State<AppState>,
    SharerUserId(user_id): SharerUserId,
) -> GatewayResult<UpstreamResponse> {
    state.client.get("/requests", Some(user_id), &[]).await
}

async fn list_others(
    State(state): State<AppState>,
    SharerUserId(user_id): SharerUserId,
    ValidatedQuery(page): ValidatedQuery<PageParams>,
) -> GatewayResult<UpstreamResponse> {
    state
        .client
        .get("/requests/all", Some(user_id), &page_query(&page))
        .await
}

async fn get_request(
    State(state): State<AppState>,
    SharerUserId(user_id): SharerUserId,
    IdPath(id): IdPath,
) -> GatewayResult<UpstreamResponse> {
    state
        .client
        .get(&format!("/requests/{}", id), Some(user_id), &[])
        .await
}
