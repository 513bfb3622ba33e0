use axum::{
    Json, Router,
    extract::State,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use axum_helpers::{IdPath, PageParams, SharerUserId, ValidatedJson, ValidatedQuery};
use domain_items::{CreateItem, Item, NewComment, SearchQuery, UpdateItem};
use tracing::info;

use super::page_query;
use crate::client::UpstreamResponse;
use crate::error::GatewayResult;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_items).post(create_item))
        .route("/search", get(search_items))
        .route("/{id}", get(get_item).patch(update_item))
        .route("/{id}/comment", post(add_comment))
}

async fn create_item(
    State(state): State<AppState>,
    SharerUserId(user_id): SharerUserId,
    ValidatedJson(input): ValidatedJson<CreateItem>,
) -> GatewayResult<UpstreamResponse> {
    info!(user_id, name = %input.name, "Creating item");
    state.client.post("/items", Some(user_id), &input).await
}

async fn update_item(
    State(state): State<AppState>,
    SharerUserId(user_id): SharerUserId,
    IdPath(id): IdPath,
    ValidatedJson(input): ValidatedJson<UpdateItem>,
) -> GatewayResult<UpstreamResponse> {
    info!(user_id, item_id = id, "Updating item");
    state
        .client
        .patch(&format!("/items/{}", id), Some(user_id), &[], Some(&input))
        .await
}

async fn get_item(
    State(state): State<AppState>,
    SharerUserId(user_id): SharerUserId,
    IdPath(id): IdPath,
) -> GatewayResult<UpstreamResponse> {
    state
        .client
        .get(&format!("/items/{}", id), Some(user_id), &[])
        .await
}

async fn list_items(
    State(state): State<AppState>,
    SharerUserId(user_id): SharerUserId,
    ValidatedQuery(page): ValidatedQuery<PageParams>,
) -> GatewayResult<UpstreamResponse> {
    state
        .client
        .get("/items", Some(user_id), &page_query(&page))
        .await
}

/// Blank text is answered here with an empty list
async fn search_items(
    State(state): State<AppState>,
    user: Option<SharerUserId>,
    ValidatedQuery(search): ValidatedQuery<SearchQuery>,
    ValidatedQuery(page): ValidatedQuery<PageParams>,
) -> GatewayResult<Response> {
    if search.text.trim().is_empty() {
        return Ok(Json(Vec::<Item>::new()).into_response());
    }

    let mut query = vec![("text", search.text)];
    query.extend(page_query(&page));

    let response = state
        .client
        .get("/items/search", user.map(|SharerUserId(id)| id), &query)
        .await?;
    Ok(response.into_response())
}

async fn add_comment(
    State(state): State<AppState>,
    SharerUserId(user_id): SharerUserId,
    IdPath(item_id): IdPath,
    ValidatedJson(input): ValidatedJson<NewComment>,
) -> GatewayResult<UpstreamResponse> {
    info!(user_id, item_id, "Adding comment");
    state
        .client
        .post(&format!("/items/{}/comment", item_id), Some(user_id), &input)
        .await
}
