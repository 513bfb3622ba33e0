use axum::{Router, extract::State, routing::get};
use axum_helpers::{IdPath, ValidatedJson};
use domain_users::{CreateUser, UpdateUser};
use tracing::info;

use crate::client::UpstreamResponse;
use crate::error::GatewayResult;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/{id}", get(get_user).patch(update_user).delete(delete_user))
}

async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateUser>,
) -> GatewayResult<UpstreamResponse> {
    info!(email = %input.email, "Creating user");
    state.client.post("/users", None, &input).await
}

async fn update_user(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidatedJson(input): ValidatedJson<UpdateUser>,
) -> GatewayResult<UpstreamResponse> {
    info!(user_id = id, "Updating user");
    state
        .client
        .patch(&format!("/users/{}", id), None, &[], Some(&input))
        .await
}

async fn get_user(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> GatewayResult<UpstreamResponse> {
    state.client.get(&format!("/users/{}", id), None, &[]).await
}

async fn list_users(State(state): State<AppState>) -> GatewayResult<UpstreamResponse> {
    state.client.get("/users", None, &[]).await
}

async fn delete_user(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> GatewayResult<UpstreamResponse> {
    info!(user_id = id, "Deleting user");
    state.client.delete(&format!("/users/{}", id), None).await
}
