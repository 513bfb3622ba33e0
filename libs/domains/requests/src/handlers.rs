use axum::{Json, Router, extract::State, routing::get};
use axum_helpers::{
    IdPath, PageParams, SharerUserId, ValidatedJson, ValidatedQuery,
    errors::responses::{BadRequestResponse, InternalServerErrorResponse, NotFoundResponse},
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::ItemRequestResult;
use crate::models::{ItemRequest, NewItemRequest, OfferedItem};
use crate::repository::ItemRequestRepository;
use crate::service::ItemRequestService;

const TAG: &str = "requests";

/// OpenAPI documentation for Item Requests API
#[derive(OpenApi)]
#[openapi(
    paths(create_request, list_own_requests, list_other_requests, get_request),
    components(
        schemas(ItemRequest, NewItemRequest, OfferedItem),
        responses(BadRequestResponse, NotFoundResponse, InternalServerErrorResponse)
    ),
    tags(
        (name = TAG, description = "Requests for items nobody has listed yet")
    )
)]
pub struct ApiDoc;

/// Create the item requests router, to be nested under `/requests`
pub fn router<R: ItemRequestRepository + 'static>(service: ItemRequestService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_own_requests).post(create_request))
        .route("/all", get(list_other_requests))
        .route("/{id}", get(get_request))
        .with_state(shared_service)
}

/// Ask for an item
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    params(
        ("X-Sharer-User-Id" = i32, Header, description = "Requester user ID")
    ),
    request_body = NewItemRequest,
    responses(
        (status = 200, description = "Request created", body = ItemRequest),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_request<R: ItemRequestRepository>(
    State(service): State<Arc<ItemRequestService<R>>>,
    SharerUserId(user_id): SharerUserId,
    ValidatedJson(input): ValidatedJson<NewItemRequest>,
) -> ItemRequestResult<Json<ItemRequest>> {
    let request = service.add_request(user_id, input).await?;
    Ok(Json(request))
}

/// The caller's own requests with the items listed for them
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    params(
        ("X-Sharer-User-Id" = i32, Header, description = "Requester user ID")
    ),
    responses(
        (status = 200, description = "Own requests, newest first", body = Vec<ItemRequest>),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_own_requests<R: ItemRequestRepository>(
    State(service): State<Arc<ItemRequestService<R>>>,
    SharerUserId(user_id): SharerUserId,
) -> ItemRequestResult<Json<Vec<ItemRequest>>> {
    let requests = service.list_by_requester(user_id).await?;
    Ok(Json(requests))
}

/// Requests made by other users
#[utoipa::path(
    get,
    path = "/all",
    tag = TAG,
    params(
        ("X-Sharer-User-Id" = i32, Header, description = "Caller user ID"),
        PageParams
    ),
    responses(
        (status = 200, description = "Other users' requests, newest first", body = Vec<ItemRequest>),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_other_requests<R: ItemRequestRepository>(
    State(service): State<Arc<ItemRequestService<R>>>,
    SharerUserId(user_id): SharerUserId,
    ValidatedQuery(page): ValidatedQuery<PageParams>,
) -> ItemRequestResult<Json<Vec<ItemRequest>>> {
    let requests = service.list_others(user_id, page.page()).await?;
    Ok(Json(requests))
}

/// Get any request with the items listed for it
#[utoipa::path(
    get,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i32, Path, description = "Request ID"),
        ("X-Sharer-User-Id" = i32, Header, description = "Caller user ID")
    ),
    responses(
        (status = 200, description = "Request found", body = ItemRequest),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_request<R: ItemRequestRepository>(
    State(service): State<Arc<ItemRequestService<R>>>,
    IdPath(id): IdPath,
    SharerUserId(user_id): SharerUserId,
) -> ItemRequestResult<Json<ItemRequest>> {
    let request = service.get_request(user_id, id).await?;
    Ok(Json(request))
}
