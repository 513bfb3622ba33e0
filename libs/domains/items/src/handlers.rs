use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};
use axum_helpers::{
    IdPath, PageParams, SharerUserId, ValidatedJson, ValidatedQuery,
    errors::responses::{
        BadRequestResponse, ConflictResponse, InternalServerErrorResponse, NotFoundResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::ItemResult;
use crate::models::{
    BookingSummary, Comment, CreateItem, Item, ItemView, NewComment, SearchQuery, UpdateItem,
};
use crate::repository::ItemRepository;
use crate::service::ItemService;

const TAG: &str = "items";

/// OpenAPI documentation for Items API
#[derive(OpenApi)]
#[openapi(
    paths(list_items, create_item, search_items, get_item, update_item, add_comment),
    components(
        schemas(Item, ItemView, BookingSummary, Comment, CreateItem, UpdateItem, NewComment),
        responses(
            BadRequestResponse,
            NotFoundResponse,
            ConflictResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = TAG, description = "Item listing, search and comments")
    )
)]
pub struct ApiDoc;

/// Create the items router, to be nested under `/items`
pub fn router<R: ItemRepository + 'static>(service: ItemService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_items).post(create_item))
        .route("/search", get(search_items))
        .route("/{id}", get(get_item).patch(update_item))
        .route("/{id}/comment", post(add_comment))
        .with_state(shared_service)
}

/// List the caller's items with booking summaries and comments
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    params(
        ("X-Sharer-User-Id" = i32, Header, description = "Caller user ID"),
        PageParams
    ),
    responses(
        (status = 200, description = "Caller's items ordered by id", body = Vec<ItemView>),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_items<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    SharerUserId(user_id): SharerUserId,
    ValidatedQuery(page): ValidatedQuery<PageParams>,
) -> ItemResult<Json<Vec<ItemView>>> {
    let items = service.list_by_owner(user_id, page.page()).await?;
    Ok(Json(items))
}

/// List a new item owned by the caller
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    params(
        ("X-Sharer-User-Id" = i32, Header, description = "Caller user ID")
    ),
    request_body = CreateItem,
    responses(
        (status = 200, description = "Item created", body = Item),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    SharerUserId(user_id): SharerUserId,
    ValidatedJson(input): ValidatedJson<CreateItem>,
) -> ItemResult<Json<Item>> {
    let item = service.add_item(user_id, input).await?;
    Ok(Json(item))
}

/// Search available items by name or description
///
/// The caller header is accepted but not required.
#[utoipa::path(
    get,
    path = "/search",
    tag = TAG,
    params(SearchQuery, PageParams),
    responses(
        (status = 200, description = "Matching available items ordered by id", body = Vec<Item>),
        (status = 400, response = BadRequestResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn search_items<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    caller: Option<SharerUserId>,
    ValidatedQuery(query): ValidatedQuery<SearchQuery>,
    ValidatedQuery(page): ValidatedQuery<PageParams>,
) -> ItemResult<Json<Vec<Item>>> {
    tracing::debug!(caller = ?caller.map(|c| c.0), text = %query.text, "Item search");
    let items = service.search(&query.text, page.page()).await?;
    Ok(Json(items))
}

/// Get an item; booking summaries are shown to its owner only
#[utoipa::path(
    get,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i32, Path, description = "Item ID"),
        ("X-Sharer-User-Id" = i32, Header, description = "Caller user ID")
    ),
    responses(
        (status = 200, description = "Item found", body = ItemView),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    IdPath(id): IdPath,
    SharerUserId(user_id): SharerUserId,
) -> ItemResult<Json<ItemView>> {
    let item = service.get_item(user_id, id).await?;
    Ok(Json(item))
}

/// Update name, description or availability of an owned item
#[utoipa::path(
    patch,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i32, Path, description = "Item ID"),
        ("X-Sharer-User-Id" = i32, Header, description = "Caller user ID")
    ),
    request_body = UpdateItem,
    responses(
        (status = 200, description = "Item updated", body = Item),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    IdPath(id): IdPath,
    SharerUserId(user_id): SharerUserId,
    ValidatedJson(input): ValidatedJson<UpdateItem>,
) -> ItemResult<Json<Item>> {
    let item = service.update_item(user_id, id, input).await?;
    Ok(Json(item))
}

/// Comment on an item after an approved booking of it has ended
#[utoipa::path(
    post,
    path = "/{id}/comment",
    tag = TAG,
    params(
        ("id" = i32, Path, description = "Item ID"),
        ("X-Sharer-User-Id" = i32, Header, description = "Caller user ID")
    ),
    request_body = NewComment,
    responses(
        (status = 200, description = "Comment added", body = Comment),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn add_comment<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    IdPath(id): IdPath,
    SharerUserId(user_id): SharerUserId,
    ValidatedJson(input): ValidatedJson<NewComment>,
) -> ItemResult<Json<Comment>> {
    let comment = service.add_comment(user_id, id, input).await?;
    Ok(Json(comment))
}
