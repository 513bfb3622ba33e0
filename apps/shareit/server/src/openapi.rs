use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    components(
        schemas(axum_helpers::ErrorResponse)
    ),
    info(
        title = "ShareIt API",
        version = "0.1.0",
        description = "Item sharing: users, items, bookings, comments and item requests"
    ),
    nest(
        (path = "/users", api = domain_users::handlers::ApiDoc),
        (path = "/items", api = domain_items::handlers::ApiDoc),
        (path = "/bookings", api = domain_bookings::handlers::ApiDoc),
        (path = "/requests", api = domain_requests::handlers::ApiDoc)
    )
)]
pub struct ApiDoc;
