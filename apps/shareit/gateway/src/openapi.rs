use utoipa::OpenApi;

/// The gateway serves the server's contract unchanged, so it documents the
/// same domain paths.
#[derive(OpenApi)]
#[openapi(
    components(
        schemas(axum_helpers::ErrorResponse)
    ),
    info(
        title = "ShareIt Gateway",
        version = "0.1.0",
        description = "Validating front door of the ShareIt API"
    ),
    nest(
        (path = "/users", api = domain_users::handlers::ApiDoc),
        (path = "/items", api = domain_items::handlers::ApiDoc),
        (path = "/bookings", api = domain_bookings::handlers::ApiDoc),
        (path = "/requests", api = domain_requests::handlers::ApiDoc)
    )
)]
pub struct ApiDoc;
