//! Reusable OpenAPI response types for the error statuses handlers return.

use super::ErrorResponse;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Bad Request",
    content_type = "application/json",
    example = json!({
        "error": "Request validation failed",
        "details": {"email": [{"code": "email", "message": null, "params": {"value": "not-an-email"}}]}
    })
)]
pub struct BadRequestResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Not Found",
    content_type = "application/json",
    example = json!({"error": "User with id 42 not found"})
)]
pub struct NotFoundResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Conflict",
    content_type = "application/json",
    example = json!({"error": "Item 7 is not available for booking"})
)]
pub struct ConflictResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error",
    content_type = "application/json",
    example = json!({"error": "A database error occurred"})
)]
pub struct InternalServerErrorResponse(pub ErrorResponse);
