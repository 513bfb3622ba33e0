//! Positive integer id from a single path parameter.

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
    response::{IntoResponse, Response},
};

/// Extractor for `/{id}` style path parameters.
///
/// Anything that is not a positive 32-bit integer is rejected with 400.
///
/// ```ignore
/// async fn get_booking(IdPath(booking_id): IdPath) -> String {
///     format!("Booking {}", booking_id)
/// }
///
/// let app = Router::new().route("/bookings/{booking_id}", get(get_booking));
/// ```
pub struct IdPath(pub i32);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::from(e).into_response())?;

        match raw.parse::<i32>() {
            Ok(id) if id > 0 => Ok(IdPath(id)),
            _ => Err(AppError::BadRequest(format!("Invalid id: {}", raw)).into_response()),
        }
    }
}
