//! Caller identity taken from the `X-Sharer-User-Id` header.
//!
//! The id is trusted as sent; there is no authentication behind it.

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, OptionalFromRequestParts},
    http::request::Parts,
    response::{IntoResponse, Response},
};

pub const SHARER_USER_ID_HEADER: &str = "X-Sharer-User-Id";

/// Required caller id. Missing or non-positive values are rejected with 400.
///
/// Extract `Option<SharerUserId>` where the header may be absent; a header that is
/// present but malformed is still rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SharerUserId(pub i32);

fn parse_header(parts: &Parts) -> Result<Option<i32>, AppError> {
    let Some(value) = parts.headers.get(SHARER_USER_ID_HEADER) else {
        return Ok(None);
    };

    let raw = value
        .to_str()
        .map_err(|_| AppError::BadRequest(format!("Invalid {} header", SHARER_USER_ID_HEADER)))?;

    match raw.trim().parse::<i32>() {
        Ok(id) if id > 0 => Ok(Some(id)),
        _ => Err(AppError::BadRequest(format!(
            "Invalid {} header: {}",
            SHARER_USER_ID_HEADER, raw
        ))),
    }
}

impl<S> FromRequestParts<S> for SharerUserId
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        match parse_header(parts) {
            Ok(Some(id)) => Ok(SharerUserId(id)),
            Ok(None) => Err(AppError::BadRequest(format!(
                "Missing {} header",
                SHARER_USER_ID_HEADER
            ))
            .into_response()),
            Err(e) => Err(e.into_response()),
        }
    }
}

impl<S> OptionalFromRequestParts<S> for SharerUserId
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> Result<Option<Self>, Self::Rejection> {
        parse_header(parts)
            .map(|id| id.map(SharerUserId))
            .map_err(IntoResponse::into_response)
    }
}
