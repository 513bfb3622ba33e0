use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BookingError {
    #[error("Booking not found: {0}")]
    NotFound(i32),

    #[error("User not found: {0}")]
    UserNotFound(i32),

    #[error("Item not found: {0}")]
    ItemNotFound(i32),

    /// Caller is not allowed to act on the booking or item
    #[error("{0}")]
    NotOwnerOrBooker(String),

    #[error("Item {0} is not available for booking")]
    AlreadyBooked(i32),

    #[error("Unknown state: {0}")]
    UnknownState(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

pub type BookingResult<T> = Result<T, BookingError>;

/// Ownership failures keep the 409 status clients already rely on
impl From<BookingError> for AppError {
    fn from(err: BookingError) -> Self {
        match err {
            BookingError::NotFound(id) => {
                AppError::NotFound(format!("Booking with id {} not found", id))
            }
            BookingError::UserNotFound(id) => {
                AppError::NotFound(format!("User with id {} not found", id))
            }
            BookingError::ItemNotFound(id) => {
                AppError::NotFound(format!("Item with id {} not found", id))
            }
            BookingError::NotOwnerOrBooker(msg) => AppError::Conflict(msg),
            BookingError::AlreadyBooked(id) => {
                AppError::Conflict(format!("Item {} is not available for booking", id))
            }
            BookingError::UnknownState(state) => {
                AppError::BadRequest(format!("Unknown state: {}", state))
            }
            BookingError::Validation(msg) => AppError::BadRequest(msg),
            BookingError::Database(e) => AppError::Database(e),
        }
    }
}

impl IntoResponse for BookingError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
