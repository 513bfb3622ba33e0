use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ItemRequestError {
    #[error("Item request not found: {0}")]
    NotFound(i32),

    #[error("User not found: {0}")]
    UserNotFound(i32),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

pub type ItemRequestResult<T> = Result<T, ItemRequestError>;

impl From<ItemRequestError> for AppError {
    fn from(err: ItemRequestError) -> Self {
        match err {
            ItemRequestError::NotFound(id) => {
                AppError::NotFound(format!("Request with id {} not found", id))
            }
            ItemRequestError::UserNotFound(id) => {
                AppError::NotFound(format!("User with id {} not found", id))
            }
            ItemRequestError::Validation(msg) => AppError::BadRequest(msg),
            ItemRequestError::Database(e) => AppError::Database(e),
        }
    }
}

impl IntoResponse for ItemRequestError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
