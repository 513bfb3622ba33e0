use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ItemError {
    #[error("Item not found: {0}")]
    NotFound(i32),

    #[error("User not found: {0}")]
    UserNotFound(i32),

    #[error("Item request not found: {0}")]
    RequestNotFound(i32),

    #[error("User {user_id} does not own item {item_id}")]
    NotOwner { item_id: i32, user_id: i32 },

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

pub type ItemResult<T> = Result<T, ItemError>;

/// Ownership failures keep the 409 status clients already rely on
impl From<ItemError> for AppError {
    fn from(err: ItemError) -> Self {
        match err {
            ItemError::NotFound(id) => AppError::NotFound(format!("Item with id {} not found", id)),
            ItemError::UserNotFound(id) => {
                AppError::NotFound(format!("User with id {} not found", id))
            }
            ItemError::RequestNotFound(id) => {
                AppError::NotFound(format!("Request with id {} not found", id))
            }
            ItemError::NotOwner { item_id, user_id } => AppError::Conflict(format!(
                "User {} is not the owner of item {}",
                user_id, item_id
            )),
            ItemError::Validation(msg) => AppError::BadRequest(msg),
            ItemError::Database(e) => AppError::Database(e),
        }
    }
}

impl IntoResponse for ItemError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
