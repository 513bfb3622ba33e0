use axum_helpers::errors::validation_summary;
use std::sync::Arc;
use validator::Validate;

use crate::error::{UserError, UserResult};
use crate::models::{CreateUser, UpdateUser, User};
use crate::repository::UserRepository;

/// Service layer for User business logic
#[derive(Clone)]
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    pub async fn create_user(&self, input: CreateUser) -> UserResult<User> {
        input
            .validate()
            .map_err(|e| UserError::Validation(validation_summary(&e)))?;

        self.repository.create(input).await
    }

    pub async fn get_user(&self, id: i32) -> UserResult<User> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id))
    }

    pub async fn list_users(&self) -> UserResult<Vec<User>> {
        self.repository.list().await
    }

    /// Apply the present fields of `input`; last writer wins
    pub async fn update_user(&self, id: i32, input: UpdateUser) -> UserResult<User> {
        input
            .validate()
            .map_err(|e| UserError::Validation(validation_summary(&e)))?;

        let mut user = self.get_user(id).await?;
        user.apply_update(input);

        self.repository.update(user).await
    }

    /// Idempotent: deleting an unknown id succeeds.
    /// Items, bookings, comments and requests of the user go with it.
    pub async fn delete_user(&self, id: i32) -> UserResult<()> {
        if !self.repository.delete(id).await? {
            tracing::debug!(user_id = id, "Delete of unknown user ignored");
        }
        Ok(())
    }
}
