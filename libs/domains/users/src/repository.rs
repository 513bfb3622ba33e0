use async_trait::async_trait;

use crate::error::UserResult;
use crate::models::{CreateUser, User};

/// Repository trait for User persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a user; a taken email yields `DuplicateEmail`
    async fn create(&self, input: CreateUser) -> UserResult<User>;

    async fn get_by_id(&self, id: i32) -> UserResult<Option<User>>;

    /// All users ordered by id
    async fn list(&self) -> UserResult<Vec<User>>;

    /// Persist every field of `user`; a taken email yields `DuplicateEmail`
    async fn update(&self, user: User) -> UserResult<User>;

    /// Returns whether a row was removed
    async fn delete(&self, id: i32) -> UserResult<bool>;
}
