use async_trait::async_trait;
use chrono::NaiveDateTime;
use database::PageRequest;

use crate::error::ItemRequestResult;
use crate::models::{ItemRequest, OfferedItem};

/// Repository trait for item requests.
///
/// Requests come back with an empty `items` list; the service attaches them.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRequestRepository: Send + Sync {
    async fn user_exists(&self, user_id: i32) -> ItemRequestResult<bool>;

    async fn create(
        &self,
        requester_id: i32,
        description: String,
        created: NaiveDateTime,
    ) -> ItemRequestResult<ItemRequest>;

    async fn get_by_id(&self, id: i32) -> ItemRequestResult<Option<ItemRequest>>;

    /// Requests made by `requester_id`, newest id first
    async fn list_by_requester(&self, requester_id: i32) -> ItemRequestResult<Vec<ItemRequest>>;

    /// Requests made by anyone but `user_id`, newest first
    async fn list_others(
        &self,
        user_id: i32,
        page: PageRequest,
    ) -> ItemRequestResult<Vec<ItemRequest>>;

    /// Items listed for any of the given requests, in one query
    async fn items_for(&self, request_ids: Vec<i32>) -> ItemRequestResult<Vec<OfferedItem>>;
}
