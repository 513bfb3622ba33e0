use async_trait::async_trait;
use chrono::NaiveDateTime;
use database::PageRequest;

use crate::error::ItemResult;
use crate::models::{BookingSummary, Comment, CreateItem, Item};

/// Repository trait for items and their comments
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    async fn user_exists(&self, user_id: i32) -> ItemResult<bool>;

    async fn request_exists(&self, request_id: i32) -> ItemResult<bool>;

    async fn create(&self, owner_id: i32, input: CreateItem) -> ItemResult<Item>;

    async fn get_by_id(&self, id: i32) -> ItemResult<Option<Item>>;

    /// Persist name, description and availability of `item`
    async fn update(&self, item: Item) -> ItemResult<Item>;

    /// Owner's items ordered by id
    async fn list_by_owner(&self, owner_id: i32, page: PageRequest) -> ItemResult<Vec<Item>>;

    /// Available items whose name or description contains `text`, ignoring case, ordered by id
    async fn search(&self, text: String, page: PageRequest) -> ItemResult<Vec<Item>>;

    /// Approved bookings of all given items in one query
    async fn approved_bookings(&self, item_ids: Vec<i32>) -> ItemResult<Vec<BookingSummary>>;

    /// Comments of all given items in one query, oldest first
    async fn comments(&self, item_ids: Vec<i32>) -> ItemResult<Vec<Comment>>;

    /// Whether `user_id` has an approved booking of `item_id` that ended before `now`
    async fn has_finished_booking(
        &self,
        user_id: i32,
        item_id: i32,
        now: NaiveDateTime,
    ) -> ItemResult<bool>;

    async fn create_comment(
        &self,
        item_id: i32,
        author_id: i32,
        text: String,
        created: NaiveDateTime,
    ) -> ItemResult<Comment>;
}
