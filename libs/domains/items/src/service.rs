use axum_helpers::errors::validation_summary;
use chrono::NaiveDateTime;
use database::PageRequest;
use mockable::Clock;
use std::collections::HashMap;
use std::sync::Arc;
use validator::Validate;

use crate::error::{ItemError, ItemResult};
use crate::models::{BookingSummary, Comment, CreateItem, Item, ItemView, NewComment, UpdateItem};
use crate::repository::ItemRepository;

/// Service layer for items and comments
#[derive(Clone)]
pub struct ItemService<R: ItemRepository> {
    repository: Arc<R>,
    clock: Arc<dyn Clock>,
}

fn group_by_item<T>(rows: Vec<T>, item_id: impl Fn(&T) -> i32) -> HashMap<i32, Vec<T>> {
    let mut grouped: HashMap<i32, Vec<T>> = HashMap::new();
    for row in rows {
        grouped.entry(item_id(&row)).or_default().push(row);
    }
    grouped
}

impl<R: ItemRepository> ItemService<R> {
    pub fn new(repository: R, clock: Arc<dyn Clock>) -> Self {
        Self {
            repository: Arc::new(repository),
            clock,
        }
    }

    fn now(&self) -> NaiveDateTime {
        self.clock.utc().naive_utc()
    }

    async fn ensure_user(&self, user_id: i32) -> ItemResult<()> {
        if self.repository.user_exists(user_id).await? {
            Ok(())
        } else {
            Err(ItemError::UserNotFound(user_id))
        }
    }

    async fn find_item(&self, item_id: i32) -> ItemResult<Item> {
        self.repository
            .get_by_id(item_id)
            .await?
            .ok_or(ItemError::NotFound(item_id))
    }

    pub async fn add_item(&self, user_id: i32, input: CreateItem) -> ItemResult<Item> {
        input
            .validate()
            .map_err(|e| ItemError::Validation(validation_summary(&e)))?;

        self.ensure_user(user_id).await?;

        if let Some(request_id) = input.request_id {
            if !self.repository.request_exists(request_id).await? {
                return Err(ItemError::RequestNotFound(request_id));
            }
        }

        self.repository.create(user_id, input).await
    }

    /// Only the owner may update; last writer wins
    pub async fn update_item(
        &self,
        user_id: i32,
        item_id: i32,
        input: UpdateItem,
    ) -> ItemResult<Item> {
        input
            .validate()
            .map_err(|e| ItemError::Validation(validation_summary(&e)))?;

        self.ensure_user(user_id).await?;
        let mut item = self.find_item(item_id).await?;
        if item.owner_id != user_id {
            return Err(ItemError::NotOwner { item_id, user_id });
        }

        item.apply_update(input);
        self.repository.update(item).await
    }

    /// Comments are always included; last/next bookings only for the owner
    pub async fn get_item(&self, user_id: i32, item_id: i32) -> ItemResult<ItemView> {
        let item = self.find_item(item_id).await?;
        let is_owner = item.owner_id == user_id;

        let comments = self.repository.comments(vec![item_id]).await?;
        let view = ItemView::new(item, comments);

        if !is_owner {
            return Ok(view);
        }

        let bookings = self.repository.approved_bookings(vec![item_id]).await?;
        Ok(view.with_bookings(&bookings, self.now()))
    }

    /// Owner's items with booking summaries and comments, two batched lookups per page
    pub async fn list_by_owner(
        &self,
        user_id: i32,
        page: PageRequest,
    ) -> ItemResult<Vec<ItemView>> {
        self.ensure_user(user_id).await?;

        let items = self.repository.list_by_owner(user_id, page).await?;
        if items.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i32> = items.iter().map(|i| i.id).collect();
        let approved = self.repository.approved_bookings(ids.clone()).await?;
        let mut bookings = group_by_item(approved, |b: &BookingSummary| b.item_id);
        let mut comments = group_by_item(self.repository.comments(ids).await?, |c: &Comment| {
            c.item_id
        });

        let now = self.now();
        Ok(items
            .into_iter()
            .map(|item| {
                let id = item.id;
                let item_bookings = bookings.remove(&id).unwrap_or_default();
                ItemView::new(item, comments.remove(&id).unwrap_or_default())
                    .with_bookings(&item_bookings, now)
            })
            .collect())
    }

    /// Blank text matches nothing
    pub async fn search(&self, text: &str, page: PageRequest) -> ItemResult<Vec<Item>> {
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }

        self.repository.search(text.to_string(), page).await
    }

    /// Only users whose approved booking of the item has ended may comment
    pub async fn add_comment(
        &self,
        user_id: i32,
        item_id: i32,
        input: NewComment,
    ) -> ItemResult<Comment> {
        input
            .validate()
            .map_err(|e| ItemError::Validation(validation_summary(&e)))?;

        self.find_item(item_id).await?;
        self.ensure_user(user_id).await?;

        let now = self.now();
        if !self
            .repository
            .has_finished_booking(user_id, item_id, now)
            .await?
        {
            return Err(ItemError::Validation("cannot comment".to_string()));
        }

        self.repository
            .create_comment(item_id, user_id, input.text, now)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockItemRepository;
    use chrono::TimeDelta;
    use mockall::predicate::eq;
    use test_utils::{MutableClock, reference_time as noon};

    fn service(repo: MockItemRepository) -> ItemService<MockItemRepository> {
        ItemService::new(repo, Arc::new(MutableClock::at(noon())))
    }

    fn item(id: i32, owner_id: i32) -> Item {
        Item {
            id,
            name: "Drill".into(),
            description: "Cordless drill".into(),
            available: true,
            request_id: None,
            owner_id,
        }
    }

    fn approved(id: i32, item_id: i32, start_h: i64, end_h: i64) -> BookingSummary {
        BookingSummary {
            id,
            booker_id: 2,
            start: noon() + TimeDelta::hours(start_h),
            end: noon() + TimeDelta::hours(end_h),
            item_id,
        }
    }

    fn create_input(request_id: Option<i32>) -> CreateItem {
        CreateItem {
            name: "Drill".into(),
            description: "Cordless drill".into(),
            available: Some(true),
            request_id,
        }
    }

    #[tokio::test]
    async fn test_blank_search_skips_repository() {
        let service = service(MockItemRepository::new());

        let result = service.search("   ", PageRequest::default()).await.unwrap();
        assert!(result.is_empty());
    }

    #[tokio::test]
    async fn test_search_passes_text_through() {
        let mut repo = MockItemRepository::new();
        repo.expect_search()
            .with(eq("dRiLl".to_string()), eq(PageRequest::from_offset(0, 10)))
            .returning(|_, _| Ok(vec![item(1, 1)]));

        let result = service(repo)
            .search("dRiLl", PageRequest::from_offset(0, 10))
            .await
            .unwrap();
        assert_eq!(result.len(), 1);
    }

    #[tokio::test]
    async fn test_add_item_unknown_user() {
        let mut repo = MockItemRepository::new();
        repo.expect_user_exists().with(eq(7)).returning(|_| Ok(false));
        repo.expect_create().never();

        let result = service(repo).add_item(7, create_input(None)).await;
        assert!(matches!(result, Err(ItemError::UserNotFound(7))));
    }

    #[tokio::test]
    async fn test_add_item_unknown_request() {
        let mut repo = MockItemRepository::new();
        repo.expect_user_exists().returning(|_| Ok(true));
        repo.expect_request_exists().with(eq(99)).returning(|_| Ok(false));
        repo.expect_create().never();

        let result = service(repo).add_item(1, create_input(Some(99))).await;
        assert!(matches!(result, Err(ItemError::RequestNotFound(99))));
    }

    #[tokio::test]
    async fn test_update_by_non_owner_is_rejected() {
        let mut repo = MockItemRepository::new();
        repo.expect_user_exists().returning(|_| Ok(true));
        repo.expect_get_by_id().with(eq(1)).returning(|_| Ok(Some(item(1, 1))));
        repo.expect_update().never();

        let result = service(repo)
            .update_item(2, 1, UpdateItem::default())
            .await;
        assert!(matches!(
            result,
            Err(ItemError::NotOwner {
                item_id: 1,
                user_id: 2
            })
        ));
    }

    #[tokio::test]
    async fn test_update_by_unknown_caller_is_not_found() {
        let mut repo = MockItemRepository::new();
        repo.expect_user_exists().with(eq(9999)).returning(|_| Ok(false));
        repo.expect_get_by_id().never();
        repo.expect_update().never();

        let result = service(repo)
            .update_item(9999, 1, UpdateItem::default())
            .await;
        assert!(matches!(result, Err(ItemError::UserNotFound(9999))));
    }

    #[tokio::test]
    async fn test_update_applies_present_fields_only() {
        let mut repo = MockItemRepository::new();
        repo.expect_user_exists().returning(|_| Ok(true));
        repo.expect_get_by_id().returning(|_| Ok(Some(item(1, 1))));
        repo.expect_update()
            .withf(|item| item.name == "Drill" && !item.available && item.owner_id == 1)
            .returning(|item| Ok(item));

        let updated = service(repo)
            .update_item(
                1,
                1,
                UpdateItem {
                    available: Some(false),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert!(!updated.available);
    }

    #[tokio::test]
    async fn test_get_item_as_owner_includes_bookings() {
        let mut repo = MockItemRepository::new();
        repo.expect_get_by_id().returning(|_| Ok(Some(item(1, 1))));
        repo.expect_comments().returning(|_| Ok(vec![]));
        repo.expect_approved_bookings()
            .with(eq(vec![1]))
            .returning(|_| Ok(vec![approved(10, 1, -5, -3), approved(11, 1, 24, 26)]));

        let view = service(repo).get_item(1, 1).await.unwrap();
        assert_eq!(view.last_booking.map(|b| b.id), Some(10));
        assert_eq!(view.next_booking.map(|b| b.id), Some(11));
    }

    #[tokio::test]
    async fn test_get_item_as_stranger_hides_bookings() {
        let mut repo = MockItemRepository::new();
        repo.expect_get_by_id().returning(|_| Ok(Some(item(1, 1))));
        repo.expect_comments().returning(|_| Ok(vec![]));
        repo.expect_approved_bookings().never();

        let view = service(repo).get_item(2, 1).await.unwrap();
        assert!(view.last_booking.is_none());
        assert!(view.next_booking.is_none());
    }

    #[tokio::test]
    async fn test_list_by_owner_groups_batched_rows() {
        let mut repo = MockItemRepository::new();
        repo.expect_user_exists().returning(|_| Ok(true));
        repo.expect_list_by_owner()
            .returning(|_, _| Ok(vec![item(1, 1), item(2, 1)]));
        repo.expect_approved_bookings()
            .times(1)
            .returning(|_| Ok(vec![approved(10, 2, 24, 26)]));
        repo.expect_comments().times(1).returning(|_| {
            Ok(vec![Comment {
                id: 5,
                text: "Great".into(),
                author_name: "Bob".into(),
                created: noon(),
                item_id: 1,
            }])
        });

        let views = service(repo)
            .list_by_owner(1, PageRequest::default())
            .await
            .unwrap();

        assert_eq!(views.len(), 2);
        assert_eq!(views[0].comments.len(), 1);
        assert!(views[0].next_booking.is_none());
        assert!(views[1].comments.is_empty());
        assert_eq!(views[1].next_booking.as_ref().map(|b| b.id), Some(10));
    }

    #[tokio::test]
    async fn test_comment_without_finished_booking_is_rejected() {
        let mut repo = MockItemRepository::new();
        repo.expect_get_by_id().returning(|_| Ok(Some(item(1, 1))));
        repo.expect_user_exists().returning(|_| Ok(true));
        repo.expect_has_finished_booking()
            .with(eq(3), eq(1), eq(noon()))
            .returning(|_, _, _| Ok(false));
        repo.expect_create_comment().never();

        let result = service(repo)
            .add_comment(3, 1, NewComment { text: "Nice".into() })
            .await;
        assert!(matches!(result, Err(ItemError::Validation(msg)) if msg == "cannot comment"));
    }

    #[tokio::test]
    async fn test_comment_is_stamped_with_clock() {
        let mut repo = MockItemRepository::new();
        repo.expect_get_by_id().returning(|_| Ok(Some(item(1, 1))));
        repo.expect_user_exists().returning(|_| Ok(true));
        repo.expect_has_finished_booking().returning(|_, _, _| Ok(true));
        repo.expect_create_comment()
            .with(eq(1), eq(2), eq("Nice".to_string()), eq(noon()))
            .returning(|item_id, _, text, created| {
                Ok(Comment {
                    id: 1,
                    text,
                    author_name: "Bob".into(),
                    created,
                    item_id,
                })
            });

        let comment = service(repo)
            .add_comment(2, 1, NewComment { text: "Nice".into() })
            .await
            .unwrap();
        assert_eq!(comment.created, noon());
        assert_eq!(comment.author_name, "Bob");
    }
}
