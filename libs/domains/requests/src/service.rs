use axum_helpers::errors::validation_summary;
use database::PageRequest;
use mockable::Clock;
use std::collections::HashMap;
use std::sync::Arc;
use validator::Validate;

use crate::error::{ItemRequestError, ItemRequestResult};
use crate::models::{ItemRequest, NewItemRequest, OfferedItem};
use crate::repository::ItemRequestRepository;

/// Service layer for item requests
#[derive(Clone)]
pub struct ItemRequestService<R: ItemRequestRepository> {
    repository: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<R: ItemRequestRepository> ItemRequestService<R> {
    pub fn new(repository: R, clock: Arc<dyn Clock>) -> Self {
        Self {
            repository: Arc::new(repository),
            clock,
        }
    }

    async fn ensure_user(&self, user_id: i32) -> ItemRequestResult<()> {
        if self.repository.user_exists(user_id).await? {
            Ok(())
        } else {
            Err(ItemRequestError::UserNotFound(user_id))
        }
    }

    /// Fill `items` of every request from a single lookup
    async fn attach_items(
        &self,
        mut requests: Vec<ItemRequest>,
    ) -> ItemRequestResult<Vec<ItemRequest>> {
        if requests.is_empty() {
            return Ok(requests);
        }

        let ids: Vec<i32> = requests.iter().map(|r| r.id).collect();
        let mut by_request: HashMap<i32, Vec<OfferedItem>> = HashMap::new();
        for item in self.repository.items_for(ids).await? {
            if let Some(request_id) = item.request_id {
                by_request.entry(request_id).or_default().push(item);
            }
        }

        for request in &mut requests {
            request.items = by_request.remove(&request.id).unwrap_or_default();
        }
        Ok(requests)
    }

    pub async fn add_request(
        &self,
        user_id: i32,
        input: NewItemRequest,
    ) -> ItemRequestResult<ItemRequest> {
        input
            .validate()
            .map_err(|e| ItemRequestError::Validation(validation_summary(&e)))?;

        self.ensure_user(user_id).await?;

        let created = self.clock.utc().naive_utc();
        self.repository
            .create(user_id, input.description, created)
            .await
    }

    pub async fn list_by_requester(&self, user_id: i32) -> ItemRequestResult<Vec<ItemRequest>> {
        self.ensure_user(user_id).await?;
        let requests = self.repository.list_by_requester(user_id).await?;
        self.attach_items(requests).await
    }

    pub async fn list_others(
        &self,
        user_id: i32,
        page: PageRequest,
    ) -> ItemRequestResult<Vec<ItemRequest>> {
        self.ensure_user(user_id).await?;
        let requests = self.repository.list_others(user_id, page).await?;
        self.attach_items(requests).await
    }

    pub async fn get_request(
        &self,
        user_id: i32,
        request_id: i32,
    ) -> ItemRequestResult<ItemRequest> {
        self.ensure_user(user_id).await?;

        let request = self
            .repository
            .get_by_id(request_id)
            .await?
            .ok_or(ItemRequestError::NotFound(request_id))?;

        let mut attached = self.attach_items(vec![request]).await?;
        attached.pop().ok_or(ItemRequestError::NotFound(request_id))
    }
}
