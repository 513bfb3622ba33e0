use async_trait::async_trait;
use chrono::NaiveDateTime;
use database::PageRequest;
use entity::{item, item_request, user};
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

use crate::{
    error::ItemRequestResult,
    models::{ItemRequest, OfferedItem},
    repository::ItemRequestRepository,
};

#[derive(Clone)]
pub struct PgItemRequestRepository {
    db: DatabaseConnection,
}

impl PgItemRequestRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ItemRequestRepository for PgItemRequestRepository {
    async fn user_exists(&self, user_id: i32) -> ItemRequestResult<bool> {
        let count = user::Entity::find_by_id(user_id).count(&self.db).await?;
        Ok(count > 0)
    }

    async fn create(
        &self,
        requester_id: i32,
        description: String,
        created: NaiveDateTime,
    ) -> ItemRequestResult<ItemRequest> {
        let model = item_request::ActiveModel {
            description: Set(description),
            requestor_id: Set(requester_id),
            created: Set(created),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;

        tracing::info!(request_id = model.id, requester_id, "Created item request");
        Ok(model.into())
    }

    async fn get_by_id(&self, id: i32) -> ItemRequestResult<Option<ItemRequest>> {
        let model = item_request::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Into::into))
    }

    async fn list_by_requester(&self, requester_id: i32) -> ItemRequestResult<Vec<ItemRequest>> {
        let models = item_request::Entity::find()
            .filter(item_request::Column::RequestorId.eq(requester_id))
            .order_by_desc(item_request::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn list_others(
        &self,
        user_id: i32,
        page: PageRequest,
    ) -> ItemRequestResult<Vec<ItemRequest>> {
        let models = item_request::Entity::find()
            .filter(item_request::Column::RequestorId.ne(user_id))
            .order_by_desc(item_request::Column::Created)
            .order_by_desc(item_request::Column::Id)
            .offset(page.offset())
            .limit(page.limit())
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn items_for(&self, request_ids: Vec<i32>) -> ItemRequestResult<Vec<OfferedItem>> {
        if request_ids.is_empty() {
            return Ok(Vec::new());
        }

        let models = item::Entity::find()
            .filter(item::Column::RequestId.is_in(request_ids))
            .order_by_asc(item::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }
}
