use async_trait::async_trait;
use chrono::NaiveDateTime;
use database::PageRequest;
use entity::{BookingStatus, booking, comment, item, item_request, user};
use sea_orm::ActiveValue::Set;
use sea_orm::sea_query::{Expr, ExprTrait, Func};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

use crate::{
    error::{ItemError, ItemResult},
    models::{BookingSummary, Comment, CreateItem, Item},
    repository::ItemRepository,
};

#[derive(Clone)]
pub struct PgItemRepository {
    db: DatabaseConnection,
}

impl PgItemRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn to_comment(model: comment::Model, author: Option<user::Model>) -> Comment {
    Comment {
        id: model.id,
        text: model.text,
        author_name: author.map(|a| a.name).unwrap_or_default(),
        created: model.created,
        item_id: model.item_id,
    }
}

#[async_trait]
impl ItemRepository for PgItemRepository {
    async fn user_exists(&self, user_id: i32) -> ItemResult<bool> {
        let count = user::Entity::find_by_id(user_id).count(&self.db).await?;
        Ok(count > 0)
    }

    async fn request_exists(&self, request_id: i32) -> ItemResult<bool> {
        let count = item_request::Entity::find_by_id(request_id)
            .count(&self.db)
            .await?;
        Ok(count > 0)
    }

    async fn create(&self, owner_id: i32, input: CreateItem) -> ItemResult<Item> {
        let model = item::ActiveModel {
            name: Set(input.name),
            description: Set(input.description),
            available: Set(input.available.unwrap_or_default()),
            owner_id: Set(owner_id),
            request_id: Set(input.request_id),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;

        tracing::info!(item_id = model.id, owner_id, "Created item");
        Ok(model.into())
    }

    async fn get_by_id(&self, id: i32) -> ItemResult<Option<Item>> {
        let model = item::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Into::into))
    }

    async fn update(&self, input: Item) -> ItemResult<Item> {
        let id = input.id;
        let model = item::ActiveModel {
            id: Set(input.id),
            name: Set(input.name),
            description: Set(input.description),
            available: Set(input.available),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .map_err(|e| match e {
            sea_orm::DbErr::RecordNotUpdated => ItemError::NotFound(id),
            other => ItemError::Database(other),
        })?;

        tracing::info!(item_id = id, "Updated item");
        Ok(model.into())
    }

    async fn list_by_owner(&self, owner_id: i32, page: PageRequest) -> ItemResult<Vec<Item>> {
        let models = item::Entity::find()
            .filter(item::Column::OwnerId.eq(owner_id))
            .order_by_asc(item::Column::Id)
            .offset(page.offset())
            .limit(page.limit())
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn search(&self, text: String, page: PageRequest) -> ItemResult<Vec<Item>> {
        let pattern = format!("%{}%", text.to_uppercase());

        let models = item::Entity::find()
            .filter(item::Column::Available.eq(true))
            .filter(
                Condition::any()
                    .add(
                        Expr::expr(Func::upper(Expr::col(item::Column::Name)))
                            .like(pattern.clone()),
                    )
                    .add(
                        Expr::expr(Func::upper(Expr::col(item::Column::Description)))
                            .like(pattern),
                    ),
            )
            .order_by_asc(item::Column::Id)
            .offset(page.offset())
            .limit(page.limit())
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn approved_bookings(&self, item_ids: Vec<i32>) -> ItemResult<Vec<BookingSummary>> {
        if item_ids.is_empty() {
            return Ok(Vec::new());
        }

        let models = booking::Entity::find()
            .filter(booking::Column::ItemId.is_in(item_ids))
            .filter(booking::Column::Status.eq(BookingStatus::Approved))
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn comments(&self, item_ids: Vec<i32>) -> ItemResult<Vec<Comment>> {
        if item_ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = comment::Entity::find()
            .filter(comment::Column::ItemId.is_in(item_ids))
            .find_also_related(user::Entity)
            .order_by_asc(comment::Column::Id)
            .all(&self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(model, author)| to_comment(model, author))
            .collect())
    }

    async fn has_finished_booking(
        &self,
        user_id: i32,
        item_id: i32,
        now: NaiveDateTime,
    ) -> ItemResult<bool> {
        let count = booking::Entity::find()
            .filter(booking::Column::BookerId.eq(user_id))
            .filter(booking::Column::ItemId.eq(item_id))
            .filter(booking::Column::Status.eq(BookingStatus::Approved))
            .filter(booking::Column::End.lt(now))
            .count(&self.db)
            .await?;

        Ok(count > 0)
    }

    async fn create_comment(
        &self,
        item_id: i32,
        author_id: i32,
        text: String,
        created: NaiveDateTime,
    ) -> ItemResult<Comment> {
        let model = comment::ActiveModel {
            text: Set(text),
            item_id: Set(item_id),
            author_id: Set(author_id),
            created: Set(created),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;

        let author = user::Entity::find_by_id(author_id).one(&self.db).await?;

        tracing::info!(comment_id = model.id, item_id, author_id, "Created comment");
        Ok(to_comment(model, author))
    }
}
