use async_trait::async_trait;
use chrono::NaiveDateTime;
use database::PageRequest;
use entity::{BookingStatus, booking, item, user};
use sea_orm::ActiveValue::Set;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveEnum, ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};
use std::collections::HashMap;

use crate::{
    error::BookingResult,
    models::{BookableItem, Booker, Booking, BookingItem, BookingState},
    repository::BookingRepository,
};

#[derive(Clone)]
pub struct PgBookingRepository {
    db: DatabaseConnection,
}

impl PgBookingRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Attach booker and item to each row with one lookup per table
    async fn hydrate(&self, rows: Vec<booking::Model>) -> BookingResult<Vec<Booking>> {
        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let booker_ids: Vec<i32> = rows.iter().map(|b| b.booker_id).collect();
        let item_ids: Vec<i32> = rows.iter().map(|b| b.item_id).collect();

        let bookers: HashMap<i32, user::Model> = user::Entity::find()
            .filter(user::Column::Id.is_in(booker_ids))
            .all(&self.db)
            .await?
            .into_iter()
            .map(|u| (u.id, u))
            .collect();
        let items: HashMap<i32, item::Model> = item::Entity::find()
            .filter(item::Column::Id.is_in(item_ids))
            .all(&self.db)
            .await?
            .into_iter()
            .map(|i| (i.id, i))
            .collect();

        rows.into_iter()
            .map(|row| -> BookingResult<Booking> {
                let booker = bookers.get(&row.booker_id).ok_or_else(|| {
                    DbErr::RecordNotFound(format!("user {} of booking {}", row.booker_id, row.id))
                })?;
                let item = items.get(&row.item_id).ok_or_else(|| {
                    DbErr::RecordNotFound(format!("item {} of booking {}", row.item_id, row.id))
                })?;

                Ok(Booking {
                    id: row.id,
                    start: row.start,
                    end: row.end,
                    status: row.status,
                    booker: Booker {
                        id: booker.id,
                        name: booker.name.clone(),
                    },
                    item: BookingItem {
                        id: item.id,
                        name: item.name.clone(),
                        owner_id: item.owner_id,
                    },
                })
            })
            .collect()
    }
}

fn state_condition(state: BookingState, now: NaiveDateTime) -> Condition {
    match state {
        BookingState::All => Condition::all(),
        BookingState::Current => Condition::all()
            .add(booking::Column::Start.lte(now))
            .add(booking::Column::End.gte(now)),
        BookingState::Past => Condition::all().add(booking::Column::End.lt(now)),
        BookingState::Future => Condition::all().add(booking::Column::Start.gt(now)),
        BookingState::Waiting => {
            Condition::all().add(booking::Column::Status.eq(BookingStatus::Waiting))
        }
        BookingState::Rejected => {
            Condition::all().add(booking::Column::Status.eq(BookingStatus::Rejected))
        }
    }
}

#[async_trait]
impl BookingRepository for PgBookingRepository {
    async fn user_exists(&self, user_id: i32) -> BookingResult<bool> {
        let count = user::Entity::find_by_id(user_id).count(&self.db).await?;
        Ok(count > 0)
    }

    async fn find_item(&self, item_id: i32) -> BookingResult<Option<BookableItem>> {
        let model = item::Entity::find_by_id(item_id).one(&self.db).await?;
        Ok(model.map(|m| BookableItem {
            id: m.id,
            owner_id: m.owner_id,
            available: m.available,
        }))
    }

    async fn create(
        &self,
        booker_id: i32,
        item_id: i32,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> BookingResult<Booking> {
        let model = booking::ActiveModel {
            start: Set(start),
            end: Set(end),
            item_id: Set(item_id),
            booker_id: Set(booker_id),
            status: Set(BookingStatus::Waiting),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;

        tracing::info!(booking_id = model.id, item_id, booker_id, "Created booking");

        let mut hydrated = self.hydrate(vec![model]).await?;
        hydrated
            .pop()
            .ok_or_else(|| DbErr::RecordNotFound("created booking".to_string()).into())
    }

    async fn get_by_id(&self, id: i32) -> BookingResult<Option<Booking>> {
        let Some(model) = booking::Entity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };

        Ok(self.hydrate(vec![model]).await?.pop())
    }

    async fn set_status_if_waiting(&self, id: i32, status: BookingStatus) -> BookingResult<bool> {
        let result = booking::Entity::update_many()
            .col_expr(booking::Column::Status, Expr::value(status.to_value()))
            .filter(booking::Column::Id.eq(id))
            .filter(booking::Column::Status.eq(BookingStatus::Waiting))
            .exec(&self.db)
            .await?;

        let updated = result.rows_affected == 1;
        if updated {
            tracing::info!(booking_id = id, %status, "Booking decided");
        } else {
            tracing::warn!(booking_id = id, %status, "Booking was no longer waiting");
        }
        Ok(updated)
    }

    async fn list_by_booker(
        &self,
        booker_id: i32,
        state: BookingState,
        now: NaiveDateTime,
        page: PageRequest,
    ) -> BookingResult<Vec<Booking>> {
        let rows = booking::Entity::find()
            .filter(booking::Column::BookerId.eq(booker_id))
            .filter(state_condition(state, now))
            .order_by_desc(booking::Column::Start)
            .offset(page.offset())
            .limit(page.limit())
            .all(&self.db)
            .await?;

        self.hydrate(rows).await
    }

    async fn list_by_owner(
        &self,
        owner_id: i32,
        state: BookingState,
        now: NaiveDateTime,
        page: PageRequest,
    ) -> BookingResult<Vec<Booking>> {
        let rows = booking::Entity::find()
            .inner_join(item::Entity)
            .filter(item::Column::OwnerId.eq(owner_id))
            .filter(state_condition(state, now))
            .order_by_desc(booking::Column::Start)
            .offset(page.offset())
            .limit(page.limit())
            .all(&self.db)
            .await?;

        self.hydrate(rows).await
    }
}
