use crate::clock::reference_time;
use chrono::{NaiveDateTime, TimeDelta};
use entity::{BookingStatus, booking};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Defaults: one day starting a day after [`reference_time`], status WAITING.
pub struct BookingFactory<'a> {
    db: &'a DatabaseConnection,
    item_id: i32,
    booker_id: i32,
    start: NaiveDateTime,
    end: NaiveDateTime,
    status: BookingStatus,
}

impl<'a> BookingFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, item_id: i32, booker_id: i32) -> Self {
        let start = reference_time() + TimeDelta::days(1);
        Self {
            db,
            item_id,
            booker_id,
            start,
            end: start + TimeDelta::days(1),
            status: BookingStatus::Waiting,
        }
    }

    pub fn window(mut self, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        self.start = start;
        self.end = end;
        self
    }

    pub fn status(mut self, status: BookingStatus) -> Self {
        self.status = status;
        self
    }

    pub async fn build(self) -> Result<booking::Model, DbErr> {
        booking::ActiveModel {
            start: ActiveValue::Set(self.start),
            end: ActiveValue::Set(self.end),
            item_id: ActiveValue::Set(self.item_id),
            booker_id: ActiveValue::Set(self.booker_id),
            status: ActiveValue::Set(self.status),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_booking(
    db: &DatabaseConnection,
    item_id: i32,
    booker_id: i32,
) -> Result<booking::Model, DbErr> {
    BookingFactory::new(db, item_id, booker_id).build().await
}
