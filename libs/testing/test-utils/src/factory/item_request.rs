use crate::clock::reference_time;
use crate::factory::helpers::next_id;
use chrono::NaiveDateTime;
use entity::item_request;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct ItemRequestFactory<'a> {
    db: &'a DatabaseConnection,
    requestor_id: i32,
    description: String,
    created: NaiveDateTime,
}

impl<'a> ItemRequestFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, requestor_id: i32) -> Self {
        Self {
            db,
            requestor_id,
            description: format!("Looking for item {}", next_id()),
            created: reference_time(),
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn created(mut self, created: NaiveDateTime) -> Self {
        self.created = created;
        self
    }

    pub async fn build(self) -> Result<item_request::Model, DbErr> {
        item_request::ActiveModel {
            description: ActiveValue::Set(self.description),
            requestor_id: ActiveValue::Set(self.requestor_id),
            created: ActiveValue::Set(self.created),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_item_request(
    db: &DatabaseConnection,
    requestor_id: i32,
) -> Result<item_request::Model, DbErr> {
    ItemRequestFactory::new(db, requestor_id).build().await
}
