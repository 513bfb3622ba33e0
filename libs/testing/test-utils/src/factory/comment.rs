use crate::clock::reference_time;
use chrono::NaiveDateTime;
use entity::comment;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct CommentFactory<'a> {
    db: &'a DatabaseConnection,
    item_id: i32,
    author_id: i32,
    text: String,
    created: NaiveDateTime,
}

impl<'a> CommentFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, item_id: i32, author_id: i32) -> Self {
        Self {
            db,
            item_id,
            author_id,
            text: "Works as described".to_string(),
            created: reference_time(),
        }
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn created(mut self, created: NaiveDateTime) -> Self {
        self.created = created;
        self
    }

    pub async fn build(self) -> Result<comment::Model, DbErr> {
        comment::ActiveModel {
            text: ActiveValue::Set(self.text),
            item_id: ActiveValue::Set(self.item_id),
            author_id: ActiveValue::Set(self.author_id),
            created: ActiveValue::Set(self.created),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_comment(
    db: &DatabaseConnection,
    item_id: i32,
    author_id: i32,
) -> Result<comment::Model, DbErr> {
    CommentFactory::new(db, item_id, author_id).build().await
}
