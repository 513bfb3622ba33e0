use axum_helpers::validation::non_blank;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// An item listed in answer to a request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OfferedItem {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub available: bool,
    pub request_id: Option<i32>,
}

impl From<entity::item::Model> for OfferedItem {
    fn from(model: entity::item::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            available: model.available,
            request_id: model.request_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ItemRequest {
    pub id: i32,
    pub description: String,
    pub created: NaiveDateTime,
    pub items: Vec<OfferedItem>,
}

impl From<entity::item_request::Model> for ItemRequest {
    fn from(model: entity::item_request::Model) -> Self {
        Self {
            id: model.id,
            description: model.description,
            created: model.created,
            items: Vec::new(),
        }
    }
}

/// Body of `POST /requests`
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct NewItemRequest {
    #[validate(custom(function = "non_blank"))]
    #[schema(example = "Need a ladder for the weekend")]
    pub description: String,
}
