use axum_helpers::validation::non_blank;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// An item as listed by its owner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub available: bool,
    /// Item request this listing answers
    pub request_id: Option<i32>,
    #[serde(skip)]
    pub owner_id: i32,
}

impl From<entity::item::Model> for Item {
    fn from(model: entity::item::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            available: model.available,
            request_id: model.request_id,
            owner_id: model.owner_id,
        }
    }
}

impl Item {
    pub fn apply_update(&mut self, update: UpdateItem) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(available) = update.available {
            self.available = available;
        }
    }
}

/// Approved booking shown to the owner as last/next booking
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookingSummary {
    pub id: i32,
    pub booker_id: i32,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    #[serde(skip)]
    pub item_id: i32,
}

impl From<entity::booking::Model> for BookingSummary {
    fn from(model: entity::booking::Model) -> Self {
        Self {
            id: model.id,
            booker_id: model.booker_id,
            start: model.start,
            end: model.end,
            item_id: model.item_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: i32,
    pub text: String,
    pub author_name: String,
    pub created: NaiveDateTime,
    #[serde(skip)]
    pub item_id: i32,
}

/// Item with its comments; booking summaries are filled for the owner only
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ItemView {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub available: bool,
    pub request_id: Option<i32>,
    pub last_booking: Option<BookingSummary>,
    pub next_booking: Option<BookingSummary>,
    pub comments: Vec<Comment>,
}

impl ItemView {
    pub fn new(item: Item, comments: Vec<Comment>) -> Self {
        Self {
            id: item.id,
            name: item.name,
            description: item.description,
            available: item.available,
            request_id: item.request_id,
            last_booking: None,
            next_booking: None,
            comments,
        }
    }

    /// Pick last and next out of the item's approved bookings.
    ///
    /// Next is the earliest start after `now`; last is the latest end among
    /// bookings that started before `now`.
    pub fn with_bookings(mut self, approved: &[BookingSummary], now: NaiveDateTime) -> Self {
        self.next_booking = approved
            .iter()
            .filter(|b| b.start > now)
            .min_by_key(|b| b.start)
            .cloned();
        self.last_booking = approved
            .iter()
            .filter(|b| b.start < now)
            .max_by_key(|b| b.end)
            .cloned();
        self
    }
}

/// Body of `POST /items`
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateItem {
    #[validate(custom(function = "non_blank"))]
    #[schema(example = "Cordless drill")]
    pub name: String,

    #[validate(custom(function = "non_blank"))]
    #[schema(example = "18V, two batteries")]
    pub description: String,

    #[validate(required)]
    pub available: Option<bool>,

    pub request_id: Option<i32>,
}

/// Body of `PATCH /items/{id}`; absent fields are left unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateItem {
    #[validate(custom(function = "non_blank"))]
    pub name: Option<String>,

    #[validate(custom(function = "non_blank"))]
    pub description: Option<String>,

    pub available: Option<bool>,
}

/// Body of `POST /items/{itemId}/comment`
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct NewComment {
    #[validate(custom(function = "non_blank"))]
    #[schema(example = "Worked great")]
    pub text: String,
}

/// `text` of `GET /items/search`
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    /// Substring matched against name and description, ignoring case
    #[serde(default)]
    pub text: String,
}
