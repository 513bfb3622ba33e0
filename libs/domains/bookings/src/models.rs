use chrono::NaiveDateTime;
use entity::BookingStatus;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::error::{BookingError, BookingResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Booker {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BookingItem {
    pub id: i32,
    pub name: String,
    #[serde(skip)]
    pub owner_id: i32,
}

/// A booking with its booker and item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: i32,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub status: BookingStatus,
    pub booker: Booker,
    pub item: BookingItem,
}

impl Booking {
    /// Whether `user_id` may view the booking
    pub fn involves(&self, user_id: i32) -> bool {
        self.booker.id == user_id || self.item.owner_id == user_id
    }
}

/// The fields of an item that decide whether it can be booked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookableItem {
    pub id: i32,
    pub owner_id: i32,
    pub available: bool,
}

/// Body of `POST /bookings`
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewBooking {
    #[validate(required)]
    pub item_id: Option<i32>,

    #[validate(required)]
    #[schema(example = "2030-01-02T10:00:00")]
    pub start: Option<NaiveDateTime>,

    #[validate(required)]
    #[schema(example = "2030-01-03T10:00:00")]
    pub end: Option<NaiveDateTime>,
}

impl NewBooking {
    /// Start not before `now` and strictly before end
    pub fn dates_valid(&self, now: NaiveDateTime) -> bool {
        match (self.start, self.end) {
            (Some(start), Some(end)) => start >= now && start < end,
            _ => false,
        }
    }
}

/// Filter for booking listings, matched ignoring case
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    ToSchema,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum BookingState {
    #[default]
    All,
    /// Started and not yet ended
    Current,
    /// Ended
    Past,
    /// Not yet started
    Future,
    Waiting,
    Rejected,
}

impl BookingState {
    /// Parse the `state` query value; absent means ALL
    pub fn parse(raw: Option<&str>) -> BookingResult<Self> {
        match raw {
            None => Ok(BookingState::All),
            Some(value) => BookingState::from_str(value)
                .map_err(|_| BookingError::UnknownState(value.to_string())),
        }
    }
}

/// `state` of the listing endpoints, kept raw so unknown values get a clear message
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct StateQuery {
    /// ALL, CURRENT, PAST, FUTURE, WAITING or REJECTED
    #[param(default = "ALL")]
    pub state: Option<String>,
}

/// `approved` of `PATCH /bookings/{bookingId}`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ApprovalQuery {
    /// true approves, false rejects
    pub approved: bool,
}
