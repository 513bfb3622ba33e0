use async_trait::async_trait;
use chrono::NaiveDateTime;
use database::PageRequest;
use entity::BookingStatus;

use crate::error::BookingResult;
use crate::models::{BookableItem, Booking, BookingState};

/// Repository trait for Booking persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookingRepository: Send + Sync {
    async fn user_exists(&self, user_id: i32) -> BookingResult<bool>;

    async fn find_item(&self, item_id: i32) -> BookingResult<Option<BookableItem>>;

    /// Insert a WAITING booking
    async fn create(
        &self,
        booker_id: i32,
        item_id: i32,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> BookingResult<Booking>;

    async fn get_by_id(&self, id: i32) -> BookingResult<Option<Booking>>;

    /// Store `status` only while the booking is still WAITING.
    /// Returns false when another decision got there first.
    async fn set_status_if_waiting(&self, id: i32, status: BookingStatus) -> BookingResult<bool>;

    /// Bookings made by `booker_id`, newest start first
    async fn list_by_booker(
        &self,
        booker_id: i32,
        state: BookingState,
        now: NaiveDateTime,
        page: PageRequest,
    ) -> BookingResult<Vec<Booking>>;

    /// Bookings of items owned by `owner_id`, newest start first
    async fn list_by_owner(
        &self,
        owner_id: i32,
        state: BookingState,
        now: NaiveDateTime,
        page: PageRequest,
    ) -> BookingResult<Vec<Booking>>;
}
