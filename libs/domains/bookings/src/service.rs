use axum_helpers::errors::validation_summary;
use chrono::NaiveDateTime;
use database::PageRequest;
use entity::BookingStatus;
use mockable::Clock;
use std::sync::Arc;
use validator::Validate;

use crate::error::{BookingError, BookingResult};
use crate::models::{Booking, BookingState, NewBooking};
use crate::repository::BookingRepository;

const INVALID_DATES: &str = "invalid booking dates";
const ALREADY_DECIDED: &str = "cannot change status after approval";

/// Service layer for the booking lifecycle
#[derive(Clone)]
pub struct BookingService<R: BookingRepository> {
    repository: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<R: BookingRepository> BookingService<R> {
    pub fn new(repository: R, clock: Arc<dyn Clock>) -> Self {
        Self {
            repository: Arc::new(repository),
            clock,
        }
    }

    fn now(&self) -> NaiveDateTime {
        self.clock.utc().naive_utc()
    }

    async fn ensure_user(&self, user_id: i32) -> BookingResult<()> {
        if self.repository.user_exists(user_id).await? {
            Ok(())
        } else {
            Err(BookingError::UserNotFound(user_id))
        }
    }

    async fn find_booking(&self, booking_id: i32) -> BookingResult<Booking> {
        self.repository
            .get_by_id(booking_id)
            .await?
            .ok_or(BookingError::NotFound(booking_id))
    }

    /// Create a WAITING booking; the item's availability flag is left as is
    pub async fn add_booking(&self, booker_id: i32, input: NewBooking) -> BookingResult<Booking> {
        input
            .validate()
            .map_err(|e| BookingError::Validation(validation_summary(&e)))?;

        self.ensure_user(booker_id).await?;

        let (Some(item_id), Some(start), Some(end)) = (input.item_id, input.start, input.end)
        else {
            return Err(BookingError::Validation(INVALID_DATES.to_string()));
        };

        let item = self
            .repository
            .find_item(item_id)
            .await?
            .ok_or(BookingError::ItemNotFound(item_id))?;

        if !input.dates_valid(self.now()) {
            return Err(BookingError::Validation(INVALID_DATES.to_string()));
        }

        if item.owner_id == booker_id {
            return Err(BookingError::NotOwnerOrBooker(format!(
                "Owner cannot book own item {}",
                item_id
            )));
        }

        if !item.available {
            return Err(BookingError::AlreadyBooked(item_id));
        }

        self.repository.create(booker_id, item_id, start, end).await
    }

    /// Owner's decision on a WAITING booking; decisions are final
    pub async fn approve_booking(
        &self,
        user_id: i32,
        booking_id: i32,
        approved: bool,
    ) -> BookingResult<Booking> {
        self.ensure_user(user_id).await?;
        let mut booking = self.find_booking(booking_id).await?;

        if booking.item.owner_id != user_id {
            return Err(BookingError::NotOwnerOrBooker(format!(
                "User {} does not own the item of booking {}",
                user_id, booking_id
            )));
        }

        if booking.status.is_terminal() {
            return Err(BookingError::Validation(ALREADY_DECIDED.to_string()));
        }

        let status = BookingStatus::from_decision(approved);
        if !self
            .repository
            .set_status_if_waiting(booking_id, status)
            .await?
        {
            return Err(BookingError::Validation(ALREADY_DECIDED.to_string()));
        }

        booking.status = status;
        Ok(booking)
    }

    /// Visible to the booker and the item owner only
    pub async fn get_booking(&self, user_id: i32, booking_id: i32) -> BookingResult<Booking> {
        self.ensure_user(user_id).await?;
        let booking = self.find_booking(booking_id).await?;

        if !booking.involves(user_id) {
            return Err(BookingError::NotOwnerOrBooker(format!(
                "User {} is neither booker nor owner of booking {}",
                user_id, booking_id
            )));
        }

        Ok(booking)
    }

    pub async fn list_by_booker(
        &self,
        booker_id: i32,
        state: BookingState,
        page: PageRequest,
    ) -> BookingResult<Vec<Booking>> {
        self.ensure_user(booker_id).await?;
        self.repository
            .list_by_booker(booker_id, state, self.now(), page)
            .await
    }

    pub async fn list_by_owner(
        &self,
        owner_id: i32,
        state: BookingState,
        page: PageRequest,
    ) -> BookingResult<Vec<Booking>> {
        self.ensure_user(owner_id).await?;
        self.repository
            .list_by_owner(owner_id, state, self.now(), page)
            .await
    }
}
