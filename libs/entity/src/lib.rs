//! SeaORM entities for the ShareIt schema.
//!
//! ```text
//! users ─┬─< items >── requests
//!        ├─< bookings >── items
//!        ├─< comments >── items
//!        └─< requests
//! ```
//!
//! Foreign keys cascade on delete, so removing a user removes the rows that
//! reference it. The one exception is `items.request_id`, which is nulled when
//! its request goes away.

pub mod booking;
pub mod comment;
pub mod item;
pub mod item_request;
pub mod prelude;
pub mod user;

pub use booking::BookingStatus;
