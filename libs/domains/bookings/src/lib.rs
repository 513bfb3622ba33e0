//! Bookings Domain
//!
//! Requests to borrow an item for a time window, the owner's decision on them,
//! and state-filtered listings for bookers and owners.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints under /bookings
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Date rules, ownership, status transitions
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + SeaORM implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Booking, BookingState, request bodies
//! └─────────────┘
//! ```
//!
//! # Status lifecycle
//!
//! ```text
//! WAITING ──approve──▶ APPROVED
//!    │
//!    └────reject────▶ REJECTED
//! ```
//!
//! Both decisions are final. The transition is a conditional update on
//! `status = 'WAITING'`, so of two concurrent decisions only one is stored.

pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

pub use error::{BookingError, BookingResult};
pub use models::{
    ApprovalQuery, BookableItem, Booking, BookingItem, BookingState, Booker, NewBooking,
    StateQuery,
};
pub use postgres::PgBookingRepository;
pub use repository::BookingRepository;
pub use service::BookingService;
