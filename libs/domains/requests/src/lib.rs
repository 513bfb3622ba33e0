//! Item Requests Domain
//!
//! Users describe things they would like to borrow; owners answer by listing
//! an item that references the request. Every request is returned with the
//! items listed for it.
//!
//! ```text
//! Handlers (/requests) → ItemRequestService → ItemRequestRepository → SeaORM
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

pub use error::{ItemRequestError, ItemRequestResult};
pub use models::{ItemRequest, NewItemRequest, OfferedItem};
pub use postgres::PgItemRequestRepository;
pub use repository::ItemRequestRepository;
pub use service::ItemRequestService;
