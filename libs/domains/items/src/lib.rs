//! Items Domain
//!
//! Items listed by their owners, the owner's view with booking summaries,
//! free-text search over available items, and comments left by past bookers.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints under /items
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Ownership, view assembly, comment eligibility
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + SeaORM implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Item, ItemView, Comment, request bodies
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use domain_items::{handlers, ItemService, PgItemRepository};
//!
//! let clock = Arc::new(mockable::DefaultClock);
//! let service = ItemService::new(PgItemRepository::new(db.clone()), clock);
//! let router = handlers::router(service);
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

pub use error::{ItemError, ItemResult};
pub use models::{
    BookingSummary, Comment, CreateItem, Item, ItemView, NewComment, SearchQuery, UpdateItem,
};
pub use postgres::PgItemRepository;
pub use repository::ItemRepository;
pub use service::ItemService;
