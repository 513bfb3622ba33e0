//! Factories inserting rows with sensible defaults.
//!
//! Each entity has a `*Factory` builder for overrides and a `create_*` shortcut.
//! Rows are inserted directly through SeaORM so tests can arrange state without
//! going through the services under test.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let owner = factory::create_user(&db).await?;
//! let item = factory::create_item(&db, owner.id).await?;
//! let booking = factory::booking::BookingFactory::new(&db, item.id, booker.id)
//!     .window(start, end)
//!     .status(BookingStatus::Approved)
//!     .build()
//!     .await?;
//! ```

pub mod booking;
pub mod comment;
pub mod helpers;
pub mod item;
pub mod item_request;
pub mod user;

pub use booking::create_booking;
pub use comment::create_comment;
pub use item::create_item;
pub use item_request::create_item_request;
pub use user::create_user;
