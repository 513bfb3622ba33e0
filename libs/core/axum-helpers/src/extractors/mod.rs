//! Custom extractors for Axum handlers.
//!
//! Every rejection is rendered through [`AppError`](crate::errors::AppError), so a
//! malformed body, path, query or caller header always yields a 400 with the
//! standard error body.

pub mod id_path;
pub mod page_params;
pub mod sharer_user_id;
pub mod validated_json;
pub mod validated_query;

pub use id_path::IdPath;
pub use page_params::PageParams;
pub use sharer_user_id::{SHARER_USER_ID_HEADER, SharerUserId};
pub use validated_json::ValidatedJson;
pub use validated_query::ValidatedQuery;
