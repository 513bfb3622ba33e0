//! Gateway routes: the server's public surface, validated here and forwarded.
//!
//! Every handler rejects bad input with 400 before the server sees it, then
//! relays the server's answer. Paths mirror the server one to one.

use axum::{Router, routing::get};
use axum_helpers::PageParams;

use crate::state::AppState;

pub mod bookings;
pub mod health;
pub mod items;
pub mod requests;
pub mod users;

pub fn routes(state: &AppState) -> Router {
    Router::new()
        .nest("/users", users::router())
        .nest("/items", items::router())
        .nest("/bookings", bookings::router())
        .nest("/requests", requests::router())
        .with_state(state.clone())
}

/// `/ready`, reporting whether the server answers its own `/health`
pub fn ready_router(state: AppState) -> Router {
    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}

/// Forwarded `from`/`size`
pub(crate) fn page_query(page: &PageParams) -> Vec<(&'static str, String)> {
    vec![("from", page.from.to_string()), ("size", page.size.to_string())]
}
