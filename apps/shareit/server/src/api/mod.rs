use axum::Router;
use domain_bookings::{BookingService, PgBookingRepository};
use domain_items::{ItemService, PgItemRepository};
use domain_requests::{ItemRequestService, PgItemRequestRepository};
use domain_users::{PgUserRepository, UserService};

use crate::state::AppState;

pub mod health;

/// Wires every domain service onto the shared pool and clock.
///
/// Each sub-router already carries its own state, so the result is stateless
/// and can go straight into `create_router`.
pub fn routes(state: &AppState) -> Router {
    let users = UserService::new(PgUserRepository::new(state.db.clone()));
    let items = ItemService::new(PgItemRepository::new(state.db.clone()), state.clock.clone());
    let bookings = BookingService::new(
        PgBookingRepository::new(state.db.clone()),
        state.clock.clone(),
    );
    let requests = ItemRequestService::new(
        PgItemRequestRepository::new(state.db.clone()),
        state.clock.clone(),
    );

    Router::new()
        .nest("/users", domain_users::handlers::router(users))
        .nest("/items", domain_items::handlers::router(items))
        .nest("/bookings", domain_bookings::handlers::router(bookings))
        .nest("/requests", domain_requests::handlers::router(requests))
}

/// `/ready`, with state applied so it can be merged after `create_router`.
pub fn ready_router(state: AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}
