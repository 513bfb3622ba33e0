//! Shared application state.
//!
//! Built once in `main` and borrowed by [`crate::api::routes`] to wire the
//! domain services; only the readiness router keeps a clone.

use mockable::Clock;
use sea_orm::DatabaseConnection;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    /// PostgreSQL connection pool
    pub db: DatabaseConnection,
    /// Source of "now" for booking windows and comment eligibility
    pub clock: Arc<dyn Clock>,
}
