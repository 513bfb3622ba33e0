use mockable::Clock;
use std::sync::Arc;

use crate::client::ShareItClient;

/// Shared state of every gateway handler
#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub client: ShareItClient,
    /// "Now" for the booking date check
    pub clock: Arc<dyn Clock>,
}
