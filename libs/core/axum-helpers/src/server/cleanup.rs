//! Resource cleanup run after the server stops accepting connections.

use tracing::{error, info};

/// Close a SeaORM connection pool, logging the outcome.
///
/// ```ignore
/// let cleanup = close_database(state.db.clone(), "shareit");
/// create_production_app(router, &config.server, Duration::from_secs(30), cleanup).await?;
/// ```
pub async fn close_database(db: sea_orm::DatabaseConnection, name: &str) {
    match db.close().await {
        Ok(_) => info!(pool = name, "Database connection closed"),
        Err(e) => error!(pool = name, "Error closing database connection: {}", e),
    }
}
