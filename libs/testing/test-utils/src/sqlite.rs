//! In-memory SQLite database with the full schema applied.

use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

/// Fresh database per test, dropped with the connection.
///
/// The pool is pinned to a single connection because every SQLite
/// `:memory:` connection opens its own empty database.
pub struct TestDatabase {
    pub connection: DatabaseConnection,
}

impl TestDatabase {
    /// Create a new test database with migrations applied
    ///
    /// ```no_run
    /// use test_utils::TestDatabase;
    ///
    /// # async fn example() {
    /// let db = TestDatabase::new().await;
    /// // Use db.connection() to create your repository
    /// # }
    /// ```
    pub async fn new() -> Self {
        let mut options = ConnectOptions::new("sqlite::memory:");
        options
            .max_connections(1)
            .min_connections(1)
            .sqlx_logging(false);

        let connection = Database::connect(options)
            .await
            .expect("Failed to open in-memory SQLite database");

        Migrator::up(&connection, None)
            .await
            .expect("Failed to apply migrations");

        tracing::debug!("Test database ready (SQLite in-memory)");

        Self { connection }
    }

    /// Cloned handle for repositories under test
    pub fn connection(&self) -> DatabaseConnection {
        self.connection.clone()
    }
}
