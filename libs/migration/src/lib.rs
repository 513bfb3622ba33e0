pub use sea_orm_migration::prelude::*;

mod m20250301_000000_create_users;
mod m20250301_000001_create_requests;
mod m20250301_000002_create_items;
mod m20250301_000003_create_bookings;
mod m20250301_000004_create_comments;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000000_create_users::Migration),
            Box::new(m20250301_000001_create_requests::Migration),
            Box::new(m20250301_000002_create_items::Migration),
            Box::new(m20250301_000003_create_bookings::Migration),
            Box::new(m20250301_000004_create_comments::Migration),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{ConnectionTrait, Database, Statement};

    #[tokio::test]
    async fn test_migrations_apply_and_revert_on_sqlite() {
        let db = Database::connect("sqlite::memory:").await.unwrap();

        Migrator::up(&db, None).await.unwrap();
        for table in ["users", "requests", "items", "bookings", "comments"] {
            let stmt = Statement::from_string(
                db.get_database_backend(),
                format!("SELECT COUNT(*) FROM {}", table),
            );
            assert!(db.query_one_raw(stmt).await.unwrap().is_some(), "{table}");
        }

        Migrator::down(&db, None).await.unwrap();
        let stmt = Statement::from_string(db.get_database_backend(), "SELECT 1 FROM users");
        assert!(db.query_one_raw(stmt).await.is_err());
    }
}
