//! Shared test utilities for the ShareIt crates
//!
//! - `TestDatabase`: in-memory SQLite with every migration applied
//! - `MutableClock`: a [`mockable::Clock`] the test can move forward
//! - `factory`: row factories for users, items, bookings, comments and requests
//! - `TestDataBuilder`: deterministic names and emails
//! - `assertions`: custom assertion helpers
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use test_utils::{MutableClock, TestDatabase, factory, reference_time};
//!
//! #[tokio::test]
//! async fn my_repository_test() {
//!     let db = TestDatabase::new().await;
//!     let clock = Arc::new(MutableClock::at(reference_time()));
//!
//!     let owner = factory::create_user(&db.connection).await.unwrap();
//!     let item = factory::create_item(&db.connection, owner.id).await.unwrap();
//! }
//! ```

mod clock;
pub mod factory;
mod sqlite;

pub use clock::{MutableClock, reference_time};
pub use sqlite::TestDatabase;

/// Builder for test data derived from a seed
///
/// Two builders with the same seed produce the same names, so unique-email
/// collisions between tests are avoided by seeding from the test name.
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Create from test name (generates seed from test name hash)
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::from_test_name("test_create_user");
    /// ```
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::new(7);
    /// assert_eq!(builder.name("item", "drill"), "test-item-7-drill");
    /// ```
    pub fn name(&self, prefix: &str, suffix: &str) -> String {
        format!("test-{}-{}-{}", prefix, self.seed, suffix)
    }

    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::new(7);
    /// assert_eq!(builder.email("owner"), "owner-7@shareit.test");
    /// ```
    pub fn email(&self, local: &str) -> String {
        format!("{}-{}@shareit.test", local, self.seed)
    }
}

/// Test assertion helpers
pub mod assertions {
    /// Assert that an optional value is Some
    pub fn assert_some<T>(value: Option<T>, context: &str) -> T {
        value.unwrap_or_else(|| panic!("{}: expected Some, got None", context))
    }

    /// Assert that ids come out in the given order
    pub fn assert_ids(actual: impl IntoIterator<Item = i32>, expected: &[i32], context: &str) {
        let actual: Vec<i32> = actual.into_iter().collect();
        assert_eq!(
            actual, expected,
            "{}: expected ids {:?}, got {:?}",
            context, expected, actual
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;
    use entity::BookingStatus;
    use mockable::Clock;

    #[test]
    fn test_data_builder_deterministic() {
        let builder1 = TestDataBuilder::new(42);
        let builder2 = TestDataBuilder::new(42);

        assert_eq!(builder1.name("user", "a"), builder2.name("user", "a"));
        assert_eq!(builder1.email("a"), builder2.email("a"));
    }

    #[test]
    fn test_data_builder_different_names() {
        let builder1 = TestDataBuilder::from_test_name("test1");
        let builder2 = TestDataBuilder::from_test_name("test2");

        assert_ne!(builder1.email("owner"), builder2.email("owner"));
    }

    #[test]
    fn test_mutable_clock_advances() {
        let clock = MutableClock::at(reference_time());
        clock.advance_hours(2);
        assert_eq!(clock.naive(), reference_time() + TimeDelta::hours(2));

        clock.set(reference_time());
        assert_eq!(clock.utc().naive_utc(), reference_time());
    }

    #[tokio::test]
    async fn test_factories_insert_related_rows() {
        let db = TestDatabase::new().await;
        let conn = db.connection();

        let owner = factory::create_user(&conn).await.unwrap();
        let booker = factory::user::UserFactory::new(&conn)
            .name("Booker")
            .build()
            .await
            .unwrap();
        let request = factory::create_item_request(&conn, booker.id).await.unwrap();
        let item = factory::item::ItemFactory::new(&conn, owner.id)
            .request_id(request.id)
            .build()
            .await
            .unwrap();
        let booking = factory::booking::BookingFactory::new(&conn, item.id, booker.id)
            .status(BookingStatus::Approved)
            .build()
            .await
            .unwrap();
        let comment = factory::create_comment(&conn, item.id, booker.id).await.unwrap();

        assert_eq!(item.owner_id, owner.id);
        assert_eq!(item.request_id, Some(request.id));
        assert_eq!(booking.status, BookingStatus::Approved);
        assert!(booking.start < booking.end);
        assert_eq!(comment.author_id, booker.id);
        assert_eq!(booker.name, "Booker");
    }
}
