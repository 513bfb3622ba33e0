//! Integration tests for the Items domain
//!
//! Run the SeaORM repository and the service against an in-memory SQLite
//! database with the real migrations applied.

use chrono::TimeDelta;
use database::PageRequest;
use domain_items::*;
use entity::BookingStatus;
use std::sync::Arc;
use test_utils::factory::{self, booking::BookingFactory, item::ItemFactory};
use test_utils::{MutableClock, TestDatabase, assertions::*, reference_time};

fn service(db: &TestDatabase, clock: Arc<MutableClock>) -> ItemService<PgItemRepository> {
    ItemService::new(PgItemRepository::new(db.connection()), clock)
}

// ============================================================================
// Repository Tests
// ============================================================================

#[tokio::test]
async fn test_create_and_fetch_round_trip() {
    let db = TestDatabase::new().await;
    let repo = PgItemRepository::new(db.connection());
    let owner = factory::create_user(&db.connection).await.unwrap();

    let created = repo
        .create(
            owner.id,
            CreateItem {
                name: "Drill".into(),
                description: "Cordless drill".into(),
                available: Some(true),
                request_id: None,
            },
        )
        .await
        .unwrap();

    let fetched = assert_some(repo.get_by_id(created.id).await.unwrap(), "item should exist");
    assert_eq!(fetched.name, "Drill");
    assert_eq!(fetched.description, "Cordless drill");
    assert!(fetched.available);
    assert_eq!(fetched.owner_id, owner.id);
}

#[tokio::test]
async fn test_search_ignores_case_and_unavailable_items() {
    let db = TestDatabase::new().await;
    let repo = PgItemRepository::new(db.connection());
    let owner = factory::create_user(&db.connection).await.unwrap();

    let by_name = ItemFactory::new(&db.connection, owner.id)
        .name("Power DRILL")
        .build()
        .await
        .unwrap();
    let by_description = ItemFactory::new(&db.connection, owner.id)
        .name("Screwdriver")
        .description("works like a drill")
        .build()
        .await
        .unwrap();
    ItemFactory::new(&db.connection, owner.id)
        .name("Old drill")
        .available(false)
        .build()
        .await
        .unwrap();
    ItemFactory::new(&db.connection, owner.id)
        .name("Ladder")
        .build()
        .await
        .unwrap();

    let found = repo
        .search("dRiLl".into(), PageRequest::default())
        .await
        .unwrap();
    assert_ids(found.iter().map(|i| i.id), &[by_name.id, by_description.id], "search");
}

#[tokio::test]
async fn test_list_by_owner_pages_by_id() {
    let db = TestDatabase::new().await;
    let repo = PgItemRepository::new(db.connection());
    let owner = factory::create_user(&db.connection).await.unwrap();
    let other = factory::create_user(&db.connection).await.unwrap();

    let mut ids = Vec::new();
    for _ in 0..3 {
        ids.push(factory::create_item(&db.connection, owner.id).await.unwrap().id);
    }
    factory::create_item(&db.connection, other.id).await.unwrap();

    let second_page = repo
        .list_by_owner(owner.id, PageRequest::from_offset(2, 2))
        .await
        .unwrap();
    assert_ids(second_page.iter().map(|i| i.id), &ids[2..], "second page");
}

#[tokio::test]
async fn test_comments_carry_author_name() {
    let db = TestDatabase::new().await;
    let repo = PgItemRepository::new(db.connection());
    let owner = factory::create_user(&db.connection).await.unwrap();
    let author = factory::user::UserFactory::new(&db.connection)
        .name("Bob")
        .build()
        .await
        .unwrap();
    let item = factory::create_item(&db.connection, owner.id).await.unwrap();
    factory::create_comment(&db.connection, item.id, author.id)
        .await
        .unwrap();

    let comments = repo.comments(vec![item.id]).await.unwrap();
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0].author_name, "Bob");
    assert_eq!(comments[0].item_id, item.id);
}

// ============================================================================
// Service Tests
// ============================================================================

#[tokio::test]
async fn test_owner_view_has_last_and_next_booking() {
    let db = TestDatabase::new().await;
    let clock = Arc::new(MutableClock::at(reference_time()));
    let now = reference_time();

    let owner = factory::create_user(&db.connection).await.unwrap();
    let booker = factory::create_user(&db.connection).await.unwrap();
    let item = factory::create_item(&db.connection, owner.id).await.unwrap();

    let past = BookingFactory::new(&db.connection, item.id, booker.id)
        .window(now - TimeDelta::days(3), now - TimeDelta::days(2))
        .status(BookingStatus::Approved)
        .build()
        .await
        .unwrap();
    let next = BookingFactory::new(&db.connection, item.id, booker.id)
        .window(now + TimeDelta::days(1), now + TimeDelta::days(2))
        .status(BookingStatus::Approved)
        .build()
        .await
        .unwrap();
    BookingFactory::new(&db.connection, item.id, booker.id)
        .window(now + TimeDelta::hours(2), now + TimeDelta::hours(3))
        .status(BookingStatus::Rejected)
        .build()
        .await
        .unwrap();

    let service = service(&db, clock);

    let owner_view = service.get_item(owner.id, item.id).await.unwrap();
    assert_eq!(owner_view.last_booking.map(|b| b.id), Some(past.id));
    assert_eq!(owner_view.next_booking.map(|b| b.id), Some(next.id));

    let booker_view = service.get_item(booker.id, item.id).await.unwrap();
    assert!(booker_view.last_booking.is_none());
    assert!(booker_view.next_booking.is_none());
}

#[tokio::test]
async fn test_repeated_gets_are_identical() {
    let db = TestDatabase::new().await;
    let service = service(&db, Arc::new(MutableClock::at(reference_time())));
    let owner = factory::create_user(&db.connection).await.unwrap();
    let item = factory::create_item(&db.connection, owner.id).await.unwrap();

    let first = service.get_item(owner.id, item.id).await.unwrap();
    let second = service.get_item(owner.id, item.id).await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_comment_requires_finished_approved_booking() {
    let db = TestDatabase::new().await;
    let clock = Arc::new(MutableClock::at(reference_time()));
    let now = reference_time();

    let owner = factory::create_user(&db.connection).await.unwrap();
    let booker = factory::create_user(&db.connection).await.unwrap();
    let stranger = factory::create_user(&db.connection).await.unwrap();
    let item = factory::create_item(&db.connection, owner.id).await.unwrap();

    BookingFactory::new(&db.connection, item.id, booker.id)
        .window(now + TimeDelta::hours(1), now + TimeDelta::hours(2))
        .status(BookingStatus::Approved)
        .build()
        .await
        .unwrap();

    let service = service(&db, clock.clone());
    let text = || NewComment {
        text: "Worked great".into(),
    };

    let too_early = service.add_comment(booker.id, item.id, text()).await;
    assert!(matches!(too_early, Err(ItemError::Validation(_))));

    clock.advance_hours(3);

    let comment = service.add_comment(booker.id, item.id, text()).await.unwrap();
    assert_eq!(comment.author_name, booker.name);
    assert_eq!(comment.created, clock.naive());

    let stranger_result = service.add_comment(stranger.id, item.id, text()).await;
    assert!(matches!(stranger_result, Err(ItemError::Validation(_))));

    let view = service.get_item(stranger.id, item.id).await.unwrap();
    assert_eq!(view.comments.len(), 1);
}

#[tokio::test]
async fn test_add_item_linked_to_request() {
    let db = TestDatabase::new().await;
    let service = service(&db, Arc::new(MutableClock::at(reference_time())));
    let owner = factory::create_user(&db.connection).await.unwrap();
    let requester = factory::create_user(&db.connection).await.unwrap();
    let request = factory::create_item_request(&db.connection, requester.id)
        .await
        .unwrap();

    let item = service
        .add_item(
            owner.id,
            CreateItem {
                name: "Tent".into(),
                description: "Two person tent".into(),
                available: Some(true),
                request_id: Some(request.id),
            },
        )
        .await
        .unwrap();
    assert_eq!(item.request_id, Some(request.id));

    let unknown = service
        .add_item(
            owner.id,
            CreateItem {
                name: "Tent".into(),
                description: "Two person tent".into(),
                available: Some(true),
                request_id: Some(request.id + 100),
            },
        )
        .await;
    assert!(matches!(unknown, Err(ItemError::RequestNotFound(_))));
}
