//! Integration tests against a real Postgres instance.
//!
//! Run with a scratch database:
//! `DATABASE_URL=postgres://... cargo test -p wayfare-store -- --ignored`

use rust_decimal::Decimal;
use sqlx::postgres::PgPoolOptions;

use wayfare_core::{ListingDraft, ListingPatch, ListingStatus};
use wayfare_store::{ListingQuery, ListingStore, StoreError};

async fn store() -> ListingStore {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for ignored tests");
    let pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&url)
        .await
        .expect("connect to test database");
    wayfare_store::MIGRATOR.run(&pool).await.expect("migrate");
    ListingStore::new(pool)
}

fn draft(title: &str) -> ListingDraft {
    ListingDraft {
        title: title.to_string(),
        description: "Two bedrooms on the north shore".to_string(),
        location: "Duluth, MN".to_string(),
        price: Decimal::new(12_550, 2),
        status: ListingStatus::Pending,
    }
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn crud_round_trip() {
    let store = store().await;

    let created = store.create(&draft("Lakeside cabin")).await.unwrap();
    assert_eq!(created.status, ListingStatus::Pending);
    assert_eq!(created.price, Decimal::new(12_550, 2));
    assert_eq!(created.created_at, created.updated_at);

    let fetched = store.get(created.id).await.unwrap();
    assert_eq!(fetched.title, "Lakeside cabin");

    let mut updated_draft = draft("Lakeside cabin, renovated");
    updated_draft.status = ListingStatus::Active;
    let updated = store.update(created.id, &updated_draft).await.unwrap();
    assert_eq!(updated.title, "Lakeside cabin, renovated");
    assert_eq!(updated.status, ListingStatus::Active);
    // created_at is immutable; updated_at moves forward
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at > created.updated_at);

    let patched = store
        .patch(
            created.id,
            &ListingPatch {
                price: Some(Decimal::new(9_900, 2)),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(patched.price, Decimal::new(9_900, 2));
    assert_eq!(patched.title, "Lakeside cabin, renovated");
    assert!(patched.updated_at > updated.updated_at);

    store.delete(created.id).await.unwrap();
    assert!(matches!(
        store.get(created.id).await,
        Err(StoreError::NotFound(_))
    ));
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn list_is_newest_first_and_filters_by_status() {
    let store = store().await;

    let first = store.create(&draft("First")).await.unwrap();
    let mut active = draft("Second");
    active.status = ListingStatus::Active;
    let second = store.create(&active).await.unwrap();

    let (page, total) = store.list(&ListingQuery::default()).await.unwrap();
    assert!(total >= 2);
    let pos_first = page.iter().position(|l| l.id == first.id);
    let pos_second = page.iter().position(|l| l.id == second.id);
    if let (Some(a), Some(b)) = (pos_first, pos_second) {
        assert!(b < a, "newer listing must come first");
    }

    let (filtered, _) = store
        .list(&ListingQuery {
            status: Some(ListingStatus::Active),
            ..Default::default()
        })
        .await
        .unwrap();
    assert!(filtered.iter().all(|l| l.status == ListingStatus::Active));

    store.delete(first.id).await.unwrap();
    store.delete(second.id).await.unwrap();
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn missing_ids_surface_not_found() {
    let store = store().await;

    assert!(matches!(
        store.get(i64::MAX).await,
        Err(StoreError::NotFound(_))
    ));
    assert!(matches!(
        store.delete(i64::MAX).await,
        Err(StoreError::NotFound(_))
    ));
    assert!(matches!(
        store.update(i64::MAX, &draft("ghost")).await,
        Err(StoreError::NotFound(_))
    ));
}
