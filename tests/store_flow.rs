use std::time::Duration;

use storly_api::{
    db::Database,
    dto::{
        ratings::SubmitRatingRequest,
        stores::{AddStoreRequest, StoreFilter, StoreSearch},
        users::{AddUserRequest, UserFilter},
    },
    error::ServiceError,
    models::{AdminStats, Rating, Store, UserRole},
    seed,
    services::{admin_service, owner_service, store_service},
};

// Listing, aggregation, and rating flows against the demo dataset. Seeded
// averages: store-1 carries [5, 4], store-2 [3], store-3 [5].

#[tokio::test(start_paused = true)]
async fn admin_listing_decorates_owner_and_average() -> anyhow::Result<()> {
    let db = seeded();

    let rows = admin_service::list_stores(&db, StoreFilter::default()).await?;
    assert_eq!(rows.len(), 3);

    // Natural table order with recomputed aggregates.
    assert_eq!(rows[0].store.id, "store-1");
    assert_eq!(rows[0].owner_name, "Charles \"Charlie\" Bucket");
    assert_eq!(rows[0].average_rating, 4.5);
    assert_eq!(rows[1].average_rating, 3.0);
    assert_eq!(rows[2].average_rating, 5.0);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn listing_falls_back_when_the_owner_is_missing() -> anyhow::Result<()> {
    let mut tables = seed::demo_tables();
    tables.stores.push(Store {
        id: "store-9".to_string(),
        name: "Orphaned Outlet of Oddities".to_string(),
        email: "lost@orphans.com".to_string(),
        address: "404 Nowhere Avenue, Ghost Town, GT 00000".to_string(),
        owner_id: "owner-9".to_string(),
    });
    let db = Database::new(tables);

    let rows = admin_service::list_stores(&db, StoreFilter::default()).await?;
    let orphan = rows
        .iter()
        .find(|r| r.store.id == "store-9")
        .expect("orphaned store listed");
    assert_eq!(orphan.owner_name, "N/A");
    assert_eq!(orphan.average_rating, 0.0);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn user_filters_match_substrings_case_insensitively() -> anyhow::Result<()> {
    let db = seeded();

    let by_name = admin_service::list_users(
        &db,
        UserFilter {
            name: Some("ali".to_string()),
            ..Default::default()
        },
    )
    .await?;
    assert_eq!(by_name.len(), 1);
    assert_eq!(by_name[0].name, "Alice Liddell Wonderland");

    let shouting = admin_service::list_users(
        &db,
        UserFilter {
            name: Some("LIDDELL".to_string()),
            ..Default::default()
        },
    )
    .await?;
    assert_eq!(shouting.len(), 1);

    let owners = admin_service::list_users(
        &db,
        UserFilter {
            role: Some(UserRole::StoreOwner),
            ..Default::default()
        },
    )
    .await?;
    assert_eq!(owners.len(), 3);

    // Terms combine as AND across fields.
    let narrowed = admin_service::list_users(
        &db,
        UserFilter {
            address: Some("metropolis".to_string()),
            role: Some(UserRole::StoreOwner),
            ..Default::default()
        },
    )
    .await?;
    assert_eq!(narrowed.len(), 1);
    assert_eq!(narrowed[0].id, "owner-3");

    // An empty string is no constraint, same as an absent field.
    let unfiltered = admin_service::list_users(
        &db,
        UserFilter {
            name: Some(String::new()),
            ..Default::default()
        },
    )
    .await?;
    assert_eq!(unfiltered.len(), 6);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn admin_store_filter_covers_name_email_and_address() -> anyhow::Result<()> {
    let db = seeded();

    let by_email = admin_service::list_stores(
        &db,
        StoreFilter {
            email: Some("DIANAS".to_string()),
            ..Default::default()
        },
    )
    .await?;
    assert_eq!(by_email.len(), 1);
    assert_eq!(by_email[0].store.id, "store-2");

    // The admin view filters on address too, unlike the user search.
    let by_address = admin_service::list_stores(
        &db,
        StoreFilter {
            address: Some("metropolis".to_string()),
            ..Default::default()
        },
    )
    .await?;
    assert_eq!(by_address.len(), 2);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn browsing_includes_the_callers_own_rating() -> anyhow::Result<()> {
    let db = seeded();

    let rows = store_service::list_stores_for_user(&db, "user-1", StoreSearch::default()).await?;
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].user_rating, Some(5));
    assert_eq!(rows[1].user_rating, Some(3));
    assert_eq!(rows[2].user_rating, None);

    let candy = store_service::list_stores_for_user(
        &db,
        "user-1",
        StoreSearch {
            name: Some("candy".to_string()),
            ..Default::default()
        },
    )
    .await?;
    assert_eq!(candy.len(), 1);
    assert_eq!(candy[0].store.id, "store-1");
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn submit_rating_upserts_in_place() -> anyhow::Result<()> {
    let db = seeded();

    // user-1 re-rates store-1: same row, new value.
    store_service::submit_rating(&db, rate("store-1", "user-1", 2)).await?;
    let tables = db.snapshot().await;
    let rows: Vec<&Rating> = tables
        .ratings
        .iter()
        .filter(|r| r.store_id == "store-1" && r.user_id == "user-1")
        .collect();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, "rating-1");
    assert_eq!(rows[0].rating, 2);
    assert_eq!(tables.ratings.len(), 4);

    // Re-submitting the same value still keeps a single row.
    store_service::submit_rating(&db, rate("store-1", "user-1", 2)).await?;
    assert_eq!(db.snapshot().await.ratings.len(), 4);

    // A first-time rater appends a fresh row.
    store_service::submit_rating(&db, rate("store-1", "owner-2", 3)).await?;
    let tables = db.snapshot().await;
    assert_eq!(tables.ratings.len(), 5);
    assert_eq!(tables.user_rating("store-1", "owner-2"), Some(3));
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn a_new_rating_moves_the_average() -> anyhow::Result<()> {
    let db = seeded();
    assert_eq!(db.snapshot().await.average_rating("store-1"), 4.5);

    // Third rater: [5, 4] becomes [5, 4, 3].
    store_service::submit_rating(&db, rate("store-1", "owner-3", 3)).await?;
    assert_eq!(db.snapshot().await.average_rating("store-1"), 4.0);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn unrated_stores_average_to_exactly_zero() -> anyhow::Result<()> {
    let db = seeded();

    let store = admin_service::add_store(
        &db,
        AddStoreRequest {
            name: "Brand New Unrated Bazaar".to_string(),
            email: "new@bazaar.com".to_string(),
            address: "7 Fresh Street, Newtown, NT 77777".to_string(),
            owner_id: "owner-1".to_string(),
        },
    )
    .await?;

    let rows = store_service::list_stores_for_user(&db, "user-1", StoreSearch::default()).await?;
    let fresh = rows
        .iter()
        .find(|r| r.store.id == store.id)
        .expect("new store listed");
    assert_eq!(fresh.average_rating, 0.0);
    assert_eq!(fresh.user_rating, None);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn add_store_backfills_the_owners_store_id() -> anyhow::Result<()> {
    let db = seeded();

    // A fresh owner with no store yet.
    let owner = admin_service::add_user(
        &db,
        AddUserRequest {
            name: "Willy Wonka the Chocolatier".to_string(),
            email: "wonka@store.com".to_string(),
            address: "1 Chocolate Factory Road, Candytown, CT 09876".to_string(),
            password: "Password!1".to_string(),
            role: UserRole::StoreOwner,
        },
    )
    .await?;
    assert!(owner.store_id.is_none());

    let store = admin_service::add_store(
        &db,
        AddStoreRequest {
            name: "Wonka's Wonderful Chocolates".to_string(),
            email: "hello@wonka.com".to_string(),
            address: "1 Chocolate Factory Road, Candytown, CT 09876".to_string(),
            owner_id: owner.id.clone(),
        },
    )
    .await?;

    let tables = db.snapshot().await;
    let linked = tables.find_user(&owner.id).expect("owner still present");
    assert_eq!(linked.store_id.as_deref(), Some(store.id.as_str()));

    // A second store pointing at the same owner leaves the link alone.
    let second = admin_service::add_store(
        &db,
        AddStoreRequest {
            name: "Wonka's Secondary Sweets Stand".to_string(),
            email: "annex@wonka.com".to_string(),
            address: "2 Chocolate Factory Road, Candytown, CT 09876".to_string(),
            owner_id: owner.id.clone(),
        },
    )
    .await?;
    assert_ne!(second.id, store.id);

    let tables = db.snapshot().await;
    let linked = tables.find_user(&owner.id).expect("owner still present");
    assert_eq!(linked.store_id.as_deref(), Some(store.id.as_str()));
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn add_store_rejects_duplicate_email_case_insensitively() {
    let db = seeded();

    let result = admin_service::add_store(
        &db,
        AddStoreRequest {
            name: "Copycat Candy Corner Annex".to_string(),
            email: "CONTACT@CHARLIES.COM".to_string(),
            address: "2 Candy Street, Candytown, CT 09876".to_string(),
            owner_id: "owner-1".to_string(),
        },
    )
    .await;
    assert_eq!(
        result,
        Err(ServiceError::DuplicateEmail(
            "CONTACT@CHARLIES.COM".to_string()
        ))
    );
}

#[tokio::test(start_paused = true)]
async fn add_user_keeps_the_callers_role() -> anyhow::Result<()> {
    let db = seeded();

    let second_admin = admin_service::add_user(
        &db,
        AddUserRequest {
            name: "Second System Administrator".to_string(),
            email: "admin2@storly.com".to_string(),
            address: "2 Admin Way, Suite 200, Adminville, AD 12345".to_string(),
            password: "Password!1".to_string(),
            role: UserRole::Admin,
        },
    )
    .await?;
    assert_eq!(second_admin.role, UserRole::Admin);

    let duplicate = admin_service::add_user(
        &db,
        AddUserRequest {
            name: "Robert Bobson The Second".to_string(),
            email: "BOB@TEST.COM".to_string(),
            address: "457 Construction Rd, Builderville, BV 67890".to_string(),
            password: "Password!1".to_string(),
            role: UserRole::NormalUser,
        },
    )
    .await;
    assert_eq!(
        duplicate,
        Err(ServiceError::DuplicateEmail("BOB@TEST.COM".to_string()))
    );
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn owner_dashboard_lists_raters_by_name() -> anyhow::Result<()> {
    let db = seeded();

    let dashboard = owner_service::store_dashboard(&db, "store-1").await?;
    assert_eq!(dashboard.store.name, "Charlie's Candy Corner");
    assert_eq!(dashboard.average_rating, 4.5);

    let names: Vec<&str> = dashboard
        .ratings
        .iter()
        .map(|r| r.user_name.as_str())
        .collect();
    assert_eq!(
        names,
        ["Alice Liddell Wonderland", "Robert \"Bob\" The Builder"]
    );
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn owner_dashboard_for_an_unknown_store_is_not_found() {
    let db = seeded();

    let result = owner_service::store_dashboard(&db, "store-x").await;
    assert_eq!(result, Err(ServiceError::NotFound));
}

#[tokio::test(start_paused = true)]
async fn dashboard_masks_raters_it_cannot_resolve() -> anyhow::Result<()> {
    let mut tables = seed::demo_tables();
    tables.ratings.push(Rating {
        id: "rating-9".to_string(),
        store_id: "store-1".to_string(),
        user_id: "deleted-user".to_string(),
        rating: 1,
    });
    let db = Database::new(tables);

    let dashboard = owner_service::store_dashboard(&db, "store-1").await?;
    let masked = dashboard
        .ratings
        .iter()
        .find(|r| r.id == "rating-9")
        .expect("dangling rating listed");
    assert_eq!(masked.user_name, "Anonymous User");
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn stats_track_table_cardinalities() -> anyhow::Result<()> {
    let db = seeded();

    let stats = admin_service::dashboard_stats(&db).await?;
    assert_eq!(
        stats,
        AdminStats {
            users: 6,
            stores: 3,
            ratings: 4
        }
    );

    store_service::submit_rating(&db, rate("store-3", "user-1", 4)).await?;
    let stats = admin_service::dashboard_stats(&db).await?;
    assert_eq!(stats.ratings, 5);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn returned_rows_are_copies() -> anyhow::Result<()> {
    let db = seeded();

    let mut users = admin_service::list_users(&db, UserFilter::default()).await?;
    users[0].name = "Mallory the Mutator of Records".to_string();

    let again = admin_service::list_users(&db, UserFilter::default()).await?;
    assert_eq!(again[0].name, "System Administrator User");
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn operations_wait_their_fixed_latency() -> anyhow::Result<()> {
    let db = seeded();

    let started = tokio::time::Instant::now();
    store_service::submit_rating(&db, rate("store-1", "user-1", 5)).await?;
    assert_eq!(started.elapsed(), Duration::from_millis(300));

    let started = tokio::time::Instant::now();
    admin_service::list_users(&db, UserFilter::default()).await?;
    assert_eq!(started.elapsed(), Duration::from_millis(400));
    Ok(())
}

fn seeded() -> Database {
    Database::new(seed::demo_tables())
}

fn rate(store_id: &str, user_id: &str, rating: u8) -> SubmitRatingRequest {
    SubmitRatingRequest {
        store_id: store_id.to_string(),
        user_id: user_id.to_string(),
        rating,
    }
}
