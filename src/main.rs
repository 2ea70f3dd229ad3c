use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use storly_api::{
    config::AppConfig,
    db::{Database, Tables},
    dto::{
        ratings::SubmitRatingRequest,
        stores::{StoreFilter, StoreSearch},
    },
    seed,
    services::{admin_service, owner_service, store_service},
    session::AuthSession,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,storly_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;
    let tables = if config.seed_demo_data {
        seed::demo_tables()
    } else {
        Tables::default()
    };
    let db = Arc::new(Database::new(tables));

    let stats = admin_service::dashboard_stats(&db).await?;
    tracing::info!(
        users = stats.users,
        stores = stats.stores,
        ratings = stats.ratings,
        "data service ready"
    );

    if !config.seed_demo_data {
        return Ok(());
    }

    // Walk the main flows once against the demo dataset.
    let mut session = AuthSession::new(db.clone());
    let admin = session.login("admin@storly.com", "Password!1").await?;
    tracing::info!(name = %admin.name, role = %admin.role, "signed in");

    let stores = admin_service::list_stores(&db, StoreFilter::default()).await?;
    for row in &stores {
        tracing::info!(
            store = %row.store.name,
            owner = %row.owner_name,
            average = row.average_rating,
            "store"
        );
    }
    session.logout();

    let alice = session.login("alice@test.com", "Password!1").await?;
    store_service::submit_rating(
        &db,
        SubmitRatingRequest {
            store_id: "store-2".to_string(),
            user_id: alice.id.clone(),
            rating: 5,
        },
    )
    .await?;

    let browsing =
        store_service::list_stores_for_user(&db, &alice.id, StoreSearch::default()).await?;
    for row in &browsing {
        tracing::info!(
            store = %row.store.name,
            average = row.average_rating,
            mine = ?row.user_rating,
            "store for user"
        );
    }

    let dashboard = owner_service::store_dashboard(&db, "store-2").await?;
    tracing::info!(
        store = %dashboard.store.name,
        average = dashboard.average_rating,
        ratings = dashboard.ratings.len(),
        "owner dashboard"
    );

    Ok(())
}
