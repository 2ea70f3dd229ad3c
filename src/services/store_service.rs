use uuid::Uuid;

use crate::{
    db::Database,
    dto::{ratings::SubmitRatingRequest, stores::StoreSearch},
    error::ServiceResult,
    models::{Rating, StoreWithRating},
};

use super::{contains_term, simulate_latency};

pub async fn list_stores_for_user(
    db: &Database,
    user_id: &str,
    search: StoreSearch,
) -> ServiceResult<Vec<StoreWithRating>> {
    simulate_latency(400).await;
    let tables = db.read().await;
    let stores = tables
        .stores
        .iter()
        .map(|store| StoreWithRating {
            average_rating: tables.average_rating(&store.id),
            user_rating: tables.user_rating(&store.id, user_id),
            store: store.clone(),
        })
        .filter(|row| {
            contains_term(&row.store.name, search.name.as_deref())
                && contains_term(&row.store.address, search.address.as_deref())
        })
        .collect();
    Ok(stores)
}

/// Upsert: a re-rating overwrites the existing row in place, id included,
/// so at most one row per (store, user) pair ever exists.
pub async fn submit_rating(db: &Database, payload: SubmitRatingRequest) -> ServiceResult<()> {
    simulate_latency(300).await;
    let SubmitRatingRequest {
        store_id,
        user_id,
        rating,
    } = payload;

    let mut tables = db.write().await;
    let existing = tables
        .ratings
        .iter_mut()
        .find(|r| r.store_id == store_id && r.user_id == user_id);

    match existing {
        Some(row) => {
            row.rating = rating;
            tracing::info!(
                rating_id = %row.id,
                store_id = %store_id,
                user_id = %user_id,
                rating,
                "rating updated"
            );
        }
        None => {
            let row = Rating {
                id: Uuid::new_v4().to_string(),
                store_id,
                user_id,
                rating,
            };
            tracing::info!(
                rating_id = %row.id,
                store_id = %row.store_id,
                user_id = %row.user_id,
                rating,
                "rating created"
            );
            tables.ratings.push(row);
        }
    }
    Ok(())
}
