use crate::{
    db::Database,
    error::{ServiceError, ServiceResult},
    models::{OwnerDashboard, RatingWithUser},
};

use super::simulate_latency;

/// Shown when a rating's user reference does not resolve.
const ANONYMOUS_RATER: &str = "Anonymous User";

pub async fn store_dashboard(db: &Database, store_id: &str) -> ServiceResult<OwnerDashboard> {
    simulate_latency(400).await;
    let tables = db.read().await;
    let store = match tables.find_store(store_id) {
        Some(store) => store.clone(),
        None => return Err(ServiceError::NotFound),
    };

    let ratings = tables
        .ratings
        .iter()
        .filter(|r| r.store_id == store.id)
        .map(|r| RatingWithUser {
            id: r.id.clone(),
            user_name: tables
                .find_user(&r.user_id)
                .map(|user| user.name.clone())
                .unwrap_or_else(|| ANONYMOUS_RATER.to_string()),
            rating: r.rating,
        })
        .collect();

    Ok(OwnerDashboard {
        average_rating: tables.average_rating(&store.id),
        store,
        ratings,
    })
}
