use uuid::Uuid;

use crate::{
    db::Database,
    dto::{
        stores::{AddStoreRequest, StoreFilter},
        users::{AddUserRequest, UserFilter},
    },
    error::{ServiceError, ServiceResult},
    models::{AdminStats, Store, StoreWithDetails, User},
};

use super::{contains_term, simulate_latency};

/// Shown when a store's owner reference does not resolve to a user.
const MISSING_OWNER_NAME: &str = "N/A";

pub async fn dashboard_stats(db: &Database) -> ServiceResult<AdminStats> {
    simulate_latency(300).await;
    let tables = db.read().await;
    Ok(AdminStats {
        users: tables.users.len(),
        stores: tables.stores.len(),
        ratings: tables.ratings.len(),
    })
}

pub async fn list_users(db: &Database, filter: UserFilter) -> ServiceResult<Vec<User>> {
    simulate_latency(400).await;
    let tables = db.read().await;
    let users = tables
        .users
        .iter()
        .filter(|user| {
            contains_term(&user.name, filter.name.as_deref())
                && contains_term(&user.email, filter.email.as_deref())
                && contains_term(&user.address, filter.address.as_deref())
                && filter.role.map_or(true, |role| user.role == role)
        })
        .cloned()
        .collect();
    Ok(users)
}

pub async fn add_user(db: &Database, payload: AddUserRequest) -> ServiceResult<User> {
    simulate_latency(500).await;
    let AddUserRequest {
        name,
        email,
        address,
        password,
        role,
    } = payload;

    let mut tables = db.write().await;
    if tables.user_email_taken(&email) {
        tracing::debug!(email = %email, "add_user rejected, email taken");
        return Err(ServiceError::DuplicateEmail(email));
    }

    let user = User {
        id: Uuid::new_v4().to_string(),
        name,
        email,
        address,
        role,
        password,
        store_id: None,
    };
    tables.users.push(user.clone());

    tracing::info!(user_id = %user.id, role = %user.role, "user created");
    Ok(user)
}

/// The admin view filters on address as well, unlike the user-facing search.
pub async fn list_stores(
    db: &Database,
    filter: StoreFilter,
) -> ServiceResult<Vec<StoreWithDetails>> {
    simulate_latency(400).await;
    let tables = db.read().await;
    let stores = tables
        .stores
        .iter()
        .map(|store| StoreWithDetails {
            owner_name: tables
                .find_user(&store.owner_id)
                .map(|owner| owner.name.clone())
                .unwrap_or_else(|| MISSING_OWNER_NAME.to_string()),
            average_rating: tables.average_rating(&store.id),
            store: store.clone(),
        })
        .filter(|row| {
            contains_term(&row.store.name, filter.name.as_deref())
                && contains_term(&row.store.email, filter.email.as_deref())
                && contains_term(&row.store.address, filter.address.as_deref())
        })
        .collect();
    Ok(stores)
}

pub async fn add_store(db: &Database, payload: AddStoreRequest) -> ServiceResult<Store> {
    simulate_latency(500).await;
    let AddStoreRequest {
        name,
        email,
        address,
        owner_id,
    } = payload;

    let mut tables = db.write().await;
    if tables.store_email_taken(&email) {
        tracing::debug!(email = %email, "add_store rejected, email taken");
        return Err(ServiceError::DuplicateEmail(email));
    }

    let store = Store {
        id: Uuid::new_v4().to_string(),
        name,
        email,
        address,
        owner_id,
    };
    tables.stores.push(store.clone());

    // Link the owner to their first store. A later store pointing at the
    // same owner leaves the original association in place.
    if let Some(owner) = tables.users.iter_mut().find(|u| u.id == store.owner_id) {
        if owner.store_id.is_none() {
            owner.store_id = Some(store.id.clone());
        }
    }

    tracing::info!(store_id = %store.id, owner_id = %store.owner_id, "store created");
    Ok(store)
}
