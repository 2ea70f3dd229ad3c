use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::models::{Rating, Store, User};

/// The three tables the data service operates on. Insertion order is the
/// order every listing returns.
#[derive(Debug, Clone, Default)]
pub struct Tables {
    pub users: Vec<User>,
    pub stores: Vec<Store>,
    pub ratings: Vec<Rating>,
}

impl Tables {
    pub fn find_user(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn find_store(&self, id: &str) -> Option<&Store> {
        self.stores.iter().find(|s| s.id == id)
    }

    pub fn user_email_taken(&self, email: &str) -> bool {
        let needle = email.to_lowercase();
        self.users.iter().any(|u| u.email.to_lowercase() == needle)
    }

    pub fn store_email_taken(&self, email: &str) -> bool {
        let needle = email.to_lowercase();
        self.stores.iter().any(|s| s.email.to_lowercase() == needle)
    }

    /// Mean of a store's rating values. Exactly 0.0 when unrated, never NaN.
    pub fn average_rating(&self, store_id: &str) -> f64 {
        let mut sum = 0u32;
        let mut count = 0u32;
        for rating in self.ratings.iter().filter(|r| r.store_id == store_id) {
            sum += u32::from(rating.rating);
            count += 1;
        }
        if count == 0 {
            0.0
        } else {
            f64::from(sum) / f64::from(count)
        }
    }

    pub fn user_rating(&self, store_id: &str, user_id: &str) -> Option<u8> {
        self.ratings
            .iter()
            .find(|r| r.store_id == store_id && r.user_id == user_id)
            .map(|r| r.rating)
    }
}

/// Shared handle to the tables. One lock spans all three so an operation
/// that checks one table and writes another applies as one atomic step.
#[derive(Debug)]
pub struct Database {
    tables: RwLock<Tables>,
}

impl Database {
    pub fn new(tables: Tables) -> Self {
        Self {
            tables: RwLock::new(tables),
        }
    }

    pub(crate) async fn read(&self) -> RwLockReadGuard<'_, Tables> {
        self.tables.read().await
    }

    pub(crate) async fn write(&self) -> RwLockWriteGuard<'_, Tables> {
        self.tables.write().await
    }

    pub async fn snapshot(&self) -> Tables {
        self.tables.read().await.clone()
    }
}
