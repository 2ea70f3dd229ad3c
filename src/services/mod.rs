use std::time::Duration;

use tokio::time::sleep;

pub mod admin_service;
pub mod auth_service;
pub mod owner_service;
pub mod store_service;

/// Stand-in for network latency, waited in full before the lock is taken.
pub(crate) async fn simulate_latency(ms: u64) {
    sleep(Duration::from_millis(ms)).await;
}

/// An absent or empty term matches everything; anything else matches as a
/// case-insensitive substring.
pub(crate) fn contains_term(haystack: &str, term: Option<&str>) -> bool {
    match term.filter(|t| !t.is_empty()) {
        Some(term) => haystack.to_lowercase().contains(&term.to_lowercase()),
        None => true,
    }
}
