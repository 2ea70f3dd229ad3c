use serde::Deserialize;

/// The stars widget keeps `rating` in 1-5; the service stores what it gets.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SubmitRatingRequest {
    pub store_id: String,
    pub user_id: String,
    pub rating: u8,
}
