use serde::Deserialize;
use validator::Validate;

use crate::validation::{address_length, email_format, name_length};

#[derive(Deserialize, Debug, Clone, Default)]
pub struct StoreFilter {
    pub name: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct StoreSearch {
    pub name: Option<String>,
    pub address: Option<String>,
}

#[derive(Deserialize, Debug, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddStoreRequest {
    #[validate(custom(function = name_length))]
    pub name: String,
    #[validate(custom(function = email_format))]
    pub email: String,
    #[validate(custom(function = address_length))]
    pub address: String,
    pub owner_id: String,
}
