use serde::Deserialize;
use validator::Validate;

use crate::validation::{address_length, email_format, name_length, password_strength};

#[derive(Deserialize, Debug)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Carries no role field, so a signup can only ever produce a normal user.
#[derive(Deserialize, Debug, Validate)]
pub struct SignupRequest {
    #[validate(custom(function = name_length))]
    pub name: String,
    #[validate(custom(function = email_format))]
    pub email: String,
    #[validate(custom(function = address_length))]
    pub address: String,
    #[validate(custom(function = password_strength))]
    pub password: String,
}

#[derive(Deserialize, Debug, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePasswordRequest {
    pub user_id: String,
    #[validate(custom(function = password_strength))]
    pub new_password: String,
}
