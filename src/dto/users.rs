use serde::Deserialize;
use validator::Validate;

use crate::models::UserRole;
use crate::validation::{address_length, email_format, name_length, password_strength};

/// Text fields match as substrings; `role` matches exactly.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct UserFilter {
    pub name: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub role: Option<UserRole>,
}

/// Unlike signup, the caller picks the role.
#[derive(Deserialize, Debug, Validate)]
pub struct AddUserRequest {
    #[validate(custom(function = name_length))]
    pub name: String,
    #[validate(custom(function = email_format))]
    pub email: String,
    #[validate(custom(function = address_length))]
    pub address: String,
    #[validate(custom(function = password_strength))]
    pub password: String,
    pub role: UserRole,
}
