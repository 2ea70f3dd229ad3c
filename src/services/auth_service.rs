use uuid::Uuid;

use crate::{
    db::Database,
    dto::auth::{LoginRequest, SignupRequest, UpdatePasswordRequest},
    error::{ServiceError, ServiceResult},
    models::{User, UserRole},
};

use super::simulate_latency;

pub async fn login(db: &Database, payload: LoginRequest) -> ServiceResult<User> {
    simulate_latency(500).await;
    let LoginRequest { email, password } = payload;
    let needle = email.to_lowercase();

    let tables = db.read().await;
    let user = tables
        .users
        .iter()
        .find(|u| u.email.to_lowercase() == needle && u.password == password);

    match user {
        Some(user) => {
            tracing::info!(user_id = %user.id, role = %user.role, "login succeeded");
            Ok(user.clone())
        }
        None => {
            tracing::debug!(email = %email, "login rejected");
            Err(ServiceError::NotFound)
        }
    }
}

pub async fn signup(db: &Database, payload: SignupRequest) -> ServiceResult<User> {
    simulate_latency(500).await;
    let SignupRequest {
        name,
        email,
        address,
        password,
    } = payload;

    let mut tables = db.write().await;
    if tables.user_email_taken(&email) {
        tracing::debug!(email = %email, "signup rejected, email taken");
        return Err(ServiceError::DuplicateEmail(email));
    }

    let user = User {
        id: Uuid::new_v4().to_string(),
        name,
        email,
        address,
        role: UserRole::NormalUser,
        password,
        store_id: None,
    };
    tables.users.push(user.clone());

    tracing::info!(user_id = %user.id, "user signed up");
    Ok(user)
}

pub async fn update_password(db: &Database, payload: UpdatePasswordRequest) -> ServiceResult<()> {
    simulate_latency(500).await;
    let UpdatePasswordRequest {
        user_id,
        new_password,
    } = payload;

    let mut tables = db.write().await;
    let user = tables.users.iter_mut().find(|u| u.id == user_id);
    match user {
        Some(user) => {
            user.password = new_password;
            tracing::info!(user_id = %user.id, "password updated");
            Ok(())
        }
        None => Err(ServiceError::NotFound),
    }
}
