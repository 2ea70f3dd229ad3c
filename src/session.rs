use std::sync::Arc;

use crate::{
    db::Database,
    dto::auth::{LoginRequest, SignupRequest, UpdatePasswordRequest},
    error::ServiceResult,
    models::User,
    services::auth_service,
};

/// Which user is signed in right now. `snapshot` hands the embedder a JSON
/// string to stash per tab and `restore` rebuilds the session from it; a
/// missing or unparseable snapshot comes back signed out.
#[derive(Debug)]
pub struct AuthSession {
    db: Arc<Database>,
    current: Option<User>,
}

impl AuthSession {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db, current: None }
    }

    pub fn restore(db: Arc<Database>, snapshot: &str) -> Self {
        let current = match serde_json::from_str(snapshot) {
            Ok(user) => Some(user),
            Err(err) => {
                tracing::debug!(error = %err, "stored session ignored");
                None
            }
        };
        Self { db, current }
    }

    pub fn snapshot(&self) -> Option<String> {
        self.current
            .as_ref()
            .and_then(|user| serde_json::to_string(user).ok())
    }

    pub async fn login(&mut self, email: &str, password: &str) -> ServiceResult<User> {
        let payload = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let user = auth_service::login(&self.db, payload).await?;
        self.current = Some(user.clone());
        Ok(user)
    }

    pub async fn signup(&mut self, payload: SignupRequest) -> ServiceResult<User> {
        let user = auth_service::signup(&self.db, payload).await?;
        self.current = Some(user.clone());
        Ok(user)
    }

    /// The session stays signed in across a password change.
    pub async fn update_password(&self, user_id: &str, new_password: &str) -> ServiceResult<()> {
        let payload = UpdatePasswordRequest {
            user_id: user_id.to_string(),
            new_password: new_password.to_string(),
        };
        auth_service::update_password(&self.db, payload).await
    }

    pub fn logout(&mut self) {
        self.current = None;
    }

    pub fn current_user(&self) -> Option<&User> {
        self.current.as_ref()
    }
}
