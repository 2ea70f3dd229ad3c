use crate::models::UserRole;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Signup,
    AdminDashboard,
    UserDashboard,
    OwnerDashboard,
    UpdatePassword,
}

/// Where each role lands after signing in; a denied gate redirects here too.
pub fn landing_route(role: Option<UserRole>) -> Route {
    match role {
        None => Route::Login,
        Some(UserRole::Admin) => Route::AdminDashboard,
        Some(UserRole::StoreOwner) => Route::OwnerDashboard,
        Some(UserRole::NormalUser) => Route::UserDashboard,
    }
}

pub fn can_access(role: Option<UserRole>, route: Route) -> bool {
    match route {
        Route::Login | Route::Signup => role.is_none(),
        Route::AdminDashboard => role == Some(UserRole::Admin),
        Route::UserDashboard => role == Some(UserRole::NormalUser),
        Route::OwnerDashboard => role == Some(UserRole::StoreOwner),
        Route::UpdatePassword => role.is_some(),
    }
}
