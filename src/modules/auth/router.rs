use axum::{Router, routing::post};

use crate::state::AppState;

use super::controller::{login, logout, register_admin, register_lecturer, register_student};

/// Routes open to unauthenticated callers.
pub fn init_public_auth_router() -> Router<AppState> {
    Router::new()
        .route("/public/signin", post(login))
        .route("/public/signup/student", post(register_student))
}

/// Signup routes reserved for administrators; the admin guard is layered
/// on by the top-level router.
pub fn init_admin_signup_router() -> Router<AppState> {
    Router::new()
        .route("/signup", post(register_admin))
        .route("/signup/lecturer", post(register_lecturer))
}

/// Session routes. Logout takes the token to revoke in the request body;
/// no bearer guard sits in front, so a second logout of the same token
/// still succeeds.
pub fn init_session_router() -> Router<AppState> {
    Router::new().route("/logout", post(logout))
}
