//! Role-based route guards.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::middleware::auth::AuthUser;
use crate::modules::auth::registration::Role;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Middleware that checks the bearer token and requires one of
/// `allowed_roles`.
pub async fn require_roles(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
    allowed_roles: Vec<Role>,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let auth_user = AuthUser::from_request_parts(&mut parts, &state).await?;
    let user_role = auth_user.role()?;

    if !allowed_roles.contains(&user_role) {
        return Err(AppError::forbidden(format!(
            "Access denied. Required roles: {:?}, but user has role: {:?}",
            allowed_roles, user_role
        )));
    }

    req = Request::from_parts(parts, body);
    Ok(next.run(req).await)
}

/// Guard for the administrator-only signup routes.
pub async fn require_admin(State(state): State<AppState>, req: Request, next: Next) -> Response {
    match require_roles(State(state), req, next, vec![Role::Admin]).await {
        Ok(response) => response,
        Err(err) => err.into_response(),
    }
}
