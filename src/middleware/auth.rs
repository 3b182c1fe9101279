use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use uuid::Uuid;

use crate::modules::auth::model::Claims;
use crate::modules::auth::registration::Role;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Extractor that validates the bearer token and provides its claims.
///
/// Verification goes through the token service, so revoked tokens are
/// rejected here as well as expired or forged ones.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl AuthUser {
    /// The role tag carried by the token, resolved into the closed set.
    pub fn role(&self) -> Result<Role, AppError> {
        self.0.role.parse()
    }

    /// The user ID as UUID.
    pub fn user_id(&self) -> Result<Uuid, AppError> {
        Uuid::parse_str(&self.0.sub)
            .map_err(|_| AppError::unauthorized("Invalid user ID in token"))
    }

    pub fn username(&self) -> &str {
        &self.0.username
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| AppError::unauthorized("Missing authorization header"))?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::unauthorized("Invalid authorization header format")
        })?;

        let claims = state.auth.verify(token).await?;

        Ok(AuthUser(claims))
    }
}
