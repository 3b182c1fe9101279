use tracing::instrument;

use crate::modules::users::store::UserStore;
use crate::utils::errors::AppError;
use crate::utils::password::PasswordHasher;

use super::model::{Claims, LoginRequest, LoginResponse, RegisterRequest};
use super::registration::{RegistrationReceipt, RegistrationStrategy, Role};
use super::tokens::TokenService;

/// Single entry point for login, logout, and registration dispatch.
///
/// Holds the store, hasher, and token service as explicitly constructed
/// collaborators and keeps no per-request state of its own.
#[derive(Clone, Debug)]
pub struct AuthService {
    users: UserStore,
    hasher: PasswordHasher,
    tokens: TokenService,
}

impl AuthService {
    pub fn new(users: UserStore, hasher: PasswordHasher, tokens: TokenService) -> Self {
        Self {
            users,
            hasher,
            tokens,
        }
    }

    /// Dispatch registration to the strategy for `role`.
    ///
    /// The role always comes from the calling boundary, never from the
    /// candidate payload, so a caller cannot self-select ADMIN through the
    /// student-facing route.
    #[instrument(skip(self, candidate))]
    pub async fn register(
        &self,
        role: Role,
        candidate: &RegisterRequest,
    ) -> Result<RegistrationReceipt, AppError> {
        RegistrationStrategy::for_role(role)
            .register(&self.users, &self.hasher, candidate)
            .await
    }

    /// Verify credentials and issue a token.
    ///
    /// An unknown username and a wrong password produce the same failure.
    #[instrument(skip(self, credentials))]
    pub async fn login(&self, credentials: &LoginRequest) -> Result<LoginResponse, AppError> {
        let username = credentials.username.as_deref().unwrap_or("");
        let password = credentials.password.as_deref().unwrap_or("");

        let user = self
            .users
            .find_by_username(username)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        let valid = self
            .hasher
            .verify(password, &user.password)
            .map_err(AppError::internal)?;

        if !valid {
            return Err(AppError::InvalidCredentials);
        }

        let token = self.tokens.issue(&user)?;

        Ok(LoginResponse {
            status: "accept".to_string(),
            token,
            username: user.username,
            role: user.role,
        })
    }

    /// Revoke `token`. Safe to call repeatedly for the same token.
    #[instrument(skip(self, token))]
    pub async fn logout(&self, token: &str) -> Result<(), AppError> {
        self.tokens.invalidate(token).await
    }

    /// Token check for guarded routes; rejects revoked tokens.
    pub async fn verify(&self, token: &str) -> Result<Claims, AppError> {
        self.tokens.verify(token).await
    }
}
