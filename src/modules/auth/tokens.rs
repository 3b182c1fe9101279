use sqlx::PgPool;

use crate::config::jwt::JwtConfig;
use crate::modules::users::model::User;
use crate::utils::errors::AppError;
use crate::utils::jwt::{create_access_token, decode_for_invalidation, verify_token};

use super::model::Claims;

/// Issues, verifies, and revokes bearer tokens.
///
/// Verification consults the revocation record, so a token only ever moves
/// `issued → active → invalidated`: once revoked it is rejected even
/// before its expiry.
#[derive(Clone, Debug)]
pub struct TokenService {
    pool: PgPool,
    config: JwtConfig,
}

impl TokenService {
    pub fn new(pool: PgPool, config: JwtConfig) -> Self {
        Self { pool, config }
    }

    pub fn issue(&self, user: &User) -> Result<String, AppError> {
        create_access_token(user.id, &user.username, user.role, &self.config)
    }

    /// Full check: signature, expiry, then the revocation record.
    pub async fn verify(&self, token: &str) -> Result<Claims, AppError> {
        let claims = verify_token(token, &self.config)?;

        if self.is_revoked(token).await? {
            return Err(AppError::unauthorized("Token has been revoked"));
        }

        Ok(claims)
    }

    /// Revoke a token. Idempotent: revoking an already-revoked or expired
    /// token succeeds; only a structurally malformed token is rejected.
    pub async fn invalidate(&self, token: &str) -> Result<(), AppError> {
        decode_for_invalidation(token, &self.config)?;

        sqlx::query(
            "INSERT INTO revoked_tokens (token) VALUES ($1) ON CONFLICT (token) DO NOTHING",
        )
        .bind(token)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn is_revoked(&self, token: &str) -> Result<bool, AppError> {
        let revoked = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM revoked_tokens WHERE token = $1)",
        )
        .bind(token)
        .fetch_one(&self.pool)
        .await?;

        Ok(revoked)
    }
}
