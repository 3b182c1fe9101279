use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Application error taxonomy.
///
/// Every failure the service reports to a caller is one of these variants.
/// The HTTP layer renders them as `{"status": "error", "message": …}` with
/// the status from [`AppError::status_code`]. Callers inspect the variant,
/// never the message text; the one exception is [`AppError::Persistence`],
/// which passes the store's own message through as an opaque string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AppError {
    /// A required registration field was missing or empty.
    #[error("Invalid payload")]
    InvalidPayload,

    /// Username is taken, regardless of role.
    #[error("Username already exists")]
    DuplicateUsername,

    /// Student NIM is taken within the student scope.
    #[error("NIM already exists")]
    DuplicateIdentifier,

    /// Student payload failed a domain rule; carries the specific message.
    #[error("{0}")]
    StudentValidation(String),

    /// Unknown username and wrong password share this variant so the
    /// response does not leak which one occurred.
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// Structurally malformed token presented to logout.
    #[error("Invalid token")]
    InvalidToken,

    /// Role tag outside the closed ADMIN/STUDENT/LECTURER set.
    #[error("Unsupported role: {0}")]
    UnsupportedRole(String),

    /// Store-layer failure during registration persistence, surfaced with
    /// the underlying message. Never retried.
    #[error("{0}")]
    Persistence(String),

    /// Missing or invalid bearer credentials on a guarded route.
    #[error("{0}")]
    Unauthorized(String),

    /// Authenticated but lacking the required role.
    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn persistence<E>(err: E) -> Self
    where
        E: std::fmt::Display,
    {
        Self::Persistence(err.to_string())
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::Unauthorized(msg.into())
    }

    pub fn forbidden(msg: impl Into<String>) -> Self {
        Self::Forbidden(msg.into())
    }

    pub fn internal<E>(err: E) -> Self
    where
        E: std::fmt::Display,
    {
        Self::Internal(err.to_string())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidPayload => StatusCode::FORBIDDEN,
            Self::DuplicateUsername => StatusCode::NOT_FOUND,
            Self::DuplicateIdentifier => StatusCode::CONFLICT,
            Self::StudentValidation(_) => StatusCode::BAD_REQUEST,
            Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::InvalidToken => StatusCode::BAD_REQUEST,
            Self::UnsupportedRole(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Persistence(_) => StatusCode::UNAUTHORIZED,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "status": "error",
            "message": self.to_string(),
        }));

        (self.status_code(), body).into_response()
    }
}

/// Store errors outside the registration persistence step (lookups,
/// uniqueness probes, revocation reads) are server faults, not the
/// caller-visible persistence-failure class.
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}
