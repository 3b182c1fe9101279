use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::registration::Role;

// JWT Claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // user_id
    pub username: String,
    pub role: String,
    pub exp: usize,
    pub iat: usize,
}

/// Signup payload shared by every role-specific endpoint.
///
/// Fields are optional on the wire: presence is part of the registration
/// contract (missing or empty ⇒ "Invalid payload") rather than a
/// deserialization failure. `identifier` also accepts the legacy
/// `nim`/`nip` field names, and `full_name` accepts `fullName`.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct RegisterRequest {
    pub username: Option<String>,
    pub password: Option<String>,
    #[serde(alias = "fullName")]
    pub full_name: Option<String>,
    #[serde(alias = "nim", alias = "nip")]
    pub identifier: Option<String>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub status: String,
    pub token: String,
    pub username: String,
    pub role: Role,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RegisterResponse {
    pub status: String,
    pub message: String,
    pub username: String,
    pub role: Role,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct LogoutRequest {
    pub token: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub status: String,
    pub message: String,
}
