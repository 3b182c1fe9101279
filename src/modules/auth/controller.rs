use axum::Json;
use axum::extract::State;
use tracing::instrument;
use utoipa::ToSchema;

use crate::state::AppState;
use crate::utils::errors::AppError;

use super::model::{
    LoginRequest, LoginResponse, LogoutRequest, MessageResponse, RegisterRequest, RegisterResponse,
};
use super::registration::Role;

#[derive(ToSchema)]
pub struct ErrorResponse {
    pub status: String,
    pub message: String,
}

async fn register_with_role(
    state: AppState,
    role: Role,
    payload: RegisterRequest,
) -> Result<Json<RegisterResponse>, AppError> {
    let receipt = state.auth.register(role, &payload).await?;

    Ok(Json(RegisterResponse {
        status: "accept".to_string(),
        message: "Success register".to_string(),
        username: receipt.username,
        role: receipt.role,
    }))
}

/// Login and receive a bearer token
#[utoipa::path(
    post,
    path = "/api/auth/public/signin",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 401, description = "Invalid username or password", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let response = state.auth.login(&payload).await?;
    Ok(Json(response))
}

/// Register a new administrator (admin token required)
#[utoipa::path(
    post,
    path = "/api/auth/admin/signup",
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "Administrator registered", body = RegisterResponse),
        (status = 403, description = "Missing or empty required fields", body = ErrorResponse),
        (status = 404, description = "Username already exists", body = ErrorResponse),
        (status = 401, description = "Persistence failure", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Authentication"
)]
#[instrument(skip(state, payload))]
pub async fn register_admin(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<Json<RegisterResponse>, AppError> {
    register_with_role(state, Role::Admin, payload).await
}

/// Register a new student
#[utoipa::path(
    post,
    path = "/api/auth/public/signup/student",
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "Student registered", body = RegisterResponse),
        (status = 400, description = "Student payload rule failed", body = ErrorResponse),
        (status = 403, description = "Missing or empty required fields", body = ErrorResponse),
        (status = 404, description = "Username already exists", body = ErrorResponse),
        (status = 409, description = "NIM already exists", body = ErrorResponse),
        (status = 401, description = "Persistence failure", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, payload))]
pub async fn register_student(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<Json<RegisterResponse>, AppError> {
    register_with_role(state, Role::Student, payload).await
}

/// Register a new lecturer (admin token required)
#[utoipa::path(
    post,
    path = "/api/auth/admin/signup/lecturer",
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "Lecturer registered", body = RegisterResponse),
        (status = 403, description = "Missing or empty required fields", body = ErrorResponse),
        (status = 404, description = "Username already exists", body = ErrorResponse),
        (status = 401, description = "Persistence failure", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Authentication"
)]
#[instrument(skip(state, payload))]
pub async fn register_lecturer(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<Json<RegisterResponse>, AppError> {
    register_with_role(state, Role::Lecturer, payload).await
}

/// Invalidate a token
#[utoipa::path(
    post,
    path = "/api/auth/user/logout",
    request_body = LogoutRequest,
    responses(
        (status = 200, description = "Token invalidated", body = MessageResponse),
        (status = 400, description = "Malformed token", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, payload))]
pub async fn logout(
    State(state): State<AppState>,
    Json(payload): Json<LogoutRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let token = payload.token.as_deref().unwrap_or("");
    state.auth.logout(token).await?;

    Ok(Json(MessageResponse {
        status: "accept".to_string(),
        message: "Success logout".to_string(),
    }))
}
