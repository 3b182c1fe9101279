use axum::Router;
use axum::body::Body;
use axum::http::Request;
use campus_auth::config::cors::CorsConfig;
use campus_auth::config::jwt::JwtConfig;
use campus_auth::modules::auth::registration::Role;
use campus_auth::modules::users::model::User;
use campus_auth::modules::users::store::UserStore;
use campus_auth::router::init_router;
use campus_auth::state::{AppState, build_auth_service};
use campus_auth::utils::password::PasswordHasher;
use chrono::Utc;
use http_body_util::BodyExt;
use sqlx::PgPool;
use uuid::Uuid;

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "test_secret_key_for_testing_purposes".to_string(),
        access_token_expiry: 3600,
    }
}

pub fn setup_test_app(pool: PgPool) -> Router {
    let jwt_config = test_jwt_config();

    let state = AppState {
        auth: build_auth_service(pool.clone(), jwt_config.clone()),
        db: pool,
        jwt_config,
        cors_config: CorsConfig::from_env(),
    };

    init_router(state)
}

/// Insert a user directly, bypassing the HTTP surface.
#[allow(dead_code)]
pub async fn create_test_user(pool: &PgPool, username: &str, password: &str, role: Role) -> User {
    let hasher = PasswordHasher::new(4);

    let user = User {
        id: Uuid::new_v4(),
        username: username.to_string(),
        password: hasher.hash(password).unwrap(),
        full_name: "Test User".to_string(),
        is_privileged: role.is_privileged(),
        identifier: unique_identifier(),
        role,
        created_at: Utc::now(),
    };

    UserStore::new(pool.clone())
        .insert(&user)
        .await
        .unwrap();

    user
}

/// An admin account plus a token signed with the test secret.
#[allow(dead_code)]
pub async fn create_test_admin(pool: &PgPool) -> (User, String) {
    let admin = create_test_user(pool, &unique_username("admin"), "adminpass", Role::Admin).await;
    let token = campus_auth::utils::jwt::create_access_token(
        admin.id,
        &admin.username,
        admin.role,
        &test_jwt_config(),
    )
    .unwrap();

    (admin, token)
}

pub fn unique_username(prefix: &str) -> String {
    format!("{}-{}", prefix, Uuid::new_v4())
}

/// Numeric, so it also passes the student NIM rule.
pub fn unique_identifier() -> String {
    format!("{:010}", Uuid::new_v4().as_u128() % 10_000_000_000)
}

pub fn post_json(uri: &str, body: &serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(body).unwrap()))
        .unwrap()
}

#[allow(dead_code)]
pub fn post_json_auth(uri: &str, token: &str, body: &serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .header("authorization", format!("Bearer {}", token))
        .body(Body::from(serde_json::to_string(body).unwrap()))
        .unwrap()
}

pub async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[allow(dead_code)]
pub async fn user_count(pool: &PgPool) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await
        .unwrap()
}
